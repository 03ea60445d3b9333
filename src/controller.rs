//! Wiring between the store, the validator and the submission collaborator

use crate::error::Result;
use crate::state::{Field, FormSnapshot, FormStore};
use crate::submit::SubmitHandler;
use crate::validation::validate;
use tracing::{debug, warn};

/// Result of a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the collaborator accepted the profile
    Submitted,
    /// Validation failed; errors are now in the store
    Invalid { error_count: usize },
    /// Validation passed but the collaborator reported a failure
    Rejected(String),
}

/// A profile form instance: its store plus the collaborator that receives
/// validated data.
pub struct ProfileForm<S> {
    store: FormStore,
    submitter: S,
}

impl<S: SubmitHandler> ProfileForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            store: FormStore::new(),
            submitter,
        }
    }

    /// Field change event
    pub fn change(&mut self, field: Field, raw: &str) {
        self.store.on_field_change(field, raw);
    }

    /// Field change event keyed by wire name
    pub fn change_named(&mut self, name: &str, raw: &str) -> Result<()> {
        self.store.on_named_field_change(name, raw)
    }

    /// Submit event: validate the whole form and forward it only if valid
    pub async fn submit(&mut self) -> SubmitOutcome {
        match validate(self.store.data()) {
            Err(errors) => {
                let error_count = errors.message_count();
                debug!(
                    fields = errors.len(),
                    messages = error_count,
                    "form validation failed"
                );
                self.store.replace_errors(errors);
                SubmitOutcome::Invalid { error_count }
            }
            Ok(profile) => {
                self.store.replace_errors(Default::default());
                match self.submitter.submit(profile).await {
                    Ok(()) => SubmitOutcome::Submitted,
                    Err(err) => {
                        warn!("submission failed: {err:#}");
                        SubmitOutcome::Rejected(err.to_string())
                    }
                }
            }
        }
    }

    /// Displayed error text for `field`, messages joined by `", "`
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.store.errors().joined(field)
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn into_submitter(self) -> S {
        self.submitter
    }
}
