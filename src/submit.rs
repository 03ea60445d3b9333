//! Submission collaborator
//!
//! The form hands validated profiles to a [`SubmitHandler`]. What happens
//! to them afterwards, including failure handling, is the handler's job.

use crate::state::UserProfile;
use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;

/// Receives each successfully validated profile exactly once
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send {
    /// Accept a validated profile
    async fn submit(&mut self, profile: UserProfile) -> Result<()>;
}

/// Collects accepted profiles and writes them out as JSON once the
/// terminal has been released.
#[derive(Debug, Default)]
pub struct StdoutSubmitter {
    accepted: Vec<UserProfile>,
}

impl StdoutSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> &[UserProfile] {
        &self.accepted
    }

    /// Write every accepted profile as one JSON document per submission
    pub fn write_to<W: Write>(&self, mut out: W, pretty: bool, redact: bool) -> Result<()> {
        for profile in &self.accepted {
            let profile = if redact {
                profile.redacted()
            } else {
                profile.clone()
            };
            if pretty {
                serde_json::to_writer_pretty(&mut out, &profile)?;
            } else {
                serde_json::to_writer(&mut out, &profile)?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl SubmitHandler for StdoutSubmitter {
    async fn submit(&mut self, profile: UserProfile) -> Result<()> {
        self.accepted.push(profile);
        tracing::debug!(accepted = self.accepted.len(), "profile accepted");
        Ok(())
    }
}
