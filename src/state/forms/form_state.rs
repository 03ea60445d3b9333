//! Form state store and focus handling

use super::field::{Field, InputKind};
use super::user_form::{FormErrors, Gender, UserForm};
use crate::error::Result;
use tracing::trace;

/// Trait for common focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A focusable control on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Field(Field),
    Submit,
}

/// Read-only view of the store at a point in time
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub data: &'a UserForm,
    pub errors: &'a FormErrors,
}

/// Holds the form record and its error mapping.
///
/// Edits land immediately and clear that field's errors. Nothing here
/// validates; errors only change through [`FormStore::replace_errors`].
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    data: UserForm,
    errors: FormErrors,
    active_field_index: usize,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw edit to `field` and drop its errors
    pub fn on_field_change(&mut self, field: Field, raw: &str) {
        self.data.set(field, raw);
        self.errors.clear_field(field);
        trace!(field = field.name(), "field changed");
    }

    /// String-keyed change event. Unknown names leave the store untouched.
    pub fn on_named_field_change(&mut self, name: &str, raw: &str) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.on_field_change(field, raw);
        Ok(())
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            data: &self.data,
            errors: &self.errors,
        }
    }

    pub fn data(&self) -> &UserForm {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Install the complete result of a validation run
    pub fn replace_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn raw_value(&self, field: Field) -> String {
        self.data.display_value(field)
    }

    /// The control that currently has focus
    pub fn active_control(&self) -> Control {
        Field::from_index(self.active_field_index)
            .map(Control::Field)
            .unwrap_or(Control::Submit)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_control() == Control::Submit
    }

    /// Type a character into the focused text control
    pub fn input_char(&mut self, c: char) {
        if let Control::Field(field) = self.active_control() {
            if field.kind() == InputKind::Select {
                return;
            }
            let mut value = self.raw_value(field);
            value.push(c);
            self.on_field_change(field, &value);
        }
    }

    /// Remove the last character of the focused text control
    pub fn backspace(&mut self) {
        if let Control::Field(field) = self.active_control() {
            if field.kind() == InputKind::Select {
                return;
            }
            let mut value = self.raw_value(field);
            if value.pop().is_some() {
                self.on_field_change(field, &value);
            }
        }
    }

    /// Step the gender select forward or backward.
    ///
    /// A value outside the options steps onto the first option.
    pub fn cycle_gender(&mut self, forward: bool) {
        let next = match self.data.gender.parse::<Gender>() {
            Ok(current) if forward => current.next(),
            Ok(current) => current.prev(),
            Err(_) => Gender::Male,
        };
        self.on_field_change(Field::Gender, next.as_str());
    }
}

impl Form for FormStore {
    fn field_count(&self) -> usize {
        Field::ALL.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Field::ALL.len());
    }
}
