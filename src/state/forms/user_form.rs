//! The form record, its error mapping, and the validated profile

use super::field::Field;
use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Gender options offered by the select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Other,
            Gender::Other => Gender::Male,
        }
    }

    /// Previous option, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Gender::Male => Gender::Other,
            Gender::Female => Gender::Male,
            Gender::Other => Gender::Female,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| FormError::UnknownGender(s.to_string()))
    }
}

/// Coerce raw age input into a non-negative whole number.
///
/// Anything that does not parse as a finite number becomes 0. Fractions
/// truncate toward zero, negatives clamp to 0 and oversized values saturate.
pub fn coerce_age(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        // Float-to-int `as` truncates and saturates at both ends.
        Ok(n) if n.is_finite() => n as u32,
        _ => 0,
    }
}

/// Current values of every field, exactly as the user entered them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    /// Raw select value; only `male`, `female` and `other` pass validation
    pub gender: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: 0,
            password: String::new(),
            confirm_password: String::new(),
            phone: String::new(),
            gender: Gender::Male.as_str().to_string(),
        }
    }
}

impl UserForm {
    /// Store a raw edit. Age is coerced, every other field is stored as-is.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Email => self.email = raw.to_string(),
            Field::Age => self.age = coerce_age(raw),
            Field::Password => self.password = raw.to_string(),
            Field::ConfirmPassword => self.confirm_password = raw.to_string(),
            Field::Phone => self.phone = raw.to_string(),
            Field::Gender => self.gender = raw.to_string(),
        }
    }

    /// The value a bound control displays for `field`
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Age => self.age.to_string(),
            Field::Password => self.password.clone(),
            Field::ConfirmPassword => self.confirm_password.clone(),
            Field::Phone => self.phone.clone(),
            Field::Gender => self.gender.clone(),
        }
    }
}

/// Validated, typed form data handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub gender: Gender,
}

impl UserProfile {
    const REDACTED: &'static str = "********";

    /// Copy with both password fields replaced by a fixed mask
    pub fn redacted(&self) -> Self {
        Self {
            password: Self::REDACTED.to_string(),
            confirm_password: Self::REDACTED.to_string(),
            ..self.clone()
        }
    }
}

/// Validation messages per field.
///
/// A field without errors has no entry at all; empty lists are never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<Field, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of `field`'s list
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop every message for `field`
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of messages across all fields
    pub fn message_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Messages for `field` joined for display
    pub fn joined(&self, field: Field) -> Option<String> {
        self.get(field).map(|messages| messages.join(", "))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.0.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}
