//! Form field identifiers

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of input control a field is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Password,
    Tel,
    Select,
}

impl InputKind {
    /// Whether the displayed value must be masked
    pub fn is_masked(self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// One of the seven independently editable fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Age,
    Password,
    ConfirmPassword,
    Phone,
    Gender,
}

impl Field {
    /// Every field, in the order the form lays them out
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Age,
        Field::Password,
        Field::ConfirmPassword,
        Field::Phone,
        Field::Gender,
    ];

    /// Wire name used by change events
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Phone => "phone",
            Field::Gender => "gender",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Phone => "Phone",
            Field::Gender => "Gender",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::Name => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Age => InputKind::Number,
            Field::Password | Field::ConfirmPassword => InputKind::Password,
            Field::Phone => InputKind::Tel,
            Field::Gender => InputKind::Select,
        }
    }

    /// Position of the field within [`Field::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
