//! Rule tables for the profile schema

use crate::state::{Field, Gender, UserForm};
use regex::Regex;
use std::sync::OnceLock;

/// A predicate over the form paired with the message reported against
/// `field` when the predicate does not hold.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub message: &'static str,
    pub check: fn(&UserForm) -> bool,
}

const MIN_AGE: u32 = 18;
const MIN_PASSWORD_LEN: usize = 8;
const MIN_PHONE_LEN: usize = 10;

/// Length in UTF-16 code units, the unit browser form inputs count in
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Per-field rules in declaration order
pub(super) const FIELD_RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        message: "Name is required",
        check: |form| !form.name.is_empty(),
    },
    Rule {
        field: Field::Email,
        message: "Invalid email address",
        check: |form| is_valid_email(&form.email),
    },
    Rule {
        field: Field::Age,
        message: "Must be at least 18 years old",
        check: |form| form.age >= MIN_AGE,
    },
    Rule {
        field: Field::Password,
        message: "Password must be at least 8 characters",
        check: |form| text_len(&form.password) >= MIN_PASSWORD_LEN,
    },
    Rule {
        field: Field::Password,
        message: "Must contain at least one uppercase letter",
        check: |form| form.password.chars().any(|c| c.is_ascii_uppercase()),
    },
    Rule {
        field: Field::Password,
        message: "Must contain at least one number",
        check: |form| form.password.chars().any(|c| c.is_ascii_digit()),
    },
    Rule {
        field: Field::Phone,
        message: "Phone number must be at least 10 digits",
        check: |form| text_len(&form.phone) >= MIN_PHONE_LEN,
    },
    Rule {
        field: Field::Gender,
        message: "Please select a valid gender",
        check: |form| form.gender.parse::<Gender>().is_ok(),
    },
];

/// Rules spanning several fields; evaluated after [`FIELD_RULES`]
pub(super) const CROSS_FIELD_RULES: &[Rule] = &[Rule {
    field: Field::ConfirmPassword,
    message: "Passwords do not match",
    check: |form| form.password == form.confirm_password,
}];

// local-part: dot-separated atoms, last char not `'`; domain: at least two
// labels, alphabetic TLD
const EMAIL_PATTERN: &str = r"^([A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Syntactic email check: `local@domain` with a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}
