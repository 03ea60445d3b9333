//! Form domain layer
//!
//! Field identifiers, the mutable form record, its error mapping, and the
//! store that binds raw edits to them.

mod field;
mod form_state;
mod user_form;

pub use field::{Field, InputKind};
pub use form_state::{Control, Form, FormSnapshot, FormStore};
pub use user_form::{coerce_age, FormErrors, Gender, UserForm, UserProfile};
