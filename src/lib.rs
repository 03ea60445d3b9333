//! Profile form core
//!
//! State binding and schema-driven validation for a seven-field user
//! profile form. The terminal front end in `main.rs` is one presentation
//! layer over this library; it feeds raw field edits in and renders the
//! error messages that come back out.

pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod submit;
pub mod validation;

pub use controller::{ProfileForm, SubmitOutcome};
pub use error::FormError;
pub use state::{Field, FormErrors, FormStore, Gender, UserForm, UserProfile};
pub use submit::{StdoutSubmitter, SubmitHandler};
pub use validation::validate;
