//! Form rendering module
//!
//! - `field_renderer`: one bound control plus its error line
//! - `profile_form`: the profile form layout

mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_form;
