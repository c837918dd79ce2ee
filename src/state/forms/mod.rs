//! Form domain layer
//!
//! Type-safe form handling for the call request view.

mod call_form;
mod field;
mod preset;

pub use call_form::{CallRequestForm, CallRequestInput, Form, FormRow, FormVariant};
pub use field::FormField;
pub use preset::DEMO_OPTIONS;
