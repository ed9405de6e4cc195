//! Input validation for form submissions
//!
//! - [`validators`]: reusable per-field closure validators
//! - [`schema`]: per-mutation rule sets producing [`FieldErrors`](crate::core::form::FieldErrors)

pub mod schema;
pub mod validators;

pub use schema::FormSchema;
pub use validators::Validator;
