//! Core module containing the fundamental traits and types of the action layer

pub mod auth;
pub mod cache;
pub mod error;
pub mod form;
pub mod outcome;
pub mod validation;

pub use auth::{AuthProvider, Credentials, StaticAuthProvider};
pub use cache::{CacheInvalidator, InMemoryCache};
pub use error::{AppError, AuthError, ErrorResponse};
pub use form::{FieldErrors, FormData};
pub use outcome::ActionOutcome;
pub use validation::{FormSchema, Validator};
