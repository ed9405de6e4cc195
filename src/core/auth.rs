//! Authentication delegation
//!
//! This layer never verifies credentials itself; it forwards them to an
//! [`AuthProvider`] and maps the provider's typed errors to user-facing
//! outcomes in the sign-in action.

use crate::core::error::AuthError;
use crate::core::form::FormData;
use async_trait::async_trait;
use std::collections::HashMap;

/// Credential fields submitted through the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from submitted fields. Missing fields become empty
    /// strings; the provider rejects them like any other bad credential.
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.get("email").unwrap_or_default().to_string(),
            password: form.get("password").unwrap_or_default().to_string(),
        }
    }
}

/// External authentication subsystem.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Attempt to sign in with the given credentials.
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Fixed-credential provider for development and tests.
#[derive(Clone, Default)]
pub struct StaticAuthProvider {
    users: HashMap<String, String>,
}

impl StaticAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an accepted email/password pair.
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(email.into(), password.into());
        self
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        match self.users.get(&credentials.email) {
            Some(password) if *password == credentials.password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
