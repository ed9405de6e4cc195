//! The mutation action layer
//!
//! One function per mutation, each following the same linear sequence:
//! validate → (rule-check) → persist → (invalidate + redirect | message).
//! Actions never panic on bad input and never leak storage errors to the
//! caller; everything recoverable comes back as an
//! [`ActionOutcome`](crate::core::ActionOutcome).
//!
//! Collaborators are passed explicitly through [`ActionContext`] rather than
//! reached as ambient globals, so every action is a pure function of its
//! context and form input.

pub mod auth;
pub mod customers;
pub mod invoices;

pub use auth::authenticate;
pub use customers::{create_customer, delete_customer, update_customer};
pub use invoices::{create_invoice, delete_invoice, update_invoice};

use crate::core::auth::AuthProvider;
use crate::core::cache::CacheInvalidator;
use crate::storage::Store;
use std::sync::Arc;

/// Listing-view paths used for cache invalidation and redirects.
#[derive(Debug, Clone)]
pub struct RedirectPaths {
    pub invoices: String,
    pub customers: String,
}

impl Default for RedirectPaths {
    fn default() -> Self {
        Self {
            invoices: "/dashboard/invoices".to_string(),
            customers: "/dashboard/customers".to_string(),
        }
    }
}

/// Request-scoped collaborators shared by all actions.
#[derive(Clone)]
pub struct ActionContext {
    pub store: Arc<dyn Store>,
    pub cache: Arc<dyn CacheInvalidator>,
    pub auth: Arc<dyn AuthProvider>,
    pub paths: RedirectPaths,
}

impl ActionContext {
    pub fn new(
        store: Arc<dyn Store>,
        cache: Arc<dyn CacheInvalidator>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            store,
            cache,
            auth,
            paths: RedirectPaths::default(),
        }
    }

    pub fn with_paths(mut self, paths: RedirectPaths) -> Self {
        self.paths = paths;
        self
    }
}
