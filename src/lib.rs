//! # Billet
//!
//! Server-side form-processing layer for a small invoicing and
//! customer-management application.
//!
//! ## What it does
//!
//! - **Validation**: per-mutation form schemas with field-scoped error
//!   messages, returned as values rather than raised
//! - **Business rules**: application-level email uniqueness and a
//!   referential-integrity guard on customer deletes
//! - **Persistence**: one parameterized SQL statement per mutation, with
//!   in-memory and PostgreSQL backends behind a single trait
//! - **Post-mutation effects**: cache-tag invalidation of the affected
//!   listing view, plus a redirect outcome for creates and updates
//! - **Auth delegation**: credential sign-in forwarded to an external
//!   provider, with typed error mapping
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use billet::prelude::*;
//!
//! let ctx = ActionContext::new(
//!     Arc::new(InMemoryStore::new()),
//!     Arc::new(InMemoryCache::new()),
//!     Arc::new(StaticAuthProvider::new().with_user("user@nextmail.com", "123456")),
//! );
//!
//! let form = FormData::new()
//!     .with("customerId", customer_id.to_string())
//!     .with("amount", "49.99")
//!     .with("status", "pending");
//!
//! match create_invoice(&ctx, &form).await? {
//!     ActionOutcome::Redirect { path } => println!("saved, go to {path}"),
//!     ActionOutcome::Failure { errors, message } => eprintln!("{message}: {errors:?}"),
//!     ActionOutcome::Success { message } => println!("{message}"),
//! }
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        auth::{AuthProvider, Credentials, StaticAuthProvider},
        cache::{CacheInvalidator, InMemoryCache},
        error::{AppError, AuthError},
        form::{FieldErrors, FormData},
        outcome::ActionOutcome,
        validation::FormSchema,
    };

    // === Actions ===
    pub use crate::actions::{
        ActionContext, RedirectPaths, authenticate, create_customer, create_invoice,
        delete_customer, delete_invoice, update_customer, update_invoice,
    };

    // === Entities ===
    pub use crate::entities::{Customer, Invoice, InvoiceStatus};

    // === Storage ===
    pub use crate::storage::{InMemoryStore, Store};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
