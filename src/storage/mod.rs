//! Storage backends for the action layer
//!
//! The [`Store`] trait is the single seam between actions and the
//! relational store. Two implementations exist:
//!
//! - [`InMemoryStore`]: default, for tests and development
//! - `PostgresStore`: behind the `postgres` feature, backed by `sqlx::PgPool`

pub mod in_memory;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use crate::entities::{Customer, Invoice, InvoiceStatus};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations used by the mutation actions.
///
/// Each mutation maps to exactly one statement here; updates take the
/// mutable fields rather than a full entity so the issue date is never
/// rewritten. The two predicate queries back the business-rule checks;
/// they are read-then-write with no transactional wrapping, so concurrent
/// requests can still race between check and write — serializing those is
/// left to the storage layer's own concurrency control.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_invoice(&self, invoice: Invoice) -> Result<Invoice>;

    /// Update customer reference, amount, and status of an invoice.
    /// The issue date is left untouched. Errors if no row with `id` exists,
    /// regardless of backend.
    async fn update_invoice(
        &self,
        id: &Uuid,
        customer_id: &Uuid,
        amount: i64,
        status: InvoiceStatus,
    ) -> Result<()>;

    async fn delete_invoice(&self, id: &Uuid) -> Result<()>;

    async fn get_invoice(&self, id: &Uuid) -> Result<Option<Invoice>>;

    async fn list_invoices(&self) -> Result<Vec<Invoice>>;

    async fn insert_customer(&self, customer: Customer) -> Result<Customer>;

    /// Update name and email of a customer. Errors if no row with `id`
    /// exists, regardless of backend.
    async fn update_customer(&self, id: &Uuid, name: &str, email: &str) -> Result<()>;

    async fn delete_customer(&self, id: &Uuid) -> Result<()>;

    async fn get_customer(&self, id: &Uuid) -> Result<Option<Customer>>;

    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Whether any customer other than `exclude` already holds `email`.
    async fn email_taken(&self, email: &str, exclude: Option<&Uuid>) -> Result<bool>;

    /// Whether at least one invoice references the customer (delete guard).
    async fn customer_has_invoices(&self, customer_id: &Uuid) -> Result<bool>;
}
