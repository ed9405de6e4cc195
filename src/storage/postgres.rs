//! PostgreSQL storage backend using sqlx.
//!
//! Provides a `PostgresStore` implementation of [`Store`] backed by a
//! PostgreSQL database via `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! billet-rs = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Two tables, matching the layout the actions were written against:
//! `invoices(id, customer_id, amount, status, date)` and
//! `customers(id, name, email, image_url)`. Email uniqueness is deliberately
//! *not* a column constraint; the action layer checks it before writing.
//!
//! All statements bind their values with `$n` placeholders; no value is ever
//! concatenated into SQL text.

use crate::entities::{Customer, Invoice, InvoiceStatus};
use crate::storage::Store;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required tables (idempotent). Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS customers (
            id UUID NOT NULL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create customers table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id UUID NOT NULL PRIMARY KEY,
            customer_id UUID NOT NULL,
            amount BIGINT NOT NULL,
            status VARCHAR(16) NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Store implementation backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_invoice(row: (Uuid, Uuid, i64, String, NaiveDate)) -> Result<Invoice> {
        let (id, customer_id, amount, status, date) = row;
        let status = status
            .parse::<InvoiceStatus>()
            .map_err(|e| anyhow!("Invalid status in invoices row {}: {}", id, e))?;
        Ok(Invoice {
            id,
            customer_id,
            amount,
            status,
            date,
        })
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn insert_invoice(&self, invoice: Invoice) -> Result<Invoice> {
        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert invoice: {}", e))?;

        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &Uuid,
        customer_id: &Uuid,
        amount: i64,
        status: InvoiceStatus,
    ) -> Result<()> {
        let result = sqlx::query(
            "UPDATE invoices SET customer_id = $1, amount = $2, status = $3 WHERE id = $4",
        )
        .bind(customer_id)
        .bind(amount)
        .bind(status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice {}: {}", id, e))?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Invoice {} not found", id));
        }

        Ok(())
    }

    async fn delete_invoice(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice {}: {}", id, e))?;

        Ok(())
    }

    async fn get_invoice(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, i64, String, NaiveDate)>(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch invoice {}: {}", id, e))?;

        row.map(Self::row_to_invoice).transpose()
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, i64, String, NaiveDate)>(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list invoices: {}", e))?;

        rows.into_iter().map(Self::row_to_invoice).collect()
    }

    async fn insert_customer(&self, customer: Customer) -> Result<Customer> {
        sqlx::query("INSERT INTO customers (id, name, email, image_url) VALUES ($1, $2, $3, $4)")
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.image_url)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to insert customer: {}", e))?;

        Ok(customer)
    }

    async fn update_customer(&self, id: &Uuid, name: &str, email: &str) -> Result<()> {
        let result = sqlx::query("UPDATE customers SET name = $1, email = $2 WHERE id = $3")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to update customer {}: {}", id, e))?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Customer {} not found", id));
        }

        Ok(())
    }

    async fn delete_customer(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete customer {}: {}", id, e))?;

        Ok(())
    }

    async fn get_customer(&self, id: &Uuid) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, (Uuid, String, String, Option<String>)>(
            "SELECT id, name, email, image_url FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch customer {}: {}", id, e))?;

        Ok(row.map(|(id, name, email, image_url)| Customer {
            id,
            name,
            email,
            image_url,
        }))
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, Option<String>)>(
            "SELECT id, name, email, image_url FROM customers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list customers: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email, image_url)| Customer {
                id,
                name,
                email,
                image_url,
            })
            .collect())
    }

    async fn email_taken(&self, email: &str, exclude: Option<&Uuid>) -> Result<bool> {
        let taken = match exclude {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND id <> $2)",
                )
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)",
                )
                .bind(email)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| anyhow!("Failed to check email uniqueness: {}", e))?;

        Ok(taken)
    }

    async fn customer_has_invoices(&self, customer_id: &Uuid) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM invoices WHERE customer_id = $1)",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to check invoice references: {}", e))
    }
}
