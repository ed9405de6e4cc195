//! In-memory implementation of Store for testing and development

use crate::entities::{Customer, Invoice, InvoiceStatus};
use crate::storage::Store;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory store implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    invoices: Arc<RwLock<HashMap<Uuid, Invoice>>>,
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert_invoice(&self, invoice: Invoice) -> Result<Invoice> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &Uuid,
        customer_id: &Uuid,
        amount: i64,
        status: InvoiceStatus,
    ) -> Result<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let invoice = invoices
            .get_mut(id)
            .ok_or_else(|| anyhow!("Invoice {} not found", id))?;

        invoice.customer_id = *customer_id;
        invoice.amount = amount;
        invoice.status = status;

        Ok(())
    }

    async fn delete_invoice(&self, id: &Uuid) -> Result<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.remove(id);

        Ok(())
    }

    async fn get_invoice(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.get(id).cloned())
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.values().cloned().collect())
    }

    async fn insert_customer(&self, customer: Customer) -> Result<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn update_customer(&self, id: &Uuid, name: &str, email: &str) -> Result<()> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let customer = customers
            .get_mut(id)
            .ok_or_else(|| anyhow!("Customer {} not found", id))?;

        customer.name = name.to_string();
        customer.email = email.to_string();

        Ok(())
    }

    async fn delete_customer(&self, id: &Uuid) -> Result<()> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        customers.remove(id);

        Ok(())
    }

    async fn get_customer(&self, id: &Uuid) -> Result<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.get(id).cloned())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.values().cloned().collect())
    }

    async fn email_taken(&self, email: &str, exclude: Option<&Uuid>) -> Result<bool> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers
            .values()
            .any(|c| c.email == email && exclude.is_none_or(|id| c.id != *id)))
    }

    async fn customer_has_invoices(&self, customer_id: &Uuid) -> Result<bool> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.values().any(|i| i.customer_id == *customer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer(email: &str) -> Customer {
        Customer::new("Acme", email, None)
    }

    #[tokio::test]
    async fn test_insert_and_get_invoice() {
        let store = InMemoryStore::new();
        let invoice = Invoice::new(Uuid::new_v4(), 4999, InvoiceStatus::Pending);

        let created = store.insert_invoice(invoice.clone()).await.unwrap();
        assert_eq!(created.id, invoice.id);

        let fetched = store.get_invoice(&invoice.id).await.unwrap();
        assert_eq!(fetched, Some(invoice));
    }

    #[tokio::test]
    async fn test_update_invoice_preserves_date() {
        let store = InMemoryStore::new();
        let invoice = Invoice::new(Uuid::new_v4(), 100, InvoiceStatus::Pending);
        let original_date = invoice.date;
        store.insert_invoice(invoice.clone()).await.unwrap();

        let new_customer = Uuid::new_v4();
        store
            .update_invoice(&invoice.id, &new_customer, 200, InvoiceStatus::Paid)
            .await
            .unwrap();

        let updated = store.get_invoice(&invoice.id).await.unwrap().unwrap();
        assert_eq!(updated.customer_id, new_customer);
        assert_eq!(updated.amount, 200);
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.date, original_date);
    }

    #[tokio::test]
    async fn test_update_missing_invoice_errors() {
        let store = InMemoryStore::new();
        let result = store
            .update_invoice(&Uuid::new_v4(), &Uuid::new_v4(), 100, InvoiceStatus::Paid)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_customer_errors() {
        let store = InMemoryStore::new();
        let result = store
            .update_customer(&Uuid::new_v4(), "Acme", "a@x.com")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_invoice() {
        let store = InMemoryStore::new();
        let invoice = Invoice::new(Uuid::new_v4(), 100, InvoiceStatus::Pending);
        store.insert_invoice(invoice.clone()).await.unwrap();

        store.delete_invoice(&invoice.id).await.unwrap();

        assert_eq!(store.get_invoice(&invoice.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_email_taken_excludes_own_id() {
        let store = InMemoryStore::new();
        let customer = sample_customer("a@x.com");
        store.insert_customer(customer.clone()).await.unwrap();

        // Same email on a different record counts as taken
        assert!(store.email_taken("a@x.com", None).await.unwrap());
        assert!(
            store
                .email_taken("a@x.com", Some(&Uuid::new_v4()))
                .await
                .unwrap()
        );

        // Same email on the record itself does not
        assert!(!store.email_taken("a@x.com", Some(&customer.id)).await.unwrap());
        assert!(!store.email_taken("b@x.com", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_customer_has_invoices() {
        let store = InMemoryStore::new();
        let customer = sample_customer("a@x.com");
        store.insert_customer(customer.clone()).await.unwrap();

        assert!(!store.customer_has_invoices(&customer.id).await.unwrap());

        store
            .insert_invoice(Invoice::new(customer.id, 100, InvoiceStatus::Pending))
            .await
            .unwrap();

        assert!(store.customer_has_invoices(&customer.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_customer() {
        let store = InMemoryStore::new();
        let customer = sample_customer("a@x.com");
        store.insert_customer(customer.clone()).await.unwrap();

        store
            .update_customer(&customer.id, "Acme Corp", "b@x.com")
            .await
            .unwrap();

        let updated = store.get_customer(&customer.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(updated.email, "b@x.com");
        // image_url is not part of the update statement
        assert_eq!(updated.image_url, customer.image_url);
    }

    #[tokio::test]
    async fn test_list_customers() {
        let store = InMemoryStore::new();
        store.insert_customer(sample_customer("a@x.com")).await.unwrap();
        store.insert_customer(sample_customer("b@x.com")).await.unwrap();

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.len(), 2);
    }
}
