//! Domain entities owned by the relational store

pub mod customer;
pub mod invoice;

pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus, parse_amount_cents};
