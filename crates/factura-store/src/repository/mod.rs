//! # Repository Module
//!
//! Typed access to the collection documents.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  store.customers().append(&customer)                           │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── list(&self)                                                       │
//! │  └── append(&self, customer)                                           │
//! │       │                                                                 │
//! │       │  load → push → save                                            │
//! │       ▼                                                                 │
//! │  Store (clientes.json)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProfileRepository`](profile::ProfileRepository) - Store profile singleton
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer roster
//! - [`ProductRepository`](product::ProductRepository) - Product catalog and id assignment
//! - [`InvoiceWriter`](invoice::InvoiceWriter) - Invoice text files

pub mod customer;
pub mod invoice;
pub mod product;
pub mod profile;
