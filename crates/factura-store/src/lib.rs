//! # factura-store: Record Store for Factura
//!
//! Loads and saves the store profile, customers and products as JSON
//! documents in a data directory, and writes invoice text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Factura Data Flow                                │
//! │                                                                         │
//! │  CLI command (register customer, generate invoice)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  factura-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────────────────────┐ │   │
//! │  │   │    Store      │    │           Repositories              │ │   │
//! │  │   │  (store.rs)   │◄───│  ProfileRepository                  │ │   │
//! │  │   │               │    │  CustomerRepository                 │ │   │
//! │  │   │ load / save   │    │  ProductRepository                  │ │   │
//! │  │   │ per document  │    │  InvoiceWriter                      │ │   │
//! │  │   └───────────────┘    └─────────────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  config.json   clientes.json   productos.json   factura_*.txt          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle, configuration and generic document I/O
//! - [`error`] - Store error types
//! - [`repository`] - Per-collection repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use factura_store::{Store, StoreConfig};
//!
//! # fn main() -> Result<(), factura_store::StoreError> {
//! let store = Store::new(StoreConfig::new("./datos"))?;
//!
//! let profile = store.profile().load()?;
//! let customers = store.customers().list()?;
//! println!("{} clientes, perfil: {:?}", customers.len(), profile);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Collection, Store, StoreConfig};

pub use repository::customer::CustomerRepository;
pub use repository::invoice::InvoiceWriter;
pub use repository::product::ProductRepository;
pub use repository::profile::ProfileRepository;

#[cfg(test)]
pub(crate) mod testing {
    use super::{Store, StoreConfig};

    /// Opens a store in a fresh per-test temporary directory.
    pub fn temp_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!(
            "factura-store-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(StoreConfig::new(dir)).unwrap()
    }
}
