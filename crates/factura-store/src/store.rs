//! # Record Store
//!
//! Generic load/save of named collections as JSON documents.
//!
//! ## Layout On Disk
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Data Directory                                   │
//! │                                                                         │
//! │  StoreConfig::new(dir)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← Creates the directories if needed                │
//! │       │                                                                 │
//! │       ├── config.json     (Collection::Profile,   single object)       │
//! │       ├── clientes.json   (Collection::Customers, array)               │
//! │       └── productos.json  (Collection::Products,  array)               │
//! │                                                                         │
//! │  Output directory (defaults to the data directory)                     │
//! │       └── factura_<cédula>_<d-m-yyyy>.txt                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Model
//! Every save rewrites the whole document: load everything, change it in
//! memory, write everything back. Writes are not atomic; an interrupted
//! save can leave a truncated file, which then loads as
//! [`StoreError::Malformed`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::customer::CustomerRepository;
use crate::repository::invoice::InvoiceWriter;
use crate::repository::product::ProductRepository;
use crate::repository::profile::ProfileRepository;

// =============================================================================
// Collections
// =============================================================================

/// The named documents the store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Store profile (`config.json`).
    Profile,
    /// Customer roster (`clientes.json`).
    Customers,
    /// Product catalog (`productos.json`).
    Products,
}

impl Collection {
    /// File name of the collection document.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Collection::Profile => "config.json",
            Collection::Customers => "clientes.json",
            Collection::Products => "productos.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,no_run
/// use factura_store::StoreConfig;
///
/// let config = StoreConfig::new("./datos").output_dir("./facturas");
/// assert_eq!(config.invoice_dir(), std::path::Path::new("./facturas"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection documents.
    pub data_dir: PathBuf,

    /// Directory for invoice text files. `None` means `data_dir`.
    pub output_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            output_dir: None,
        }
    }

    /// Sets a separate directory for invoice files.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Where invoices are written.
    pub fn invoice_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.data_dir)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Record store handle.
///
/// ## Usage
/// ```rust,no_run
/// use factura_store::{Store, StoreConfig};
///
/// # fn main() -> Result<(), factura_store::StoreError> {
/// let store = Store::new(StoreConfig::new("."))?;
/// let customers = store.customers().list()?;
/// let next_id = store.products().next_id()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Opens a store, creating the data and output directories if needed.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        for dir in [config.data_dir.as_path(), config.invoice_dir()] {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        info!(
            data_dir = %config.data_dir.display(),
            invoice_dir = %config.invoice_dir().display(),
            "Record store opened"
        );

        Ok(Store { config })
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full path of a collection document.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.config.data_dir.join(collection.file_name())
    }

    /// Loads a document, or `None` when the file is missing or blank.
    pub fn load_document<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> StoreResult<Option<T>> {
        let path = self.path(collection);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%collection, "Document missing, using default");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        if text.trim().is_empty() {
            debug!(%collection, "Document blank, using default");
            return Ok(None);
        }

        let value = serde_json::from_str(&text).map_err(|e| StoreError::malformed(&path, e))?;
        Ok(Some(value))
    }

    /// Loads every record of a collection; a missing document is empty.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<T>> {
        let records: Vec<T> = self.load_document(collection)?.unwrap_or_default();
        debug!(%collection, count = records.len(), "Collection loaded");
        Ok(records)
    }

    /// Rewrites a document with `value`, pretty-printed with 4-space indent.
    pub fn save<T: Serialize + ?Sized>(&self, collection: Collection, value: &T) -> StoreResult<()> {
        let path = self.path(collection);

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut serializer)?;

        fs::write(&path, buf).map_err(|e| StoreError::io(&path, e))?;
        debug!(%collection, path = %path.display(), "Document saved");
        Ok(())
    }

    // =========================================================================
    // Repository Accessors
    // =========================================================================

    /// Store profile repository.
    pub fn profile(&self) -> ProfileRepository<'_> {
        ProfileRepository::new(self)
    }

    /// Customer repository.
    pub fn customers(&self) -> CustomerRepository<'_> {
        CustomerRepository::new(self)
    }

    /// Product repository.
    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// Invoice file writer.
    pub fn invoices(&self) -> InvoiceWriter<'_> {
        InvoiceWriter::new(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
