//! # Invoice Writer
//!
//! Writes rendered invoice text to the output directory. Invoices are
//! output artifacts only: nothing reads them back.

use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Writes invoice text files.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceWriter<'a> {
    store: &'a Store,
}

impl<'a> InvoiceWriter<'a> {
    /// Creates a new InvoiceWriter.
    pub fn new(store: &'a Store) -> Self {
        InvoiceWriter { store }
    }

    /// Writes `text` to `file_name` in the output directory and returns the
    /// full path. An existing file with the same name is overwritten.
    pub fn write(&self, file_name: &str, text: &str) -> StoreResult<PathBuf> {
        let path = self.store.config().invoice_dir().join(file_name);
        fs::write(&path, text).map_err(|e| StoreError::io(&path, e))?;

        info!(path = %path.display(), bytes = text.len(), "Invoice written");
        Ok(path)
    }
}
