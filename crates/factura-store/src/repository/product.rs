//! # Product Repository
//!
//! Products live in `productos.json` as an array, in insertion order.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  next id = id of the LAST product in the file + 1   (1 when empty)     │
//! │                                                                         │
//! │  [1, 2, 5]  → 6                                                        │
//! │  [5, 2]     → 3   (not 6: the last entry wins, not the maximum)        │
//! │                                                                         │
//! │  Ids stay unique only while the file is append-only.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::{Collection, Store};
use factura_core::Product;

/// Repository for the product catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository.
    pub fn new(store: &'a Store) -> Self {
        ProductRepository { store }
    }

    /// All products, in the order they were saved.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.store.load(Collection::Products)
    }

    /// Id the next appended product should get.
    pub fn next_id(&self) -> StoreResult<u32> {
        let id = Product::next_id(&self.list()?);
        debug!(id, "Next product id");
        Ok(id)
    }

    /// Appends a product and rewrites the document.
    ///
    /// The product keeps the id it was given; call [`Self::next_id`] first.
    pub fn append(&self, product: &Product) -> StoreResult<()> {
        let mut products = self.list()?;
        products.push(product.clone());
        self.store.save(Collection::Products, &products)?;

        info!(id = product.id, total = products.len(), "Product saved");
        Ok(())
    }

    /// First product whose id equals `id`.
    pub fn find(&self, id: u32) -> StoreResult<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }
}
