//! # factura-core: Pure Business Logic for Factura
//!
//! This crate is the **heart** of Factura. It contains the invoicing rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Factura Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (text menu)                         │   │
//! │  │   Configure ──► Customers ──► Products ──► Generate invoice     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ factura-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  invoice  │  │  render   │  │   │
//! │  │   │ Customer  │  │   Money   │  │  Totals   │  │  50 cols  │  │   │
//! │  │   │ Product   │  │  TaxRate  │  │  Invoice  │  │ file name │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                         ┌────────────┐                          │   │
//! │  │                         │ validation │                          │   │
//! │  │                         └────────────┘                          │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              factura-store (JSON collection documents)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StoreProfile, Customer, Product)
//! - [`money`] - Money and the fixed IVA rate
//! - [`invoice`] - Invoice assembly and totals
//! - [`render`] - Fixed-width invoice text and file naming
//! - [`validation`] - Input predicates and validated parsers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use factura_core::money::{Money, TaxRate};
//!
//! let price = Money::new(10.0);
//! let tax = price.tax_at(TaxRate::IVA);
//! assert_eq!(tax.to_string(), "$1.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod money;
pub mod render;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceTotals};
pub use money::{Money, TaxRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Width of every invoice line, in characters.
pub const LINE_WIDTH: usize = 50;

/// Exact length of a national id (cédula).
pub const NATIONAL_ID_LEN: usize = 10;

/// Minimum length of the store tax id (RUC).
pub const MIN_STORE_TAX_ID_LEN: usize = 10;
