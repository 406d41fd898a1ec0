//! # Commands Module
//!
//! One function per menu action. Each takes the session, talks to the
//! user through its console and persists through its store.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu Commands                                    │
//! │                                                                         │
//! │  PROFILE                  CUSTOMERS                PRODUCTS             │
//! │  ───────                  ─────────                ────────             │
//! │  configure_store          register_customer        register_product     │
//! │                           list_customers           list_products        │
//! │                                                                         │
//! │  INVOICE                                                               │
//! │  ───────                                                               │
//! │  generate_invoice ──► selector::select_customer                        │
//! │                   ──► selector::select_products                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customer;
pub mod invoice;
pub mod product;
pub mod profile;
pub mod selector;

/// Rule printed between entries of a listing.
pub(crate) const LIST_RULE: &str = "------------------------";
