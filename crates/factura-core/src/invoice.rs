//! # Invoice Assembly
//!
//! Turns a customer and a product selection into an [`Invoice`] with its
//! totals.
//!
//! ## Totals
//! ```text
//! for each line item:
//!     subtotal += price
//!     tax      += price * 0.15     (only when has_tax)
//! total = subtotal + tax
//! ```
//! Tax is accumulated line by line; see [`crate::money`].

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Customer, Product, StoreProfile};

// =============================================================================
// Preconditions
// =============================================================================

/// Checks the store profile alone. Needs no collection loaded.
pub fn check_profile(profile: Option<&StoreProfile>) -> CoreResult<()> {
    if profile.is_some_and(StoreProfile::is_configured) {
        Ok(())
    } else {
        Err(CoreError::StoreNotConfigured)
    }
}

/// Checks that an invoice can be generated at all.
///
/// ## Order
/// Store profile first, then customers, then products. The first failing
/// check is reported.
pub fn check_ready(
    profile: Option<&StoreProfile>,
    customers: &[Customer],
    products: &[Product],
) -> CoreResult<()> {
    check_profile(profile)?;

    if customers.is_empty() {
        return Err(CoreError::NoCustomers);
    }

    if products.is_empty() {
        return Err(CoreError::NoProducts);
    }

    Ok(())
}

// =============================================================================
// Totals
// =============================================================================

/// Monetary totals of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl InvoiceTotals {
    /// Sums the line items, taxing each taxed line separately.
    ///
    /// ## Example
    /// ```rust
    /// use factura_core::{InvoiceTotals, Money, Product};
    ///
    /// let taxed = Product { id: 1, name: None, description: None, price: Money::new(10.0), has_tax: true };
    /// let exempt = Product { id: 2, name: None, description: None, price: Money::new(5.0), has_tax: false };
    ///
    /// let totals = InvoiceTotals::from_items(&[taxed, exempt]);
    /// assert_eq!(totals.subtotal.to_string(), "$15.00");
    /// assert_eq!(totals.tax.to_string(), "$1.50");
    /// assert_eq!(totals.total.to_string(), "$16.50");
    /// ```
    pub fn from_items(items: &[Product]) -> Self {
        let mut subtotal = Money::zero();
        let mut tax = Money::zero();

        for item in items {
            subtotal += item.price;
            if item.has_tax {
                tax += item.tax();
            }
        }

        InvoiceTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice ready to be rendered. Never persisted as data.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// Customer as it was when the invoice was made.
    pub customer: Customer,

    pub date: NaiveDate,

    /// Selected products, in selection order. Duplicates are separate lines.
    pub items: Vec<Product>,

    pub totals: InvoiceTotals,
}

impl Invoice {
    /// Builds an invoice and computes its totals.
    pub fn new(customer: Customer, date: NaiveDate, items: Vec<Product>) -> Self {
        let totals = InvoiceTotals::from_items(&items);
        Invoice {
            customer,
            date,
            items,
            totals,
        }
    }

    /// Date as printed on the invoice: `d/m/yyyy`, no zero padding.
    pub fn date_label(&self) -> String {
        format!("{}/{}/{}", self.date.day(), self.date.month(), self.date.year())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f32, has_tax: bool) -> Product {
        Product {
            id,
            name: Some(format!("P{id}")),
            description: None,
            price: Money::new(price),
            has_tax,
        }
    }

    fn customer() -> Customer {
        Customer {
            name: Some("Ana Torres".to_string()),
            national_id: "0102030405".to_string(),
            address: None,
            phone: None,
            email: "ana@correo.ec".to_string(),
            tax_id: None,
            payment_method: None,
        }
    }

    fn configured_profile() -> StoreProfile {
        StoreProfile {
            name: Some("Tienda".to_string()),
            tax_id: "1790012345001".to_string(),
            ..StoreProfile::default()
        }
    }

    #[test]
    fn test_totals_mixed_tax() {
        let totals = InvoiceTotals::from_items(&[product(1, 10.0, true), product(2, 5.0, false)]);
        assert_eq!(totals.subtotal.to_string(), "$15.00");
        assert_eq!(totals.tax.to_string(), "$1.50");
        assert_eq!(totals.total.to_string(), "$16.50");
    }

    #[test]
    fn test_totals_empty() {
        let totals = InvoiceTotals::from_items(&[]);
        assert_eq!(totals, InvoiceTotals::default());
        assert_eq!(totals.total.to_string(), "$0.00");
    }

    #[test]
    fn test_duplicates_count_twice() {
        let p = product(1, 2.0, true);
        let totals = InvoiceTotals::from_items(&[p.clone(), p]);
        assert_eq!(totals.subtotal.to_string(), "$4.00");
        assert_eq!(totals.tax.to_string(), "$0.60");
    }

    #[test]
    fn test_tax_accumulates_per_line() {
        let items = vec![product(1, 0.1, true), product(2, 0.2, true), product(3, 0.7, true)];
        let totals = InvoiceTotals::from_items(&items);

        let expected: f32 = 0.1 * 0.15 + 0.2 * 0.15 + 0.7 * 0.15;
        assert_eq!(totals.tax.amount(), expected);
    }

    #[test]
    fn test_small_taxed_line_rounds_up() {
        let totals = InvoiceTotals::from_items(&[product(1, 0.1, true)]);
        assert_eq!(totals.tax.to_string(), "$0.02");
        assert_eq!(totals.total.to_string(), "$0.12");
    }

    #[test]
    fn test_date_label_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let invoice = Invoice::new(customer(), date, Vec::new());
        assert_eq!(invoice.date_label(), "5/3/2024");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let invoice = Invoice::new(customer(), date, Vec::new());
        assert_eq!(invoice.date_label(), "25/12/2024");
    }

    #[test]
    fn test_check_profile() {
        assert!(check_profile(Some(&configured_profile())).is_ok());
        assert!(matches!(check_profile(None), Err(CoreError::StoreNotConfigured)));

        let unnamed = StoreProfile {
            name: None,
            ..configured_profile()
        };
        assert!(check_profile(Some(&unnamed)).is_ok());
    }

    #[test]
    fn test_check_ready() {
        let profile = configured_profile();
        let customers = vec![customer()];
        let products = vec![product(1, 1.0, false)];

        assert!(check_ready(Some(&profile), &customers, &products).is_ok());

        assert!(matches!(
            check_ready(None, &customers, &products),
            Err(CoreError::StoreNotConfigured)
        ));
        assert!(matches!(
            check_ready(Some(&StoreProfile::default()), &customers, &products),
            Err(CoreError::StoreNotConfigured)
        ));
        assert!(matches!(
            check_ready(Some(&profile), &[], &products),
            Err(CoreError::NoCustomers)
        ));
        assert!(matches!(
            check_ready(Some(&profile), &customers, &[]),
            Err(CoreError::NoProducts)
        ));
    }
}
