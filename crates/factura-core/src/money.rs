//! # Money Module
//!
//! Provides the `Money` type and the fixed IVA rate.
//!
//! ## Floating Point
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PER-LINE ACCUMULATION                                                  │
//! │                                                                         │
//! │  Prices are stored in productos.json as JSON numbers and printed with  │
//! │  two decimals. Tax is computed per line and summed:                     │
//! │                                                                         │
//! │    tax = p1 * 0.15 + p2 * 0.15 + ...                                    │
//! │                                                                         │
//! │  and NOT (p1 + p2 + ...) * 0.15. Rounding happens only when printing.  │
//! │  Amounts are single precision (f32) throughout.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use factura_core::money::{Money, TaxRate};
//!
//! let mut subtotal = Money::zero();
//! subtotal += Money::new(10.0);
//! subtotal += Money::new(5.0);
//! assert_eq!(subtotal.to_string(), "$15.00");
//!
//! let tax = Money::new(10.0).tax_at(TaxRate::IVA);
//! assert_eq!(tax.to_string(), "$1.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1500 bps = 15%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The IVA rate applied to every taxed product: 15%.
    pub const IVA: TaxRate = TaxRate(1500);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (`0.15` for IVA).
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.0 as f32 / 10_000.0
    }

    /// Whole-percent label used on the invoice, e.g. `"15%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.0 / 100)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in dollars.
///
/// Serialized as a bare JSON number so `precio` in `productos.json` keeps
/// its existing shape.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f32);

impl Money {
    /// Creates a Money value from a dollar amount.
    #[inline]
    pub const fn new(amount: f32) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Returns the raw dollar amount.
    #[inline]
    pub const fn amount(&self) -> f32 {
        self.0
    }

    /// Checks if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Tax owed on this amount at `rate`, unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use factura_core::money::{Money, TaxRate};
    ///
    /// let tax = Money::new(2.5).tax_at(TaxRate::IVA);
    /// assert_eq!(format!("{:.3}", tax.amount()), "0.375");
    /// ```
    #[inline]
    pub fn tax_at(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.fraction())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the invoice prints it: `$` and two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${:.2}", -f64::from(self.0))
        } else {
            write!(f, "${:.2}", f64::from(self.0))
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
