//! # Domain Types
//!
//! Records persisted by factura-store and printed on invoices.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StoreProfile   │   │    Customer     │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  id (u32)       │       │
//! │  │  address        │   │  national_id    │   │  name           │       │
//! │  │  owner_name     │   │  email          │   │  price (Money)  │       │
//! │  │  tax_id (RUC)   │   │  tax_id?        │   │  has_tax        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │   config.json           clientes.json         productos.json           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Blank Fields
//! Free-text fields the user may leave blank are `Option<String>` and
//! persist as `null`. The `*_display` accessors substitute the fixed
//! placeholder text (see [`sentinel`]) when showing them.
//!
//! JSON keys keep the Spanish names used by existing data files.

use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};
use crate::MIN_STORE_TAX_ID_LEN;

/// Placeholder text shown for blank fields.
pub mod sentinel {
    pub const NAME: &str = "Sin nombre";
    pub const ADDRESS: &str = "Sin dirección";
    pub const PHONE: &str = "Sin teléfono";
    pub const TAX_ID: &str = "Sin RUC";
    pub const PAYMENT_METHOD: &str = "Sin especificar";
    pub const PRODUCT_NAME: &str = "Producto sin nombre";
    pub const DESCRIPTION: &str = "Sin descripción";
}

/// Returns the field's text, or `placeholder` when it is blank.
fn or_placeholder<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => placeholder,
    }
}

// =============================================================================
// Store Profile
// =============================================================================

/// The business identity printed at the top of every invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    /// Legal owner of the RUC.
    #[serde(rename = "propietario", default)]
    pub owner_name: Option<String>,

    /// Store tax id (RUC), at least ten digits.
    #[serde(rename = "ruc", default)]
    pub tax_id: String,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

impl StoreProfile {
    /// A profile is usable for invoicing once it has a RUC of at least ten
    /// characters and its name is not an empty string.
    ///
    /// A name left blank at configuration is stored as `None` and prints
    /// as "Sin nombre"; such a profile still counts as configured.
    pub fn is_configured(&self) -> bool {
        self.name.as_deref() != Some("") && self.tax_id.len() >= MIN_STORE_TAX_ID_LEN
    }

    pub fn name_display(&self) -> &str {
        or_placeholder(&self.name, sentinel::NAME)
    }

    pub fn address_display(&self) -> &str {
        or_placeholder(&self.address, sentinel::ADDRESS)
    }

    pub fn phone_display(&self) -> &str {
        or_placeholder(&self.phone, sentinel::PHONE)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer in `clientes.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    /// National id (cédula), exactly ten digits.
    #[serde(rename = "cedula")]
    pub national_id: String,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(rename = "correo")]
    pub email: String,

    /// Customer tax id (RUC). Only printed on invoices when present.
    #[serde(rename = "ruc", default)]
    pub tax_id: Option<String>,

    #[serde(rename = "formaPago", default)]
    pub payment_method: Option<String>,
}

impl Customer {
    pub fn name_display(&self) -> &str {
        or_placeholder(&self.name, sentinel::NAME)
    }

    pub fn address_display(&self) -> &str {
        or_placeholder(&self.address, sentinel::ADDRESS)
    }

    pub fn phone_display(&self) -> &str {
        or_placeholder(&self.phone, sentinel::PHONE)
    }

    pub fn tax_id_display(&self) -> &str {
        or_placeholder(&self.tax_id, sentinel::TAX_ID)
    }

    pub fn payment_method_display(&self) -> &str {
        or_placeholder(&self.payment_method, sentinel::PAYMENT_METHOD)
    }

    /// The tax id to print on an invoice, if any.
    pub fn invoice_tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref().filter(|id| !id.is_empty())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in `productos.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Positive id, assigned by [`Product::next_id`].
    pub id: u32,

    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "precio")]
    pub price: Money,

    /// Whether IVA applies to this product.
    #[serde(rename = "tieneIVA", default)]
    pub has_tax: bool,
}

impl Product {
    /// Id for the next product appended to `catalog`.
    ///
    /// This is the id of the **last** product plus one, or 1 for an empty
    /// catalog. It is not the maximum id: a reordered catalog can yield a
    /// duplicate.
    ///
    /// ```rust
    /// use factura_core::{Money, Product};
    ///
    /// let with_id = |id| Product {
    ///     id,
    ///     name: None,
    ///     description: None,
    ///     price: Money::zero(),
    ///     has_tax: false,
    /// };
    ///
    /// assert_eq!(Product::next_id(&[]), 1);
    /// assert_eq!(Product::next_id(&[with_id(1), with_id(2), with_id(5)]), 6);
    /// assert_eq!(Product::next_id(&[with_id(5), with_id(2)]), 3);
    /// ```
    pub fn next_id(catalog: &[Product]) -> u32 {
        catalog.last().map_or(1, |last| last.id.saturating_add(1))
    }

    pub fn name_display(&self) -> &str {
        or_placeholder(&self.name, sentinel::PRODUCT_NAME)
    }

    pub fn description_display(&self) -> &str {
        or_placeholder(&self.description, sentinel::DESCRIPTION)
    }

    /// IVA owed on one unit of this product.
    pub fn tax(&self) -> Money {
        if self.has_tax {
            self.price.tax_at(TaxRate::IVA)
        } else {
            Money::zero()
        }
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
            name: Some(format!("Producto {id}")),
            description: None,
            price: Money::new(price),
            has_tax,
        }
    }

    #[test]
    fn test_next_id_uses_last_entry() {
        assert_eq!(Product::next_id(&[]), 1);
        assert_eq!(
            Product::next_id(&[product(1, 1.0, false), product(2, 1.0, false)]),
            3
        );
        assert_eq!(
            Product::next_id(&[
                product(1, 1.0, false),
                product(2, 1.0, false),
                product(5, 1.0, false)
            ]),
            6
        );
        assert_eq!(
            Product::next_id(&[product(7, 1.0, false), product(3, 1.0, false)]),
            4
        );
    }

    #[test]
    fn test_product_tax() {
        assert_eq!(product(1, 10.0, true).tax().to_string(), "$1.50");
        assert_eq!(product(2, 10.0, false).tax(), Money::zero());
    }

    #[test]
    fn test_store_profile_configured() {
        let mut profile = StoreProfile {
            name: Some("Ferretería Andes".to_string()),
            tax_id: "1790012345001".to_string(),
            ..StoreProfile::default()
        };
        assert!(profile.is_configured());

        profile.tax_id = "12345".to_string();
        assert!(!profile.is_configured());

        profile.tax_id = "1790012345".to_string();
        profile.name = None;
        assert!(profile.is_configured());

        profile.name = Some(String::new());
        assert!(!profile.is_configured());

        assert!(!StoreProfile::default().is_configured());
    }

    #[test]
    fn test_display_placeholders() {
        let customer = Customer {
            name: None,
            national_id: "0102030405".to_string(),
            address: Some(String::new()),
            phone: None,
            email: "a@b.c".to_string(),
            tax_id: None,
            payment_method: None,
        };
        assert_eq!(customer.name_display(), "Sin nombre");
        assert_eq!(customer.address_display(), "Sin dirección");
        assert_eq!(customer.phone_display(), "Sin teléfono");
        assert_eq!(customer.tax_id_display(), "Sin RUC");
        assert_eq!(customer.payment_method_display(), "Sin especificar");
        assert_eq!(customer.invoice_tax_id(), None);

        let p = Product {
            id: 1,
            name: None,
            description: None,
            price: Money::zero(),
            has_tax: false,
        };
        assert_eq!(p.name_display(), "Producto sin nombre");
        assert_eq!(p.description_display(), "Sin descripción");
    }

    #[test]
    fn test_customer_json_keys() {
        let json = r#"{
            "nombre": "Ana",
            "cedula": "0102030405",
            "direccion": "Av. Loja",
            "telefono": "0991234567",
            "correo": "ana@correo.ec",
            "ruc": "Sin RUC",
            "formaPago": "Efectivo"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.name.as_deref(), Some("Ana"));
        assert_eq!(customer.national_id, "0102030405");
        // Files written by older versions carry the placeholder as data.
        assert_eq!(customer.invoice_tax_id(), Some("Sin RUC"));
    }

    #[test]
    fn test_product_json_keys() {
        let json = r#"{"id": 3, "nombre": "Cable", "descripcion": null, "precio": 2.5, "tieneIVA": true}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 3);
        assert_eq!(p.price, Money::new(2.5));
        assert!(p.has_tax);

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["tieneIVA"], serde_json::json!(true));
        assert_eq!(back["descripcion"], serde_json::Value::Null);
    }
}
