//! # Customer Repository
//!
//! Customers live in `clientes.json` as an array, in insertion order. The
//! invoice flow selects them by 1-based position in that order.

use tracing::info;

use crate::error::StoreResult;
use crate::store::{Collection, Store};
use factura_core::Customer;

/// Repository for the customer roster.
#[derive(Debug, Clone, Copy)]
pub struct CustomerRepository<'a> {
    store: &'a Store,
}

impl<'a> CustomerRepository<'a> {
    /// Creates a new CustomerRepository.
    pub fn new(store: &'a Store) -> Self {
        CustomerRepository { store }
    }

    /// All customers, in the order they were saved.
    pub fn list(&self) -> StoreResult<Vec<Customer>> {
        self.store.load(Collection::Customers)
    }

    /// Appends a customer and rewrites the document.
    ///
    /// Duplicate national ids are accepted.
    pub fn append(&self, customer: &Customer) -> StoreResult<()> {
        let mut customers = self.list()?;
        customers.push(customer.clone());
        self.store.save(Collection::Customers, &customers)?;

        info!(
            national_id = %customer.national_id,
            total = customers.len(),
            "Customer saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_store;

    fn customer(name: &str, national_id: &str) -> Customer {
        Customer {
            name: Some(name.to_string()),
            national_id: national_id.to_string(),
            address: None,
            phone: Some("0991234567".to_string()),
            email: "cliente@correo.ec".to_string(),
            tax_id: None,
            payment_method: Some("Efectivo".to_string()),
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let store = temp_store("customers-order");
        let repo = store.customers();

        repo.append(&customer("Ana", "0102030405")).unwrap();
        repo.append(&customer("Bruno", "0607080910")).unwrap();

        let all = repo.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_deref(), Some("Ana"));
        assert_eq!(all[1].name.as_deref(), Some("Bruno"));
    }

    #[test]
    fn test_blank_tax_id_persists_as_null() {
        let store = temp_store("customers-null");
        store.customers().append(&customer("Ana", "0102030405")).unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(store.path(Collection::Customers)).unwrap(),
        )
        .unwrap();
        assert_eq!(raw[0]["ruc"], serde_json::Value::Null);
        assert_eq!(raw[0]["cedula"], "0102030405");

        let reloaded = store.customers().list().unwrap();
        assert_eq!(reloaded[0].tax_id_display(), "Sin RUC");
    }
}
