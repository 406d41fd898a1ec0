//! # Catalog Selector
//!
//! Picks the customer and the line items of an invoice.
//!
//! ## Product Selection Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  show catalog                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Ingrese ID del producto (0 para terminar): "                         │
//! │       │                                                                 │
//! │       ├── not a number ──► "ID inválido"            ──► ask again      │
//! │       ├── 0             ──► done                                        │
//! │       ├── unknown id    ──► "Producto no encontrado" ──► ask again      │
//! │       └── found         ──► add line item                              │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                 "¿Agregar otro producto? (s/n): "                       │
//! │                      's' ──► show catalog again                        │
//! │                      else ──► done                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;
use crate::error::AppResult;
use factura_core::validation::{parse_continue, parse_list_position, parse_product_id};
use factura_core::{Customer, Product};

/// Lists the customers and asks for one by its 1-based position.
/// Anything else is silently asked again.
pub fn select_customer<'c, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    customers: &'c [Customer],
) -> AppResult<&'c Customer> {
    writeln!(console.out(), "Clientes disponibles:")?;
    for (i, customer) in customers.iter().enumerate() {
        writeln!(
            console.out(),
            "{}. {} ({})",
            i + 1,
            customer.name_display(),
            customer.national_id
        )?;
    }

    let prompt = format!("Seleccione cliente (1-{}): ", customers.len());
    let index = console.prompt_until(&prompt, "cliente", |s| {
        parse_list_position(s, customers.len(), "cliente")
    })?;

    debug!(index, "Customer selected");
    Ok(&customers[index])
}

/// Collects line items until the user enters 0 or declines to add more.
///
/// The same product may be picked several times; each pick is its own
/// line. Entering 0 straight away yields an empty selection.
pub fn select_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &[Product],
) -> AppResult<Vec<Product>> {
    let mut items = Vec::new();

    loop {
        print_catalog(console, catalog)?;

        let Some(product) = prompt_product(console, catalog)? else {
            break;
        };
        debug!(id = product.id, "Line item added");
        items.push(product.clone());

        let more = console.prompt_until("¿Agregar otro producto? (s/n): ", "continuar", parse_continue)?;
        if !more {
            break;
        }
    }

    Ok(items)
}

fn print_catalog<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &[Product],
) -> AppResult<()> {
    let out = console.out();
    writeln!(out, "\nProductos disponibles:")?;
    for product in catalog {
        let tax_note = if product.has_tax { " (con IVA)" } else { "" };
        writeln!(
            out,
            "{}. {} - {}{}",
            product.id,
            product.name_display(),
            product.price,
            tax_note
        )?;
    }
    Ok(())
}

/// Asks for a product id. `None` means the user entered 0.
fn prompt_product<'c, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &'c [Product],
) -> AppResult<Option<&'c Product>> {
    let mut failures = 0;

    loop {
        let line = console.prompt_line("Ingrese ID del producto (0 para terminar): ")?;

        let id = match parse_product_id(&line) {
            Ok(id) => id,
            Err(_) => {
                writeln!(console.out(), "ID inválido")?;
                console.reject(&mut failures, "producto")?;
                continue;
            }
        };

        if id == 0 {
            return Ok(None);
        }

        match catalog.iter().find(|p| p.id == id) {
            Some(product) => return Ok(Some(product)),
            None => {
                writeln!(console.out(), "Producto no encontrado")?;
                console.reject(&mut failures, "producto")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{console, output};
    use crate::console::RetryPolicy;
    use crate::error::AppError;
    use factura_core::Money;

    fn customer(name: &str, national_id: &str) -> Customer {
        Customer {
            name: Some(name.to_string()),
            national_id: national_id.to_string(),
            address: None,
            phone: None,
            email: "x@y.z".to_string(),
            tax_id: None,
            payment_method: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: Some("Martillo".to_string()),
                description: None,
                price: Money::new(10.0),
                has_tax: true,
            },
            Product {
                id: 2,
                name: Some("Arroz".to_string()),
                description: None,
                price: Money::new(5.0),
                has_tax: false,
            },
        ]
    }

    #[test]
    fn test_select_customer_reprompts_silently() {
        let customers = vec![customer("Ana", "0102030405"), customer("Bruno", "0607080910")];
        let mut c = console("0\n3\nx\n2\n", RetryPolicy::Unbounded);

        let selected = select_customer(&mut c, &customers).unwrap();
        assert_eq!(selected.national_id, "0607080910");

        let out = output(c);
        assert!(out.starts_with("Clientes disponibles:\n1. Ana (0102030405)\n2. Bruno (0607080910)\n"));
        assert_eq!(out.matches("Seleccione cliente (1-2): ").count(), 4);
    }

    #[test]
    fn test_select_products_with_duplicates() {
        let mut c = console("1\ns\n1\nS\n2\nn\n", RetryPolicy::Unbounded);
        let items = select_products(&mut c, &catalog()).unwrap();

        let ids: Vec<u32> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 1, 2]);

        let out = output(c);
        assert!(out.contains("\nProductos disponibles:\n1. Martillo - $10.00 (con IVA)\n2. Arroz - $5.00\n"));
    }

    #[test]
    fn test_zero_first_is_empty() {
        let mut c = console("0\n", RetryPolicy::Unbounded);
        assert!(select_products(&mut c, &catalog()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_after_items_keeps_them() {
        let mut c = console("2\ns\n0\n", RetryPolicy::Unbounded);
        let items = select_products(&mut c, &catalog()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_invalid_and_unknown_ids() {
        let mut c = console("abc\n9\n-1\n1\nx\n", RetryPolicy::Unbounded);
        let items = select_products(&mut c, &catalog()).unwrap();
        assert_eq!(items.len(), 1);

        let out = output(c);
        assert_eq!(out.matches("ID inválido\n").count(), 2);
        assert_eq!(out.matches("Producto no encontrado\n").count(), 1);
    }

    #[test]
    fn test_padded_numbers_are_rejected() {
        let customers = vec![customer("Ana", "0102030405"), customer("Bruno", "0607080910")];
        let mut c = console(" 2\n2\n 1\n1\nn\n", RetryPolicy::Unbounded);

        let selected = select_customer(&mut c, &customers).unwrap();
        assert_eq!(selected.national_id, "0607080910");
        let items = select_products(&mut c, &catalog()).unwrap();
        assert_eq!(items.len(), 1);

        let out = output(c);
        assert_eq!(out.matches("Seleccione cliente (1-2): ").count(), 2);
        assert_eq!(out.matches("ID inválido\n").count(), 1);
    }

    #[test]
    fn test_limited_policy_on_product_prompt() {
        let mut c = console("9\n9\n", RetryPolicy::Limited(1));
        let result = select_products(&mut c, &catalog());
        assert!(matches!(result, Err(AppError::RetriesExhausted { .. })));
    }
}
