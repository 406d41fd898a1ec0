//! # Product Commands

use std::io::{BufRead, Write};

use super::LIST_RULE;
use crate::app::App;
use crate::error::AppResult;
use factura_core::validation::{optional_field, parse_price, parse_yes_no};
use factura_core::{Money, Product};

/// Asks for a product and appends it to the catalog with the next id.
pub fn register_product<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    app.console.title("GUARDAR NUEVO PRODUCTO")?;
    let id = app.store.products().next_id()?;

    let console = &mut app.console;
    writeln!(console.out(), "ID asignado: {id}")?;
    let name = console.prompt_line("Nombre del producto: ")?;
    let description = console.prompt_line("Descripción: ")?;
    let price = console.prompt_until("Precio: ", "precio", parse_price)?;
    let has_tax = console.prompt_until("¿Tiene IVA? (s/n): ", "iva", parse_yes_no)?;

    let product = Product {
        id,
        name: optional_field(&name),
        description: optional_field(&description),
        price: Money::new(price),
        has_tax,
    };
    app.store.products().append(&product)?;

    write!(app.console.out(), "\nProducto guardado correctamente.\n")?;
    app.console.pause()
}

/// Prints every product in the catalog.
pub fn list_products<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    app.console.title("LISTA DE PRODUCTOS")?;
    let products = app.store.products().list()?;

    let out = app.console.out();
    if products.is_empty() {
        writeln!(out, "No hay productos registrados.")?;
    }
    for product in &products {
        writeln!(out, "ID: {}", product.id)?;
        writeln!(out, "Nombre: {}", product.name_display())?;
        writeln!(out, "Descripción: {}", product.description_display())?;
        writeln!(out, "Precio: {}", product.price)?;
        writeln!(out, "IVA: {}", if product.has_tax { "SI" } else { "NO" })?;
        writeln!(out, "{LIST_RULE}")?;
    }

    app.console.pause()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_in, output, temp_dir};

    #[test]
    fn test_register_assigns_next_id() {
        let dir = temp_dir("cmd-product");
        let mut app = app_in(&dir, "Martillo\n\n10,5\n10.5\nquizás\n\nS\n\nClavos\nCaja\n.\nn\n\n");

        register_product(&mut app).unwrap();
        register_product(&mut app).unwrap();

        let products = app.store.products().list().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].price, Money::new(10.5));
        assert!(products[0].has_tax);
        assert_eq!(products[0].description, None);
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].price, Money::zero());
        assert!(!products[1].has_tax);

        let out = output(app);
        assert!(out.contains("ID asignado: 1\n"));
        assert!(out.contains("ID asignado: 2\n"));
        assert_eq!(out.matches("Precio: ").count(), 3);
        assert_eq!(out.matches("¿Tiene IVA? (s/n): ").count(), 4);
    }

    #[test]
    fn test_list_shows_entries() {
        let dir = temp_dir("cmd-product-list");
        let mut app = app_in(&dir, "\n");
        app.store
            .products()
            .append(&Product {
                id: 1,
                name: Some("Martillo".to_string()),
                description: None,
                price: Money::new(8.5),
                has_tax: true,
            })
            .unwrap();

        list_products(&mut app).unwrap();
        let out = output(app);
        assert!(out.contains(
            "ID: 1\nNombre: Martillo\nDescripción: Sin descripción\nPrecio: $8.50\nIVA: SI\n------------------------\n"
        ));
    }

    #[test]
    fn test_list_empty() {
        let dir = temp_dir("cmd-product-empty");
        let mut app = app_in(&dir, "\n");
        list_products(&mut app).unwrap();
        assert!(output(app).contains("No hay productos registrados.\n"));
    }
}
