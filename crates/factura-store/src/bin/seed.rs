//! # Sample Data Generator
//!
//! Fills a data directory with sample customers and products for trying
//! out the invoicing menu.
//!
//! ## Usage
//! ```bash
//! # Seed the current directory with 20 products (default)
//! cargo run -p factura-store --bin seed
//!
//! # Custom amount
//! cargo run -p factura-store --bin seed -- --count 50
//!
//! # Another data directory
//! cargo run -p factura-store --bin seed -- --dir ./datos
//! ```
//!
//! Collections that already have records are left alone.

use factura_core::{Customer, Money, Product};
use factura_store::{Store, StoreConfig};
use std::env;

/// (name, cédula, phone, email, payment method)
const CUSTOMERS: &[(&str, &str, &str, &str, &str)] = &[
    ("María Cevallos", "0102030405", "0991234567", "maria.cevallos@correo.ec", "Efectivo"),
    ("Jorge Paredes", "1712345678", "0987654321", "jparedes@correo.ec", "Transferencia"),
    ("Lucía Andrade", "0923456789", "0976543210", "lucia.andrade@correo.ec", "Tarjeta"),
    ("Diego Salazar", "1804567890", "0965432109", "dsalazar@correo.ec", "Efectivo"),
];

/// (name, description, base price, IVA applies)
const PRODUCTS: &[(&str, &str, f32, bool)] = &[
    ("Martillo", "Mango de madera", 8.50, true),
    ("Destornillador", "Punta plana", 3.25, true),
    ("Cinta métrica", "5 metros", 4.75, true),
    ("Arroz", "Saco de 1 kg", 1.20, false),
    ("Azúcar", "Funda de 1 kg", 1.05, false),
    ("Pintura", "Galón blanco", 18.90, true),
    ("Foco LED", "9 W", 2.40, true),
    ("Pan", "Funda de 6", 1.00, false),
    ("Cable eléctrico", "Rollo de 10 m", 12.30, true),
    ("Leche", "Litro", 0.95, false),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 20;
    let mut data_dir = String::from(".");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Factura Sample Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 20)");
                println!("  -d, --dir <PATH>   Data directory (default: .)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Factura Sample Data Generator");
    println!("=============================");
    println!("Data directory: {}", data_dir);
    println!("Products: {}", count);
    println!();

    let store = Store::new(StoreConfig::new(&data_dir))?;

    let existing = store.customers().list()?.len();
    if existing > 0 {
        println!("⚠ {} customers already registered, skipping", existing);
    } else {
        for customer in CUSTOMERS.iter().map(sample_customer) {
            store.customers().append(&customer)?;
        }
        println!("✓ Wrote {} customers", CUSTOMERS.len());
    }

    let existing = store.products().list()?.len();
    if existing > 0 {
        println!("⚠ {} products already registered, skipping", existing);
        return Ok(());
    }

    let products: Vec<Product> = (0..count).map(sample_product).collect();
    for product in &products {
        store.products().append(product)?;
    }
    println!("✓ Wrote {} products", products.len());

    println!();
    println!("✓ Seed complete!");
    Ok(())
}

fn sample_customer(entry: &(&str, &str, &str, &str, &str)) -> Customer {
    let (name, national_id, phone, email, payment) = *entry;
    Customer {
        name: Some(name.to_string()),
        national_id: national_id.to_string(),
        address: None,
        phone: Some(phone.to_string()),
        email: email.to_string(),
        tax_id: None,
        payment_method: Some(payment.to_string()),
    }
}

/// Product `index` cycles through the sample list; later rounds get a
/// size suffix and a higher price.
fn sample_product(index: usize) -> Product {
    let (name, description, base, has_tax) = PRODUCTS[index % PRODUCTS.len()];
    let round = index / PRODUCTS.len();

    let name = if round == 0 {
        name.to_string()
    } else {
        format!("{} #{}", name, round + 1)
    };

    Product {
        id: u32::try_from(index + 1).unwrap_or(u32::MAX),
        name: Some(name),
        description: Some(description.to_string()),
        price: Money::new(base * (1.0 + round as f32 * 0.25)),
        has_tax,
    }
}
