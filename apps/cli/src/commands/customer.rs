//! # Customer Commands

use std::io::{BufRead, Write};

use super::LIST_RULE;
use crate::app::App;
use crate::error::AppResult;
use factura_core::validation::{optional_field, parse_email, parse_national_id};
use factura_core::Customer;

/// Asks for a customer and appends it to the roster.
///
/// Blank optional fields are stored empty; the tax id in particular is
/// shown as `Sin RUC` and left off invoices.
pub fn register_customer<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    let console = &mut app.console;
    console.title("GUARDAR NUEVO CLIENTE")?;

    let name = console.prompt_line("Nombre: ")?;
    let national_id = console.prompt_until("Cédula (10 dígitos): ", "cédula", parse_national_id)?;
    let address = console.prompt_line("Dirección: ")?;
    let phone = console.prompt_line("Teléfono: ")?;
    let email = console.prompt_until("Correo: ", "correo", parse_email)?;
    let tax_id = console.prompt_line("RUC (opcional): ")?;
    let payment_method = console.prompt_line("Forma de Pago: ")?;

    let customer = Customer {
        name: optional_field(&name),
        national_id,
        address: optional_field(&address),
        phone: optional_field(&phone),
        email,
        tax_id: optional_field(&tax_id),
        payment_method: optional_field(&payment_method),
    };
    app.store.customers().append(&customer)?;

    write!(app.console.out(), "\nCliente guardado correctamente!\n")?;
    app.console.pause()
}

/// Prints every customer with name, national id and phone.
pub fn list_customers<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    app.console.title("LISTA DE CLIENTES")?;
    let customers = app.store.customers().list()?;

    let out = app.console.out();
    if customers.is_empty() {
        writeln!(out, "No hay clientes registrados.")?;
    }
    for (i, customer) in customers.iter().enumerate() {
        writeln!(out, "Cliente #{}:", i + 1)?;
        writeln!(out, "  Nombre: {}", customer.name_display())?;
        writeln!(out, "  Cédula: {}", customer.national_id)?;
        writeln!(out, "  Teléfono: {}", customer.phone_display())?;
        writeln!(out, "{LIST_RULE}")?;
    }

    app.console.pause()
}
