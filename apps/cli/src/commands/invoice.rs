//! # Invoice Command
//!
//! ## Generation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  check_profile ──► load collections ──► check_ready                    │
//! │       │ fails ──► print reason, pause, back to menu (no file)          │
//! │       ▼                                                                 │
//! │  select_customer ──► select_products                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Invoice::new (totals) ──► render_invoice ──► InvoiceWriter            │
//! │                                                   │                     │
//! │                         "Factura guardada en archivo: <name>"          │
//! │                      or "Error al guardar la factura en archivo."      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::selector::{select_customer, select_products};
use crate::app::App;
use crate::error::AppResult;
use factura_core::invoice::{check_profile, check_ready};
use factura_core::render::{invoice_file_name, render_invoice};
use factura_core::{CoreError, Invoice};

/// Builds an invoice interactively and writes it to a text file.
pub fn generate_invoice<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    if let Err(e) = check_profile(app.profile.profile()) {
        return not_ready(app, &e);
    }

    let customers = app.store.customers().list()?;
    let products = app.store.products().list()?;
    if let Err(e) = check_ready(app.profile.profile(), &customers, &products) {
        return not_ready(app, &e);
    }
    let profile = app.profile.profile().cloned().unwrap_or_default();

    app.console.title("GENERAR FACTURA")?;
    let customer = select_customer(&mut app.console, &customers)?.clone();
    let items = select_products(&mut app.console, &products)?;

    let invoice = Invoice::new(customer, app.today(), items);
    let text = render_invoice(&profile, &invoice);
    let file_name = invoice_file_name(&invoice);

    match app.store.invoices().write(&file_name, &text) {
        Ok(path) => {
            info!(
                path = %path.display(),
                items = invoice.items.len(),
                total = %invoice.totals.total,
                "Invoice generated"
            );
            writeln!(app.console.out(), "\nFactura guardada en archivo: {file_name}")?;
        }
        Err(e) => {
            warn!(error = %e, "Invoice file not written");
            writeln!(app.console.out(), "Error al guardar la factura en archivo.")?;
        }
    }

    app.console.pause()
}

fn not_ready<R: BufRead, W: Write>(app: &mut App<R, W>, reason: &CoreError) -> AppResult<()> {
    info!(%reason, "Invoice not ready");
    writeln!(app.console.out(), "{reason}")?;
    app.console.pause()
}
