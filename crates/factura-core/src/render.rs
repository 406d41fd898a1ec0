//! # Invoice Renderer
//!
//! Lays an [`Invoice`] out as a 50-column plain-text document.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │               ** Ferretería Andes **             │  centered header
//! │                  Av. Amazonas 12                 │
//! │                  Tel: 022345678                  │
//! │                RUC: 1790012345001                │
//! │==================================================│
//! │FACTURA                                           │
//! │Fecha: 5/3/2024                                   │
//! │Cliente: Ana Torres                               │
//! │Cédula: 0102030405                                │
//! │RUC: ...                      (only when present) │
//! │--------------------------------------------------│
//! │Producto                      Precio    IVA       │  30 / 10 / 10
//! │--------------------------------------------------│
//! │Martillo                      $10.00    15%       │  "$" + 9 + 10
//! │--------------------------------------------------│
//! │Subtotal:                     $10.00              │
//! │IVA (15%):                    $1.50               │
//! │TOTAL:                        $11.50              │
//! │==================================================│
//! │             ¡Gracias por su compra!              │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Columns pad but never truncate: a long product name pushes the rest of
//! its row to the right.

use std::fmt;

use crate::invoice::Invoice;
use crate::money::TaxRate;
use crate::types::StoreProfile;
use crate::LINE_WIDTH;

const NAME_COLUMN: usize = 30;
const PRICE_COLUMN: usize = 10;
const TAX_COLUMN: usize = 10;

/// Width of the price figure after its `$` sign.
const PRICE_FIGURE: usize = PRICE_COLUMN - 1;

const FOOTER: &str = "¡Gracias por su compra!";

/// Centers `text` in `width` columns.
///
/// Text at least `width` bytes long is returned unchanged. Otherwise the
/// left side gets `floor((width - len) / 2)` spaces and the right side the
/// rest. Length is counted in UTF-8 bytes, so `ñ` takes two columns.
///
/// ```rust
/// use factura_core::render::center_text;
///
/// assert_eq!(center_text("X", 5), "  X  ");
/// assert_eq!(center_text("XX", 5), " XX  ");
/// assert_eq!(center_text("XXXXXX", 5), "XXXXXX");
/// ```
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.len();
    if len >= width {
        return text.to_string();
    }

    let before = (width - len) / 2;
    let after = width - len - before;
    format!("{}{}{}", " ".repeat(before), text, " ".repeat(after))
}

/// Left-aligns `text` in `width` bytes. Longer text is kept whole.
fn pad_right(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.len())))
}

fn separator(c: char) -> String {
    c.to_string().repeat(LINE_WIDTH)
}

/// Renders the full invoice text. Every line ends with `\n`.
pub fn render_invoice(profile: &StoreProfile, invoice: &Invoice) -> String {
    InvoiceDocument { profile, invoice }.to_string()
}

/// An invoice together with the store that issues it, laid out as text.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceDocument<'a> {
    pub profile: &'a StoreProfile,
    pub invoice: &'a Invoice,
}

impl fmt::Display for InvoiceDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        let invoice = self.invoice;

        // Header
        writeln!(f, "{}", center_text(&format!("** {} **", profile.name_display()), LINE_WIDTH))?;
        writeln!(f, "{}", center_text(profile.address_display(), LINE_WIDTH))?;
        writeln!(f, "{}", center_text(&format!("Tel: {}", profile.phone_display()), LINE_WIDTH))?;
        writeln!(f, "{}", center_text(&format!("RUC: {}", profile.tax_id), LINE_WIDTH))?;
        writeln!(f, "{}", separator('='))?;

        // Customer block
        let customer = &invoice.customer;
        writeln!(f, "FACTURA")?;
        writeln!(f, "Fecha: {}", invoice.date_label())?;
        writeln!(f, "Cliente: {}", customer.name_display())?;
        writeln!(f, "Cédula: {}", customer.national_id)?;
        if let Some(tax_id) = customer.invoice_tax_id() {
            writeln!(f, "RUC: {tax_id}")?;
        }
        writeln!(f, "{}", separator('-'))?;

        // Line items
        writeln!(
            f,
            "{}{:<PRICE_COLUMN$}{:<TAX_COLUMN$}",
            pad_right("Producto", NAME_COLUMN),
            "Precio",
            "IVA"
        )?;
        writeln!(f, "{}", separator('-'))?;

        let tax_label = TaxRate::IVA.label();
        for item in &invoice.items {
            let tax_mark = if item.has_tax { tax_label.as_str() } else { "-" };
            writeln!(
                f,
                "{}${:<PRICE_FIGURE$.2}{:<TAX_COLUMN$}",
                pad_right(item.name_display(), NAME_COLUMN),
                item.price.amount(),
                tax_mark
            )?;
        }

        // Totals
        let totals = &invoice.totals;
        writeln!(f, "{}", separator('-'))?;
        writeln!(f, "{}${:.2}", pad_right("Subtotal:", NAME_COLUMN), totals.subtotal.amount())?;
        writeln!(
            f,
            "{}${:.2}",
            pad_right(&format!("IVA ({tax_label}):"), NAME_COLUMN),
            totals.tax.amount()
        )?;
        writeln!(f, "{}${:.2}", pad_right("TOTAL:", NAME_COLUMN), totals.total.amount())?;

        // Footer
        writeln!(f, "{}", separator('='))?;
        writeln!(f, "{}", center_text(FOOTER, LINE_WIDTH))
    }
}

/// File name for an invoice: `factura_<cédula>_<d-m-yyyy>.txt`.
///
/// The same customer on the same day always gets the same name.
pub fn invoice_file_name(invoice: &Invoice) -> String {
    let name = format!(
        "factura_{}_{}.txt",
        invoice.customer.national_id,
        invoice.date_label()
    );
    name.replace('/', "-")
}

// =============================================================================
// Unit Tests
// =============================================================================
