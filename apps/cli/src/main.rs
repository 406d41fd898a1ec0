//! # Factura Entry Point
//!
//! The setup lives in `lib.rs` so the menu can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    factura_cli::run()
}
