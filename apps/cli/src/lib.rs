//! # Factura CLI Library
//!
//! Interactive text menu for the Factura invoicing system.
//!
//! ## Module Organization
//! ```text
//! factura_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── app.rs          ◄─── Session: console + store + profile state
//! ├── menu.rs         ◄─── Banner, options, option prompt
//! ├── console.rs      ◄─── Prompts and retry policy
//! ├── state/
//! │   ├── config.rs   ◄─── Flags and FACTURA_* variables
//! │   └── profile.rs  ◄─── In-memory store profile
//! ├── commands/
//! │   ├── profile.rs  ◄─── Configure store
//! │   ├── customer.rs ◄─── Register / list customers
//! │   ├── product.rs  ◄─── Register / list products
//! │   ├── selector.rs ◄─── Customer and line item selection
//! │   └── invoice.rs  ◄─── Generate invoice
//! └── error.rs        ◄─── AppError
//! ```

pub mod app;
pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod state;

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use console::Console;
use error::{AppError, AppResult};
use factura_store::Store;
use state::AppConfig;

/// Runs the invoicing console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Parse Configuration ──────────────────────────────────────────────► │
/// │     • --data-dir / FACTURA_DATA_DIR (default ".")                       │
/// │     • --output-dir / FACTURA_OUTPUT_DIR                                 │
/// │     • --max-retries / FACTURA_MAX_RETRIES                               │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • Create directories, load the store profile                        │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • Until "7. Salir" or end of input                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();
    let config = AppConfig::parse();

    match run_with(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::InputClosed) => {
            info!("Input closed, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Factura stopped");
            let _ = writeln!(io::stderr(), "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_with(config: &AppConfig) -> AppResult<()> {
    info!(?config, "Starting Factura");

    let store = Store::new(config.store_config())?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.retry_policy());

    App::new(console, store)?.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every prompt rejection and document load
/// - `RUST_LOG=factura_store=debug` - Store activity only
/// - Default: WARN, so the menu stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
