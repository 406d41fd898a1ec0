//! # Configuration State
//!
//! Startup configuration from command line flags.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--data-dir`, ...)
//! 2. Environment variables (`FACTURA_*`)
//! 3. Defaults (this file)

use clap::Parser;
use std::path::PathBuf;

use crate::console::RetryPolicy;
use factura_store::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "factura")]
#[command(about = "Sistema de facturación por consola")]
pub struct AppConfig {
    /// Directory holding config.json, clientes.json and productos.json
    #[arg(long, env = "FACTURA_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory for invoice files (defaults to the data directory)
    #[arg(long, env = "FACTURA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Give up on a field after this many invalid answers
    #[arg(long, env = "FACTURA_MAX_RETRIES")]
    pub max_retries: Option<u32>,
}

impl Default for AppConfig {
    /// Current directory for everything, unlimited retries.
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            output_dir: None,
            max_retries: None,
        }
    }
}

impl AppConfig {
    /// Store configuration for these settings.
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(&self.data_dir);
        match &self.output_dir {
            Some(dir) => config.output_dir(dir),
            None => config,
        }
    }

    /// Retry policy for console prompts.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.max_retries
            .map_or(RetryPolicy::Unbounded, RetryPolicy::Limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = AppConfig::try_parse_from(["factura"]).unwrap();
        assert_eq!(config.retry_policy(), RetryPolicy::Unbounded);
        assert_eq!(config.store_config().invoice_dir(), Path::new("."));
    }

    #[test]
    fn test_flags() {
        let config = AppConfig::try_parse_from([
            "factura",
            "--data-dir",
            "/tmp/datos",
            "--output-dir",
            "/tmp/facturas",
            "--max-retries",
            "3",
        ])
        .unwrap();

        assert_eq!(config.retry_policy(), RetryPolicy::Limited(3));
        let store = config.store_config();
        assert_eq!(store.data_dir, Path::new("/tmp/datos"));
        assert_eq!(store.invoice_dir(), Path::new("/tmp/facturas"));
    }

    #[test]
    fn test_rejects_bad_retry_count() {
        assert!(AppConfig::try_parse_from(["factura", "--max-retries", "muchos"]).is_err());
    }
}
