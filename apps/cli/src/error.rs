//! # CLI Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Factura                                │
//! │                                                                         │
//! │  Menu action (register customer, generate invoice, ...)                │
//! │       │                                                                 │
//! │       ├── StoreError   (file unreadable, malformed, not writable)      │
//! │       ├── CoreError    (precondition failed)                           │
//! │       └── RetriesExhausted (limited retry policy)                      │
//! │                │                                                        │
//! │                ▼                                                        │
//! │       AppError ─── printed, back to the menu                           │
//! │                                                                         │
//! │       Io / InputClosed ─── fatal, the program ends                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use factura_core::CoreError;
use factura_store::StoreError;
use thiserror::Error;

/// Errors raised while running the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// A collection document could not be read or written.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A business rule rejected the action.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The console itself failed.
    ///
    /// ## When This Occurs
    /// - stdout closed (broken pipe)
    /// - stdin is not valid UTF-8
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[error("Input closed")]
    InputClosed,

    /// A field was rejected more times than the retry policy allows.
    #[error("Demasiados intentos inválidos para {field}")]
    RetriesExhausted { field: String },
}

impl AppError {
    /// Whether the error must end the program instead of returning to the
    /// menu.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::InputClosed)
    }
}

/// Result type for menu actions.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors() {
        assert!(AppError::InputClosed.is_fatal());
        assert!(AppError::Io(std::io::Error::other("closed")).is_fatal());
        assert!(!AppError::Core(CoreError::NoCustomers).is_fatal());
        assert!(!AppError::RetriesExhausted {
            field: "correo".to_string()
        }
        .is_fatal());
    }

    #[test]
    fn test_core_message_passes_through() {
        let err = AppError::from(CoreError::StoreNotConfigured);
        assert_eq!(err.to_string(), "Primero configure el establecimiento");
    }
}
