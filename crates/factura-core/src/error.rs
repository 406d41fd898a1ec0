//! # Error Types
//!
//! Domain-specific error types for factura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  factura-core errors (this file)                                       │
//! │  ├── CoreError        - Invoice preconditions                          │
//! │  └── ValidationError  - Rejected console input                         │
//! │                                                                         │
//! │  factura-store errors (separate crate)                                 │
//! │  └── StoreError       - Document read/write failures                   │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What ends an action or the program             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on console     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Invoice generation cannot start.
///
/// The `Display` text is shown to the user verbatim, so it stays in the
/// language of the rest of the console.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No usable store profile has been configured yet.
    #[error("Primero configure el establecimiento")]
    StoreNotConfigured,

    /// The customer collection is empty.
    #[error("No hay clientes registrados")]
    NoCustomers,

    /// The product catalog is empty.
    #[error("No hay productos registrados")]
    NoProducts,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Why a piece of input was rejected.
///
/// This is the `Invalid(reason)` half of [`crate::validation::ValidationResult`].
/// Callers decide whether to re-prompt or give up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Invalid format (e.g., letters in a national id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
