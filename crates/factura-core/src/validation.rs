//! # Validation Module
//!
//! Input predicates and validated parsers for console input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Predicates (is_numeric, is_valid_email, ...)                 │
//! │  └── Pure yes/no answers about a string                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Parsers (parse_price, parse_national_id, ...)                │
//! │  └── ValidationResult<T>: Ok(value) | Err(reason)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Console retry policy (apps/cli)                              │
//! │  └── Re-prompts on Err until the policy says stop                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use factura_core::validation::{is_valid_email, parse_price};
//!
//! assert!(is_valid_email("ventas@tienda.ec"));
//! assert_eq!(parse_price("12.5"), Ok(12.5));
//! assert!(parse_price("12,5").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MIN_STORE_TAX_ID_LEN, NATIONAL_ID_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Predicates
// =============================================================================

/// True iff `s` is non-empty and made only of decimal digits.
///
/// ```rust
/// use factura_core::validation::is_numeric;
///
/// assert!(is_numeric("0042"));
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("-1"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// True iff `s` is non-empty, has at most one `.`, and every other
/// character is a decimal digit.
///
/// A lone `"."` passes, as do `"5."` and `".5"`.
pub fn is_decimal(s: &str) -> bool {
    let mut seen_point = false;
    for c in s.chars() {
        if c == '.' {
            if seen_point {
                return false;
            }
            seen_point = true;
        } else if !c.is_ascii_digit() {
            return false;
        }
    }
    !s.is_empty()
}

/// True iff `s` is exactly ten decimal digits.
pub fn is_valid_national_id(s: &str) -> bool {
    s.len() == NATIONAL_ID_LEN && is_numeric(s)
}

/// Checks the shape of an email address.
///
/// ## Rules
/// - Contains `@` (the first one is used)
/// - The first `.` after the `@` is not directly after it
/// - That `.` is not the last character
///
/// ```rust
/// use factura_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a@.c"));
/// assert!(!is_valid_email("a@b."));
/// ```
pub fn is_valid_email(s: &str) -> bool {
    let Some(at) = s.find('@') else {
        return false;
    };

    match s[at..].find('.') {
        Some(offset) => {
            let dot = at + offset;
            dot > at + 1 && dot < s.len() - 1
        }
        None => false,
    }
}

// =============================================================================
// Parsers
// =============================================================================

/// Validates a national id (cédula) and returns it owned.
pub fn parse_national_id(s: &str) -> ValidationResult<String> {
    if is_valid_national_id(s) {
        Ok(s.to_string())
    } else {
        Err(ValidationError::invalid_format(
            "cédula",
            "must be exactly 10 digits",
        ))
    }
}

/// Validates an email address and returns it owned.
pub fn parse_email(s: &str) -> ValidationResult<String> {
    if s.is_empty() {
        return Err(ValidationError::Required {
            field: "correo".to_string(),
        });
    }

    if !is_valid_email(s) {
        return Err(ValidationError::invalid_format(
            "correo",
            "expected name@domain.tld",
        ));
    }

    Ok(s.to_string())
}

/// Validates the store tax id (RUC): at least ten digits.
pub fn parse_store_tax_id(s: &str) -> ValidationResult<String> {
    if s.len() < MIN_STORE_TAX_ID_LEN {
        return Err(ValidationError::TooShort {
            field: "ruc".to_string(),
            min: MIN_STORE_TAX_ID_LEN,
        });
    }

    if !is_numeric(s) {
        return Err(ValidationError::invalid_format("ruc", "must contain only digits"));
    }

    Ok(s.to_string())
}

/// Parses a price typed by the user.
///
/// The string must satisfy [`is_decimal`]. A lone `"."` is accepted and
/// reads as zero. The value is read at double precision, then narrowed to
/// the `f32` that prices are stored in.
pub fn parse_price(s: &str) -> ValidationResult<f32> {
    if !is_decimal(s) {
        return Err(ValidationError::invalid_format(
            "precio",
            "expected digits with an optional decimal point",
        ));
    }

    Ok(s.parse::<f64>().map_or(0.0, |price| price as f32))
}

/// Parses an integer in `min..=max`.
pub fn parse_in_range(s: &str, min: u64, max: u64, field: &str) -> ValidationResult<u64> {
    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min,
        max,
    };

    if !is_numeric(s) {
        return Err(out_of_range());
    }

    // Digit strings too large for u64 are just out of range.
    let value = s.parse::<u64>().map_err(|_| out_of_range())?;
    if value < min || value > max {
        return Err(out_of_range());
    }

    Ok(value)
}

/// Parses a 1-based position in a list of `len` entries and returns the
/// zero-based index.
///
/// ```rust
/// use factura_core::validation::parse_list_position;
///
/// assert_eq!(parse_list_position("2", 3, "cliente"), Ok(1));
/// assert!(parse_list_position("0", 3, "cliente").is_err());
/// assert!(parse_list_position("4", 3, "cliente").is_err());
/// ```
pub fn parse_list_position(s: &str, len: usize, field: &str) -> ValidationResult<usize> {
    let position = parse_in_range(s, 1, len as u64, field)?;
    Ok((position - 1) as usize)
}

/// Parses a product id typed at the selection prompt. `0` is valid here:
/// it is the caller's "stop" sentinel.
pub fn parse_product_id(s: &str) -> ValidationResult<u32> {
    if !is_numeric(s) {
        return Err(ValidationError::invalid_format("id", "must be a number"));
    }

    s.parse::<u32>().map_err(|_| ValidationError::OutOfRange {
        field: "id".to_string(),
        min: 0,
        max: u64::from(u32::MAX),
    })
}

/// First non-blank character of a line, lowercased.
fn answer_char(s: &str) -> Option<char> {
    s.chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
}

/// Parses a strict yes/no answer: `s` for yes, `n` for no.
pub fn parse_yes_no(s: &str) -> ValidationResult<bool> {
    match answer_char(s) {
        Some('s') => Ok(true),
        Some('n') => Ok(false),
        Some(_) => Err(ValidationError::invalid_format("respuesta", "expected s or n")),
        None => Err(ValidationError::Required {
            field: "respuesta".to_string(),
        }),
    }
}

/// Parses a "continue?" answer: `s` continues, any other character stops.
pub fn parse_continue(s: &str) -> ValidationResult<bool> {
    match answer_char(s) {
        Some(c) => Ok(c == 's'),
        None => Err(ValidationError::Required {
            field: "respuesta".to_string(),
        }),
    }
}

/// Turns a raw line into an optional field: blank becomes `None`.
pub fn optional_field(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
