//! # Validation Module
//!
//! Input validation utilities for Bakehouse.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request intake (text)                                        │
//! │  ├── parse_quantity: text → i64                                        │
//! │  └── Immediate rejection of malformed input                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: Business rule validation                        │
//! │  ├── Positive quantities, per-item cap                                 │
//! │  └── Code/name format checks                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog build (construction layer)                           │
//! │  ├── Unique product codes                                              │
//! │  └── Non-empty, positive-size pack lists                               │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bakehouse_core::validation::{parse_quantity, validate_product_code};
//!
//! // Parse and range-check a requested quantity
//! let qty = parse_quantity("10").unwrap();
//! assert_eq!(qty, 10);
//!
//! // Validate a product code before catalog lookup
//! validate_product_code("VS5").unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Quantity Validators
// =============================================================================

/// Parses a requested quantity from its text form and range-checks it.
///
/// ## Rules
/// - Must parse as a base-10 integer (leading/trailing whitespace ignored)
/// - Must pass [`validate_quantity`]
///
/// ## Example
/// ```rust
/// use bakehouse_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("14").unwrap(), 14);
/// assert!(parse_quantity("abc").is_err());
/// assert!(parse_quantity("0").is_err());
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let qty: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order: Add Item                                                        │
/// │                                                                         │
/// │  Request: 10 x VS5                                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(10) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       │                                                                 │
/// │       └── OK → Proceed with catalog lookup                             │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 20 characters
/// - Should contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use bakehouse_core::validation::validate_product_code;
///
/// assert!(validate_product_code("MB11").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("has space").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 20,
        });
    }

    // Check for valid characters (alphanumeric, hyphen, underscore)
    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a pack size.
///
/// ## Rules
/// - Must be strictly positive (> 0)
pub fn validate_pack_size(size: i64) -> ValidationResult<()> {
    if size <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "pack size".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use bakehouse_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(899).is_ok());  // $8.99
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 14 ").unwrap(), 14);

        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("1x").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-3").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_product_code() {
        // Valid codes
        assert!(validate_product_code("VS5").is_ok());
        assert!(validate_product_code("MB11").is_ok());
        assert!(validate_product_code("CF").is_ok());
        assert!(validate_product_code("pack_1").is_ok());
        assert!(validate_product_code("A-1").is_ok());

        // Invalid codes
        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code("has space").is_err());
        assert!(validate_product_code(&"A".repeat(50)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Vegemite Scroll").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_pack_size() {
        assert!(validate_pack_size(1).is_ok());
        assert!(validate_pack_size(9).is_ok());

        assert!(validate_pack_size(0).is_err());
        assert!(validate_pack_size(-2).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1699).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }
}
