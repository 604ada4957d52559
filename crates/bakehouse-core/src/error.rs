//! # Error Types
//!
//! Domain-specific error types for bakehouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bakehouse-core errors (this file)                                     │
//! │  ├── OrderError       - Order intake and allocation failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bakehouse-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Catalog construction failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → OrderError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Order intake and allocation errors.
///
/// These errors represent business rule violations during order submission.
/// A submission fails as a whole: the first error aborts it and nothing is
/// stored.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An order with this id was already accepted.
    ///
    /// ## When This Occurs
    /// - Caller retries a submission without changing the id
    /// - Two intake channels hand out the same id
    #[error("Order id '{id}' already exists")]
    DuplicateOrderId { id: String },

    /// Quantity text did not parse, or the parsed value is out of range.
    ///
    /// ## When This Occurs
    /// - Non-numeric text ("abc", "1x")
    /// - Zero or negative quantities
    /// - Quantities above the per-item cap
    #[error("Invalid order quantity '{raw}' for {code}")]
    InvalidQuantity { code: String, raw: String },

    /// Product code is not in the catalog.
    #[error("Product not found: {code}")]
    UnknownProductCode { code: String },

    /// Quantity is smaller than the smallest pack the product is sold in.
    ///
    /// ## User Workflow
    /// ```text
    /// Request: 1 x VS5 (packs: 3, 5)
    ///      │
    ///      ▼
    /// 1 < min pack size 3
    ///      │
    ///      ▼
    /// QuantityBelowMinimumPack { code: "VS5", quantity: 1, min_size: 3 }
    /// ```
    #[error("Quantity {quantity} for {code} is below the minimum pack size of {min_size}")]
    QuantityBelowMinimumPack {
        code: String,
        quantity: i64,
        min_size: i64,
    },

    /// No combination of the product's packs fulfills the quantity exactly.
    ///
    /// ## When This Occurs
    /// - Quantity 4 against packs {3, 5}
    /// - Any quantity the largest-first descent cannot reduce to zero
    #[error("Cannot allocate packs for {quantity} x {code}")]
    UnserviceableQuantity { code: String, quantity: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl OrderError {
    /// Creates a DuplicateOrderId error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        OrderError::DuplicateOrderId { id: id.into() }
    }

    /// Creates an InvalidQuantity error from the raw request text.
    pub fn invalid_quantity(code: impl Into<String>, raw: impl Into<String>) -> Self {
        OrderError::InvalidQuantity {
            code: code.into(),
            raw: raw.into(),
        }
    }

    /// Creates an UnknownProductCode error.
    pub fn unknown_code(code: impl Into<String>) -> Self {
        OrderError::UnknownProductCode { code: code.into() }
    }

    /// Creates an UnserviceableQuantity error.
    pub fn unserviceable(code: impl Into<String>, quantity: i64) -> Self {
        OrderError::UnserviceableQuantity {
            code: code.into(),
            quantity,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric quantity text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
