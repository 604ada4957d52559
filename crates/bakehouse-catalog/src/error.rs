//! # Catalog Error Types
//!
//! Error types for catalog construction.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: fix the config document, or abort startup             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bakehouse_core::ValidationError;
use thiserror::Error;

/// Catalog construction errors.
///
/// These errors surface configuration mistakes at build time, before any
/// order can be submitted against a broken catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products in the config share a code.
    ///
    /// ## When This Occurs
    /// - Copy-pasted product blocks in the config document
    /// - Merged configs with overlapping codes
    #[error("Duplicate product code: '{code}' already exists")]
    DuplicateProductCode { code: String },

    /// A product defines no packs at all.
    ///
    /// ## When This Occurs
    /// - Empty `packs` array in the config document
    /// A product without packs could never be allocated.
    #[error("Product '{code}' has no packs")]
    EmptyPackList { code: String },

    /// A pack size is zero or negative.
    #[error("Product '{code}' has invalid pack size {size}")]
    InvalidPackSize { code: String, size: i64 },

    /// A pack price is negative.
    #[error("Product '{code}' has invalid pack price {price_cents}")]
    InvalidPackPrice { code: String, price_cents: i64 },

    /// A field failed core validation (code format, name length, ...).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading the config document failed.
    #[error("Failed to read catalog config: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing the config document failed.
    #[error("Failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Creates a DuplicateProductCode error.
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        CatalogError::DuplicateProductCode { code: code.into() }
    }

    /// Creates an EmptyPackList error.
    pub fn empty_packs(code: impl Into<String>) -> Self {
        CatalogError::EmptyPackList { code: code.into() }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::duplicate_code("VS5");
        assert_eq!(err.to_string(), "Duplicate product code: 'VS5' already exists");

        let err = CatalogError::InvalidPackSize {
            code: "CF".to_string(),
            size: 0,
        };
        assert_eq!(err.to_string(), "Product 'CF' has invalid pack size 0");
    }

    #[test]
    fn test_validation_error_converts() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let catalog_err: CatalogError = validation_err.into();
        assert!(matches!(catalog_err, CatalogError::Validation(_)));
    }
}
