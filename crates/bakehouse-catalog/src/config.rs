//! # Catalog Configuration
//!
//! Configuration document types for catalog construction.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog.json                                                           │
//! │                                                                         │
//! │  {                                                                      │
//! │    "products": [                                                        │
//! │      {                                                                  │
//! │        "code": "VS5",                                                   │
//! │        "name": "Vegemite Scroll",                                       │
//! │        "packs": [                                                       │
//! │          { "size": 3, "priceCents": 699 },                              │
//! │          { "size": 5, "priceCents": 899 }                               │
//! │        ]                                                                │
//! │      }                                                                  │
//! │    ]                                                                    │
//! │  }                                                                      │
//! │                                                                         │
//! │  Pack order in the document does not matter; the builder sorts         │
//! │  ascending by size.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deserialization only checks shape. Invariants (positive sizes, unique
//! codes, non-empty pack lists) are enforced by [`crate::builder`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

// =============================================================================
// Configuration Types
// =============================================================================

/// A pack definition as written in the config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackDef {
    /// Units contained in this pack
    pub size: i64,

    /// Price of this pack in cents
    pub price_cents: i64,
}

/// A product definition as written in the config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDef {
    /// Product code, unique within the catalog
    pub code: String,

    /// Human-readable product name
    pub name: String,

    /// Pack definitions in any order
    pub packs: Vec<PackDef>,
}

/// The root catalog configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Product definitions in catalog order
    pub products: Vec<ProductDef>,
}

impl CatalogConfig {
    /// Parses a config document from a JSON string.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_catalog::CatalogConfig;
    ///
    /// let config = CatalogConfig::from_json_str(
    ///     r#"{ "products": [] }"#,
    /// ).unwrap();
    /// assert!(config.products.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a config document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_parse_config_document() {
        let config = CatalogConfig::from_json_str(
            r#"{
                "products": [
                    {
                        "code": "VS5",
                        "name": "Vegemite Scroll",
                        "packs": [
                            { "size": 5, "priceCents": 899 },
                            { "size": 3, "priceCents": 699 }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.products.len(), 1);
        let product = &config.products[0];
        assert_eq!(product.code, "VS5");
        assert_eq!(product.name, "Vegemite Scroll");
        // Document order preserved; sorting happens in the builder
        assert_eq!(product.packs[0], PackDef { size: 5, price_cents: 899 });
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = CatalogConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = CatalogConfig::from_json_str(
            r#"{ "products": [ { "code": "VS5" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CatalogConfig::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_round_trip() {
        let config = CatalogConfig {
            products: vec![ProductDef {
                code: "CF".to_string(),
                name: "Croissant".to_string(),
                packs: vec![PackDef { size: 3, price_cents: 595 }],
            }],
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("priceCents"));

        let parsed = CatalogConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
