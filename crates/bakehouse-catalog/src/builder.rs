//! # Catalog Builder
//!
//! Turns a configuration document into a validated core catalog.
//!
//! ## Build Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Build                                      │
//! │                                                                         │
//! │  CatalogConfig                                                          │
//! │       │                                                                 │
//! │       ▼  per product, in document order                                 │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ 1. code format        → Validation           │                      │
//! │  │ 2. name non-empty     → Validation           │                      │
//! │  │ 3. packs non-empty    → EmptyPackList        │                      │
//! │  │ 4. pack sizes > 0     → InvalidPackSize      │                      │
//! │  │ 5. prices >= 0        → InvalidPackPrice     │                      │
//! │  │ 6. unique code        → DuplicateProductCode │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog (packs sorted ascending, ready for OrderManager)              │
//! │                                                                         │
//! │  First violation aborts the build. A half-built catalog is never       │
//! │  returned.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bakehouse_core::validation::{
    validate_pack_size, validate_price_cents, validate_product_code, validate_product_name,
};
use bakehouse_core::{Catalog, Pack, Product};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Builds a validated catalog from a configuration document.
///
/// Pack order in the document does not matter; every product's packs are
/// sorted ascending by size on construction.
///
/// ## Example
/// ```rust
/// use bakehouse_catalog::{build_catalog, CatalogConfig};
///
/// let config = CatalogConfig::from_json_str(
///     r#"{ "products": [
///         { "code": "CF", "name": "Croissant",
///           "packs": [ { "size": 9, "priceCents": 1699 },
///                      { "size": 3, "priceCents": 595 } ] }
///     ] }"#,
/// ).unwrap();
///
/// let catalog = build_catalog(&config).unwrap();
/// assert_eq!(catalog.product_by_code("CF").unwrap().min_pack_size(), Some(3));
/// ```
pub fn build_catalog(config: &CatalogConfig) -> CatalogResult<Catalog> {
    let mut catalog = Catalog::new();

    for def in &config.products {
        validate_product_code(&def.code)?;
        validate_product_name(&def.name)?;

        if def.packs.is_empty() {
            return Err(CatalogError::empty_packs(&def.code));
        }

        let mut packs = Vec::with_capacity(def.packs.len());
        for pack_def in &def.packs {
            validate_pack_size(pack_def.size).map_err(|_| CatalogError::InvalidPackSize {
                code: def.code.clone(),
                size: pack_def.size,
            })?;

            validate_price_cents(pack_def.price_cents).map_err(|_| {
                CatalogError::InvalidPackPrice {
                    code: def.code.clone(),
                    price_cents: pack_def.price_cents,
                }
            })?;

            packs.push(Pack::new(pack_def.size, pack_def.price_cents));
        }

        debug!(code = %def.code, packs = packs.len(), "Adding product");

        catalog
            .insert(Product::new(&def.code, &def.name, packs))
            .map_err(|_| CatalogError::duplicate_code(&def.code))?;
    }

    info!(products = catalog.len(), "Catalog built");

    Ok(catalog)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PackDef, ProductDef};

    fn product_def(code: &str, packs: Vec<PackDef>) -> ProductDef {
        ProductDef {
            code: code.to_string(),
            name: format!("Product {}", code),
            packs,
        }
    }

    fn pack_def(size: i64, price_cents: i64) -> PackDef {
        PackDef { size, price_cents }
    }

    #[test]
    fn test_build_sorts_packs_ascending() {
        let config = CatalogConfig {
            products: vec![product_def(
                "CF",
                vec![pack_def(9, 1699), pack_def(3, 595), pack_def(5, 995)],
            )],
        };

        let catalog = build_catalog(&config).unwrap();
        let product = catalog.product_by_code("CF").unwrap();

        let sizes: Vec<i64> = product.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![3, 5, 9]);
    }

    #[test]
    fn test_build_preserves_document_order() {
        let config = CatalogConfig {
            products: vec![
                product_def("B", vec![pack_def(2, 100)]),
                product_def("A", vec![pack_def(2, 100)]),
            ],
        };

        let catalog = build_catalog(&config).unwrap();
        let codes: Vec<&str> = catalog.products().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[test]
    fn test_build_rejects_empty_pack_list() {
        let config = CatalogConfig {
            products: vec![product_def("VS5", vec![])],
        };

        let err = build_catalog(&config).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPackList { .. }));
    }

    #[test]
    fn test_build_rejects_non_positive_pack_size() {
        for size in [0, -3] {
            let config = CatalogConfig {
                products: vec![product_def("VS5", vec![pack_def(size, 699)])],
            };

            let err = build_catalog(&config).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPackSize { .. }),
                "expected InvalidPackSize for size {size}"
            );
        }
    }

    #[test]
    fn test_build_rejects_negative_price() {
        let config = CatalogConfig {
            products: vec![product_def("VS5", vec![pack_def(3, -699)])],
        };

        let err = build_catalog(&config).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPackPrice { .. }));
    }

    #[test]
    fn test_build_allows_zero_price() {
        let config = CatalogConfig {
            products: vec![product_def("FREE", vec![pack_def(3, 0)])],
        };

        assert!(build_catalog(&config).is_ok());
    }

    #[test]
    fn test_build_rejects_duplicate_codes() {
        let config = CatalogConfig {
            products: vec![
                product_def("VS5", vec![pack_def(3, 699)]),
                product_def("VS5", vec![pack_def(5, 899)]),
            ],
        };

        let err = build_catalog(&config).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateProductCode { code } if code == "VS5"
        ));
    }

    #[test]
    fn test_build_rejects_malformed_code() {
        let config = CatalogConfig {
            products: vec![product_def("has space", vec![pack_def(3, 699)])],
        };

        let err = build_catalog(&config).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_build_empty_config_yields_empty_catalog() {
        let catalog = build_catalog(&CatalogConfig::default()).unwrap();
        assert!(catalog.is_empty());
    }
}
