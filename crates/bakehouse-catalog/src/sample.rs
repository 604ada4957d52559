//! # Sample Catalog
//!
//! The classic three-product bakery catalog, used by the demo binary and as
//! realistic test data.

use bakehouse_core::Catalog;

use crate::builder::build_catalog;
use crate::config::{CatalogConfig, PackDef, ProductDef};
use crate::error::CatalogResult;

/// Sample products: (code, name, packs as (size, price in cents)).
const SAMPLE_PRODUCTS: &[(&str, &str, &[(i64, i64)])] = &[
    ("VS5", "Vegemite Scroll", &[(3, 699), (5, 899)]),
    ("MB11", "Blueberry Muffin", &[(2, 995), (5, 1695), (8, 2495)]),
    ("CF", "Croissant", &[(3, 595), (5, 995), (9, 1699)]),
];

/// Returns the sample catalog configuration.
pub fn sample_config() -> CatalogConfig {
    CatalogConfig {
        products: SAMPLE_PRODUCTS
            .iter()
            .map(|(code, name, packs)| ProductDef {
                code: code.to_string(),
                name: name.to_string(),
                packs: packs
                    .iter()
                    .map(|&(size, price_cents)| PackDef { size, price_cents })
                    .collect(),
            })
            .collect(),
    }
}

/// Builds the sample catalog.
///
/// ## Example
/// ```rust
/// use bakehouse_catalog::sample_catalog;
///
/// let catalog = sample_catalog().unwrap();
/// assert_eq!(catalog.len(), 3);
/// assert!(catalog.product_by_code("MB11").is_some());
/// ```
pub fn sample_catalog() -> CatalogResult<Catalog> {
    build_catalog(&sample_config())
}

// =============================================================================
// Unit Tests
// =============================================================================
