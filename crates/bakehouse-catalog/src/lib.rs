//! # bakehouse-catalog: Catalog Construction for Bakehouse
//!
//! This crate turns configuration documents into validated catalogs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bakehouse Data Flow                                │
//! │                                                                         │
//! │  JSON document / sample data                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                bakehouse-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogConfig │    │   Builder     │    │    Sample    │  │   │
//! │  │   │ (config.rs)   │───►│ (builder.rs)  │◄───│ (sample.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ serde_json    │    │ validate +    │    │ VS5, MB11,   │  │   │
//! │  │   │ documents     │    │ sort packs    │    │ CF           │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  └────────────────────────────────┼───────────────────────────────┘   │
//! │                                   ▼                                    │
//! │                     bakehouse_core::Catalog                            │
//! │                  (ready for OrderManager::new)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Configuration document types and loaders
//! - [`builder`] - Config to validated core Catalog
//! - [`sample`] - The classic three-product sample catalog
//! - [`error`] - Catalog construction error types
//!
//! ## Usage
//!
//! ```rust
//! use bakehouse_catalog::{build_catalog, CatalogConfig};
//! use bakehouse_core::OrderManager;
//!
//! let config = CatalogConfig::from_json_str(
//!     r#"{ "products": [
//!         { "code": "VS5", "name": "Vegemite Scroll",
//!           "packs": [ { "size": 3, "priceCents": 699 },
//!                      { "size": 5, "priceCents": 899 } ] }
//!     ] }"#,
//! ).unwrap();
//!
//! let catalog = build_catalog(&config).unwrap();
//! let mut manager = OrderManager::new(catalog);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod config;
pub mod error;
pub mod sample;

// =============================================================================
// Re-exports
// =============================================================================

pub use builder::build_catalog;
pub use config::{CatalogConfig, PackDef, ProductDef};
pub use error::{CatalogError, CatalogResult};
pub use sample::{sample_catalog, sample_config};
