//! # bakehouse-core: Pure Business Logic for Bakehouse
//!
//! This crate is the **heart** of Bakehouse. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bakehouse Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bakehouse-catalog (Construction)                │   │
//! │  │    Config loading ──► Catalog building ──► Demo binary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bakehouse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │allocation │  │  orders   │  │   │
//! │  │   │  Product  │  │   Money   │  │ Allocator │  │  Manager  │  │   │
//! │  │   │   Pack    │  │  cents    │  │Allocation │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pack, Product, Catalog, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`allocation`] - Pack allocation (largest-first recursive descent)
//! - [`orders`] - Order intake, validation, pricing, bookkeeping
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network, logging access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bakehouse_core::{Money, Pack, Product};
//!
//! // A product sold in packs of 3 and 5
//! let product = Product::new(
//!     "VS5",
//!     "Vegemite Scroll",
//!     vec![Pack::new(3, 699), Pack::new(5, 899)],
//! );
//!
//! // Ten units: two 5-packs, $17.98
//! let allocation = product.allocate(10).unwrap();
//! assert_eq!(allocation.pack_count(), 2);
//! assert_eq!(allocation.total(), Money::from_cents(1798));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod error;
pub mod money;
pub mod orders;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bakehouse_core::Money` instead of
// `use bakehouse_core::money::Money`

pub use allocation::Allocation;
pub use error::{OrderError, ValidationError};
pub use money::Money;
pub use orders::{ItemRequest, OrderManager, Receipt, ReceiptLine, Submission};
pub use types::{Catalog, Order, OrderItem, Pack, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted for a single order item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Also bounds the allocator's recursion depth, which grows with quantity.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum items allowed in a single order
///
/// ## Business Reason
/// Prevents runaway orders and ensures reasonable submission sizes.
/// Can be made configurable in future versions.
pub const MAX_ORDER_ITEMS: usize = 100;
