//! # Domain Types
//!
//! Core domain types for Bakehouse.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Domain Model                                     │
//! │                                                                         │
//! │  Catalog ──────── 1..* ────────► Product                               │
//! │                                     │                                   │
//! │                                     │ 1..* (ascending by size)          │
//! │                                     ▼                                   │
//! │                                   Pack { size, price_cents }            │
//! │                                                                         │
//! │  Order ────────── 1..* ────────► OrderItem { code, quantity }          │
//! │    │                                                                    │
//! │    └── submitted_at: DateTime<Utc>                                     │
//! │                                                                         │
//! │  Products are immutable once in a catalog. Orders are immutable        │
//! │  once stored.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Pack
// =============================================================================

/// A fixed-size pack a product is sold in.
///
/// ## Design Notes
/// - `size`: Number of units in the pack, strictly positive
/// - `price_cents`: Price for the whole pack, non-negative integer cents
///
/// Packs are value objects: compared by value, freely cloned, and reusable
/// without limit during allocation (no supply tracking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Units contained in this pack
    pub size: i64,

    /// Price of this pack in cents
    pub price_cents: i64,
}

impl Pack {
    /// Creates a new pack.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::Pack;
    ///
    /// let pack = Pack::new(5, 899); // 5 units for $8.99
    /// assert_eq!(pack.size, 5);
    /// ```
    #[inline]
    pub const fn new(size: i64, price_cents: i64) -> Self {
        Pack { size, price_cents }
    }

    /// Returns the pack price as Money.
    #[inline]
    pub const fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product sold only in fixed-size packs.
///
/// ## Invariants
/// - `packs` is kept sorted ascending by size (the constructor sorts)
/// - The pack list is never mutated after construction
///
/// Allocation walks the pack list in reverse, so the ascending order is what
/// makes "larger packs first" hold.
///
/// Serialize only: deserializing would bypass the constructor's sort, so
/// products are rebuilt from config documents instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product code, unique within a catalog (e.g. "VS5")
    pub code: String,

    /// Human-readable product name
    pub name: String,

    /// Available pack sizes, ascending by size
    packs: Vec<Pack>,
}

impl Product {
    /// Creates a new product, sorting its packs ascending by size.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::{Pack, Product};
    ///
    /// // Input order does not matter; packs are sorted on construction
    /// let product = Product::new(
    ///     "MB11",
    ///     "Blueberry Muffin",
    ///     vec![Pack::new(8, 2495), Pack::new(2, 995), Pack::new(5, 1695)],
    /// );
    /// assert_eq!(product.min_pack_size(), Some(2));
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>, mut packs: Vec<Pack>) -> Self {
        packs.sort_by_key(|p| p.size);
        Product {
            code: code.into(),
            name: name.into(),
            packs,
        }
    }

    /// Returns the packs, ascending by size.
    #[inline]
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Returns the smallest pack size, or None for an empty pack list.
    ///
    /// Quantities below this value can never be fulfilled and are rejected
    /// before allocation runs.
    #[inline]
    pub fn min_pack_size(&self) -> Option<i64> {
        self.packs.first().map(|p| p.size)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered collection of products with code lookup.
///
/// ## Invariants
/// - Product codes are unique
/// - Insertion order is preserved for iteration
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Inserts a product, rejecting duplicate codes.
    pub fn insert(&mut self, product: Product) -> ValidationResult<()> {
        if self.product_by_code(&product.code).is_some() {
            return Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: product.code.clone(),
            });
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks up a product by its code.
    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Returns all products in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Orders
// =============================================================================

/// A validated line of an accepted order.
///
/// ## Design Notes
/// - `code`: The resolved product code (frozen at submission)
/// - `quantity`: The validated unit count, always > 0
///
/// The code is frozen so the stored order stays consistent even if the
/// catalog changes after acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product code at time of submission (frozen)
    pub code: String,

    /// Validated quantity, always positive
    pub quantity: i64,
}

impl OrderItem {
    /// Creates a new order item.
    #[inline]
    pub fn new(code: impl Into<String>, quantity: i64) -> Self {
        OrderItem {
            code: code.into(),
            quantity,
        }
    }
}

/// An accepted order.
///
/// ## Invariants
/// - Immutable once stored by the manager
/// - `items` is non-empty (empty submissions are never stored)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Caller-supplied order id, unique per manager
    pub id: String,

    /// Validated items in submission order
    pub items: Vec<OrderItem>,

    /// When the order was accepted
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order stamped with the current time.
    pub fn new(id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Order {
            id: id.into(),
            items,
            submitted_at: Utc::now(),
        }
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_price() {
        let pack = Pack::new(3, 699);
        assert_eq!(pack.price(), Money::from_cents(699));
    }

    #[test]
    fn test_product_sorts_packs_ascending() {
        let product = Product::new(
            "CF",
            "Croissant",
            vec![Pack::new(9, 1699), Pack::new(3, 595), Pack::new(5, 995)],
        );

        let sizes: Vec<i64> = product.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![3, 5, 9]);
        assert_eq!(product.min_pack_size(), Some(3));
    }

    #[test]
    fn test_product_empty_packs() {
        let product = Product::new("X", "Empty", vec![]);
        assert_eq!(product.min_pack_size(), None);
    }

    #[test]
    fn test_catalog_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new("VS5", "Vegemite Scroll", vec![Pack::new(3, 699)]))
            .unwrap();
        catalog
            .insert(Product::new("CF", "Croissant", vec![Pack::new(3, 595)]))
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.product_by_code("VS5").unwrap().name, "Vegemite Scroll");
        assert!(catalog.product_by_code("NOPE").is_none());

        // Insertion order preserved
        let codes: Vec<&str> = catalog.products().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["VS5", "CF"]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_code() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new("VS5", "Vegemite Scroll", vec![Pack::new(3, 699)]))
            .unwrap();

        let err = catalog
            .insert(Product::new("VS5", "Other", vec![Pack::new(2, 100)]))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_order_total_quantity() {
        let order = Order::new(
            "ORD-1",
            vec![OrderItem::new("VS5", 10), OrderItem::new("CF", 13)],
        );
        assert_eq!(order.total_quantity(), 23);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new("ORD-1", vec![OrderItem::new("VS5", 10)]);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "ORD-1");
        assert_eq!(json["items"][0]["code"], "VS5");
        assert_eq!(json["items"][0]["quantity"], 10);
        assert!(json.get("submittedAt").is_some());
    }
}
