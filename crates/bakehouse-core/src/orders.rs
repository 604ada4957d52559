//! # Order Intake
//!
//! Manages order submission against a catalog.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Submission                                     │
//! │                                                                         │
//! │  submit_order(id, items)                                               │
//! │       │                                                                 │
//! │       ├── id already accepted? ──────────► Err(DuplicateOrderId)       │
//! │       │                                                                 │
//! │       ├── no items? ─────────────────────► Ok(Submission::Empty)       │
//! │       │                                                                 │
//! │       ├── validate every item            (parse, lookup, min pack)     │
//! │       │        │ first failure                                          │
//! │       │        └─────────────────────────► Err(...), nothing stored    │
//! │       │                                                                 │
//! │       ├── allocate + price every item                                  │
//! │       │        │ first failure                                          │
//! │       │        └─────────────────────────► Err(...), nothing stored    │
//! │       │                                                                 │
//! │       └── store order ───────────────────► Ok(Submission::Priced)      │
//! │                                                                         │
//! │  NOTE: The order is committed only after the ENTIRE pass succeeds.     │
//! │        A failed submission leaves the manager untouched.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{OrderError, OrderResult, ValidationError};
use crate::money::Money;
use crate::types::{Catalog, Order, OrderItem, Pack, Product};
use crate::validation::parse_quantity;
use crate::MAX_ORDER_ITEMS;

// =============================================================================
// Requests
// =============================================================================

/// A raw order line as it arrives from an intake channel.
///
/// The quantity is text at this boundary; parsing and range-checking happen
/// inside [`OrderManager::submit_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    /// Requested product code
    pub code: String,

    /// Requested quantity, unparsed
    pub quantity: String,
}

impl ItemRequest {
    /// Creates a new item request.
    pub fn new(code: impl Into<String>, quantity: impl Into<String>) -> Self {
        ItemRequest {
            code: code.into(),
            quantity: quantity.into(),
        }
    }
}

// =============================================================================
// Receipts
// =============================================================================

/// One priced line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// Product code
    pub code: String,

    /// Requested quantity
    pub quantity: i64,

    /// Chosen packs, deepest recursion level first
    pub packs: Vec<Pack>,

    /// Price for this line (sum of chosen pack prices)
    pub price: Money,
}

/// A fully priced, accepted order.
///
/// Lines appear in submission order; `total` is their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

/// The outcome of a submission.
///
/// An empty item list is a soft no-op, not an error: nothing is stored and
/// the caller gets `Empty` back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum Submission {
    /// All items validated, allocated, and priced; the order was stored.
    Priced(Receipt),

    /// No items were supplied; nothing was stored.
    Empty,
}

// =============================================================================
// Order Manager
// =============================================================================

/// Validates, prices, and stores orders against a catalog.
///
/// ## Invariants
/// - Order ids are unique for the manager's lifetime
/// - Stored orders are immutable and always fully validated
/// - A failed submission stores nothing
pub struct OrderManager {
    catalog: Catalog,
    orders: HashMap<String, Order>,
}

impl OrderManager {
    /// Creates a manager over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        OrderManager {
            catalog,
            orders: HashMap::new(),
        }
    }

    /// Returns the catalog this manager prices against.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up an accepted order by id.
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Returns the number of accepted orders.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Submits an order: validates, allocates, prices, and stores it.
    ///
    /// ## Behavior
    /// - Duplicate id: `Err(DuplicateOrderId)`
    /// - Empty item list: `Ok(Submission::Empty)`, nothing stored
    /// - Any item failure aborts the whole submission; the first error wins
    ///   and the manager keeps its previous state
    /// - On success the order is stored and a priced receipt returned
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::{Catalog, ItemRequest, OrderManager, Pack, Product, Submission};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog
    ///     .insert(Product::new(
    ///         "VS5",
    ///         "Vegemite Scroll",
    ///         vec![Pack::new(3, 699), Pack::new(5, 899)],
    ///     ))
    ///     .unwrap();
    ///
    /// let mut manager = OrderManager::new(catalog);
    /// let submission = manager
    ///     .submit_order("ORD-1", &[ItemRequest::new("VS5", "10")])
    ///     .unwrap();
    ///
    /// match submission {
    ///     Submission::Priced(receipt) => assert_eq!(receipt.total.cents(), 1798),
    ///     Submission::Empty => unreachable!(),
    /// }
    /// ```
    pub fn submit_order(&mut self, id: &str, items: &[ItemRequest]) -> OrderResult<Submission> {
        if self.orders.contains_key(id) {
            return Err(OrderError::duplicate_id(id));
        }

        if items.is_empty() {
            return Ok(Submission::Empty);
        }

        if items.len() > MAX_ORDER_ITEMS {
            return Err(ValidationError::OutOfRange {
                field: "order items".to_string(),
                min: 1,
                max: MAX_ORDER_ITEMS as i64,
            }
            .into());
        }

        // Validation pass: every item must resolve before any allocation runs
        let mut validated: Vec<(&Product, OrderItem)> = Vec::with_capacity(items.len());
        for request in items {
            let quantity = parse_quantity(&request.quantity)
                .map_err(|_| OrderError::invalid_quantity(&request.code, &request.quantity))?;

            let product = self
                .catalog
                .product_by_code(&request.code)
                .ok_or_else(|| OrderError::unknown_code(&request.code))?;

            if let Some(min_size) = product.min_pack_size() {
                if quantity < min_size {
                    return Err(OrderError::QuantityBelowMinimumPack {
                        code: product.code.clone(),
                        quantity,
                        min_size,
                    });
                }
            }

            validated.push((product, OrderItem::new(&request.code, quantity)));
        }

        // Allocation pass: price every line, still without touching state
        let mut lines = Vec::with_capacity(validated.len());
        for (product, item) in &validated {
            let allocation = product.allocate(item.quantity)?;
            lines.push(ReceiptLine {
                code: item.code.clone(),
                quantity: item.quantity,
                price: allocation.total(),
                packs: allocation.packs().to_vec(),
            });
        }

        let total: Money = lines.iter().map(|l| l.price).sum();
        let order_items: Vec<OrderItem> = validated.into_iter().map(|(_, item)| item).collect();

        // Commit point: everything succeeded, the order becomes visible
        self.orders
            .insert(id.to_string(), Order::new(id, order_items));

        Ok(Submission::Priced(Receipt {
            order_id: id.to_string(),
            lines,
            total,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
