//! # Pack Allocation
//!
//! Computes the combination of fixed-size packs that exactly fulfills a
//! requested quantity, preferring larger packs before smaller ones.
//!
//! ## Allocation Walk
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Example: 13 units, packs {3, 5, 9}                                     │
//! │                                                                         │
//! │  allocate(13)                                                           │
//! │  ├── try 9 → remainder 4                                               │
//! │  │     └── allocate(4): 9 too big, 5 too big, 3 leaves 1 → FAIL        │
//! │  ├── try 5 → remainder 8                                               │
//! │  │     └── allocate(8)                                                  │
//! │  │         ├── try 9 → too big                                         │
//! │  │         ├── try 5 → remainder 3                                     │
//! │  │         │     └── allocate(3): 3 fits exactly → push 3  ✓           │
//! │  │         └── push 5  ✓                                               │
//! │  └── push 5  ✓                                                         │
//! │                                                                         │
//! │  Chosen: [3, 5, 5]  (deepest recursion first)                          │
//! │  Total:  $5.95 + $9.95 + $9.95 = $25.85                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Traversal Contract
//! Each level tries packs in descending size order and commits to the FIRST
//! candidate whose remainder allocates to zero. The walk is exhaustive across
//! candidates at a level but never revisits a committed choice, so the result
//! is not guaranteed to use the globally fewest packs. Callers rely on this
//! exact traversal; do not replace it with an optimal search.

use serde::Serialize;

use crate::error::{OrderError, OrderResult};
use crate::money::Money;
use crate::types::{Pack, Product};

// =============================================================================
// Allocation Result
// =============================================================================

/// The outcome of one successful allocation call.
///
/// ## Design Notes
/// - Owned by the call: two allocations never share state
/// - Exists only for successful allocations, so pricing an unallocated
///   quantity is unrepresentable
/// - Packs appear in the order the recursion committed them, deepest level
///   first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    packs: Vec<Pack>,
}

impl Allocation {
    /// Returns the chosen packs, deepest recursion level first.
    #[inline]
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Sums the chosen pack prices.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::{Money, Pack, Product};
    ///
    /// let product = Product::new(
    ///     "VS5",
    ///     "Vegemite Scroll",
    ///     vec![Pack::new(3, 699), Pack::new(5, 899)],
    /// );
    /// let allocation = product.allocate(10).unwrap();
    /// assert_eq!(allocation.total(), Money::from_cents(1798));
    /// ```
    pub fn total(&self) -> Money {
        self.packs.iter().map(|p| p.price()).sum()
    }

    /// Returns the number of packs chosen.
    #[inline]
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Returns the total units covered by the chosen packs.
    pub fn total_units(&self) -> i64 {
        self.packs.iter().map(|p| p.size).sum()
    }
}

// =============================================================================
// Allocator
// =============================================================================

impl Product {
    /// Allocates packs for the requested quantity.
    ///
    /// Walks the pack list largest-first, recursing on the remainder and
    /// committing to the first candidate whose remainder reaches exactly
    /// zero. Packs are reusable without limit.
    ///
    /// ## Returns
    /// - `Ok(Allocation)` when some combination fulfills the quantity exactly
    /// - `Err(OrderError::UnserviceableQuantity)` otherwise
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::{Pack, Product};
    ///
    /// let product = Product::new(
    ///     "MB11",
    ///     "Blueberry Muffin",
    ///     vec![Pack::new(2, 995), Pack::new(5, 1695), Pack::new(8, 2495)],
    /// );
    ///
    /// let allocation = product.allocate(14).unwrap();
    /// assert_eq!(allocation.total_units(), 14);
    /// assert!(product.allocate(1).is_err());
    /// ```
    pub fn allocate(&self, quantity: i64) -> OrderResult<Allocation> {
        let mut chosen = Vec::new();

        if allocate_into(self.packs(), quantity, &mut chosen) != 0 {
            return Err(OrderError::unserviceable(&self.code, quantity));
        }

        Ok(Allocation { packs: chosen })
    }
}

/// One level of the allocation descent.
///
/// Iterates `packs` in descending size order (the slice is sorted ascending,
/// so reverse iteration gives largest first). For each candidate:
///
/// - remainder > 0: recurse on the remainder; on recursive success push the
///   candidate and stop at this level, otherwise move to the next smaller pack
/// - remainder == 0: exact fit, push the candidate and stop
/// - remainder < 0: pack too large, move on
///
/// Returns the final remainder for this level: zero on success, otherwise the
/// last value computed before the candidates ran out. A push only happens at
/// a level that is itself returning zero, so `chosen` never accumulates packs
/// from failed branches.
///
/// Depth is bounded: quantities are capped upstream and every validated pack
/// size is at least one, so each recursion strictly shrinks the quantity.
fn allocate_into(packs: &[Pack], quantity: i64, chosen: &mut Vec<Pack>) -> i64 {
    let mut remainder = quantity;

    for pack in packs.iter().rev() {
        remainder = quantity - pack.size;

        if remainder > 0 {
            if allocate_into(packs, remainder, chosen) == 0 {
                chosen.push(pack.clone());
                remainder = 0;
                break;
            }
        } else if remainder == 0 {
            chosen.push(pack.clone());
            break;
        }
    }

    remainder
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll() -> Product {
        Product::new(
            "VS5",
            "Vegemite Scroll",
            vec![Pack::new(3, 699), Pack::new(5, 899)],
        )
    }

    fn muffin() -> Product {
        Product::new(
            "MB11",
            "Blueberry Muffin",
            vec![Pack::new(2, 995), Pack::new(5, 1695), Pack::new(8, 2495)],
        )
    }

    fn croissant() -> Product {
        Product::new(
            "CF",
            "Croissant",
            vec![Pack::new(3, 595), Pack::new(5, 995), Pack::new(9, 1699)],
        )
    }

    #[test]
    fn test_allocate_exact_multiples_of_largest() {
        // 10 = 5 + 5, $8.99 each
        let allocation = scroll().allocate(10).unwrap();

        let sizes: Vec<i64> = allocation.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![5, 5]);
        assert_eq!(allocation.pack_count(), 2);
        assert_eq!(allocation.total_units(), 10);
        assert_eq!(allocation.total(), Money::from_cents(1798)); // $17.98
    }

    #[test]
    fn test_allocate_backtracks_over_largest_pack() {
        // 14 against {2, 5, 8}: the 8-then-5 path strands one unit, the
        // committed path is 8 + 2 + 2 + 2, recorded deepest level first
        let allocation = muffin().allocate(14).unwrap();

        let sizes: Vec<i64> = allocation.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![2, 2, 2, 8]);
        assert_eq!(allocation.total(), Money::from_cents(5480)); // $54.80
    }

    #[test]
    fn test_allocate_mixed_sizes() {
        // 13 against {3, 5, 9}: 9 leaves an unallocatable 4, so 5 + 5 + 3
        let allocation = croissant().allocate(13).unwrap();

        let sizes: Vec<i64> = allocation.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![3, 5, 5]);
        assert_eq!(allocation.total(), Money::from_cents(2585)); // $25.85
    }

    #[test]
    fn test_allocate_single_exact_pack() {
        let allocation = scroll().allocate(3).unwrap();

        let sizes: Vec<i64> = allocation.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![3]);
        assert_eq!(allocation.total(), Money::from_cents(699));
    }

    #[test]
    fn test_allocate_unserviceable_quantity() {
        // 4 and 7 have no exact cover in {3, 5}
        let err = scroll().allocate(4).unwrap_err();
        assert!(matches!(
            err,
            OrderError::UnserviceableQuantity { quantity: 4, .. }
        ));

        assert!(scroll().allocate(7).is_err());
    }

    #[test]
    fn test_allocate_below_smallest_pack() {
        // Smaller than every pack: nothing fits, remainder stays non-zero
        assert!(scroll().allocate(1).is_err());
        assert!(scroll().allocate(2).is_err());
    }

    #[test]
    fn test_allocate_empty_pack_list() {
        let product = Product::new("X", "Empty", vec![]);
        assert!(product.allocate(5).is_err());
    }

    #[test]
    fn test_allocate_is_deterministic() {
        let product = croissant();
        let first = product.allocate(13).unwrap();
        let second = product.allocate(13).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_success_commit_is_not_globally_optimal() {
        // 6 against {1, 3, 4}: the walk commits 4 then covers 2 with two
        // 1-packs, although two 3-packs would use fewer packs. The committed
        // traversal is the contract, not pack-count minimality.
        let product = Product::new(
            "OPT",
            "Optimality Witness",
            vec![Pack::new(1, 100), Pack::new(3, 250), Pack::new(4, 300)],
        );

        let allocation = product.allocate(6).unwrap();
        let sizes: Vec<i64> = allocation.packs().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![1, 1, 4]);
        assert_eq!(allocation.pack_count(), 3);
    }

    #[test]
    fn test_allocation_totals() {
        let allocation = muffin().allocate(10).unwrap();

        // 10 = 8 + 2
        assert_eq!(allocation.total_units(), 10);
        assert_eq!(allocation.total(), Money::from_cents(3490));
    }
}
