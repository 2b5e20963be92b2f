//! Ordered price-to-level maps for the two book sides.
//!
//! ## Design
//!
//! The bid and ask sides are structurally identical except for iteration
//! direction: bids iterate highest price first, asks lowest price first.
//! Rather than duplicating near-identical map logic per side, a single
//! [`Ladder`] is parameterized by a [`PriceKey`] type that encodes the
//! direction in its `Ord` implementation, and instantiated exactly twice.
//!
//! - [`BidKey`] wraps `Reverse<u64>` so the first map entry is the highest
//!   price
//! - [`AskKey`] wraps `u64` so the first map entry is the lowest price
//!
//! The same ordering doubles as the crossing test: a resting best price is
//! matchable by an incoming limit exactly when its key sorts at or before
//! the limit's key.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::book::level::PriceLevel;

/// Direction capability for one side of the book.
///
/// `Ord` on the key type defines which price is "best" (first in the map)
/// and, by the same token, which resting prices an incoming limit crosses.
pub(crate) trait PriceKey: Ord + Copy {
    fn from_price(price: u64) -> Self;

    fn price(self) -> u64;

    /// True when a resting order at `best` is matchable by an incoming
    /// order at `limit` on the opposite side.
    #[inline]
    fn crosses(best: u64, limit: u64) -> bool {
        Self::from_price(best) <= Self::from_price(limit)
    }
}

/// Bid-side key: highest price first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct BidKey(Reverse<u64>);

impl PriceKey for BidKey {
    #[inline]
    fn from_price(price: u64) -> Self {
        BidKey(Reverse(price))
    }

    #[inline]
    fn price(self) -> u64 {
        self.0 .0
    }
}

/// Ask-side key: lowest price first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct AskKey(u64);

impl PriceKey for AskKey {
    #[inline]
    fn from_price(price: u64) -> Self {
        AskKey(price)
    }

    #[inline]
    fn price(self) -> u64 {
        self.0
    }
}

/// One side's ordered mapping from price to its FIFO queue of resting
/// orders. The first entry is always the best price for that side.
#[derive(Debug, Clone)]
pub(crate) struct Ladder<K: PriceKey> {
    levels: BTreeMap<K, PriceLevel>,
}

impl<K: PriceKey> Ladder<K> {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// The best resting price on this side, or None when empty
    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        self.levels.keys().next().map(|k| k.price())
    }

    /// The level at an exact price, if present
    #[inline]
    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&K::from_price(price))
    }

    /// Mutable access to the level at an exact price
    #[inline]
    pub fn level_mut(&mut self, price: u64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&K::from_price(price))
    }

    /// The level at `price`, created empty if absent
    pub fn level_or_insert(&mut self, price: u64) -> &mut PriceLevel {
        self.levels
            .entry(K::from_price(price))
            .or_insert_with(|| PriceLevel::new(price))
    }

    /// Drop the level at `price`. Only called once a level has emptied; no
    /// price key ever persists with zero depth.
    pub fn remove_level(&mut self, price: u64) {
        self.levels.remove(&K::from_price(price));
    }

    /// Number of price levels on this side
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Iterate levels best price first
    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
