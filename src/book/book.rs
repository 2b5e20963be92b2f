//! Single-instrument limit order book.
//!
//! ## Architecture
//!
//! The book uses a hybrid data structure:
//!
//! - **Slab**: pre-allocated storage for O(1) order node operations
//! - **Ladder (BTreeMap)**: sorted price levels per side for best-price lookup
//! - **HashMap**: order ID to location mapping for O(1) cancel
//!
//! ## Price Ordering
//!
//! - **Bids** (buy orders): sorted high-to-low (best bid = highest price)
//! - **Asks** (sell orders): sorted low-to-high (best ask = lowest price)
//!
//! ## Matching
//!
//! An incoming order crosses the opposite side best price first, draining
//! each crossed level FIFO before advancing to the next. Any unfilled
//! remainder rests at the back of its own side's level. Crossing liquidity
//! is always fully consumed before a remainder rests, so no crossed book
//! state is ever observable between calls.
//!
//! ## Concurrency
//!
//! One book owns one instrument and is not internally synchronized. Every
//! operation is a synchronous, bounded state transition; parallelism across
//! instruments is achieved by giving each instrument its own instance. The
//! type is deliberately `!Sync` to make the single-context contract
//! explicit.
//!
//! ## Example
//!
//! ```
//! use tickbook::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//!
//! book.place(Order::new(1, Side::Buy, 100, 10));
//! book.place(Order::new(2, Side::Sell, 101, 5));
//!
//! assert_eq!(book.best_bid(), Some(100));
//! assert_eq!(book.best_ask(), Some(101));
//! assert_eq!(book.spread(), Some(1));
//! ```

use std::cell::Cell;
use std::collections::HashMap;
use std::marker::PhantomData;

use slab::Slab;

use crate::book::ladder::{AskKey, BidKey, Ladder, PriceKey};
use crate::book::node::OrderNode;
use crate::types::{CancelResult, Execution, Fill, Order, PlaceResult, Side};

/// Location of a resting order: which side, which price, and the stable
/// slab handle into that price's queue. Stored in the order index; removal
/// of any other order never invalidates it.
#[derive(Debug, Clone, Copy)]
struct OrderLocation {
    side: Side,
    price: u64,
    key: usize,
}

/// A single aggregated price level in a depth snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLevel {
    /// The price point this level represents, in tick units
    pub price: u64,
    /// Total remaining quantity of all orders at this price
    pub quantity: u64,
}

/// A snapshot of the book up to a requested number of levels per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDepth {
    /// The requested number of levels, even if fewer exist
    pub levels: usize,
    /// Bid levels, best (highest) price first
    pub bids: Vec<BookLevel>,
    /// Ask levels, best (lowest) price first
    pub asks: Vec<BookLevel>,
}

/// Single-instrument limit order book with strict price-time priority.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Pre-allocated storage for every resting order node
    arena: Slab<OrderNode>,

    /// Bid price levels, highest price first
    bids: Ladder<BidKey>,

    /// Ask price levels, lowest price first
    asks: Ladder<AskKey>,

    /// Order ID to location mapping for O(1) cancel.
    /// An entry exists iff the order is currently resting.
    index: HashMap<u64, OrderLocation>,

    /// Next sequence number to assign. Strictly increasing, never reset.
    next_sequence: u64,

    /// Number of resting bid orders
    bid_count: usize,

    /// Number of resting ask orders
    ask_count: usize,

    /// One book belongs to one execution context at a time; the marker
    /// keeps the type `Send` but `!Sync`.
    _not_sync: PhantomData<Cell<()>>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            bids: Ladder::new(),
            asks: Ladder::new(),
            index: HashMap::new(),
            next_sequence: 0,
            bid_count: 0,
            ask_count: 0,
            _not_sync: PhantomData,
        }
    }

    /// Create a book with pre-allocated capacity for resting orders
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            arena: Slab::with_capacity(order_capacity),
            bids: Ladder::new(),
            asks: Ladder::new(),
            index: HashMap::with_capacity(order_capacity),
            next_sequence: 0,
            bid_count: 0,
            ask_count: 0,
            _not_sync: PhantomData,
        }
    }

    // ========================================================================
    // Placement
    // ========================================================================

    /// Place a limit order.
    ///
    /// Validation happens in a fixed order before any state changes:
    /// duplicate ID, then price > 0, then quantity > 0. A rejected order
    /// leaves the book untouched.
    ///
    /// On acceptance the order is assigned a sequence number, matched
    /// against the opposite side while its price crosses, and any unfilled
    /// remainder rests at the back of its price level. The returned
    /// [`Execution`] carries one [`Fill`] per consumed resting order, in
    /// match order, plus the quantity left resting.
    pub fn place(&mut self, order: Order) -> PlaceResult {
        if self.index.contains_key(&order.id) {
            return PlaceResult::DuplicateId;
        }
        if order.price == 0 {
            return PlaceResult::InvalidPrice;
        }
        if order.quantity == 0 {
            return PlaceResult::InvalidQuantity;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let mut fills = Vec::new();
        let resting = match order.side {
            Side::Buy => Self::match_against(
                &mut self.asks,
                &mut self.arena,
                &mut self.index,
                &mut self.ask_count,
                order.price,
                order.quantity,
                &mut fills,
            ),
            Side::Sell => Self::match_against(
                &mut self.bids,
                &mut self.arena,
                &mut self.index,
                &mut self.bid_count,
                order.price,
                order.quantity,
                &mut fills,
            ),
        };

        if resting > 0 {
            let key = self.arena.insert(OrderNode::new(order, resting, sequence));
            match order.side {
                Side::Buy => {
                    self.bids
                        .level_or_insert(order.price)
                        .push_back(key, &mut self.arena);
                    self.bid_count += 1;
                }
                Side::Sell => {
                    self.asks
                        .level_or_insert(order.price)
                        .push_back(key, &mut self.arena);
                    self.ask_count += 1;
                }
            }
            self.index.insert(
                order.id,
                OrderLocation {
                    side: order.side,
                    price: order.price,
                    key,
                },
            );
        }

        PlaceResult::Accepted(Execution { fills, resting })
    }

    /// Core matching loop: consume the opposite ladder best price first
    /// while the incoming limit crosses, FIFO within each level.
    ///
    /// Returns the incoming order's unfilled remainder. Fully consumed
    /// resting orders are unlinked, freed, and dropped from the index
    /// before this returns; emptied levels are removed with them.
    fn match_against<K: PriceKey>(
        opposite: &mut Ladder<K>,
        arena: &mut Slab<OrderNode>,
        index: &mut HashMap<u64, OrderLocation>,
        opposite_count: &mut usize,
        limit_price: u64,
        quantity: u32,
        fills: &mut Vec<Fill>,
    ) -> u32 {
        let mut remaining = quantity;

        while remaining > 0 {
            let Some(best_price) = opposite.best_price() else {
                break;
            };
            if !K::crosses(best_price, limit_price) {
                break;
            }

            let level = opposite
                .level_mut(best_price)
                .expect("best price maps to a level");

            // Drain the level head-first (lowest sequence number first)
            // until the incoming order is satisfied or the level empties.
            while remaining > 0 {
                let Some(head_key) = level.peek_head() else {
                    break;
                };
                let head = arena
                    .get_mut(head_key)
                    .expect("level head is a live node");

                let filled = head.fill(remaining);
                remaining -= filled;
                level.reduce_quantity(filled);
                fills.push(Fill {
                    maker_id: head.id(),
                    price: best_price,
                    quantity: filled,
                });

                if head.is_filled() {
                    let maker_id = head.id();
                    level.remove(head_key, arena);
                    arena.remove(head_key);
                    index.remove(&maker_id);
                    *opposite_count -= 1;
                }
            }

            let emptied = level.is_empty();
            if emptied {
                opposite.remove_level(best_price);
            }
        }

        remaining
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Cancel a resting order by ID.
    ///
    /// The order is unlinked from its price level in O(1) via the stable
    /// handle held by the index; its level is removed if it empties.
    /// Returns [`CancelResult::NotFound`], changing nothing, when the ID
    /// never rested, was already cancelled, or was fully filled.
    pub fn cancel(&mut self, id: u64) -> CancelResult {
        let Some(location) = self.index.remove(&id) else {
            return CancelResult::NotFound;
        };

        match location.side {
            Side::Buy => {
                let level = self
                    .bids
                    .level_mut(location.price)
                    .expect("index entry maps to a live level");
                level.remove(location.key, &mut self.arena);
                let emptied = level.is_empty();
                if emptied {
                    self.bids.remove_level(location.price);
                }
                self.bid_count -= 1;
            }
            Side::Sell => {
                let level = self
                    .asks
                    .level_mut(location.price)
                    .expect("index entry maps to a live level");
                level.remove(location.key, &mut self.arena);
                let emptied = level.is_empty();
                if emptied {
                    self.asks.remove_level(location.price);
                }
                self.ask_count -= 1;
            }
        }

        self.arena.remove(location.key);
        CancelResult::Canceled
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The best (highest) resting bid price, or None if the side is empty
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// The best (lowest) resting ask price, or None if the side is empty
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// The spread (best ask - best bid), or None if either side is empty.
    /// The matching invariant keeps the book uncrossed, so the spread is
    /// always positive.
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total remaining quantity resting at an exact price on one side.
    /// Zero when no level exists at that price.
    pub fn volume_at_price(&self, side: Side, price: u64) -> u64 {
        let level = match side {
            Side::Buy => self.bids.level(price),
            Side::Sell => self.asks.level(price),
        };
        level.map_or(0, |l| l.total_quantity)
    }

    /// True if an order with this ID is currently resting
    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Aggregate snapshot of the top `levels` price levels per side
    pub fn depth(&self, levels: usize) -> BookDepth {
        let bids = self
            .bids
            .iter()
            .take(levels)
            .map(|l| BookLevel {
                price: l.price,
                quantity: l.total_quantity,
            })
            .collect();
        let asks = self
            .asks
            .iter()
            .take(levels)
            .map(|l| BookLevel {
                price: l.price,
                quantity: l.total_quantity,
            })
            .collect();

        BookDepth { levels, bids, asks }
    }

    // ========================================================================
    // Size and capacity
    // ========================================================================

    /// Number of resting orders across both sides
    #[inline]
    pub fn order_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of resting bid orders
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bid_count
    }

    /// Number of resting ask orders
    #[inline]
    pub fn ask_count(&self) -> usize {
        self.ask_count
    }

    /// Number of bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.level_count()
    }

    /// Number of ask price levels
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.level_count()
    }

    /// True when no orders rest on either side
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-allocated order slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
