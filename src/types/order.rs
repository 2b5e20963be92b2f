//! Order types for the tickbook matching core.
//!
//! ## Integer Pricing
//!
//! Prices are expressed as a whole number of tick units (the smallest
//! allowed price increment). Integer keys guarantee exact comparison and
//! deterministic ordering; see [`crate::types::price`] for converting
//! decimal prices to tick units.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Buy order (bid) - wants to purchase the instrument
    Buy,
    /// Sell order (ask) - wants to sell the instrument
    Sell,
}

impl Side {
    /// Returns the opposite side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order submitted to the book.
///
/// This is the immutable placement request. Remaining-quantity bookkeeping
/// for resting orders lives inside the book, not here.
///
/// ## Example
///
/// ```
/// use tickbook::{Order, Side};
///
/// // Buy 10 units at 100 ticks
/// let order = Order::new(1, Side::Buy, 100, 10);
/// assert_eq!(order.price, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// Unique order identifier, supplied by the caller.
    /// Uniqueness is enforced per book: a duplicate is rejected.
    pub id: u64,

    /// Order side
    pub side: Side,

    /// Limit price in tick units. Must be > 0 to be accepted.
    pub price: u64,

    /// Order quantity. Must be > 0 to be accepted.
    pub quantity: u32,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `id` - Unique order identifier
    /// * `side` - Buy or Sell
    /// * `price` - Limit price in tick units
    /// * `quantity` - Order quantity
    pub fn new(id: u64, side: Side, price: u64, quantity: u32) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
