//! Fill reporting types.
//!
//! ## Maker / Taker
//!
//! - **Maker**: the resting order that was already in the book
//! - **Taker**: the incoming order that triggered the match
//!
//! Every fill executes at the maker's price (standard price-time priority
//! behavior). The core does not format or publish trade reports; it returns
//! the fill pairs and leaves reporting to an external collaborator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single match between the incoming (taker) order and one resting
/// (maker) order. An order that crosses several resting orders produces
/// one `Fill` per maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    /// ID of the resting order that was consumed
    pub maker_id: u64,

    /// Execution price in tick units (always the maker's price)
    pub price: u64,

    /// Quantity traded in this fill
    pub quantity: u32,
}

/// Outcome of an accepted placement: the fills it produced and the quantity
/// left resting on the book.
///
/// Conservation holds for every placement:
/// `order.quantity == resting + sum(fills[i].quantity)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Execution {
    /// Fills in match order (best price first, FIFO within a price)
    pub fills: Vec<Fill>,

    /// Quantity that rested on the book after matching. Zero when the
    /// incoming order was fully filled.
    pub resting: u32,
}

impl Execution {
    /// Total quantity filled across all makers
    pub fn filled_quantity(&self) -> u32 {
        self.fills.iter().map(|f| f.quantity).sum()
    }

    /// True if the incoming order matched in full and nothing rested
    pub fn is_complete(&self) -> bool {
        self.resting == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_filled_quantity() {
        let exec = Execution {
            fills: vec![
                Fill {
                    maker_id: 1,
                    price: 100,
                    quantity: 10,
                },
                Fill {
                    maker_id: 2,
                    price: 101,
                    quantity: 3,
                },
            ],
            resting: 2,
        };

        assert_eq!(exec.filled_quantity(), 13);
        assert!(!exec.is_complete());
    }

    #[test]
    fn test_execution_empty() {
        let exec = Execution::default();

        assert_eq!(exec.filled_quantity(), 0);
        assert!(exec.is_complete());
    }
}
