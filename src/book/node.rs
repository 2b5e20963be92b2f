//! Resting order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an accepted [`Order`] with the sequence number assigned
//! at acceptance, the remaining quantity, and doubly-linked list pointers for
//! the price level queue. The pointers are slab keys (`usize`), not
//! references, so removing any one resting order never invalidates the
//! handles held for any other order - the index stays stable across
//! arbitrary-position removal.
//!
//! ## Linked List
//!
//! Orders at the same price level form a doubly-linked list:
//! - `next`: the next (newer) order in the price level
//! - `prev`: the previous (older) order in the price level

use crate::types::Order;

/// A resting order stored in the slab.
///
/// Contains the accepted order plus the mutable matching state and the
/// linked-list pointers for its price level queue.
#[derive(Debug, Clone)]
pub(crate) struct OrderNode {
    /// The accepted order, as submitted
    pub order: Order,

    /// Remaining quantity, decremented as fills occur.
    /// Invariant: 0 < remaining <= order.quantity while the node rests.
    pub remaining: u32,

    /// Sequence number assigned at acceptance. Strictly increasing across
    /// the book's lifetime; the sole FIFO tie-break within a price level.
    pub sequence: u64,

    /// Next order in the price level queue (slab key), None at the tail
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key), None at the head
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new unlinked node for an order resting with `remaining`
    /// quantity after matching.
    #[inline]
    pub fn new(order: Order, remaining: u32, sequence: u64) -> Self {
        Self {
            order,
            remaining,
            sequence,
            next: None,
            prev: None,
        }
    }

    /// Get the order ID
    #[inline]
    pub fn id(&self) -> u64 {
        self.order.id
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (capped at the remaining quantity)
    #[inline]
    pub fn fill(&mut self, quantity: u32) -> u32 {
        let filled = quantity.min(self.remaining);
        self.remaining -= filled;
        filled
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn test_order(id: u64, quantity: u32) -> Order {
        Order::new(id, Side::Buy, 100, quantity)
    }

    #[test]
    fn test_node_new() {
        let node = OrderNode::new(test_order(1, 10), 10, 0);

        assert_eq!(node.id(), 1);
        assert_eq!(node.order.price, 100);
        assert_eq!(node.order.side, Side::Buy);
        assert_eq!(node.remaining, 10);
        assert_eq!(node.sequence, 0);
        assert!(node.next.is_none());
        assert!(node.prev.is_none());
    }

    #[test]
    fn test_node_fill() {
        let mut node = OrderNode::new(test_order(1, 10), 10, 0);

        // Partial fill
        assert_eq!(node.fill(3), 3);
        assert_eq!(node.remaining, 7);
        assert!(!node.is_filled());

        // Complete fill
        assert_eq!(node.fill(7), 7);
        assert_eq!(node.remaining, 0);
        assert!(node.is_filled());
    }

    #[test]
    fn test_node_overfill() {
        let mut node = OrderNode::new(test_order(1, 10), 10, 0);

        // A fill larger than the remainder is capped
        assert_eq!(node.fill(25), 10);
        assert_eq!(node.remaining, 0);
        assert!(node.is_filled());
    }

    #[test]
    fn test_node_partial_rest() {
        // An order that partially matched before resting carries only the
        // remainder into the node.
        let node = OrderNode::new(test_order(2, 10), 4, 17);

        assert_eq!(node.order.quantity, 10);
        assert_eq!(node.remaining, 4);
        assert_eq!(node.sequence, 17);
    }
}
