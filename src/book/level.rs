//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` represents all resting orders at a single price point on
//! one side. Orders are maintained in a doubly-linked list for FIFO ordering
//! (price-time priority).
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be removed in O(1) using its slab key
//!
//! Removing one order only rewires its two neighbors; every other order's
//! slab key stays valid.

use slab::Slab;

use crate::book::node::OrderNode;

/// A price level containing orders at a single price.
///
/// Orders are stored in a FIFO queue (doubly-linked list). The actual
/// order data lives in the slab; this struct only holds queue metadata.
#[derive(Debug, Clone)]
pub(crate) struct PriceLevel {
    /// Price for this level, in tick units
    pub price: u64,

    /// Total remaining quantity at this level.
    /// Updated when orders are added, removed, or filled.
    pub total_quantity: u64,

    /// Head of the order queue (oldest order, slab key).
    /// This is the first order to be matched.
    pub head: Option<usize>,

    /// Tail of the order queue (newest order, slab key).
    /// New orders are appended here.
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: u64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Add an order to the tail of the queue.
    ///
    /// This maintains FIFO ordering - oldest orders are matched first.
    ///
    /// # Panics
    ///
    /// Panics if the key does not exist in the slab.
    pub fn push_back(&mut self, key: usize, arena: &mut Slab<OrderNode>) {
        let node = arena.get_mut(key).expect("invalid slab key");
        let quantity = node.remaining;
        let sequence = node.sequence;

        // Update linked list pointers
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            // Link the old tail to the new node
            let tail_node = arena.get_mut(tail_key).expect("invalid tail key");
            debug_assert!(tail_node.sequence < sequence, "FIFO order violated");
            tail_node.next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity = self.total_quantity.saturating_add(u64::from(quantity));
    }

    /// Remove an order from the queue by slab key.
    ///
    /// The node itself stays in the slab; the caller frees it.
    ///
    /// # Returns
    ///
    /// The remaining quantity of the removed order
    pub fn remove(&mut self, key: usize, arena: &mut Slab<OrderNode>) -> u32 {
        let node = arena.get(key).expect("invalid slab key");
        let quantity = node.remaining;
        let prev_key = node.prev;
        let next_key = node.next;

        // Update the previous node's next pointer
        if let Some(prev) = prev_key {
            let prev_node = arena.get_mut(prev).expect("invalid prev key");
            prev_node.next = next_key;
        } else {
            // This was the head
            self.head = next_key;
        }

        // Update the next node's prev pointer
        if let Some(next) = next_key {
            let next_node = arena.get_mut(next).expect("invalid next key");
            next_node.prev = prev_key;
        } else {
            // This was the tail
            self.tail = prev_key;
        }

        // Clear the removed node's pointers
        let node = arena.get_mut(key).expect("invalid slab key");
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(u64::from(quantity));

        quantity
    }

    /// Get the head order's slab key (oldest order).
    ///
    /// This is the first order to be matched at this price level.
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Update the total quantity after a partial fill of a queued order.
    pub fn reduce_quantity(&mut self, filled_quantity: u32) {
        self.total_quantity = self.total_quantity.saturating_sub(u64::from(filled_quantity));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Order, Side};

    fn insert_node(arena: &mut Slab<OrderNode>, id: u64, quantity: u32) -> usize {
        let order = Order::new(id, Side::Buy, 100, quantity);
        arena.insert(OrderNode::new(order, quantity, id))
    }

    #[test]
    fn test_price_level_new() {
        let level = PriceLevel::new(100);

        assert_eq!(level.price, 100);
        assert_eq!(level.total_quantity, 0);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
        assert!(level.is_empty());
    }

    #[test]
    fn test_price_level_push_single() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key = insert_node(&mut arena, 1, 10);
        level.push_back(key, &mut arena);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.total_quantity, 10);
        assert_eq!(level.head, Some(key));
        assert_eq!(level.tail, Some(key));

        // The only node carries no links
        let node = arena.get(key).unwrap();
        assert!(node.prev.is_none());
        assert!(node.next.is_none());
    }

    #[test]
    fn test_price_level_fifo_links() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key1 = insert_node(&mut arena, 1, 10);
        let key2 = insert_node(&mut arena, 2, 20);
        let key3 = insert_node(&mut arena, 3, 30);

        level.push_back(key1, &mut arena);
        level.push_back(key2, &mut arena);
        level.push_back(key3, &mut arena);

        assert_eq!(level.order_count, 3);
        assert_eq!(level.total_quantity, 60);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Verify linked list structure: key1 <-> key2 <-> key3
        assert_eq!(arena[key1].next, Some(key2));
        assert!(arena[key1].prev.is_none());
        assert_eq!(arena[key2].prev, Some(key1));
        assert_eq!(arena[key2].next, Some(key3));
        assert_eq!(arena[key3].prev, Some(key2));
        assert!(arena[key3].next.is_none());
    }

    #[test]
    fn test_price_level_remove_middle() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key1 = insert_node(&mut arena, 1, 10);
        let key2 = insert_node(&mut arena, 2, 20);
        let key3 = insert_node(&mut arena, 3, 30);

        level.push_back(key1, &mut arena);
        level.push_back(key2, &mut arena);
        level.push_back(key3, &mut arena);

        let removed = level.remove(key2, &mut arena);

        assert_eq!(removed, 20);
        assert_eq!(level.order_count, 2);
        assert_eq!(level.total_quantity, 40);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Remaining list: key1 <-> key3, untouched keys still valid
        assert_eq!(arena[key1].next, Some(key3));
        assert_eq!(arena[key3].prev, Some(key1));
    }

    #[test]
    fn test_price_level_remove_head() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key1 = insert_node(&mut arena, 1, 10);
        let key2 = insert_node(&mut arena, 2, 20);

        level.push_back(key1, &mut arena);
        level.push_back(key2, &mut arena);

        level.remove(key1, &mut arena);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key2));
        assert_eq!(level.tail, Some(key2));
        assert!(arena[key2].prev.is_none());
        assert!(arena[key2].next.is_none());
    }

    #[test]
    fn test_price_level_remove_tail() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key1 = insert_node(&mut arena, 1, 10);
        let key2 = insert_node(&mut arena, 2, 20);

        level.push_back(key1, &mut arena);
        level.push_back(key2, &mut arena);

        level.remove(key2, &mut arena);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key1));
    }

    #[test]
    fn test_price_level_remove_only() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        let key = insert_node(&mut arena, 1, 10);
        level.push_back(key, &mut arena);
        level.remove(key, &mut arena);

        assert!(level.is_empty());
        assert_eq!(level.total_quantity, 0);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
    }

    #[test]
    fn test_price_level_reduce_quantity() {
        let mut level = PriceLevel::new(100);
        level.total_quantity = 50;

        level.reduce_quantity(20);
        assert_eq!(level.total_quantity, 30);

        // Saturating subtraction prevents underflow
        level.reduce_quantity(100);
        assert_eq!(level.total_quantity, 0);
    }

    #[test]
    fn test_price_level_peek_head() {
        let mut arena = Slab::with_capacity(10);
        let mut level = PriceLevel::new(100);

        assert!(level.peek_head().is_none());

        let key = insert_node(&mut arena, 1, 10);
        level.push_back(key, &mut arena);

        assert_eq!(level.peek_head(), Some(key));
    }
}
