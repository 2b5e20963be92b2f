//! # tickbook
//!
//! The matching core of a single-instrument limit order book.
//!
//! ## Architecture
//!
//! - **Types**: boundary data structures (Order, Fill, operation results)
//! - **Book**: slab-backed order book with price-time priority matching
//!
//! One [`OrderBook`] instance owns exactly one tradable instrument.
//! Multi-instrument routing, order entry validation beyond basic sanity,
//! trade publication, and persistence are external collaborators.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: integer tick-unit prices; identical inputs produce
//!    identical fills in identical order
//! 2. **Strict price-time priority**: better price first, FIFO by arrival
//!    within a price
//! 3. **Stable cancellation handles**: removing one resting order never
//!    perturbs the handle of any other (slab keys, not iterators)
//! 4. **Total operations**: every outcome is an enumerated result; a
//!    rejection never mutates the book
//!
//! ## Example
//!
//! ```
//! use tickbook::{Order, OrderBook, PlaceResult, Side};
//!
//! let mut book = OrderBook::new();
//!
//! book.place(Order::new(1, Side::Buy, 100, 10));
//! book.place(Order::new(2, Side::Buy, 100, 5));
//!
//! // A crossing sell consumes the older bid first
//! match book.place(Order::new(3, Side::Sell, 100, 12)) {
//!     PlaceResult::Accepted(exec) => {
//!         assert_eq!(exec.fills[0].maker_id, 1);
//!         assert_eq!(exec.fills[0].quantity, 10);
//!         assert_eq!(exec.fills[1].maker_id, 2);
//!         assert_eq!(exec.fills[1].quantity, 2);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! assert_eq!(book.best_bid(), Some(100));
//! assert_eq!(book.volume_at_price(Side::Buy, 100), 3);
//! ```

pub mod book;
pub mod types;

pub use book::{BookDepth, BookLevel, OrderBook};
pub use types::{CancelResult, Execution, Fill, Order, PlaceResult, Side};
