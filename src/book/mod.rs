//! Order book module: the matching core.
//!
//! ## Components
//!
//! - [`node`]: resting order nodes with linked-list keys, stored in a slab
//! - [`level`]: FIFO price level queues over the slab
//! - [`ladder`]: direction-parameterized price-to-level maps (one per side)
//! - [`book`]: the [`OrderBook`] API and matching algorithm
//!
//! ## Performance
//!
//! | Operation           | Complexity       |
//! |---------------------|------------------|
//! | Place (no match)    | O(log n) levels  |
//! | Cancel by ID        | O(1)             |
//! | Best bid/ask        | O(log n) levels  |
//! | Volume at price     | O(log n) levels  |
//! | Match               | O(k log n), k fills |

pub(crate) mod ladder;
pub(crate) mod level;
pub(crate) mod node;

mod book;

pub use book::{BookDepth, BookLevel, OrderBook};
