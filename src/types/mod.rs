//! Core data types for the tickbook matching core.
//!
//! ## Types
//!
//! - [`Order`]: A limit order placement request
//! - [`Side`]: Buy or Sell
//! - [`Fill`] / [`Execution`]: Fill pairs produced by matching
//! - [`PlaceResult`] / [`CancelResult`]: Operation outcomes
//!
//! ## Integer Pricing
//!
//! All prices are whole tick units (`u64`). The [`price`] module converts
//! decimal prices to tick units exactly, without floating point.

mod fill;
mod order;
mod result;
pub mod price;

// Re-export all types at module level
pub use fill::{Execution, Fill};
pub use order::{Order, Side};
pub use result::{CancelResult, PlaceResult};
