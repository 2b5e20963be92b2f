//! Operation outcomes for the book API.
//!
//! Every public operation is total: all failure modes are represented as
//! result enumerations, never as panics or propagated errors. A rejection
//! leaves the book untouched and the book remains usable after any failure
//! return.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Execution;

/// Outcome of a placement request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaceResult {
    /// The order was accepted: it matched, rested, or both. Carries the
    /// fills produced and the quantity left resting.
    Accepted(Execution),
    /// An order with the same ID is already resting; no state changed.
    DuplicateId,
    /// The price was zero; no state changed.
    InvalidPrice,
    /// The quantity was zero; no state changed.
    InvalidQuantity,
}

impl PlaceResult {
    /// True for any accepted placement
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlaceResult::Accepted(_))
    }

    /// The execution report, if the placement was accepted
    pub fn execution(&self) -> Option<&Execution> {
        match self {
            PlaceResult::Accepted(exec) => Some(exec),
            _ => None,
        }
    }
}

/// Outcome of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CancelResult {
    /// The order was resting and has been removed.
    Canceled,
    /// No resting order with that ID: it never rested, was already
    /// cancelled, or was fully filled. No state changed.
    NotFound,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_result_accessors() {
        let accepted = PlaceResult::Accepted(Execution::default());
        assert!(accepted.is_accepted());
        assert!(accepted.execution().is_some());

        assert!(!PlaceResult::DuplicateId.is_accepted());
        assert!(PlaceResult::InvalidPrice.execution().is_none());
    }
}
