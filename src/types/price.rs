//! Tick-unit price conversion.
//!
//! ## Overview
//!
//! The book keys prices by an integer number of tick units. Floating-point
//! price keys risk representation drift causing equal prices to compare
//! unequal, so decimal prices are converted exactly at the boundary and the
//! core never sees a fraction.
//!
//! ## Examples
//!
//! ```
//! use tickbook::types::price::{to_ticks, from_ticks};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let tick = Decimal::from_str("0.01").unwrap();
//!
//! // $100.25 with a $0.01 tick is 10025 tick units
//! let price = Decimal::from_str("100.25").unwrap();
//! assert_eq!(to_ticks(price, tick), Ok(10025));
//!
//! assert_eq!(from_ticks(10025, tick), price);
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure converting a decimal price to tick units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TickError {
    /// The price or tick size was zero or negative
    #[error("price and tick size must be positive")]
    NotPositive,
    /// The price is not a whole multiple of the tick size
    #[error("price is not a multiple of the tick size")]
    OffTick,
    /// The tick count does not fit in 64 bits
    #[error("price exceeds the representable tick range")]
    OutOfRange,
}

/// Convert a decimal price to a whole number of tick units.
///
/// # Arguments
///
/// * `price` - The decimal price (e.g. `100.25`)
/// * `tick_size` - The smallest price increment (e.g. `0.01`)
///
/// # Errors
///
/// * [`TickError::NotPositive`] - price or tick size is <= 0
/// * [`TickError::OffTick`] - price does not land exactly on a tick
/// * [`TickError::OutOfRange`] - the tick count overflows `u64`
pub fn to_ticks(price: Decimal, tick_size: Decimal) -> Result<u64, TickError> {
    if price <= Decimal::ZERO || tick_size <= Decimal::ZERO {
        return Err(TickError::NotPositive);
    }

    let ticks = price
        .checked_div(tick_size)
        .ok_or(TickError::OutOfRange)?;
    if ticks.fract() != Decimal::ZERO {
        return Err(TickError::OffTick);
    }

    ticks.to_u64().ok_or(TickError::OutOfRange)
}

/// Convert a tick count back to a decimal price.
pub fn from_ticks(ticks: u64, tick_size: Decimal) -> Decimal {
    Decimal::from(ticks) * tick_size
}

/// Parse a decimal price string directly into tick units.
///
/// Convenience wrapper over [`to_ticks`] for callers holding textual input.
pub fn parse_ticks(price: &str, tick_size: Decimal) -> Result<u64, TickError> {
    let price = Decimal::from_str(price).map_err(|_| TickError::NotPositive)?;
    to_ticks(price, tick_size)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_to_ticks_basic() {
        assert_eq!(to_ticks(tick("100.25"), tick("0.01")), Ok(10025));
        assert_eq!(to_ticks(tick("1"), tick("0.01")), Ok(100));
        assert_eq!(to_ticks(tick("0.05"), tick("0.05")), Ok(1));
        assert_eq!(to_ticks(tick("500"), tick("5")), Ok(100));
    }

    #[test]
    fn test_to_ticks_rejects_non_positive() {
        assert_eq!(to_ticks(tick("0"), tick("0.01")), Err(TickError::NotPositive));
        assert_eq!(to_ticks(tick("-1"), tick("0.01")), Err(TickError::NotPositive));
        assert_eq!(to_ticks(tick("1"), tick("0")), Err(TickError::NotPositive));
    }

    #[test]
    fn test_to_ticks_rejects_off_tick() {
        assert_eq!(to_ticks(tick("100.255"), tick("0.01")), Err(TickError::OffTick));
        assert_eq!(to_ticks(tick("0.03"), tick("0.02")), Err(TickError::OffTick));
    }

    #[test]
    fn test_from_ticks() {
        assert_eq!(from_ticks(10025, tick("0.01")), tick("100.25"));
        assert_eq!(from_ticks(1, tick("0.05")), tick("0.05"));
        assert_eq!(from_ticks(0, tick("0.01")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_ticks() {
        assert_eq!(parse_ticks("100.25", tick("0.01")), Ok(10025));
        assert_eq!(parse_ticks("garbage", tick("0.01")), Err(TickError::NotPositive));
    }

    #[test]
    fn test_roundtrip() {
        let tick_size = tick("0.01");
        for price in ["0.01", "1", "99.99", "100.25", "123456.78"] {
            let ticks = parse_ticks(price, tick_size).unwrap();
            assert_eq!(from_ticks(ticks, tick_size), tick(price));
        }
    }
}
