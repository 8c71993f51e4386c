//! Money calculation utilities using rust_decimal for precision
//!
//! Monetary amounts are stored and serialized as `f64`; all arithmetic is
//! done on `Decimal` and rounded to 2 places before leaving this module.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

use crate::orders::error::OrderError;

/// Rounding for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed listing price (1,000,000 TND)
const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order
pub const MAX_QUANTITY: i64 = 9999;

/// Convert an f64 to Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64 for storage/serialization
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Validate a listing price before it enters a total computation
pub fn validate_price(price: f64) -> Result<(), OrderError> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(OrderError::InvalidListingPrice);
    }
    Ok(())
}

/// Compute an order total: price × quantity, rounded half-up to 2 places
pub fn order_total(price: f64, quantity: i64) -> f64 {
    let total = to_decimal(price) * Decimal::from(quantity);
    to_f64(total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(order_total(20.0, 2), 40.0);
        assert_eq!(order_total(15.5, 3), 46.5);
        assert_eq!(order_total(9.99, 1), 9.99);
    }

    #[test]
    fn total_avoids_float_drift() {
        // 0.1 + 0.2 style drift must not leak into stored totals
        assert_eq!(order_total(0.1, 3), 0.3);
        assert_eq!(order_total(19.99, 10), 199.9);
    }

    #[test]
    fn total_rounds_half_up() {
        assert_eq!(order_total(0.005, 1), 0.01);
        assert_eq!(order_total(1.333, 3), 4.0);
    }

    #[test]
    fn price_validation() {
        assert!(validate_price(20.0).is_ok());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(2_000_000.0).is_err());
    }
}
