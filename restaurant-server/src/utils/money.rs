//! Monetary rounding
//!
//! Prices are `f64` on the wire. Rounding goes through the shortest decimal
//! representation of the float so that `9.995` rounds like the literal the
//! caller typed (to `10.00`), not like its binary approximation.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::utils::{AppError, AppResult};

/// Round half away from zero to 2 decimal places
pub fn round_price(value: f64) -> f64 {
    to_decimal(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// `quantity * unit_price`, rounded to 2 dp
pub fn line_amount(quantity: i64, unit_price: f64) -> AppResult<f64> {
    let price = to_decimal(unit_price)
        .ok_or_else(|| AppError::internal(format!("Unit price {unit_price} is not representable")))?;
    let amount = Decimal::from_i64(quantity)
        .and_then(|qty| price.checked_mul(qty))
        .ok_or_else(|| AppError::internal(format!("Line amount overflow: {quantity} x {unit_price}")))?;
    to_rounded_f64(amount)
}

/// Sum of amounts, rounded to 2 dp
pub fn total(amounts: impl IntoIterator<Item = f64>) -> AppResult<f64> {
    let mut sum = Decimal::ZERO;
    for amount in amounts {
        let d = to_decimal(amount)
            .ok_or_else(|| AppError::internal(format!("Amount {amount} is not representable")))?;
        sum = sum
            .checked_add(d)
            .ok_or_else(|| AppError::internal("Total amount overflow"))?;
    }
    to_rounded_f64(sum)
}

fn to_rounded_f64(value: Decimal) -> AppResult<f64> {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| AppError::internal(format!("Amount {value} does not fit in f64")))
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    // Display yields the shortest string that round-trips
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
}
