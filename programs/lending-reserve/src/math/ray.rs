use anchor_lang::prelude::*;

use crate::constants::{HALF_RAY, RAY};
use crate::errors::ReserveError;

#[allow(
    clippy::assign_op_pattern,
    clippy::manual_div_ceil,
    clippy::manual_range_contains,
    clippy::ptr_offset_with_cast
)]
mod wide {
    uint::construct_uint! {
        /// 256-bit unsigned integer for ray intermediates
        pub struct U256(4);
    }
}

pub use wide::U256;

/// Narrow a 256-bit intermediate back into u128, failing instead of truncating.
pub fn to_u128(value: U256) -> Result<u128> {
    if value.bits() > 128 {
        return err!(ReserveError::MathOverflow);
    }
    Ok(value.low_u128())
}

/// (a * b + RAY / 2) / RAY
pub fn ray_mul(a: u128, b: u128) -> Result<u128> {
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(ReserveError::MathOverflow)?
        .checked_add(U256::from(HALF_RAY))
        .ok_or(ReserveError::MathOverflow)?;
    to_u128(product / U256::from(RAY))
}

/// (a * RAY + b / 2) / b
pub fn ray_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return err!(ReserveError::DivisionByZero);
    }
    let numerator = U256::from(a)
        .checked_mul(U256::from(RAY))
        .ok_or(ReserveError::MathOverflow)?
        .checked_add(U256::from(b / 2))
        .ok_or(ReserveError::MathOverflow)?;
    to_u128(numerator / U256::from(b))
}

/// (a * RAY) / b, truncating
pub fn ray_div_down(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return err!(ReserveError::DivisionByZero);
    }
    let numerator = U256::from(a)
        .checked_mul(U256::from(RAY))
        .ok_or(ReserveError::MathOverflow)?;
    to_u128(numerator / U256::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_mul_rounds_half_up() {
        assert_eq!(ray_mul(RAY, 7).unwrap(), 7);
        // 3 * 0.5 = 1.5 -> 2
        assert_eq!(ray_mul(3, HALF_RAY).unwrap(), 2);
    }

    #[test]
    fn ray_div_rounds_half_up() {
        assert_eq!(ray_div(1, 2 * RAY).unwrap(), 1);
        assert_eq!(ray_div_down(1, 2 * RAY).unwrap(), 0);
        assert_eq!(ray_div(500, RAY).unwrap(), 500);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(ray_div(1, 0).is_err());
        assert!(ray_div_down(1, 0).is_err());
    }

    #[test]
    fn overflow_is_surfaced() {
        assert!(ray_mul(u128::MAX, u128::MAX).is_err());
        assert!(ray_div(u128::MAX, 1).is_err());
    }

    #[test]
    fn scaled_round_trip_holds_above_ray() {
        let index = 1_003_706_853_420_131_674_241_446_640u128;
        for scaled in [1u128, 499, 500, 10u128.pow(20) + 3] {
            let value = ray_mul(scaled, index).unwrap();
            assert_eq!(ray_div(value, index).unwrap(), scaled);
        }
    }
}
