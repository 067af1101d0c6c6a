use anchor_lang::prelude::*;

use crate::constants::{RAY, SECONDS_PER_YEAR};
use crate::errors::ReserveError;
use crate::math::ray::{ray_mul, to_u128, U256};

/// Simple interest factor over `elapsed` seconds: RAY + rate * elapsed / year.
/// Used for the supply side.
pub fn calculate_linear_interest(rate: u128, elapsed: u64) -> Result<u128> {
    let accrued = U256::from(rate)
        .checked_mul(U256::from(elapsed))
        .ok_or(ReserveError::MathOverflow)?
        / U256::from(SECONDS_PER_YEAR);
    to_u128(accrued)?
        .checked_add(RAY)
        .ok_or(ReserveError::MathOverflow.into())
}

/// Compound interest factor over `elapsed` seconds, approximated with the
/// first four terms of the binomial expansion:
///
///   1 + n*x + n*(n-1)/2 * x^2 + n*(n-1)*(n-2)/6 * x^3,  x = rate / year
///
/// x^2 and x^3 are taken from ray products of the annual rate and then divided
/// by the year length, truncating at every step. The result is slightly below
/// continuous compounding for large `elapsed`, which favours borrowers. Index
/// values and rounding dust depend on this exact term structure.
pub fn calculate_compounded_interest(rate: u128, elapsed: u64) -> Result<u128> {
    if elapsed == 0 {
        return Ok(RAY);
    }

    let exp = U256::from(elapsed);
    let exp_minus_one = U256::from(elapsed - 1);
    let exp_minus_two = U256::from(elapsed.saturating_sub(2));
    let year = U256::from(SECONDS_PER_YEAR);

    let base_power_two = ray_mul(rate, rate)? / (SECONDS_PER_YEAR as u128 * SECONDS_PER_YEAR as u128);
    let base_power_three = ray_mul(base_power_two, rate)? / SECONDS_PER_YEAR as u128;

    let first_term = U256::from(rate)
        .checked_mul(exp)
        .ok_or(ReserveError::MathOverflow)?
        / year;

    let second_term = exp
        .checked_mul(exp_minus_one)
        .and_then(|v| v.checked_mul(U256::from(base_power_two)))
        .ok_or(ReserveError::MathOverflow)?
        / U256::from(2u8);

    let third_term = exp
        .checked_mul(exp_minus_one)
        .and_then(|v| v.checked_mul(exp_minus_two))
        .and_then(|v| v.checked_mul(U256::from(base_power_three)))
        .ok_or(ReserveError::MathOverflow)?
        / U256::from(6u8);

    let factor = U256::from(RAY)
        .checked_add(first_term)
        .and_then(|v| v.checked_add(second_term))
        .and_then(|v| v.checked_add(third_term))
        .ok_or(ReserveError::MathOverflow)?;
    to_u128(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE_37: u128 = 370_000_000_000_000_000_000_000_000;
    const ONE_HUNDREDTH_YEAR: u64 = SECONDS_PER_YEAR / 100;

    #[test]
    fn zero_elapsed_is_identity() {
        assert_eq!(calculate_compounded_interest(RATE_37, 0).unwrap(), RAY);
        assert_eq!(calculate_linear_interest(RATE_37, 0).unwrap(), RAY);
    }

    #[test]
    fn zero_rate_is_identity() {
        assert_eq!(calculate_compounded_interest(0, ONE_HUNDREDTH_YEAR).unwrap(), RAY);
        assert_eq!(calculate_linear_interest(0, ONE_HUNDREDTH_YEAR).unwrap(), RAY);
    }

    #[test]
    fn linear_interest_over_a_hundredth_of_a_year() {
        assert_eq!(
            calculate_linear_interest(RATE_37, ONE_HUNDREDTH_YEAR).unwrap(),
            1_003_700_000_000_000_000_000_000_000
        );
    }

    #[test]
    fn compounded_interest_third_order_expansion() {
        assert_eq!(
            calculate_compounded_interest(RATE_37, ONE_HUNDREDTH_YEAR).unwrap(),
            1_003_706_853_420_131_674_241_446_640
        );
    }

    #[test]
    fn compounded_exceeds_linear_and_stays_below_exponential() {
        let elapsed = SECONDS_PER_YEAR;
        let linear = calculate_linear_interest(RATE_37, elapsed).unwrap();
        let compounded = calculate_compounded_interest(RATE_37, elapsed).unwrap();
        assert!(compounded > linear);
        // e^0.37 = 1.4477346...
        assert!(compounded < 1_447_734_600_000_000_000_000_000_000);
    }

    #[test]
    fn single_second_has_no_higher_order_terms() {
        let factor = calculate_compounded_interest(RATE_37, 1).unwrap();
        assert_eq!(factor, RAY + RATE_37 / SECONDS_PER_YEAR as u128);
    }
}
