use anchor_lang::prelude::*;

use crate::constants::RAY;
use crate::errors::ReserveError;
use crate::math::{
    calculate_compounded_interest, calculate_linear_interest, ray_div, ray_mul,
};
use crate::state::{InterestRateCurve, ReserveState};

fn elapsed_since_update(reserve: &ReserveState, timestamp: i64) -> u64 {
    if timestamp <= reserve.last_update_timestamp {
        return 0;
    }
    (timestamp - reserve.last_update_timestamp) as u64
}

/// Liquidity index the reserve would have after a refresh at `timestamp`.
pub fn normalized_income(reserve: &ReserveState, timestamp: i64) -> Result<u128> {
    let elapsed = elapsed_since_update(reserve, timestamp);
    if elapsed == 0 || reserve.current_liquidity_rate == 0 {
        return Ok(reserve.liquidity_index);
    }
    let cumulated = calculate_linear_interest(reserve.current_liquidity_rate, elapsed)?;
    ray_mul(cumulated, reserve.liquidity_index)
}

/// Borrow index the reserve would have after a refresh at `timestamp`.
pub fn normalized_debt(reserve: &ReserveState, timestamp: i64) -> Result<u128> {
    let elapsed = elapsed_since_update(reserve, timestamp);
    if elapsed == 0 || reserve.total_scaled_debt == 0 {
        return Ok(reserve.borrow_index);
    }
    let cumulated = calculate_compounded_interest(reserve.current_borrow_rate, elapsed)?;
    ray_mul(cumulated, reserve.borrow_index)
}

/// Bring both indices current as of `timestamp`.
///
/// Must run once per action, before any balance is read or changed. A
/// timestamp at or before the last update leaves the reserve untouched.
pub fn refresh(reserve: &mut ReserveState, timestamp: i64) -> Result<()> {
    if timestamp <= reserve.last_update_timestamp {
        return Ok(());
    }

    let liquidity_index = normalized_income(reserve, timestamp)?;
    let borrow_index = normalized_debt(reserve, timestamp)?;

    reserve.liquidity_index = liquidity_index;
    reserve.borrow_index = borrow_index;
    reserve.last_update_timestamp = timestamp;
    Ok(())
}

/// Rates implied by the curve at the given utilization inputs.
/// Returns `(liquidity_rate, borrow_rate)`.
pub fn calculate_interest_rates(
    total_borrowed: u128,
    total_supplied: u128,
    curve: &InterestRateCurve,
) -> Result<(u128, u128)> {
    let utilization = if total_borrowed == 0 || total_supplied == 0 {
        0
    } else {
        ray_div(total_borrowed, total_supplied)?
    };

    let borrow_rate = if utilization <= curve.optimal_utilization {
        let variable = ray_div(ray_mul(curve.slope1, utilization)?, curve.optimal_utilization)?;
        curve
            .base_rate
            .checked_add(variable)
            .ok_or(ReserveError::MathOverflow)?
    } else {
        let excess = utilization - curve.optimal_utilization;
        let max_excess = RAY - curve.optimal_utilization;
        let variable = ray_mul(curve.slope2, ray_div(excess, max_excess)?)?;
        curve
            .base_rate
            .checked_add(curve.slope1)
            .and_then(|r| r.checked_add(variable))
            .ok_or(ReserveError::MathOverflow)?
    };

    let liquidity_rate = ray_mul(borrow_rate, utilization)?;
    Ok((liquidity_rate, borrow_rate))
}

/// Store the rates for the given post-action totals.
pub fn update_rates(
    reserve: &mut ReserveState,
    total_borrowed: u128,
    total_supplied: u128,
) -> Result<()> {
    let (liquidity_rate, borrow_rate) =
        calculate_interest_rates(total_borrowed, total_supplied, &reserve.config.curve)?;
    reserve.current_liquidity_rate = liquidity_rate;
    reserve.current_borrow_rate = borrow_rate;
    Ok(())
}

/// Re-rate from the reserve's own totals: borrowed is the real debt, supplied
/// is the vault's idle liquidity plus that debt.
pub fn update_rates_from_totals(reserve: &mut ReserveState) -> Result<()> {
    let total_debt = reserve.total_debt()?;
    let total_supplied = reserve
        .available_liquidity
        .checked_add(total_debt)
        .ok_or(ReserveError::MathOverflow)?;
    update_rates(reserve, total_debt, total_supplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReserveConfig;

    const RATE_37: u128 = 370_000_000_000_000_000_000_000_000;

    fn reserve() -> ReserveState {
        ReserveState::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            18,
            ReserveConfig::default(),
            1_000,
        )
        .unwrap()
    }

    #[test]
    fn refresh_at_same_timestamp_changes_nothing() {
        let mut reserve = reserve();
        reserve.current_borrow_rate = RATE_37;
        reserve.current_liquidity_rate = RATE_37;
        reserve.total_scaled_debt = 10;

        refresh(&mut reserve, 5_000).unwrap();
        let after_first = reserve.clone();
        refresh(&mut reserve, 5_000).unwrap();

        assert_eq!(reserve.liquidity_index, after_first.liquidity_index);
        assert_eq!(reserve.borrow_index, after_first.borrow_index);
        assert_eq!(reserve.last_update_timestamp, 5_000);
    }

    #[test]
    fn refresh_ignores_timestamps_in_the_past() {
        let mut reserve = reserve();
        reserve.current_liquidity_rate = RATE_37;
        refresh(&mut reserve, 10).unwrap();
        assert_eq!(reserve.liquidity_index, RAY);
        assert_eq!(reserve.last_update_timestamp, 1_000);
    }

    #[test]
    fn borrow_index_is_frozen_without_debt() {
        let mut reserve = reserve();
        reserve.current_borrow_rate = RATE_37;
        refresh(&mut reserve, 1_000_000).unwrap();
        assert_eq!(reserve.borrow_index, RAY);
        assert_eq!(reserve.last_update_timestamp, 1_000_000);
    }

    #[test]
    fn normalized_views_match_refresh() {
        let mut reserve = reserve();
        reserve.current_borrow_rate = RATE_37;
        reserve.current_liquidity_rate = RATE_37 / 2;
        reserve.total_scaled_debt = 1;

        let income = normalized_income(&reserve, 90_000).unwrap();
        let debt = normalized_debt(&reserve, 90_000).unwrap();
        refresh(&mut reserve, 90_000).unwrap();

        assert_eq!(reserve.liquidity_index, income);
        assert_eq!(reserve.borrow_index, debt);
        assert!(debt > income);
    }

    #[test]
    fn zero_utilization_gives_base_rate() {
        let curve = InterestRateCurve::default();
        let (liquidity, borrow) = calculate_interest_rates(0, 1_000, &curve).unwrap();
        assert_eq!(borrow, curve.base_rate);
        assert_eq!(liquidity, 0);

        let (liquidity, borrow) = calculate_interest_rates(0, 0, &curve).unwrap();
        assert_eq!(borrow, curve.base_rate);
        assert_eq!(liquidity, 0);
    }

    #[test]
    fn rate_at_the_kink() {
        let curve = InterestRateCurve::default();
        let (liquidity, borrow) = calculate_interest_rates(800, 1_000, &curve).unwrap();
        // 5% + 2%
        assert_eq!(borrow, 70_000_000_000_000_000_000_000_000);
        // 7% * 80%
        assert_eq!(liquidity, 56_000_000_000_000_000_000_000_000);
    }

    #[test]
    fn rate_above_the_kink_uses_slope2() {
        let curve = InterestRateCurve::default();
        let (_, borrow) = calculate_interest_rates(900, 1_000, &curve).unwrap();
        // 5% + 2% + 30% * (0.1 / 0.2)
        assert_eq!(borrow, 220_000_000_000_000_000_000_000_000);

        let (liquidity, borrow) = calculate_interest_rates(1_000, 1_000, &curve).unwrap();
        assert_eq!(borrow, 370_000_000_000_000_000_000_000_000);
        assert_eq!(liquidity, borrow);
    }

    #[test]
    fn rates_are_a_function_of_utilization_only() {
        let curve = InterestRateCurve::default();
        let small = calculate_interest_rates(3, 10, &curve).unwrap();
        let large = calculate_interest_rates(3_000_000, 10_000_000, &curve).unwrap();
        assert_eq!(small, large);
    }

    #[test]
    fn update_rates_from_totals_counts_debt_as_supplied() {
        let mut reserve = reserve();
        reserve.available_liquidity = 200;
        reserve.total_scaled_debt = 800;
        update_rates_from_totals(&mut reserve).unwrap();
        assert_eq!(reserve.current_borrow_rate, 70_000_000_000_000_000_000_000_000);
    }
}
