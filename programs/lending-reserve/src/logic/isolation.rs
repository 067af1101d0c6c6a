use anchor_lang::prelude::*;

use crate::errors::ReserveError;
use crate::state::{ReserveState, UserPosition};

/// The collateral reserve an isolated borrower draws against, with its address.
pub struct IsolationCollateral<'a> {
    pub key: Pubkey,
    pub reserve: &'a mut ReserveState,
}

/// Check that the supplied collateral reserve is the one the position is
/// isolated against. A position outside isolation mode takes none.
pub fn check_isolation_collateral(
    position: &UserPosition,
    collateral: Option<&IsolationCollateral>,
) -> Result<()> {
    let matches = match (position.isolation_collateral, collateral) {
        (None, None) => true,
        (Some(expected), Some(provided)) => expected == provided.key,
        _ => false,
    };
    require!(matches, ReserveError::IsolationCollateralMismatch);
    Ok(())
}

/// Counter value after an isolated borrow of `units`, bounded by the ceiling.
pub fn increase_isolation_debt(collateral: &ReserveState, units: u128) -> Result<u128> {
    let next = collateral
        .isolation_mode_total_debt
        .checked_add(units)
        .ok_or(ReserveError::MathOverflow)?;
    require!(
        next <= collateral.config.debt_ceiling,
        ReserveError::DebtCeilingExceeded
    );
    Ok(next)
}

/// Counter value after an isolated repay of `units`. Interest is never added
/// to the counter, so a repay can exceed it; the counter then snaps to zero.
pub fn decrease_isolation_debt(collateral: &ReserveState, units: u128) -> u128 {
    collateral.isolation_mode_total_debt.saturating_sub(units)
}

pub fn enter_isolation_mode(
    position: &mut UserPosition,
    collateral_key: Pubkey,
    collateral: &ReserveState,
) -> Result<()> {
    require!(
        position.scaled_debt == 0,
        ReserveError::IsolationModeChangeWithDebt
    );
    require!(
        collateral.config.debt_ceiling != 0,
        ReserveError::NotIsolatedCollateral
    );
    position.isolation_collateral = Some(collateral_key);
    Ok(())
}

pub fn exit_isolation_mode(position: &mut UserPosition) -> Result<()> {
    require!(
        position.scaled_debt == 0,
        ReserveError::IsolationModeChangeWithDebt
    );
    position.isolation_collateral = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReserveConfig;

    fn collateral(ceiling: u128, stored: u128) -> ReserveState {
        let config = ReserveConfig {
            debt_ceiling: ceiling,
            ..ReserveConfig::default()
        };
        let mut reserve = ReserveState::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            9,
            config,
            0,
        )
        .unwrap();
        reserve.isolation_mode_total_debt = stored;
        reserve
    }

    #[test]
    fn ceiling_bounds_new_isolated_debt() {
        let reserve = collateral(1_000, 900);
        assert_eq!(increase_isolation_debt(&reserve, 100).unwrap(), 1_000);
        assert_eq!(
            increase_isolation_debt(&reserve, 101).unwrap_err(),
            ReserveError::DebtCeilingExceeded.into()
        );
    }

    #[test]
    fn repay_floors_the_counter_at_zero() {
        let reserve = collateral(1_000, 500);
        assert_eq!(decrease_isolation_debt(&reserve, 499), 1);
        assert_eq!(decrease_isolation_debt(&reserve, 500), 0);
        assert_eq!(decrease_isolation_debt(&reserve, 501), 0);
    }

    #[test]
    fn entering_requires_a_ceiling_and_no_debt() {
        let key = Pubkey::new_unique();
        let mut position = UserPosition::new(Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(
            enter_isolation_mode(&mut position, key, &collateral(0, 0)).unwrap_err(),
            ReserveError::NotIsolatedCollateral.into()
        );

        enter_isolation_mode(&mut position, key, &collateral(10, 0)).unwrap();
        assert_eq!(position.isolation_collateral, Some(key));

        position.scaled_debt = 1;
        assert_eq!(
            exit_isolation_mode(&mut position).unwrap_err(),
            ReserveError::IsolationModeChangeWithDebt.into()
        );
        position.scaled_debt = 0;
        exit_isolation_mode(&mut position).unwrap();
        assert_eq!(position.isolation_collateral, None);
    }

    #[test]
    fn collateral_must_match_the_position() {
        let key = Pubkey::new_unique();
        let mut reserve = collateral(10, 0);
        let mut position = UserPosition::new(Pubkey::new_unique(), Pubkey::new_unique());

        assert!(check_isolation_collateral(&position, None).is_ok());

        position.isolation_collateral = Some(key);
        assert!(check_isolation_collateral(&position, None).is_err());

        let wrong = IsolationCollateral {
            key: Pubkey::new_unique(),
            reserve: &mut reserve,
        };
        assert!(check_isolation_collateral(&position, Some(&wrong)).is_err());

        let right = IsolationCollateral {
            key,
            reserve: &mut reserve,
        };
        assert!(check_isolation_collateral(&position, Some(&right)).is_ok());
    }
}
