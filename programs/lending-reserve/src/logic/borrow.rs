use anchor_lang::prelude::*;

use crate::errors::ReserveError;
use crate::logic::accrual::{refresh, update_rates_from_totals};
use crate::logic::isolation::{
    check_isolation_collateral, increase_isolation_debt, IsolationCollateral,
};
use crate::logic::ledger::AssetLedger;
use crate::logic::validation::validate_borrow;
use crate::math::ray_div;
use crate::state::{BalanceSide, ReserveState, UserPosition};

#[derive(Clone, Copy, Debug)]
pub struct BorrowParams {
    pub amount: u128,
    pub borrower: Pubkey,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowResult {
    pub amount: u128,
    pub scaled_minted: u128,
    pub isolation_mode_total_debt: Option<u128>,
}

/// Draw variable-rate debt. Collateral sufficiency is the caller's concern;
/// only reserve limits and the isolation ceiling are enforced here.
pub fn execute_borrow<L: AssetLedger>(
    reserve: &mut ReserveState,
    position: &mut UserPosition,
    isolation_collateral: Option<IsolationCollateral>,
    ledger: &mut L,
    params: &BorrowParams,
) -> Result<BorrowResult> {
    let mut next_reserve = reserve.clone();
    refresh(&mut next_reserve, params.timestamp)?;

    validate_borrow(&next_reserve, params.amount)?;
    check_isolation_collateral(position, isolation_collateral.as_ref())?;

    let isolation_mode_total_debt = match isolation_collateral.as_ref() {
        Some(collateral) => {
            require!(
                next_reserve.config.borrowable_in_isolation,
                ReserveError::AssetNotBorrowableInIsolation
            );
            let units = next_reserve.to_isolation_units(params.amount);
            Some(increase_isolation_debt(&*collateral.reserve, units)?)
        }
        None => None,
    };

    let scaled_minted = ray_div(params.amount, next_reserve.borrow_index)?;
    require!(scaled_minted != 0, ReserveError::InvalidMintAmount);

    let mut next_position = position.clone();
    next_position.mint(BalanceSide::Debt, scaled_minted)?;

    next_reserve.total_scaled_debt = next_reserve
        .total_scaled_debt
        .checked_add(scaled_minted)
        .ok_or(ReserveError::MathOverflow)?;
    next_reserve.available_liquidity = next_reserve
        .available_liquidity
        .checked_sub(params.amount)
        .ok_or(ReserveError::InsufficientLiquidity)?;

    update_rates_from_totals(&mut next_reserve)?;

    ledger.transfer_to(&params.borrower, params.amount)?;

    *reserve = next_reserve;
    *position = next_position;
    if let (Some(collateral), Some(total)) = (isolation_collateral, isolation_mode_total_debt) {
        collateral.reserve.isolation_mode_total_debt = total;
    }

    Ok(BorrowResult {
        amount: params.amount,
        scaled_minted,
        isolation_mode_total_debt,
    })
}
