use anchor_lang::prelude::*;

use crate::errors::ReserveError;
use crate::logic::accrual::{refresh, update_rates_from_totals};
use crate::logic::isolation::{
    check_isolation_collateral, decrease_isolation_debt, IsolationCollateral,
};
use crate::logic::ledger::AssetLedger;
use crate::logic::validation::validate_repay;
use crate::math::{ray_div_down, ray_mul};
use crate::state::{BalanceSide, ReserveState, UserPosition};

#[derive(Clone, Copy, Debug)]
pub struct RepayParams {
    /// Requested amount, or `MAX_AMOUNT` for the whole debt
    pub amount: u128,
    pub payer: Pubkey,
    pub on_behalf_of: Pubkey,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepayResult {
    /// Underlying actually pulled from the payer
    pub amount_repaid: u128,
    pub scaled_burned: u128,
    pub remaining_scaled_debt: u128,
    /// New isolation counter of the collateral reserve, for isolated positions
    pub isolation_mode_total_debt: Option<u128>,
}

/// Retire debt of `position` in `reserve`.
///
/// The next reserve and position states are computed on copies. Nothing is
/// written back until the asset ledger has accepted the transfer, so a
/// rejected transfer or a failed check leaves every input untouched.
pub fn execute_repay<L: AssetLedger>(
    reserve: &mut ReserveState,
    position: &mut UserPosition,
    isolation_collateral: Option<IsolationCollateral>,
    ledger: &mut L,
    params: &RepayParams,
) -> Result<RepayResult> {
    let mut next_reserve = reserve.clone();
    refresh(&mut next_reserve, params.timestamp)?;

    validate_repay(
        &next_reserve,
        params.amount,
        &params.payer,
        &params.on_behalf_of,
        position.scaled_debt,
    )?;
    check_isolation_collateral(position, isolation_collateral.as_ref())?;

    let outstanding_debt = ray_mul(position.scaled_debt, next_reserve.borrow_index)?;
    let amount_repaid = params.amount.min(outstanding_debt);

    // Settling the full balance clears the position exactly. A partial
    // repayment burns rounded down, which always leaves a scaled remainder.
    let scaled_burned = if amount_repaid == outstanding_debt {
        position.scaled_debt
    } else {
        let scaled = ray_div_down(amount_repaid, next_reserve.borrow_index)?;
        require!(scaled != 0, ReserveError::InvalidBurnAmount);
        scaled
    };

    let mut next_position = position.clone();
    next_position.burn(BalanceSide::Debt, scaled_burned)?;

    next_reserve.total_scaled_debt = next_reserve
        .total_scaled_debt
        .checked_sub(scaled_burned)
        .ok_or(ReserveError::MathOverflow)?;
    next_reserve.available_liquidity = next_reserve
        .available_liquidity
        .checked_add(amount_repaid)
        .ok_or(ReserveError::MathOverflow)?;

    let isolation_mode_total_debt = isolation_collateral.as_ref().map(|collateral| {
        let units = next_reserve.to_isolation_units(amount_repaid);
        decrease_isolation_debt(&*collateral.reserve, units)
    });

    update_rates_from_totals(&mut next_reserve)?;

    ledger.transfer_from(&params.payer, amount_repaid)?;

    *reserve = next_reserve;
    *position = next_position;
    if let (Some(collateral), Some(total)) = (isolation_collateral, isolation_mode_total_debt) {
        collateral.reserve.isolation_mode_total_debt = total;
    }

    Ok(RepayResult {
        amount_repaid,
        scaled_burned,
        remaining_scaled_debt: position.scaled_debt,
        isolation_mode_total_debt,
    })
}
