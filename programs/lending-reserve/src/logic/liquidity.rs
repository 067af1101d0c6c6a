use anchor_lang::prelude::*;

use crate::constants::MAX_AMOUNT;
use crate::errors::ReserveError;
use crate::logic::accrual::{refresh, update_rates_from_totals};
use crate::logic::ledger::AssetLedger;
use crate::logic::validation::{validate_supply, validate_withdraw};
use crate::math::{ray_div, ray_mul};
use crate::state::{BalanceSide, ReserveState, UserPosition};

#[derive(Clone, Copy, Debug)]
pub struct SupplyParams {
    pub amount: u128,
    pub supplier: Pubkey,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug)]
pub struct WithdrawParams {
    /// Requested amount, or `MAX_AMOUNT` for the whole balance
    pub amount: u128,
    pub recipient: Pubkey,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityResult {
    pub amount: u128,
    /// Scaled units minted on supply, burned on withdraw
    pub scaled_amount: u128,
}

pub fn execute_supply<L: AssetLedger>(
    reserve: &mut ReserveState,
    position: &mut UserPosition,
    ledger: &mut L,
    params: &SupplyParams,
) -> Result<LiquidityResult> {
    let mut next_reserve = reserve.clone();
    refresh(&mut next_reserve, params.timestamp)?;

    validate_supply(&next_reserve, params.amount)?;

    let scaled_minted = ray_div(params.amount, next_reserve.liquidity_index)?;
    require!(scaled_minted != 0, ReserveError::InvalidMintAmount);

    let mut next_position = position.clone();
    next_position.mint(BalanceSide::Supply, scaled_minted)?;

    next_reserve.total_scaled_supply = next_reserve
        .total_scaled_supply
        .checked_add(scaled_minted)
        .ok_or(ReserveError::MathOverflow)?;
    next_reserve.available_liquidity = next_reserve
        .available_liquidity
        .checked_add(params.amount)
        .ok_or(ReserveError::MathOverflow)?;

    update_rates_from_totals(&mut next_reserve)?;

    ledger.transfer_from(&params.supplier, params.amount)?;

    *reserve = next_reserve;
    *position = next_position;

    Ok(LiquidityResult {
        amount: params.amount,
        scaled_amount: scaled_minted,
    })
}

pub fn execute_withdraw<L: AssetLedger>(
    reserve: &mut ReserveState,
    position: &mut UserPosition,
    ledger: &mut L,
    params: &WithdrawParams,
) -> Result<LiquidityResult> {
    let mut next_reserve = reserve.clone();
    refresh(&mut next_reserve, params.timestamp)?;

    let user_balance = ray_mul(position.scaled_supply, next_reserve.liquidity_index)?;
    let amount = if params.amount == MAX_AMOUNT {
        user_balance
    } else {
        params.amount
    };

    validate_withdraw(&next_reserve, amount, user_balance)?;

    let scaled_burned = if amount == user_balance {
        position.scaled_supply
    } else {
        let scaled = ray_div(amount, next_reserve.liquidity_index)?;
        require!(scaled != 0, ReserveError::InvalidBurnAmount);
        scaled
    };

    let mut next_position = position.clone();
    next_position.burn(BalanceSide::Supply, scaled_burned)?;

    next_reserve.total_scaled_supply = next_reserve
        .total_scaled_supply
        .checked_sub(scaled_burned)
        .ok_or(ReserveError::MathOverflow)?;
    next_reserve.available_liquidity = next_reserve
        .available_liquidity
        .checked_sub(amount)
        .ok_or(ReserveError::InsufficientLiquidity)?;

    update_rates_from_totals(&mut next_reserve)?;

    ledger.transfer_to(&params.recipient, amount)?;

    *reserve = next_reserve;
    *position = next_position;

    Ok(LiquidityResult {
        amount,
        scaled_amount: scaled_burned,
    })
}
