use anchor_lang::prelude::*;

use crate::constants::*;
use crate::logic::{normalized_debt, normalized_income};
use crate::state::{ReserveDataView, ReserveState};

#[derive(Accounts)]
pub struct GetReserveData<'info> {
    #[account(
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,
}

/// Stored reserve state, returned to the caller as return data.
pub fn handle_get_reserve_data(ctx: Context<GetReserveData>) -> Result<ReserveDataView> {
    Ok(ctx.accounts.reserve.snapshot())
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedIndices {
    pub normalized_income: u128,
    pub normalized_debt: u128,
}

/// Indices as they would read after a refresh at the current clock.
/// Nothing is written.
pub fn handle_get_normalized_indices(ctx: Context<GetReserveData>) -> Result<NormalizedIndices> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve = &ctx.accounts.reserve;
    Ok(NormalizedIndices {
        normalized_income: normalized_income(reserve, timestamp)?,
        normalized_debt: normalized_debt(reserve, timestamp)?,
    })
}
