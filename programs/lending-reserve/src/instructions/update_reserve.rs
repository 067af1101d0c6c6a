use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::{ReserveConfigUpdated, ReserveDataUpdated};
use crate::logic::{apply_config_update, ReserveConfigUpdate};
use crate::state::ReserveState;

#[derive(Accounts)]
pub struct UpdateReserveConfig<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
        constraint = reserve.authority == authority.key() @ ReserveError::Unauthorized,
    )]
    pub reserve: Account<'info, ReserveState>,

    pub authority: Signer<'info>,
}

pub fn handle_update_reserve_config(
    ctx: Context<UpdateReserveConfig>,
    update: ReserveConfigUpdate,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve = &mut ctx.accounts.reserve;

    apply_config_update(reserve, &update, timestamp)?;

    if update.is_paused == Some(true) || update.is_active == Some(false) {
        msg!("Reserve {} halted", reserve.key());
    }

    emit!(ReserveConfigUpdated {
        reserve: reserve.key(),
        is_active: reserve.config.is_active,
        is_paused: reserve.config.is_paused,
        is_frozen: reserve.config.is_frozen,
        borrowing_enabled: reserve.config.borrowing_enabled,
        debt_ceiling: reserve.config.debt_ceiling,
    });

    if update.curve.is_some() {
        emit!(ReserveDataUpdated::from_reserve(reserve.key(), reserve));
    }

    Ok(())
}
