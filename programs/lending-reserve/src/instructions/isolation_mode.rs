use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::IsolationModeChanged;
use crate::logic::{enter_isolation_mode, exit_isolation_mode};
use crate::state::{ReserveState, UserPosition};

#[derive(Accounts)]
pub struct EnterIsolationMode<'info> {
    #[account(
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,

    #[account(
        init_if_needed,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), owner.key().as_ref()],
        bump,
        payer = owner,
        space = UserPosition::SIZE,
    )]
    pub position: Account<'info, UserPosition>,

    #[account(
        constraint = collateral_reserve.key() != reserve.key() @ ReserveError::NotIsolatedCollateral,
    )]
    pub collateral_reserve: Account<'info, ReserveState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_enter_isolation_mode(ctx: Context<EnterIsolationMode>) -> Result<()> {
    let reserve_key = ctx.accounts.reserve.key();
    let collateral_key = ctx.accounts.collateral_reserve.key();
    let owner = ctx.accounts.owner.key();
    let position = &mut ctx.accounts.position;

    if position.owner == Pubkey::default() {
        position.set_inner(UserPosition::new(owner, reserve_key));
        position.bump = ctx.bumps.position;
    }

    enter_isolation_mode(position, collateral_key, &ctx.accounts.collateral_reserve)?;

    emit!(IsolationModeChanged {
        position: position.key(),
        owner,
        collateral_reserve: Some(collateral_key),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ExitIsolationMode<'info> {
    pub reserve: Account<'info, ReserveState>,

    #[account(
        mut,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ ReserveError::Unauthorized,
    )]
    pub position: Account<'info, UserPosition>,

    pub owner: Signer<'info>,
}

pub fn handle_exit_isolation_mode(ctx: Context<ExitIsolationMode>) -> Result<()> {
    let position = &mut ctx.accounts.position;
    exit_isolation_mode(position)?;

    emit!(IsolationModeChanged {
        position: position.key(),
        owner: position.owner,
        collateral_reserve: None,
    });

    Ok(())
}
