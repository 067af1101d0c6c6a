use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::{ReserveDataUpdated, Withdrawn};
use crate::instructions::token_ledger::{requested_amount, SplTokenLedger};
use crate::logic::{execute_withdraw, WithdrawParams};
use crate::state::{ReserveState, UserPosition};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,

    #[account(
        mut,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ ReserveError::Unauthorized,
        constraint = position.reserve == reserve.key() @ ReserveError::Unauthorized,
    )]
    pub position: Account<'info, UserPosition>,

    #[account(
        mut,
        constraint = vault.key() == reserve.vault @ ReserveError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == reserve.token_mint @ ReserveError::MintMismatch,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// `amount == u64::MAX` withdraws the whole balance.
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve_key = ctx.accounts.reserve.key();
    let reserve_info = ctx.accounts.reserve.to_account_info();
    let accounts = &mut *ctx.accounts;

    let mut ledger = SplTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        vault: &accounts.vault,
        user_token_account: &accounts.recipient_token_account,
        user: accounts.owner.to_account_info(),
        reserve: reserve_info,
        token_mint: accounts.reserve.token_mint,
        reserve_bump: accounts.reserve.bump,
    };
    let params = WithdrawParams {
        amount: requested_amount(amount),
        recipient: accounts.owner.key(),
        timestamp,
    };

    let result = execute_withdraw(
        &mut accounts.reserve,
        &mut accounts.position,
        &mut ledger,
        &params,
    )?;

    emit!(Withdrawn {
        reserve: reserve_key,
        user: params.recipient,
        amount: result.amount,
        scaled_burned: result.scaled_amount,
    });
    emit!(ReserveDataUpdated::from_reserve(reserve_key, &accounts.reserve));

    Ok(())
}
