use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::{ReserveDataUpdated, Supplied};
use crate::instructions::token_ledger::SplTokenLedger;
use crate::logic::{execute_supply, SupplyParams};
use crate::state::{ReserveState, UserPosition};

#[derive(Accounts)]
pub struct Supply<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,

    #[account(
        init_if_needed,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), supplier.key().as_ref()],
        bump,
        payer = supplier,
        space = UserPosition::SIZE,
    )]
    pub position: Account<'info, UserPosition>,

    #[account(
        mut,
        constraint = vault.key() == reserve.vault @ ReserveError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = supplier_token_account.mint == reserve.token_mint @ ReserveError::MintMismatch,
    )]
    pub supplier_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub supplier: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_supply(ctx: Context<Supply>, amount: u64) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve_key = ctx.accounts.reserve.key();
    let reserve_info = ctx.accounts.reserve.to_account_info();
    let accounts = &mut *ctx.accounts;

    let position = &mut accounts.position;
    if position.owner == Pubkey::default() {
        // First supply: initialize position fields
        position.set_inner(UserPosition::new(accounts.supplier.key(), reserve_key));
        position.bump = ctx.bumps.position;
    }

    let mut ledger = SplTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        vault: &accounts.vault,
        user_token_account: &accounts.supplier_token_account,
        user: accounts.supplier.to_account_info(),
        reserve: reserve_info,
        token_mint: accounts.reserve.token_mint,
        reserve_bump: accounts.reserve.bump,
    };
    let params = SupplyParams {
        amount: amount as u128,
        supplier: accounts.supplier.key(),
        timestamp,
    };

    let result = execute_supply(
        &mut accounts.reserve,
        &mut accounts.position,
        &mut ledger,
        &params,
    )?;

    emit!(Supplied {
        reserve: reserve_key,
        user: params.supplier,
        amount: result.amount,
        scaled_minted: result.scaled_amount,
    });
    emit!(ReserveDataUpdated::from_reserve(reserve_key, &accounts.reserve));

    Ok(())
}
