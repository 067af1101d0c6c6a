use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::ReserveInitialized;
use crate::state::{ReserveConfig, ReserveState};

#[derive(Accounts)]
pub struct InitializeReserve<'info> {
    #[account(
        init,
        seeds = [RESERVE_SEED, token_mint.key().as_ref()],
        bump,
        payer = authority,
        space = ReserveState::SIZE,
    )]
    pub reserve: Account<'info, ReserveState>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        seeds = [RESERVE_VAULT_SEED, reserve.key().as_ref()],
        bump,
        payer = authority,
        token::mint = token_mint,
        token::authority = reserve,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_initialize_reserve(
    ctx: Context<InitializeReserve>,
    config: ReserveConfig,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;

    let mut state = ReserveState::new(
        ctx.accounts.authority.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.vault.key(),
        ctx.accounts.token_mint.decimals,
        config,
        timestamp,
    )?;
    state.bump = ctx.bumps.reserve;
    state.vault_bump = ctx.bumps.vault;

    let reserve = &mut ctx.accounts.reserve;
    reserve.set_inner(state);

    emit!(ReserveInitialized {
        reserve: reserve.key(),
        authority: reserve.authority,
        token_mint: reserve.token_mint,
        decimals: reserve.decimals,
    });

    Ok(())
}
