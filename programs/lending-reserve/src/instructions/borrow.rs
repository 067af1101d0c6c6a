use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::{Borrowed, IsolationModeTotalDebtUpdated, ReserveDataUpdated};
use crate::instructions::token_ledger::SplTokenLedger;
use crate::logic::{execute_borrow, BorrowParams, IsolationCollateral};
use crate::state::{ReserveState, UserPosition};

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,

    #[account(
        init_if_needed,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), borrower.key().as_ref()],
        bump,
        payer = borrower,
        space = UserPosition::SIZE,
    )]
    pub position: Account<'info, UserPosition>,

    /// Required when the position is in isolation mode
    #[account(
        mut,
        constraint = isolation_collateral_reserve.key() != reserve.key() @ ReserveError::IsolationCollateralMismatch,
    )]
    pub isolation_collateral_reserve: Option<Account<'info, ReserveState>>,

    #[account(
        mut,
        constraint = vault.key() == reserve.vault @ ReserveError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = borrower_token_account.mint == reserve.token_mint @ ReserveError::MintMismatch,
    )]
    pub borrower_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub borrower: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve_key = ctx.accounts.reserve.key();
    let reserve_info = ctx.accounts.reserve.to_account_info();
    let accounts = &mut *ctx.accounts;

    let position = &mut accounts.position;
    if position.owner == Pubkey::default() {
        position.set_inner(UserPosition::new(accounts.borrower.key(), reserve_key));
        position.bump = ctx.bumps.position;
    }

    let mut ledger = SplTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        vault: &accounts.vault,
        user_token_account: &accounts.borrower_token_account,
        user: accounts.borrower.to_account_info(),
        reserve: reserve_info,
        token_mint: accounts.reserve.token_mint,
        reserve_bump: accounts.reserve.bump,
    };
    let isolation_collateral =
        accounts
            .isolation_collateral_reserve
            .as_mut()
            .map(|collateral| IsolationCollateral {
                key: collateral.key(),
                reserve: &mut **collateral,
            });
    let params = BorrowParams {
        amount: amount as u128,
        borrower: accounts.borrower.key(),
        timestamp,
    };

    let result = execute_borrow(
        &mut accounts.reserve,
        &mut accounts.position,
        isolation_collateral,
        &mut ledger,
        &params,
    )?;

    emit!(Borrowed {
        reserve: reserve_key,
        user: params.borrower,
        amount: result.amount,
        scaled_minted: result.scaled_minted,
        borrow_rate: accounts.reserve.current_borrow_rate,
    });
    emit!(ReserveDataUpdated::from_reserve(reserve_key, &accounts.reserve));

    if let (Some(total_debt), Some(collateral)) = (
        result.isolation_mode_total_debt,
        accounts.isolation_collateral_reserve.as_ref(),
    ) {
        emit!(IsolationModeTotalDebtUpdated {
            collateral_reserve: collateral.key(),
            total_debt,
        });
    }

    Ok(())
}
