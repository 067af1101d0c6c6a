use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::ReserveError;
use crate::events::{IsolationModeTotalDebtUpdated, Repaid, ReserveDataUpdated};
use crate::instructions::token_ledger::{requested_amount, SplTokenLedger};
use crate::logic::{execute_repay, IsolationCollateral, RepayParams};
use crate::state::{ReserveState, UserPosition};

#[derive(Accounts)]
pub struct Repay<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.token_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, ReserveState>,

    #[account(
        mut,
        seeds = [USER_POSITION_SEED, reserve.key().as_ref(), on_behalf_of.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == on_behalf_of.key() @ ReserveError::Unauthorized,
        constraint = position.reserve == reserve.key() @ ReserveError::Unauthorized,
    )]
    pub position: Account<'info, UserPosition>,

    /// CHECK: only used as the debtor key; the position seeds bind it
    pub on_behalf_of: UncheckedAccount<'info>,

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
        constraint = payer_token_account.mint == reserve.token_mint @ ReserveError::MintMismatch,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// `amount == u64::MAX` settles the whole debt; only the debtor may ask for that.
pub fn handle_repay(ctx: Context<Repay>, amount: u64) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let reserve_key = ctx.accounts.reserve.key();
    let reserve_info = ctx.accounts.reserve.to_account_info();
    let accounts = &mut *ctx.accounts;

    let mut ledger = SplTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        vault: &accounts.vault,
        user_token_account: &accounts.payer_token_account,
        user: accounts.payer.to_account_info(),
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
    let params = RepayParams {
        amount: requested_amount(amount),
        payer: accounts.payer.key(),
        on_behalf_of: accounts.on_behalf_of.key(),
        timestamp,
    };

    let result = execute_repay(
        &mut accounts.reserve,
        &mut accounts.position,
        isolation_collateral,
        &mut ledger,
        &params,
    )?;

    emit!(Repaid {
        reserve: reserve_key,
        payer: params.payer,
        on_behalf_of: params.on_behalf_of,
        amount: result.amount_repaid,
        scaled_burned: result.scaled_burned,
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

    if result.remaining_scaled_debt == 0 {
        msg!("Debt of {} fully repaid", params.on_behalf_of);
    }

    Ok(())
}
