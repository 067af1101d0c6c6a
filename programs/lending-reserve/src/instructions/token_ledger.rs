use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::ReserveError;
use crate::logic::AssetLedger;

/// Instruction amounts are SPL u64s; u64::MAX stands for "the whole balance".
pub fn requested_amount(amount: u64) -> u128 {
    if amount == u64::MAX {
        MAX_AMOUNT
    } else {
        amount as u128
    }
}

fn to_token_amount(amount: u128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| error!(ReserveError::MathOverflow))
}

/// `AssetLedger` over one user token account and the reserve vault.
/// The vault is owned by the reserve PDA, which signs outgoing transfers.
pub struct SplTokenLedger<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub user_token_account: &'a Account<'info, TokenAccount>,
    /// Signer moving tokens out of `user_token_account`: its owner or delegate
    pub user: AccountInfo<'info>,
    pub reserve: AccountInfo<'info>,
    pub token_mint: Pubkey,
    pub reserve_bump: u8,
}

impl<'a, 'info> AssetLedger for SplTokenLedger<'a, 'info> {
    fn balance_of(&self, owner: &Pubkey) -> Result<u128> {
        if *owner == self.reserve.key() {
            return Ok(self.vault.amount as u128);
        }
        if *owner == self.user.key() {
            return Ok(self.user_token_account.amount as u128);
        }
        Ok(0)
    }

    fn allowance(&self, owner: &Pubkey) -> Result<u128> {
        let account = self.user_token_account;
        if *owner != self.user.key() {
            return Ok(0);
        }
        if account.owner == *owner {
            return Ok(account.amount as u128);
        }
        if account.delegate == COption::Some(*owner) {
            return Ok(account.delegated_amount as u128);
        }
        Ok(0)
    }

    fn transfer_from(&mut self, payer: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*payer, self.user.key(), ReserveError::Unauthorized);
        require!(
            self.balance_of(payer)? >= amount && self.allowance(payer)? >= amount,
            ReserveError::InsufficientFunds
        );

        token::transfer(
            CpiContext::new(
                self.token_program.clone(),
                Transfer {
                    from: self.user_token_account.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.user.clone(),
                },
            ),
            to_token_amount(amount)?,
        )
    }

    fn transfer_to(&mut self, recipient: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*recipient, self.user.key(), ReserveError::Unauthorized);
        require!(
            self.balance_of(&self.reserve.key())? >= amount,
            ReserveError::InsufficientFunds
        );

        // PDA signer seeds for vault transfer
        let mint_key = self.token_mint;
        let reserve_seeds = &[RESERVE_SEED, mint_key.as_ref(), &[self.reserve_bump]];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.user_token_account.to_account_info(),
                    authority: self.reserve.clone(),
                },
                &[reserve_seeds],
            ),
            to_token_amount(amount)?,
        )
    }
}
