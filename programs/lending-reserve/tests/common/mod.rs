#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use lending_reserve::errors::ReserveError;
use lending_reserve::logic::{update_rates_from_totals, AssetLedger};
use lending_reserve::state::{ReserveConfig, ReserveState, UserPosition};

pub const START: i64 = 1_700_000_000;

/// In-memory token balances with a single vault.
#[derive(Default)]
pub struct MemoryLedger {
    pub balances: HashMap<Pubkey, u128>,
    pub allowances: HashMap<Pubkey, u128>,
    pub vault: u128,
}

impl MemoryLedger {
    pub fn with_vault(vault: u128) -> Self {
        Self {
            vault,
            ..Self::default()
        }
    }

    /// Credit `owner` and approve the vault for everything it holds.
    pub fn fund(&mut self, owner: Pubkey, amount: u128) {
        *self.balances.entry(owner).or_default() += amount;
        self.allowances.insert(owner, u128::MAX);
    }

    pub fn balance(&self, owner: &Pubkey) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }
}

impl AssetLedger for MemoryLedger {
    fn balance_of(&self, owner: &Pubkey) -> Result<u128> {
        Ok(self.balance(owner))
    }

    fn allowance(&self, owner: &Pubkey) -> Result<u128> {
        Ok(self.allowances.get(owner).copied().unwrap_or(0))
    }

    fn transfer_from(&mut self, payer: &Pubkey, amount: u128) -> Result<()> {
        require!(
            self.balance_of(payer)? >= amount && self.allowance(payer)? >= amount,
            ReserveError::InsufficientFunds
        );
        *self.balances.entry(*payer).or_default() -= amount;
        *self.allowances.entry(*payer).or_default() -= amount;
        self.vault += amount;
        Ok(())
    }

    fn transfer_to(&mut self, recipient: &Pubkey, amount: u128) -> Result<()> {
        require!(self.vault >= amount, ReserveError::InsufficientFunds);
        self.vault -= amount;
        *self.balances.entry(*recipient).or_default() += amount;
        Ok(())
    }
}

pub fn new_reserve(decimals: u8, config: ReserveConfig) -> ReserveState {
    ReserveState::new(
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        decimals,
        config,
        START,
    )
    .unwrap()
}

/// A reserve holding `supplied` with `debt` of it lent to the returned
/// position, both scaled 1:1 at the initial indices. The ledger vault holds
/// the remaining liquidity.
pub fn borrowed_reserve(
    decimals: u8,
    supplied: u128,
    debt: u128,
) -> (ReserveState, UserPosition, MemoryLedger) {
    let mut reserve = new_reserve(decimals, ReserveConfig::default());
    reserve.total_scaled_supply = supplied;
    reserve.total_scaled_debt = debt;
    reserve.available_liquidity = supplied - debt;
    update_rates_from_totals(&mut reserve).unwrap();

    let mut position = UserPosition::new(Pubkey::new_unique(), Pubkey::new_unique());
    position.scaled_debt = debt;

    let ledger = MemoryLedger::with_vault(reserve.available_liquidity);
    (reserve, position, ledger)
}
