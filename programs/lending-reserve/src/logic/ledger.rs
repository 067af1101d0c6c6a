use anchor_lang::prelude::*;

/// Token movements between users and the reserve vault.
///
/// Implementations must either move the full amount or return an error
/// (`ReserveError::InsufficientFunds` on a balance or allowance shortfall)
/// without moving anything. The settlement functions call the ledger exactly
/// once per action, after every check has passed and before any reserve or
/// position state is committed.
pub trait AssetLedger {
    /// Token balance held by `owner`
    fn balance_of(&self, owner: &Pubkey) -> Result<u128>;

    /// Amount the reserve may pull from `owner`
    fn allowance(&self, owner: &Pubkey) -> Result<u128>;

    /// Move `amount` from `payer` into the reserve vault
    fn transfer_from(&mut self, payer: &Pubkey, amount: u128) -> Result<()>;

    /// Move `amount` from the reserve vault to `recipient`
    fn transfer_to(&mut self, recipient: &Pubkey, amount: u128) -> Result<()>;
}
