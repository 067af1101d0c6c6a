use anchor_lang::prelude::*;

use crate::errors::ReserveError;

/// Which side of a position a scaled balance belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceSide {
    Supply,
    Debt,
}

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct UserPosition {
    /// The wallet owning this position
    pub owner: Pubkey,
    /// The reserve this position belongs to
    pub reserve: Pubkey,
    /// Supplied balance in scaled units
    pub scaled_supply: u128,
    /// Borrowed balance in scaled units
    pub scaled_debt: u128,
    /// Collateral reserve backing this debt in isolation mode, if any
    pub isolation_collateral: Option<Pubkey>,
    /// PDA bump
    pub bump: u8,
}

impl UserPosition {
    pub const SIZE: usize = 8  // discriminator
        + 32   // owner
        + 32   // reserve
        + 16   // scaled_supply
        + 16   // scaled_debt
        + 1 + 32 // isolation_collateral
        + 1;   // bump

    pub fn new(owner: Pubkey, reserve: Pubkey) -> Self {
        Self {
            owner,
            reserve,
            scaled_supply: 0,
            scaled_debt: 0,
            isolation_collateral: None,
            bump: 0,
        }
    }

    pub fn scaled_balance_of(&self, side: BalanceSide) -> u128 {
        match side {
            BalanceSide::Supply => self.scaled_supply,
            BalanceSide::Debt => self.scaled_debt,
        }
    }

    pub fn mint(&mut self, side: BalanceSide, scaled_amount: u128) -> Result<()> {
        let balance = self.balance_mut(side);
        *balance = balance
            .checked_add(scaled_amount)
            .ok_or(ReserveError::MathOverflow)?;
        Ok(())
    }

    pub fn burn(&mut self, side: BalanceSide, scaled_amount: u128) -> Result<()> {
        let balance = self.balance_mut(side);
        *balance = balance
            .checked_sub(scaled_amount)
            .ok_or(ReserveError::MathOverflow)?;
        Ok(())
    }

    fn balance_mut(&mut self, side: BalanceSide) -> &mut u128 {
        match side {
            BalanceSide::Supply => &mut self.scaled_supply,
            BalanceSide::Debt => &mut self.scaled_debt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_and_burn_track_each_side() {
        let mut position = UserPosition::new(Pubkey::new_unique(), Pubkey::new_unique());
        position.mint(BalanceSide::Supply, 700).unwrap();
        position.mint(BalanceSide::Debt, 300).unwrap();
        position.burn(BalanceSide::Debt, 100).unwrap();

        assert_eq!(position.scaled_balance_of(BalanceSide::Supply), 700);
        assert_eq!(position.scaled_balance_of(BalanceSide::Debt), 200);
    }

    #[test]
    fn burn_below_zero_fails() {
        let mut position = UserPosition::new(Pubkey::new_unique(), Pubkey::new_unique());
        position.mint(BalanceSide::Debt, 1).unwrap();
        assert!(position.burn(BalanceSide::Debt, 2).is_err());
        assert_eq!(position.scaled_debt, 1);
    }
}
