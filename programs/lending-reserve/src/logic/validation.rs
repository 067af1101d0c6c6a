use anchor_lang::prelude::*;

use crate::constants::MAX_AMOUNT;
use crate::errors::ReserveError;
use crate::math::U256;
use crate::state::ReserveState;

fn require_active_and_unpaused(reserve: &ReserveState) -> Result<()> {
    require!(reserve.config.is_active, ReserveError::ReserveInactive);
    require!(!reserve.config.is_paused, ReserveError::ReservePaused);
    Ok(())
}

/// `total + amount <= cap` whole tokens; a zero cap is unlimited
fn within_cap(reserve: &ReserveState, total: u128, amount: u128, cap: u64) -> bool {
    if cap == 0 {
        return true;
    }
    let limit = U256::from(cap) * U256::from(reserve.token_unit());
    U256::from(total) + U256::from(amount) <= limit
}

pub fn validate_supply(reserve: &ReserveState, amount: u128) -> Result<()> {
    require!(amount != 0, ReserveError::InvalidAmount);
    require_active_and_unpaused(reserve)?;
    require!(!reserve.config.is_frozen, ReserveError::ReserveFrozen);
    require!(
        within_cap(reserve, reserve.total_supply()?, amount, reserve.config.supply_cap),
        ReserveError::SupplyCapExceeded
    );
    Ok(())
}

/// `amount` is the resolved amount (the sentinel already replaced by the balance).
pub fn validate_withdraw(reserve: &ReserveState, amount: u128, user_balance: u128) -> Result<()> {
    require!(amount != 0, ReserveError::InvalidAmount);
    require!(
        amount <= user_balance,
        ReserveError::NotEnoughAvailableUserBalance
    );
    require_active_and_unpaused(reserve)?;
    require!(
        amount <= reserve.available_liquidity,
        ReserveError::InsufficientLiquidity
    );
    Ok(())
}

pub fn validate_borrow(reserve: &ReserveState, amount: u128) -> Result<()> {
    require!(amount != 0, ReserveError::InvalidAmount);
    require_active_and_unpaused(reserve)?;
    require!(!reserve.config.is_frozen, ReserveError::ReserveFrozen);
    require!(
        reserve.config.borrowing_enabled,
        ReserveError::BorrowingNotEnabled
    );
    require!(
        amount <= reserve.available_liquidity,
        ReserveError::InsufficientLiquidity
    );
    require!(
        within_cap(reserve, reserve.total_debt()?, amount, reserve.config.borrow_cap),
        ReserveError::BorrowCapExceeded
    );
    Ok(())
}

/// `amount` is the requested amount, possibly the `MAX_AMOUNT` sentinel.
pub fn validate_repay(
    reserve: &ReserveState,
    amount: u128,
    payer: &Pubkey,
    on_behalf_of: &Pubkey,
    scaled_debt: u128,
) -> Result<()> {
    require!(amount != 0, ReserveError::InvalidAmount);
    require!(
        amount != MAX_AMOUNT || payer == on_behalf_of,
        ReserveError::NoExplicitAmountToRepayOnBehalf
    );
    require_active_and_unpaused(reserve)?;
    require!(scaled_debt != 0, ReserveError::NoDebtOfSelectedType);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReserveConfig;

    fn reserve() -> ReserveState {
        let mut reserve = ReserveState::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            6,
            ReserveConfig::default(),
            0,
        )
        .unwrap();
        reserve.available_liquidity = 1_000_000;
        reserve.total_scaled_supply = 1_000_000;
        reserve
    }

    fn rejection(result: Result<()>) -> Error {
        result.unwrap_err()
    }

    #[test]
    fn repay_checks_run_in_order() {
        let mut reserve = reserve();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        assert_eq!(
            rejection(validate_repay(&reserve, 0, &alice, &alice, 10)),
            ReserveError::InvalidAmount.into()
        );
        assert_eq!(
            rejection(validate_repay(&reserve, MAX_AMOUNT, &alice, &bob, 10)),
            ReserveError::NoExplicitAmountToRepayOnBehalf.into()
        );
        assert!(validate_repay(&reserve, 5, &alice, &bob, 10).is_ok());
        assert_eq!(
            rejection(validate_repay(&reserve, 5, &alice, &alice, 0)),
            ReserveError::NoDebtOfSelectedType.into()
        );

        reserve.config.is_paused = true;
        assert_eq!(
            rejection(validate_repay(&reserve, 5, &alice, &alice, 10)),
            ReserveError::ReservePaused.into()
        );
        reserve.config.is_active = false;
        assert_eq!(
            rejection(validate_repay(&reserve, 5, &alice, &alice, 10)),
            ReserveError::ReserveInactive.into()
        );
    }

    #[test]
    fn frozen_reserve_accepts_repay_and_withdraw_only() {
        let mut reserve = reserve();
        reserve.config.is_frozen = true;
        let alice = Pubkey::new_unique();

        assert!(validate_repay(&reserve, 5, &alice, &alice, 10).is_ok());
        assert!(validate_withdraw(&reserve, 5, 10).is_ok());
        assert_eq!(
            rejection(validate_supply(&reserve, 5)),
            ReserveError::ReserveFrozen.into()
        );
        assert_eq!(
            rejection(validate_borrow(&reserve, 5)),
            ReserveError::ReserveFrozen.into()
        );
    }

    #[test]
    fn supply_cap_is_in_whole_tokens() {
        let mut reserve = reserve();
        // 1 token supplied out of a 2 token cap
        reserve.config.supply_cap = 2;
        assert!(validate_supply(&reserve, 1_000_000).is_ok());
        assert_eq!(
            rejection(validate_supply(&reserve, 1_000_001)),
            ReserveError::SupplyCapExceeded.into()
        );
    }

    #[test]
    fn borrow_needs_liquidity_and_enabled_flag() {
        let mut reserve = reserve();
        assert_eq!(
            rejection(validate_borrow(&reserve, 1_000_001)),
            ReserveError::InsufficientLiquidity.into()
        );

        reserve.config.borrow_cap = 1;
        assert!(validate_borrow(&reserve, 1_000_000).is_ok());
        reserve.total_scaled_debt = 1;
        assert_eq!(
            rejection(validate_borrow(&reserve, 1_000_000)),
            ReserveError::BorrowCapExceeded.into()
        );

        reserve.config.borrowing_enabled = false;
        assert_eq!(
            rejection(validate_borrow(&reserve, 1)),
            ReserveError::BorrowingNotEnabled.into()
        );
    }
}
