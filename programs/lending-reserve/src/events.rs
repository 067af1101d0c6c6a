use anchor_lang::prelude::*;

use crate::state::ReserveState;

#[event]
pub struct ReserveInitialized {
    pub reserve: Pubkey,
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct ReserveConfigUpdated {
    pub reserve: Pubkey,
    pub is_active: bool,
    pub is_paused: bool,
    pub is_frozen: bool,
    pub borrowing_enabled: bool,
    pub debt_ceiling: u128,
}

#[event]
pub struct ReserveDataUpdated {
    pub reserve: Pubkey,
    pub liquidity_rate: u128,
    pub borrow_rate: u128,
    pub liquidity_index: u128,
    pub borrow_index: u128,
}

impl ReserveDataUpdated {
    pub fn from_reserve(key: Pubkey, reserve: &ReserveState) -> Self {
        Self {
            reserve: key,
            liquidity_rate: reserve.current_liquidity_rate,
            borrow_rate: reserve.current_borrow_rate,
            liquidity_index: reserve.liquidity_index,
            borrow_index: reserve.borrow_index,
        }
    }
}

#[event]
pub struct Supplied {
    pub reserve: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub scaled_minted: u128,
}

#[event]
pub struct Withdrawn {
    pub reserve: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub scaled_burned: u128,
}

#[event]
pub struct Borrowed {
    pub reserve: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub scaled_minted: u128,
    pub borrow_rate: u128,
}

#[event]
pub struct Repaid {
    pub reserve: Pubkey,
    pub payer: Pubkey,
    pub on_behalf_of: Pubkey,
    pub amount: u128,
    pub scaled_burned: u128,
}

#[event]
pub struct IsolationModeTotalDebtUpdated {
    pub collateral_reserve: Pubkey,
    pub total_debt: u128,
}

#[event]
pub struct IsolationModeChanged {
    pub position: Pubkey,
    pub owner: Pubkey,
    pub collateral_reserve: Option<Pubkey>,
}
