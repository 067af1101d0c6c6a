use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ReserveError;
use crate::math::ray_mul;

/// Two-slope borrow rate curve, all values ray-scaled annual rates
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterestRateCurve {
    /// Borrow rate at zero utilization
    pub base_rate: u128,
    /// Rate added between zero and optimal utilization
    pub slope1: u128,
    /// Rate added between optimal and full utilization
    pub slope2: u128,
    /// Kink of the curve, in (0, RAY]
    pub optimal_utilization: u128,
}

impl InterestRateCurve {
    pub const SIZE: usize = 16 * 4;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.optimal_utilization > 0 && self.optimal_utilization <= RAY,
            ReserveError::InvalidRateCurve
        );
        require!(
            self.base_rate <= MAX_RATE && self.slope1 <= MAX_RATE && self.slope2 <= MAX_RATE,
            ReserveError::InvalidRateCurve
        );
        Ok(())
    }
}

impl Default for InterestRateCurve {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            slope1: DEFAULT_SLOPE1,
            slope2: DEFAULT_SLOPE2,
            optimal_utilization: DEFAULT_OPTIMAL_UTILIZATION,
        }
    }
}

/// Administrative switches and limits of a reserve
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveConfig {
    pub is_active: bool,
    pub is_paused: bool,
    /// Frozen reserves accept repay and withdraw only
    pub is_frozen: bool,
    pub borrowing_enabled: bool,
    /// Whether isolated borrowers may draw this asset
    pub borrowable_in_isolation: bool,
    /// Whole tokens, 0 = unlimited
    pub supply_cap: u64,
    /// Whole tokens, 0 = unlimited
    pub borrow_cap: u64,
    /// Isolation debt ceiling in DEBT_CEILING_DECIMALS units, 0 = not an isolated collateral
    pub debt_ceiling: u128,
    pub curve: InterestRateCurve,
}

impl ReserveConfig {
    pub const SIZE: usize = 5 + 8 + 8 + 16 + InterestRateCurve::SIZE;
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self {
            is_active: true,
            is_paused: false,
            is_frozen: false,
            borrowing_enabled: true,
            borrowable_in_isolation: false,
            supply_cap: 0,
            borrow_cap: 0,
            debt_ceiling: 0,
            curve: InterestRateCurve::default(),
        }
    }
}

#[account]
#[derive(Debug)]
pub struct ReserveState {
    /// Admin allowed to change the configuration
    pub authority: Pubkey,
    /// The SPL token mint this reserve lends
    pub token_mint: Pubkey,
    /// The reserve's token vault (PDA-owned)
    pub vault: Pubkey,
    /// Decimals of the underlying mint
    pub decimals: u8,
    /// PDA bump seed
    pub bump: u8,
    /// Vault bump seed
    pub vault_bump: u8,
    pub config: ReserveConfig,
    /// Cumulative supply index (ray), starts at RAY
    pub liquidity_index: u128,
    /// Cumulative borrow index (ray), starts at RAY
    pub borrow_index: u128,
    /// Annual supply rate (ray) as of last_update_timestamp
    pub current_liquidity_rate: u128,
    /// Annual borrow rate (ray) as of last_update_timestamp
    pub current_borrow_rate: u128,
    pub last_update_timestamp: i64,
    /// Sum of all supply positions, in scaled units
    pub total_scaled_supply: u128,
    /// Sum of all debt positions, in scaled units
    pub total_scaled_debt: u128,
    /// Underlying tokens held by the vault and not lent out
    pub available_liquidity: u128,
    /// Debt drawn by isolated borrowers against this reserve as collateral,
    /// in DEBT_CEILING_DECIMALS units
    pub isolation_mode_total_debt: u128,
    /// Reserved for future upgrades
    pub _reserved: [u8; 64],
}

impl ReserveState {
    pub const SIZE: usize = 8  // discriminator
        + 32   // authority
        + 32   // token_mint
        + 32   // vault
        + 1    // decimals
        + 1    // bump
        + 1    // vault_bump
        + ReserveConfig::SIZE
        + 16 * 4 // indices and rates
        + 8    // last_update_timestamp
        + 16 * 4 // scaled totals, liquidity, isolation debt
        + 64;  // _reserved

    pub fn new(
        authority: Pubkey,
        token_mint: Pubkey,
        vault: Pubkey,
        decimals: u8,
        config: ReserveConfig,
        timestamp: i64,
    ) -> Result<Self> {
        require!(
            (DEBT_CEILING_DECIMALS..=MAX_DECIMALS).contains(&decimals),
            ReserveError::InvalidDecimals
        );
        config.curve.validate()?;

        Ok(Self {
            authority,
            token_mint,
            vault,
            decimals,
            bump: 0,
            vault_bump: 0,
            config,
            liquidity_index: RAY,
            borrow_index: RAY,
            current_liquidity_rate: 0,
            current_borrow_rate: 0,
            last_update_timestamp: timestamp,
            total_scaled_supply: 0,
            total_scaled_debt: 0,
            available_liquidity: 0,
            isolation_mode_total_debt: 0,
            _reserved: [0u8; 64],
        })
    }

    /// Real debt of the whole reserve at the stored borrow index
    pub fn total_debt(&self) -> Result<u128> {
        ray_mul(self.total_scaled_debt, self.borrow_index)
    }

    /// Real supply of the whole reserve at the stored liquidity index
    pub fn total_supply(&self) -> Result<u128> {
        ray_mul(self.total_scaled_supply, self.liquidity_index)
    }

    /// One whole token in native units
    pub fn token_unit(&self) -> u128 {
        10u128.pow(self.decimals as u32)
    }

    /// Convert a native amount into isolation debt units, truncating.
    pub fn to_isolation_units(&self, amount: u128) -> u128 {
        amount / 10u128.pow((self.decimals - DEBT_CEILING_DECIMALS) as u32)
    }

    pub fn snapshot(&self) -> ReserveDataView {
        ReserveDataView {
            liquidity_index: self.liquidity_index,
            borrow_index: self.borrow_index,
            current_liquidity_rate: self.current_liquidity_rate,
            current_borrow_rate: self.current_borrow_rate,
            last_update_timestamp: self.last_update_timestamp,
            isolation_mode_total_debt: self.isolation_mode_total_debt,
            available_liquidity: self.available_liquidity,
            total_scaled_supply: self.total_scaled_supply,
            total_scaled_debt: self.total_scaled_debt,
        }
    }
}

/// Read-only view of the accrual state, returned by `get_reserve_data`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReserveDataView {
    pub liquidity_index: u128,
    pub borrow_index: u128,
    pub current_liquidity_rate: u128,
    pub current_borrow_rate: u128,
    pub last_update_timestamp: i64,
    pub isolation_mode_total_debt: u128,
    pub available_liquidity: u128,
    pub total_scaled_supply: u128,
    pub total_scaled_debt: u128,
}
