use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod math;
pub mod state;

use instructions::*;
use logic::ReserveConfigUpdate;
use state::{ReserveConfig, ReserveDataView};

declare_id!("2chVPk6DV21qWuyUA2eHAzATdFSHM7ykv1fVX7Gv6nor");

#[program]
pub mod lending_reserve {
    use super::*;

    pub fn initialize_reserve(ctx: Context<InitializeReserve>, config: ReserveConfig) -> Result<()> {
        instructions::initialize_reserve::handle_initialize_reserve(ctx, config)
    }

    pub fn update_reserve_config(
        ctx: Context<UpdateReserveConfig>,
        update: ReserveConfigUpdate,
    ) -> Result<()> {
        instructions::update_reserve::handle_update_reserve_config(ctx, update)
    }

    pub fn supply(ctx: Context<Supply>, amount: u64) -> Result<()> {
        instructions::supply::handle_supply(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handle_withdraw(ctx, amount)
    }

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        instructions::borrow::handle_borrow(ctx, amount)
    }

    pub fn repay(ctx: Context<Repay>, amount: u64) -> Result<()> {
        instructions::repay::handle_repay(ctx, amount)
    }

    pub fn enter_isolation_mode(ctx: Context<EnterIsolationMode>) -> Result<()> {
        instructions::isolation_mode::handle_enter_isolation_mode(ctx)
    }

    pub fn exit_isolation_mode(ctx: Context<ExitIsolationMode>) -> Result<()> {
        instructions::isolation_mode::handle_exit_isolation_mode(ctx)
    }

    pub fn get_reserve_data(ctx: Context<GetReserveData>) -> Result<ReserveDataView> {
        instructions::get_reserve_data::handle_get_reserve_data(ctx)
    }

    pub fn get_normalized_indices(ctx: Context<GetReserveData>) -> Result<NormalizedIndices> {
        instructions::get_reserve_data::handle_get_normalized_indices(ctx)
    }
}
