#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use config::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("5RafLeVRFxh4kN8vq2yTnWcQ3pZsJdMuE7gBo9aHt6Kc");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
        process_initialize_raffle(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<ViewRaffle>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        process_check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        process_perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_randomness(ctx: Context<FulfillRandomness>, request_id: u64) -> Result<()> {
        process_fulfill_randomness(ctx, request_id)
    }

    pub fn cancel_resolution(ctx: Context<CancelResolution>) -> Result<()> {
        process_cancel_resolution(ctx)
    }

    pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }

    pub fn get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
        process_get_raffle_summary(ctx)
    }
}
