use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

/// Read-only access to the raffle, shared by the view instructions.
#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub state: RaffleState,
    pub entrance_fee: u64,
    pub interval: i64,
    pub number_of_players: u64,
    pub pot_amount: u64,
    pub recent_winner: Pubkey,
    pub latest_timestamp: i64,
    pub round: u64,
    pub num_words: u32,
    pub request_confirmations: u16,
}

impl Raffle {
    pub fn summary(&self) -> RaffleSummary {
        RaffleSummary {
            state: self.raffle_state(),
            entrance_fee: self.entrance_fee,
            interval: self.interval,
            number_of_players: self.number_of_players(),
            pot_amount: self.pot_amount,
            recent_winner: self.recent_winner,
            latest_timestamp: self.latest_timestamp(),
            round: self.round,
            num_words: self.num_words(),
            request_confirmations: self.request_confirmations(),
        }
    }
}

pub fn process_get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn process_get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
    Ok(ctx.accounts.raffle.summary())
}
