use anchor_lang::prelude::*;

use crate::state::*;

use super::ViewRaffle;

/// Answer to a keeper poll.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    /// The keeper's `check_data`, returned untouched.
    pub perform_data: Vec<u8>,
}

impl Raffle {
    /// True when the round may be resolved at `now`.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.is_open();
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.pot_amount > 0;

        is_open && time_passed && has_players && has_balance
    }

    pub fn check_upkeep(&self, now: i64, check_data: Vec<u8>) -> UpkeepCheck {
        UpkeepCheck {
            upkeep_needed: self.upkeep_needed(now),
            perform_data: check_data,
        }
    }
}

/// Read-only poll used by the keeper to decide when to call `perform_upkeep`.
pub fn process_check_upkeep(ctx: Context<ViewRaffle>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let clock = Clock::get()?;
    Ok(ctx
        .accounts
        .raffle
        .check_upkeep(clock.unix_timestamp, check_data))
}
