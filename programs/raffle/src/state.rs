use anchor_lang::prelude::*;

use crate::{config::*, constants::*, error::RaffleError};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries; may be resolved once the interval has passed.
    Open,
    /// Waiting for the oracle to answer `pending_request_id`.
    Resolving,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Operator allowed to cancel a resolution the oracle never answered.
    pub authority: Pubkey,

    pub state: RaffleState,

    /// Lamports required per entry. Fixed at construction.
    pub entrance_fee: u64,

    /// Minimum seconds between settlements. Fixed at construction.
    pub interval: i64,

    /// UNIX timestamp of the last settlement, or of construction.
    pub last_timestamp: i64,

    /// Entrants of the current round, in entry order.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports held for the current round on top of the rent reserve.
    pub pot_amount: u64,

    /// Winner of the last settled round.
    pub recent_winner: Pubkey,

    /// Number of settled rounds.
    pub round: u64,

    /// Outstanding randomness request; `0` when none is pending.
    pub pending_request_id: u64,

    /// Switchboard randomness account bound to the pending request.
    pub randomness_account: Pubkey,

    /// UNIX timestamp at which the pending request was issued.
    pub requested_at: i64,

    pub resolution_timeout: i64,

    pub oracle_queue: Pubkey,

    pub selection: SelectionParams,
}

impl Raffle {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        config: &RaffleConfig,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        config.validate()?;

        self.bump = bump;
        self.authority = authority;
        self.state = RaffleState::Open;
        self.entrance_fee = config.entrance_fee;
        self.interval = config.interval;
        self.last_timestamp = now;
        self.players = Vec::new();
        self.pot_amount = 0;
        self.recent_winner = Pubkey::default();
        self.round = 0;
        self.pending_request_id = 0;
        self.randomness_account = Pubkey::default();
        self.requested_at = 0;
        self.resolution_timeout = config.resolution_timeout;
        self.oracle_queue = config.oracle_queue;
        self.selection = config.selection;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.state
    }

    pub fn number_of_players(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }

    pub fn latest_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn request_confirmations(&self) -> u16 {
        self.selection.request_confirmations
    }

    /// Drops the pending request and its bound randomness account.
    pub(crate) fn clear_pending_request(&mut self) {
        self.pending_request_id = 0;
        self.randomness_account = Pubkey::default();
        self.requested_at = 0;
    }
}
