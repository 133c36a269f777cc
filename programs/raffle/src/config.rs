use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Parameters forwarded with every randomness request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct SelectionParams {
    /// Identifier of the oracle key material used to prove the value.
    pub key_hash: [u8; 32],
    /// Subscription the request is billed to.
    pub subscription_id: u64,
    /// Slots the oracle waits before revealing.
    pub request_confirmations: u16,
    /// Compute budget reserved for the fulfillment instruction.
    pub callback_compute_limit: u32,
}

/// Deployment parameters, passed once to `initialize_raffle`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Price of one entry, in lamports.
    pub entrance_fee: u64,
    /// Minimum number of seconds between two settlements.
    pub interval: i64,
    /// Seconds after which the authority may cancel an unanswered request.
    pub resolution_timeout: i64,
    /// Switchboard queue randomness accounts must belong to.
    pub oracle_queue: Pubkey,
    pub selection: SelectionParams,
}

impl RaffleConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(self.interval > 0, RaffleError::InvalidInterval);
        require!(
            self.resolution_timeout > 0,
            RaffleError::InvalidResolutionTimeout
        );
        Ok(())
    }
}
