use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{config::SelectionParams, error::RaffleError};

/// A randomness request accepted by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    /// Correlation token the fulfillment must echo back. Never `0`.
    pub request_id: u64,
    /// Account the oracle will reveal the value into.
    pub randomness_account: Pubkey,
}

/// First half of the resolution exchange: asks an oracle for one random
/// value. The answer arrives later through `fulfill_randomness`, carrying
/// the returned `request_id`.
///
/// Only randomness controlled by `authority` is accepted.
pub trait RandomnessProvider {
    fn request_randomness(
        &mut self,
        authority: &Pubkey,
        oracle_queue: &Pubkey,
        params: &SelectionParams,
    ) -> Result<RandomnessRequest>;
}

/// A Switchboard on-demand randomness account that the raffle authority
/// committed in the slot before `perform_upkeep`.
#[derive(Clone, Copy, Debug)]
pub struct SwitchboardCommit {
    pub account: Pubkey,
    /// Signer allowed to commit and reveal this account.
    pub authority: Pubkey,
    pub queue: Pubkey,
    pub seed_slot: u64,
    pub current_slot: u64,
}

impl SwitchboardCommit {
    pub fn load(account: &AccountInfo, clock: &Clock) -> Result<Self> {
        let randomness_data = RandomnessAccountData::parse(account.data.borrow())
            .map_err(|_| error!(RaffleError::InvalidRandomnessAccount))?;

        Ok(Self {
            account: account.key(),
            authority: randomness_data.authority,
            queue: randomness_data.queue,
            seed_slot: randomness_data.seed_slot,
            current_slot: clock.slot,
        })
    }
}

impl RandomnessProvider for SwitchboardCommit {
    fn request_randomness(
        &mut self,
        authority: &Pubkey,
        oracle_queue: &Pubkey,
        params: &SelectionParams,
    ) -> Result<RandomnessRequest> {
        require_keys_eq!(
            self.authority,
            *authority,
            RaffleError::IncorrectRandomnessAuthority
        );
        require_keys_eq!(
            self.queue,
            *oracle_queue,
            RaffleError::IncorrectRandomnessQueue
        );

        // The commit must be from the previous slot; anything older may
        // already be revealed.
        if self.seed_slot == 0 || self.seed_slot != self.current_slot.saturating_sub(1) {
            msg!("Current slot: {}", self.current_slot);
            msg!("Seed slot: {}", self.seed_slot);
            return err!(RaffleError::RandomnessAlreadyRevealed);
        }

        msg!(
            "Requesting randomness: seed slot {}, {} confirmations",
            self.seed_slot,
            params.request_confirmations
        );

        Ok(RandomnessRequest {
            request_id: self.seed_slot,
            randomness_account: self.account,
        })
    }
}

/// The revealed side of a Switchboard randomness account.
#[derive(Clone, Copy, Debug)]
pub struct SwitchboardReveal {
    pub account: Pubkey,
    pub seed_slot: u64,
    /// `None` until the oracle has revealed in the current slot.
    pub value: Option<[u8; 32]>,
}

impl SwitchboardReveal {
    pub fn load(account: &AccountInfo, clock: &Clock) -> Result<Self> {
        let randomness_data = RandomnessAccountData::parse(account.data.borrow())
            .map_err(|_| error!(RaffleError::InvalidRandomnessAccount))?;

        Ok(Self {
            account: account.key(),
            seed_slot: randomness_data.seed_slot,
            value: randomness_data.get_value(clock).ok(),
        })
    }

    /// Returns the random word for `request_id`, provided this account is
    /// the one bound to it.
    pub fn random_word(&self, request_id: u64, bound_account: &Pubkey) -> Result<u64> {
        require_keys_eq!(
            self.account,
            *bound_account,
            RaffleError::IncorrectRandomnessAccount
        );
        require!(self.seed_slot == request_id, RaffleError::UnknownRequest);

        let value = self.value.ok_or(RaffleError::RandomnessNotResolved)?;
        Ok(random_word(&value))
    }
}

/// Little-endian word from the first eight bytes of a revealed value.
pub fn random_word(value: &[u8; 32]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&value[..8]);
    u64::from_le_bytes(word)
}
