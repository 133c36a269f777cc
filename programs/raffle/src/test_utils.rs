use std::fmt::Debug;

use anchor_lang::prelude::*;

use crate::{config::*, error::RaffleError, randomness::*, state::*, ID};

pub const START: i64 = 1_700_000_000;
pub const FEE: u64 = 10_000_000;
pub const INTERVAL: i64 = 30;
pub const RESOLUTION_TIMEOUT: i64 = 3_600;
pub const AUTHORITY: Pubkey = Pubkey::new_from_array([1; 32]);
pub const ORACLE_QUEUE: Pubkey = Pubkey::new_from_array([7; 32]);

pub fn raffle_config() -> RaffleConfig {
    RaffleConfig {
        entrance_fee: FEE,
        interval: INTERVAL,
        resolution_timeout: RESOLUTION_TIMEOUT,
        oracle_queue: ORACLE_QUEUE,
        selection: SelectionParams {
            key_hash: [3; 32],
            subscription_id: 1,
            request_confirmations: 3,
            callback_compute_limit: 200_000,
        },
    }
}

/// A freshly constructed raffle, created at `START`.
pub fn new_raffle() -> Raffle {
    let mut raffle = Raffle {
        bump: 0,
        authority: Pubkey::default(),
        state: RaffleState::Open,
        entrance_fee: 0,
        interval: 0,
        last_timestamp: 0,
        players: Vec::new(),
        pot_amount: 0,
        recent_winner: Pubkey::default(),
        round: 0,
        pending_request_id: 0,
        randomness_account: Pubkey::default(),
        requested_at: 0,
        resolution_timeout: 0,
        oracle_queue: Pubkey::default(),
        selection: SelectionParams::default(),
    };
    raffle
        .initialize(AUTHORITY, &raffle_config(), START, 255)
        .unwrap();
    raffle
}

/// A raffle with `count` players who each paid exactly the fee.
pub fn raffle_with_players(count: usize) -> (Raffle, Vec<Pubkey>) {
    let mut raffle = new_raffle();
    let players: Vec<Pubkey> = (0..count).map(|_| Pubkey::new_unique()).collect();
    for player in &players {
        raffle.enter(*player, FEE).unwrap();
    }
    (raffle, players)
}

/// A raffle with `count` players, resolved one interval after `START`.
pub fn resolving_raffle(count: usize) -> (Raffle, Vec<Pubkey>, u64) {
    let (mut raffle, players) = raffle_with_players(count);
    let mut provider = MockProvider::new(77);
    let request = raffle
        .request_winner(START + INTERVAL, &mut provider)
        .unwrap();
    (raffle, players, request.request_id)
}

/// Borsh encoding of the raffle, for asserting that nothing changed.
pub fn snapshot(raffle: &Raffle) -> Vec<u8> {
    let mut encoded = Vec::new();
    raffle.serialize(&mut encoded).unwrap();
    encoded
}

/// A writable account owned by this program.
pub fn account_info<'a>(
    key: &'a Pubkey,
    lamports: &'a mut u64,
    data: &'a mut [u8],
) -> AccountInfo<'a> {
    AccountInfo::new(key, false, true, lamports, data, &ID, false, 0)
}

pub fn assert_raffle_err<T: Debug>(result: Result<T>, expected: RaffleError) {
    assert_eq!(
        result.unwrap_err(),
        anchor_lang::error::Error::from(expected)
    );
}

/// Hands out sequential request ids and records what was asked for.
/// Only requests on behalf of `AUTHORITY` are accepted.
pub struct MockProvider {
    pub next_request_id: u64,
    pub randomness_account: Pubkey,
    pub requests: Vec<SelectionParams>,
}

impl MockProvider {
    pub fn new(first_request_id: u64) -> Self {
        Self {
            next_request_id: first_request_id,
            randomness_account: Pubkey::new_unique(),
            requests: Vec::new(),
        }
    }
}

impl RandomnessProvider for MockProvider {
    fn request_randomness(
        &mut self,
        authority: &Pubkey,
        oracle_queue: &Pubkey,
        params: &SelectionParams,
    ) -> Result<RandomnessRequest> {
        require_keys_eq!(
            *authority,
            AUTHORITY,
            RaffleError::IncorrectRandomnessAuthority
        );
        require_keys_eq!(
            *oracle_queue,
            ORACLE_QUEUE,
            RaffleError::IncorrectRandomnessQueue
        );
        self.requests.push(*params);

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        Ok(RandomnessRequest {
            request_id,
            randomness_account: self.randomness_account,
        })
    }
}
