use anchor_lang::prelude::*;

/// Seed of the singleton raffle PDA. The PDA also holds the pot lamports.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round; fixes the raffle account size.
pub const MAX_PLAYERS: usize = 100;

/// Random values requested per resolution.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Anchor account discriminator size.
pub const DISCRIMINATOR_SIZE: usize = 8;
