use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub authority: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
}

#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RequestedRaffleWinner {
    pub request_id: u64,
    pub randomness_account: Pubkey,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub amount: u64,
    pub round: u64,
}

#[event]
pub struct ResolutionCancelled {
    pub request_id: u64,
}
