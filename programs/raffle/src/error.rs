use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Entry (0x1000 - 0x1fff)
    #[msg("Paid amount is below the entrance fee")]
    InsufficientFund = 0x1000,

    #[msg("Raffle is not open")]
    NotOpen = 0x1001,

    #[msg("Raffle has reached its player limit")]
    RaffleFull = 0x1002,

    // Resolution (0x2000 - 0x2fff)
    #[msg("Raffle does not need resolution yet")]
    ResolutionNotNeeded = 0x2000,

    #[msg("Raffle is not waiting for randomness")]
    NotResolving = 0x2001,

    #[msg("Pending resolution has not timed out")]
    ResolutionNotStale = 0x2002,

    // Settlement (0x3000 - 0x3fff)
    #[msg("Fulfillment does not match the pending request")]
    UnknownRequest = 0x3000,

    #[msg("Winner payout could not be completed")]
    PayoutFailed = 0x3001,

    #[msg("Raffle has no players")]
    NoPlayers = 0x3002,

    #[msg("Player index out of bounds")]
    PlayerIndexOutOfBounds = 0x3003,

    // Randomness (0x4000 - 0x4fff)
    #[msg("Randomness account does not match the pending request")]
    IncorrectRandomnessAccount = 0x4000,

    #[msg("Randomness account belongs to another oracle queue")]
    IncorrectRandomnessQueue = 0x4001,

    #[msg("Randomness account data could not be parsed")]
    InvalidRandomnessAccount = 0x4002,

    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed = 0x4003,

    #[msg("Randomness not resolved")]
    RandomnessNotResolved = 0x4004,

    #[msg("Randomness account is not controlled by the raffle authority")]
    IncorrectRandomnessAuthority = 0x4005,

    // Configuration & access (0x5000 - 0x5fff)
    #[msg("Entrance fee must be greater than 0")]
    InvalidEntranceFee = 0x5000,

    #[msg("Interval must be greater than 0")]
    InvalidInterval = 0x5001,

    #[msg("Resolution timeout must be greater than 0")]
    InvalidResolutionTimeout = 0x5002,

    #[msg("Signer is not the raffle authority")]
    Unauthorized = 0x5003,

    #[msg("Arithmetic overflow")]
    Overflow = 0x5004,
}
