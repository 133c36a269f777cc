use anchor_lang::prelude::*;

use crate::{config::*, constants::*, error::RaffleError, events::*, state::*};

/// Accounts required to create the raffle.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The account paying for account creation; becomes the raffle authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account, also the pot custodian.
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to abandon a resolution the oracle never answered.
#[derive(Accounts)]
pub struct CancelResolution<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

impl Raffle {
    /// Reopens a raffle stuck in `Resolving`. Players and pot are kept, so
    /// the round can be resolved again; the abandoned request id stops
    /// matching. Returns that id.
    pub fn cancel_resolution(&mut self, caller: Pubkey, now: i64) -> Result<u64> {
        require_keys_eq!(caller, self.authority, RaffleError::Unauthorized);
        require!(
            self.state == RaffleState::Resolving,
            RaffleError::NotResolving
        );
        require!(
            now.saturating_sub(self.requested_at) >= self.resolution_timeout,
            RaffleError::ResolutionNotStale
        );

        let request_id = self.pending_request_id;
        self.state = RaffleState::Open;
        self.clear_pending_request();
        Ok(request_id)
    }
}

/// Creates the raffle with its fixed fee, interval and oracle parameters.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeRaffle accounts
/// * `config` - Deployment parameters, validated before anything is written
pub fn process_initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.payer.key();

    ctx.accounts.raffle.initialize(
        authority,
        &config,
        clock.unix_timestamp,
        ctx.bumps.raffle,
    )?;

    msg!(
        "Raffle initialized: fee {} lamports, interval {}s",
        config.entrance_fee,
        config.interval
    );

    emit!(RaffleInitialized {
        authority,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
    });

    Ok(())
}

/// Returns a stuck raffle to `Open` once `resolution_timeout` has elapsed
/// since the request. Only the authority may call this.
pub fn process_cancel_resolution(ctx: Context<CancelResolution>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx
        .accounts
        .raffle
        .cancel_resolution(ctx.accounts.authority.key(), clock.unix_timestamp)?;

    msg!("Cancelled randomness request {}", request_id);

    emit!(ResolutionCancelled { request_id });

    Ok(())
}
