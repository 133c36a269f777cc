use anchor_lang::prelude::*;

use crate::{constants::*, error::RaffleError, events::*, randomness::*, state::*};

/// Accounts required to start resolving the current round.
///
/// The raffle authority commits the Switchboard randomness account; any
/// keeper may then submit this instruction once the round is ready.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// Keeper paying for the transaction.
    pub keeper: Signer<'info>,

    /// The main raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard, committed by the raffle authority.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

impl Raffle {
    /// Moves the raffle to `Resolving` and binds it to a new randomness
    /// request. Fails without side effects unless the round is ready.
    pub fn request_winner<P: RandomnessProvider>(
        &mut self,
        now: i64,
        provider: &mut P,
    ) -> Result<RandomnessRequest> {
        if !self.upkeep_needed(now) {
            msg!("Players: {}", self.number_of_players());
            msg!("Pot: {}", self.pot_amount);
            msg!("State: {:?}", self.state);
            return err!(RaffleError::ResolutionNotNeeded);
        }

        let request =
            provider.request_randomness(&self.authority, &self.oracle_queue, &self.selection)?;
        require!(
            request.request_id != 0,
            RaffleError::InvalidRandomnessAccount
        );

        self.state = RaffleState::Resolving;
        self.pending_request_id = request.request_id;
        self.randomness_account = request.randomness_account;
        self.requested_at = now;
        Ok(request)
    }
}

/// Starts resolution once the readiness predicate holds.
///
/// `perform_data` is whatever `check_upkeep` handed the keeper; readiness is
/// re-evaluated here rather than trusted.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
    let clock = Clock::get()?;
    let mut provider = SwitchboardCommit::load(&ctx.accounts.randomness_account_data, &clock)?;
    let request = ctx
        .accounts
        .raffle
        .request_winner(clock.unix_timestamp, &mut provider)?;

    msg!(
        "Requested raffle winner: request {} ({} bytes of perform data)",
        request.request_id,
        perform_data.len()
    );

    emit!(RequestedRaffleWinner {
        request_id: request.request_id,
        randomness_account: request.randomness_account,
    });

    Ok(())
}
