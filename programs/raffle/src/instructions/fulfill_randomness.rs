use anchor_lang::prelude::*;

use crate::{constants::*, error::RaffleError, events::*, randomness::*, state::*};

/// Accounts required to settle the round once Switchboard has revealed.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// Account paying transaction fees.
    pub payer: Signer<'info>,

    /// The main raffle state account; pays the pot out of its lamports.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness account bound to the pending request.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pot.
    /// CHECK: Must be the selected winner; compared before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Outcome of a settled round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub winner: Pubkey,
    pub amount: u64,
    pub round: u64,
}

impl Raffle {
    /// Fails with `UnknownRequest` unless `request_id` is the outstanding one.
    pub fn ensure_pending(&self, request_id: u64) -> Result<()> {
        require!(
            request_id != 0 && request_id == self.pending_request_id,
            RaffleError::UnknownRequest
        );
        require!(
            self.state == RaffleState::Resolving,
            RaffleError::NotResolving
        );
        Ok(())
    }

    pub fn select_winner(&self, random_word: u64) -> Result<Pubkey> {
        let index = random_word
            .checked_rem(self.number_of_players())
            .ok_or(RaffleError::NoPlayers)?;
        self.player(index)
    }

    /// Pays the pot to `players[word % players.len()]` through `payout` and
    /// reopens the raffle.
    ///
    /// `draw` is handed the randomness account bound to the request and
    /// returns the revealed word; it only runs once `request_id` is known to
    /// be pending. `payout` runs before any field is written; if it fails the
    /// raffle is left exactly as it was, still `Resolving`.
    pub fn settle<W, F>(
        &mut self,
        request_id: u64,
        draw: W,
        now: i64,
        payout: F,
    ) -> Result<Settlement>
    where
        W: FnOnce(&Pubkey) -> Result<u64>,
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        self.ensure_pending(request_id)?;

        let random_word = draw(&self.randomness_account)?;
        msg!("Randomness result: {}", random_word);
        msg!("Players: {}", self.number_of_players());

        let winner = self.select_winner(random_word)?;
        let amount = self.pot_amount;
        let round = self.round.checked_add(1).ok_or(RaffleError::Overflow)?;

        payout(winner, amount).map_err(|e| {
            msg!("Payout of {} lamports to {} failed: {}", amount, winner, e);
            error!(RaffleError::PayoutFailed)
        })?;

        self.recent_winner = winner;
        self.players.clear();
        self.last_timestamp = now;
        self.state = RaffleState::Open;
        self.clear_pending_request();
        self.pot_amount = 0;
        self.round = round;

        Ok(Settlement {
            winner,
            amount,
            round,
        })
    }
}

/// Moves `amount` lamports from the raffle PDA to `recipient`, leaving at
/// least `reserve` lamports behind.
fn transfer_pot(
    raffle: &AccountInfo,
    recipient: &AccountInfo,
    winner: Pubkey,
    amount: u64,
    reserve: u64,
) -> Result<()> {
    require_keys_eq!(recipient.key(), winner, RaffleError::PayoutFailed);

    let remaining = raffle
        .lamports()
        .checked_sub(amount)
        .filter(|remaining| *remaining >= reserve)
        .ok_or(RaffleError::PayoutFailed)?;
    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(RaffleError::PayoutFailed)?;

    **raffle.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;

    Ok(())
}

/// Settles the pending round with the revealed randomness.
///
/// Steps:
/// 1. Check `request_id` is the pending request.
/// 2. Read the revealed value from the bound Switchboard account.
/// 3. Pick the winner and pay out the whole pot.
/// 4. Reset the round and reopen entry.
pub fn process_fulfill_randomness(ctx: Context<FulfillRandomness>, request_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();
    let raffle_info = ctx.accounts.raffle.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let reserve = Rent::get()?.minimum_balance(raffle_info.data_len());

    let settlement = ctx.accounts.raffle.settle(
        request_id,
        |bound_account| {
            let reveal = SwitchboardReveal::load(&randomness_info, &clock)?;
            reveal.random_word(request_id, bound_account)
        },
        clock.unix_timestamp,
        |winner, amount| transfer_pot(&raffle_info, &winner_info, winner, amount, reserve),
    )?;

    msg!(
        "Winner: {} ({} lamports, round {})",
        settlement.winner,
        settlement.amount,
        settlement.round
    );

    emit!(WinnerPicked {
        winner: settlement.winner,
        amount: settlement.amount,
        round: settlement.round,
    });

    Ok(())
}
