use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{constants::*, error::RaffleError, events::*, state::*};

/// Accounts required to enter the raffle.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The entrant, paying the fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Raffle state account; also receives the fee.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

impl Raffle {
    /// Admits `player` for `amount` lamports. Any amount above the fee stays
    /// in the pot.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.is_open(), RaffleError::NotOpen);
        require!(amount >= self.entrance_fee, RaffleError::InsufficientFund);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        self.players.push(player);
        Ok(())
    }
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the raffle is open and the payment covers the fee.
/// 2. Record the entrant and grow the pot.
/// 3. Transfer `amount` lamports from the entrant to the raffle PDA.
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Player {} entered with {} lamports", player, amount);
    msg!("Players: {}", ctx.accounts.raffle.number_of_players());

    emit!(RaffleEntered { player, amount });

    Ok(())
}
