use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_SEED, VAULT_SEED};
use crate::error::ErrorCode;
use crate::events::RoundEnded;
use crate::helpers::transfer_sol_with_seeds;
use crate::state::Lottery;

/// Accounts required to end a sold-out round.
///
/// The winner's account must be supplied with the transaction; the
/// handler verifies it against the ticket drawn from the seed before
/// the vault is drained into it.
#[derive(Accounts)]
pub struct EndRound<'info> {
    /// The admin settling the round.
    pub admin: Signer<'info>,

    /// The lottery state account tracking the current round.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: zero-data lamport vault PDA, drained to the winner.
    #[account(mut, seeds = [VAULT_SEED], bump = lottery.vault_bump)]
    pub vault: AccountInfo<'info>,

    /// CHECK: holder of the winning ticket, verified in the handler.
    #[account(mut)]
    pub winner: AccountInfo<'info>,

    /// System program for the payout transfer.
    pub system_program: Program<'info, System>,
}

/// Draws the winner from the supplied seed, pays out the entire pot,
/// and resets the ledger for the next round.
pub fn process_end_round(ctx: Context<EndRound>, random_seed: u64) -> Result<()> {
    let pot = ctx.accounts.vault.lamports();
    let caller = ctx.accounts.admin.key();
    let payout = ctx.accounts.lottery.end_round(random_seed, caller, pot)?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        payout.to,
        ErrorCode::WinnerMismatch
    );

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &[ctx.accounts.lottery.vault_bump]]];
    transfer_sol_with_seeds(
        &ctx.accounts.vault,
        &ctx.accounts.winner,
        &ctx.accounts.system_program,
        signer_seeds,
        payout.lamports,
    )?;

    let winning_ticket = random_seed % ctx.accounts.lottery.max_tickets;
    msg!(
        "Ticket {} wins a pot of {} lamports",
        winning_ticket,
        payout.lamports
    );

    emit!(RoundEnded {
        winner: payout.to,
        winning_ticket,
        pot: payout.lamports,
    });

    Ok(())
}
