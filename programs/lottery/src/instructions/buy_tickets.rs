use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_SEED, VAULT_SEED};
use crate::events::TicketsPurchased;
use crate::helpers::{transfer_sol, transfer_sol_with_seeds};
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTickets<'info> {
    /// The account paying for the tickets.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The lottery state account tracking the current round.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: zero-data lamport vault PDA receiving the payment.
    #[account(mut, seeds = [VAULT_SEED], bump = lottery.vault_bump)]
    pub vault: AccountInfo<'info>,

    /// System program for the lamport transfers.
    pub system_program: Program<'info, System>,
}

/// Buys `num_tickets` tickets for the signer, paying `amount` lamports.
///
/// The full payment moves into the vault; when `amount` exceeds the
/// ticket cost the change is settled back from the vault, so the refund
/// is observable as its own transfer.
pub fn process_buy_tickets(ctx: Context<BuyTickets>, num_tickets: u64, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let refund = ctx
        .accounts
        .lottery
        .buy_tickets(num_tickets, buyer, amount)?;

    transfer_sol(
        &ctx.accounts.buyer,
        &ctx.accounts.vault,
        &ctx.accounts.system_program,
        amount,
    )?;

    let refund_amount = match refund {
        Some(payout) => {
            let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &[ctx.accounts.lottery.vault_bump]]];
            transfer_sol_with_seeds(
                &ctx.accounts.vault,
                &ctx.accounts.buyer.to_account_info(),
                &ctx.accounts.system_program,
                signer_seeds,
                payout.lamports,
            )?;
            payout.lamports
        }
        None => 0,
    };

    emit!(TicketsPurchased {
        buyer,
        tickets: num_tickets,
        price_paid: amount - refund_amount,
        refund: refund_amount,
    });

    Ok(())
}
