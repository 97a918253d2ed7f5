use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_PRICE, LOTTERY_SEED, VAULT_SEED};
use crate::events::{MaxTicketsUpdated, TicketPriceUpdated};
use crate::state::Lottery;

/// Accounts required to create the lottery.
/// The signer funds the state account and becomes the fixed admin.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation; becomes the admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The singleton lottery state account.
    #[account(
        init,
        payer = admin,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// CHECK: zero-data lamport vault PDA holding the pot; only this
    /// program can move lamports out of it.
    #[account(seeds = [VAULT_SEED], bump)]
    pub vault: AccountInfo<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts shared by the two configuration instructions.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The caller requesting the change; checked against the stored
    /// admin by the state machine.
    pub admin: Signer<'info>,

    /// The lottery state account being reconfigured.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Creates the lottery with the default configuration: the signer as
/// admin, the default ticket price and capacity, and an empty ledger.
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.vault_bump = ctx.bumps.vault;
    lottery.admin = ctx.accounts.admin.key();
    lottery.ticket_price = DEFAULT_TICKET_PRICE;
    lottery.max_tickets = DEFAULT_MAX_TICKETS;
    lottery.tickets_available = DEFAULT_MAX_TICKETS;
    lottery.players = Vec::new();
    Ok(())
}

/// Sets a new ticket price for the next round.
pub fn process_update_ticket_price(ctx: Context<UpdateConfig>, new_price: u64) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    ctx.accounts.lottery.update_ticket_price(new_price, caller)?;

    emit!(TicketPriceUpdated {
        ticket_price: new_price,
    });
    Ok(())
}

/// Sets a new round capacity, which also resets the unsold count.
pub fn process_update_max_tickets(ctx: Context<UpdateConfig>, new_capacity: u64) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    ctx.accounts.lottery.update_max_tickets(new_capacity, caller)?;

    emit!(MaxTicketsUpdated {
        max_tickets: new_capacity,
    });
    Ok(())
}
