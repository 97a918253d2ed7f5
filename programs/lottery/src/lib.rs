#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

declare_id!("Dd9ZUJy1TeuM6WWZqWJeAwgn6vQAhFDvbdCHBguRAhMb");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn buy_tickets(ctx: Context<BuyTickets>, num_tickets: u64, amount: u64) -> Result<()> {
        process_buy_tickets(ctx, num_tickets, amount)
    }

    pub fn update_ticket_price(ctx: Context<UpdateConfig>, new_price: u64) -> Result<()> {
        process_update_ticket_price(ctx, new_price)
    }

    pub fn update_max_tickets(ctx: Context<UpdateConfig>, new_capacity: u64) -> Result<()> {
        process_update_max_tickets(ctx, new_capacity)
    }

    pub fn end_round(ctx: Context<EndRound>, random_seed: u64) -> Result<()> {
        process_end_round(ctx, random_seed)
    }

    /// Every interaction that is not one of the named instructions is
    /// rejected outright; no value is accepted this way.
    pub fn fallback(_program_id: &Pubkey, _accounts: &[AccountInfo], _data: &[u8]) -> Result<()> {
        Err(error::ErrorCode::NotAllowed.into())
    }
}
