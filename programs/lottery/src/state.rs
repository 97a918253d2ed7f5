use anchor_lang::prelude::*;

use crate::constants::MAX_TICKET_CAPACITY;
use crate::error::ErrorCode;

/// An outbound lamport transfer the instruction handler must execute
/// against the vault after the state transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Recipient of the lamports.
    pub to: Pubkey,

    /// Amount to send, in lamports.
    pub lamports: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The bump seed of the vault PDA holding the pot.
    pub vault_bump: u8,

    /// The only identity allowed to reconfigure the lottery and end a
    /// round. Fixed at initialization.
    pub admin: Pubkey,

    /// The price (in lamports) of a single ticket.
    pub ticket_price: u64,

    /// Total ticket capacity of the current round.
    pub max_tickets: u64,

    /// Tickets still unsold in the current round. Equals `max_tickets`
    /// while the round is open for configuration changes and `0` once
    /// the round can be ended.
    pub tickets_available: u64,

    /// The ticket ledger. The vec index is the ticket number: entry `i`
    /// is the purchaser of ticket `i`. Always holds exactly
    /// `max_tickets - tickets_available` entries.
    #[max_len(MAX_TICKET_CAPACITY)]
    pub players: Vec<Pubkey>,
}

impl Lottery {
    /// Sells `count` tickets to `buyer` for `amount` lamports.
    ///
    /// Returns the refund owed to the buyer when `amount` exceeds the
    /// ticket cost, `None` on exact payment. All checks run before any
    /// mutation, so a failed purchase leaves the round untouched.
    pub fn buy_tickets(&mut self, count: u64, buyer: Pubkey, amount: u64) -> Result<Option<Payout>> {
        require_gt!(count, 0, ErrorCode::InvalidTicketCount);
        require_gt!(self.tickets_available, 0, ErrorCode::SoldOut);

        let total_cost = self
            .ticket_price
            .checked_mul(count)
            .ok_or(ErrorCode::Overflow)?;
        require_gte!(amount, total_cost, ErrorCode::InsufficientPayment);

        // Natural-number semantics: draining the stock past zero aborts
        // the whole purchase instead of wrapping or clamping.
        let remaining = self
            .tickets_available
            .checked_sub(count)
            .ok_or(ErrorCode::SoldOut)?;

        for _ in 0..count {
            self.players.push(buyer);
        }
        self.tickets_available = remaining;

        let excess = amount - total_cost;
        Ok((excess > 0).then_some(Payout {
            to: buyer,
            lamports: excess,
        }))
    }

    /// Updates the ticket price. Admin only, and only while no ticket
    /// of the current round has been sold.
    pub fn update_ticket_price(&mut self, new_price: u64, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.admin, ErrorCode::Unauthorized);
        require_eq!(
            self.tickets_available,
            self.max_tickets,
            ErrorCode::RoundInProgress
        );

        self.ticket_price = new_price;
        Ok(())
    }

    /// Updates the round capacity. Admin only, between rounds only.
    /// Resets `tickets_available` together with `max_tickets` so the
    /// round stays fully unsold after the change.
    pub fn update_max_tickets(&mut self, new_capacity: u64, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.admin, ErrorCode::Unauthorized);
        require_eq!(
            self.tickets_available,
            self.max_tickets,
            ErrorCode::RoundInProgress
        );
        require!(
            new_capacity > 0 && new_capacity <= MAX_TICKET_CAPACITY as u64,
            ErrorCode::InvalidCapacity
        );

        self.max_tickets = new_capacity;
        self.tickets_available = new_capacity;
        Ok(())
    }

    /// Draws the winning ticket with `random_seed % max_tickets` and
    /// resets the ledger for the next round. Admin only, and only once
    /// every ticket is sold. `pot` is the full vault balance and is
    /// paid out in its entirety.
    pub fn end_round(&mut self, random_seed: u64, caller: Pubkey, pot: u64) -> Result<Payout> {
        require_keys_eq!(caller, self.admin, ErrorCode::Unauthorized);
        require_eq!(self.tickets_available, 0, ErrorCode::RoundNotComplete);

        let winner_index = random_seed
            .checked_rem(self.max_tickets)
            .ok_or(ErrorCode::CorruptState)?;
        let winner = self
            .players
            .get(winner_index as usize)
            .copied()
            .ok_or(ErrorCode::CorruptState)?;

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(Payout {
            to: winner,
            lamports: pot,
        })
    }
}
