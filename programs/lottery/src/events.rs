use anchor_lang::prelude::*;

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    pub tickets: u64,
    pub price_paid: u64,
    pub refund: u64,
}

#[event]
pub struct TicketPriceUpdated {
    pub ticket_price: u64,
}

#[event]
pub struct MaxTicketsUpdated {
    pub max_tickets: u64,
}

#[event]
pub struct RoundEnded {
    pub winner: Pubkey,
    pub winning_ticket: u64,
    pub pot: u64,
}
