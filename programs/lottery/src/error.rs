use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("No tickets available")]
    SoldOut,

    #[msg("Payment does not cover the ticket cost")]
    InsufficientPayment,

    #[msg("Not authorized")]
    Unauthorized,

    #[msg("Round already has tickets sold")]
    RoundInProgress,

    #[msg("Round is not sold out yet")]
    RoundNotComplete,

    #[msg("Ticket ledger does not match round bookkeeping")]
    CorruptState,

    #[msg("Not allowed")]
    NotAllowed,

    #[msg("Ticket count must be greater than zero")]
    InvalidTicketCount,

    #[msg("Round capacity must be between 1 and the ledger limit")]
    InvalidCapacity,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Not enough lamports to cover the transfer")]
    InsufficientFunds,

    #[msg("Winner account does not match the drawn ticket")]
    WinnerMismatch,
}
