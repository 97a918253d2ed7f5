use anchor_lang::prelude::*;
use solana_program::native_token::LAMPORTS_PER_SOL;

pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const VAULT_SEED: &[u8] = b"vault";

/// Price per ticket until the admin changes it.
#[constant]
pub const DEFAULT_TICKET_PRICE: u64 = LAMPORTS_PER_SOL;

/// Capacity of the first round.
#[constant]
pub const DEFAULT_MAX_TICKETS: u64 = 5;

/// Upper bound on round capacity. The ticket ledger lives inside the
/// lottery account, so its size must be fixed when the account is
/// created.
pub const MAX_TICKET_CAPACITY: usize = 1_000;
