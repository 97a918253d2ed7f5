use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ErrorCode;

/// Transfer SOL from a signing buyer into the vault.
/// Requires sufficient lamports in `from`.
pub fn transfer_sol<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    require!(from.lamports() >= amount, ErrorCode::InsufficientFunds);
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
            },
        ),
        amount,
    )
}

/// Transfer SOL out of the vault PDA using its signer seeds.
/// Requires sufficient lamports in `from`.
pub fn transfer_sol_with_seeds<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    require!(from.lamports() >= amount, ErrorCode::InsufficientFunds);
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
