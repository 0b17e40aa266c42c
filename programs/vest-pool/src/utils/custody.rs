//! SPL Token custody moves between holder accounts and a pool vault.
//!
//! Callers validate first and persist after; a failed CPI aborts the
//! transaction before the pool record is written.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::error::VestingError;

pub fn ensure_balance(available: u64, amount: u64) -> std::result::Result<(), VestingError> {
    if available < amount {
        return Err(VestingError::InsufficientBalance);
    }
    Ok(())
}

/// Holder -> vault, authorized by the holder's signature on the transaction.
pub fn transfer_to_vault<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program,
            Transfer {
                from,
                to: vault,
                authority,
            },
        ),
        amount,
    )
}

/// Vault -> holder, signed by the pool PDA that owns the vault.
pub fn release_from_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    pool: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to,
                authority: pool,
            },
            signer_seeds,
        ),
        amount,
    )
}
