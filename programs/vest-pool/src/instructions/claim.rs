use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VEST_POOL_SEED;
use crate::error::VestingError;
use crate::state::VestPool;
use crate::utils::custody;

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub receiver: Signer<'info>,

    /// CHECK: only used to re-derive the pool address in `validate`.
    pub base: UncheckedAccount<'info>,

    #[account(mut)]
    pub vest_pool: Account<'info, VestPool>,

    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = receiver,
        associated_token::mint = mint,
        associated_token::authority = receiver,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Claim<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        let pool = &self.vest_pool;
        pool.validate_claim(&self.receiver.key(), now)?;
        pool.verify_address(&pool.key(), &self.base.key(), &crate::ID)?;
        pool.verify_mint(&self.mint.key())?;
        pool.verify_mint(&self.vault_token_account.mint)?;
        require_keys_eq!(
            self.vault_token_account.owner,
            pool.key(),
            VestingError::InvalidBaseKey
        );
        Ok(())
    }

    pub fn claim(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.validate(now)?;

        let base = self.base.key();
        let bump = self.vest_pool.bump;
        let amount = self.vest_pool.amount;
        let signer_seeds: &[&[&[u8]]] = &[&[VEST_POOL_SEED, base.as_ref(), &[bump]]];
        custody::release_from_vault(
            self.token_program.to_account_info(),
            self.vault_token_account.to_account_info(),
            self.user_token_account.to_account_info(),
            self.vest_pool.to_account_info(),
            signer_seeds,
            amount,
        )?;

        let pool = &mut self.vest_pool;
        pool.mark_claimed()?;

        msg!("vest pool {} claimed by {}", pool.key(), pool.recipient);
        emit!(TokensClaimed {
            pool: pool.key(),
            receiver: pool.recipient,
            amount,
            claimed_at: now,
        });

        Ok(())
    }
}

#[event]
pub struct TokensClaimed {
    pub pool: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
