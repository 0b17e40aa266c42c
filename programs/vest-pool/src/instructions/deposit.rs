use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VEST_POOL_SEED;
use crate::error::VestingError;
use crate::state::VestPool;
use crate::utils::{custody, threshold};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        mut,
        seeds = [VEST_POOL_SEED, vest_pool.base.as_ref()],
        bump = vest_pool.bump,
    )]
    pub vest_pool: Account<'info, VestPool>,

    #[account(constraint = mint.key() == vest_pool.mint @ VestingError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = sender,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = mint,
        associated_token::authority = vest_pool,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    /// Moves `amount` from the sender into the pool vault once `min_sign`
    /// signers (sender included) concur. Co-signers come in as remaining accounts.
    pub fn deposit(&mut self, co_signers: &[AccountInfo]) -> Result<()> {
        let presented = threshold::authenticated_signers(co_signers);

        let pool = &self.vest_pool;
        pool.validate_deposit(&self.sender.key(), &presented)?;
        custody::ensure_balance(self.user_token_account.amount, pool.amount)?;

        let amount = pool.amount;
        custody::transfer_to_vault(
            self.token_program.to_account_info(),
            self.user_token_account.to_account_info(),
            self.vault_token_account.to_account_info(),
            self.sender.to_account_info(),
            amount,
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.vest_pool.mark_deposited(now)?;

        self.vault_token_account.reload()?;
        msg!(
            "vest pool {} funded with {} ({} co-signers)",
            self.vest_pool.key(),
            amount,
            presented.len()
        );

        emit!(TokensDeposited {
            pool: self.vest_pool.key(),
            sender: self.sender.key(),
            amount,
            deposit_time: now,
            vault_balance: self.vault_token_account.amount,
        });

        Ok(())
    }
}

#[event]
pub struct TokensDeposited {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub amount: u64,
    pub deposit_time: i64,
    pub vault_balance: u64,
}
