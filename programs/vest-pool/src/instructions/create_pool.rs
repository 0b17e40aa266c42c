use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::VEST_POOL_SEED;
use crate::error::VestingError;
use crate::state::VestPool;
use crate::utils::threshold;

#[derive(Accounts)]
#[instruction(signer_count: u8)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// Must sign so nobody else can claim the pool address derived from it.
    pub base: Signer<'info>,

    // An existing pool at this address is refused by `ensure_vacant`.
    #[account(
        init_if_needed,
        payer = sender,
        space = VestPool::space(signer_count as usize),
        seeds = [VEST_POOL_SEED, base.key().as_ref()],
        bump
    )]
    pub vest_pool: Account<'info, VestPool>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    /// Co-signers arrive as remaining accounts; they do not sign here.
    pub fn create_pool(
        &mut self,
        bump: u8,
        co_signers: &[AccountInfo],
        signer_count: u8,
        amount: u64,
        locked_period: i64,
        min_sign: u8,
    ) -> Result<()> {
        self.vest_pool.ensure_vacant()?;

        let extra_signers = threshold::account_keys(co_signers);
        // Account space was sized from `signer_count`.
        require!(
            signer_count as usize == extra_signers.len() + 1,
            VestingError::InsufficientSigners
        );

        let pool = VestPool::new(
            self.base.key(),
            self.sender.key(),
            self.mint.key(),
            amount,
            locked_period,
            min_sign,
            &extra_signers,
            bump,
        )?;
        self.vest_pool.set_inner(pool);

        let pool = &self.vest_pool;
        emit!(PoolCreated {
            pool: pool.key(),
            base: pool.base,
            sender: pool.sender,
            mint: pool.mint,
            amount: pool.amount,
            locked_period: pool.locked_period,
            min_sign: pool.min_sign,
            signers: pool.signers.clone(),
        });

        Ok(())
    }
}

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub base: Pubkey,
    pub sender: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub locked_period: i64,
    pub min_sign: u8,
    pub signers: Vec<Pubkey>,
}
