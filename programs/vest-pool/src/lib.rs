#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("BwNtagU972dNodjj8nqvnvr5dKue8Yh867YWr7B3zTY9");

#[program]
pub mod vest_pool {
    use super::*;

    /// Co-signer keys (beyond the sender) are passed as remaining accounts.
    pub fn create_pool(
        ctx: Context<CreatePool>,
        signer_count: u8,
        amount: u64,
        locked_period: i64,
        min_sign: u8,
    ) -> Result<()> {
        ctx.accounts.create_pool(
            ctx.bumps.vest_pool,
            ctx.remaining_accounts,
            signer_count,
            amount,
            locked_period,
            min_sign,
        )
    }

    pub fn deposit(ctx: Context<Deposit>) -> Result<()> {
        ctx.accounts.deposit(ctx.remaining_accounts)
    }

    pub fn nominate_receiver(ctx: Context<NominateReceiver>, receiver: Pubkey) -> Result<()> {
        ctx.accounts.nominate_receiver(ctx.remaining_accounts, receiver)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        ctx.accounts.claim()
    }

    pub fn execute_transaction<'info>(
        ctx: Context<'_, '_, '_, 'info, ExecuteTransaction<'info>>,
        instructions: Vec<TxInstruction>,
    ) -> Result<()> {
        ctx.accounts.execute_transaction(ctx.remaining_accounts, instructions)
    }

    pub fn init_relay_policy(
        ctx: Context<InitRelayPolicy>,
        enforce_allow_list: bool,
        allowed_programs: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .init_relay_policy(ctx.bumps.relay_policy, enforce_allow_list, allowed_programs)
    }

    pub fn update_relay_policy(
        ctx: Context<UpdateRelayPolicy>,
        enforce_allow_list: bool,
        allowed_programs: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.update_relay_policy(enforce_allow_list, allowed_programs)
    }
}
