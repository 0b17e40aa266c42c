use anchor_lang::prelude::*;

use crate::constants::VEST_POOL_SEED;
use crate::state::VestPool;
use crate::utils::threshold;

#[derive(Accounts)]
pub struct NominateReceiver<'info> {
    pub sender: Signer<'info>,

    #[account(
        mut,
        seeds = [VEST_POOL_SEED, vest_pool.base.as_ref()],
        bump = vest_pool.bump,
    )]
    pub vest_pool: Account<'info, VestPool>,
}

impl<'info> NominateReceiver<'info> {
    pub fn nominate_receiver(&mut self, co_signers: &[AccountInfo], receiver: Pubkey) -> Result<()> {
        let presented = threshold::authenticated_signers(co_signers);

        let pool = &mut self.vest_pool;
        pool.validate_nomination(&self.sender.key(), &receiver, &presented)?;
        pool.mark_nominated(receiver)?;

        emit!(ReceiverNominated {
            pool: pool.key(),
            receiver,
            unlocks_at: pool.unlocks_at(),
        });

        Ok(())
    }
}

#[event]
pub struct ReceiverNominated {
    pub pool: Pubkey,
    pub receiver: Pubkey,
    pub unlocks_at: i64,
}
