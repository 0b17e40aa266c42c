use anchor_lang::prelude::*;

use crate::constants::RELAY_POLICY_SEED;
use crate::program::VestPool as VestPoolProgram;
use crate::state::RelayPolicy;

#[derive(Accounts)]
pub struct InitRelayPolicy<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RelayPolicy::SIZE,
        seeds = [RELAY_POLICY_SEED],
        bump
    )]
    pub relay_policy: Account<'info, RelayPolicy>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, VestPoolProgram>,

    /// Holds the upgrade authority that `admin` must match.
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitRelayPolicy<'info> {
    pub fn init_relay_policy(
        &mut self,
        bump: u8,
        enforce_allow_list: bool,
        allowed_programs: Vec<Pubkey>,
    ) -> Result<()> {
        RelayPolicy::authorize_init(
            self.program_data.upgrade_authority_address,
            &self.admin.key(),
        )?;

        let policy = &mut self.relay_policy;
        policy.admin = self.admin.key();
        policy.bump = bump;
        policy.apply(enforce_allow_list, allowed_programs)?;

        emit!(RelayPolicyUpdated {
            admin: policy.admin,
            enforce_allow_list: policy.enforce_allow_list,
            allowed_programs: policy.allowed_programs.clone(),
        });

        Ok(())
    }
}

#[event]
pub struct RelayPolicyUpdated {
    pub admin: Pubkey,
    pub enforce_allow_list: bool,
    pub allowed_programs: Vec<Pubkey>,
}
