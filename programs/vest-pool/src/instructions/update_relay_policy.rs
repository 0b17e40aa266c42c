use anchor_lang::prelude::*;

use crate::constants::RELAY_POLICY_SEED;
use crate::error::VestingError;
use crate::instructions::init_relay_policy::RelayPolicyUpdated;
use crate::state::RelayPolicy;

#[derive(Accounts)]
pub struct UpdateRelayPolicy<'info> {
    #[account(mut, seeds = [RELAY_POLICY_SEED], bump = relay_policy.bump)]
    pub relay_policy: Account<'info, RelayPolicy>,

    pub admin: Signer<'info>,
}

impl<'info> UpdateRelayPolicy<'info> {
    pub fn update_relay_policy(
        &mut self,
        enforce_allow_list: bool,
        allowed_programs: Vec<Pubkey>,
    ) -> Result<()> {
        let policy = &mut self.relay_policy;
        require_keys_eq!(
            self.admin.key(),
            policy.admin,
            VestingError::UnauthorizedPolicyAdmin
        );
        policy.apply(enforce_allow_list, allowed_programs)?;

        emit!(RelayPolicyUpdated {
            admin: policy.admin,
            enforce_allow_list: policy.enforce_allow_list,
            allowed_programs: policy.allowed_programs.clone(),
        });

        Ok(())
    }
}
