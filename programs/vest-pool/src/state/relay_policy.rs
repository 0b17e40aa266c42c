use anchor_lang::prelude::*;

use crate::constants::MAX_RELAY_TARGETS;
use crate::error::VestingError;

/// Optional allow-list for `execute_transaction`. While this PDA does not
/// exist, any target program may be relayed.
/// Seeds: [RELAY_POLICY_SEED]
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct RelayPolicy {
    pub admin: Pubkey,
    pub enforce_allow_list: bool,
    pub bump: u8,
    pub allowed_programs: Vec<Pubkey>,
}

impl RelayPolicy {
    pub const SIZE: usize =
        32 + // admin
        1 +  // enforce_allow_list
        1 +  // bump
        4 + 32 * MAX_RELAY_TARGETS; // allowed_programs

    pub fn apply(
        &mut self,
        enforce_allow_list: bool,
        allowed_programs: Vec<Pubkey>,
    ) -> std::result::Result<(), VestingError> {
        if allowed_programs.len() > MAX_RELAY_TARGETS {
            return Err(VestingError::TooManyRelayTargets);
        }
        self.enforce_allow_list = enforce_allow_list;
        self.allowed_programs = allowed_programs;
        self.allowed_programs.sort();
        self.allowed_programs.dedup();
        Ok(())
    }

    pub fn permits(&self, program_id: &Pubkey) -> bool {
        !self.enforce_allow_list || self.allowed_programs.contains(program_id)
    }

    /// Only the program's upgrade authority may create the policy. A program
    /// deployed as immutable has none, so its relay stays unrestricted.
    pub fn authorize_init(
        upgrade_authority: Option<Pubkey>,
        admin: &Pubkey,
    ) -> std::result::Result<(), VestingError> {
        if upgrade_authority != Some(*admin) {
            return Err(VestingError::UnauthorizedPolicyAdmin);
        }
        Ok(())
    }

    /// Reads the policy PDA if it has been initialized. The account must be
    /// owned by this program and carry the `RelayPolicy` discriminator.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );
        let data = info.try_borrow_data()?;
        let mut bytes: &[u8] = &data;
        Ok(Some(Self::try_deserialize(&mut bytes)?))
    }
}
