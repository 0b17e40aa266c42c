use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;

use crate::constants::RELAY_POLICY_SEED;
use crate::error::VestingError;
use crate::state::{batch_digest, RelayPolicy, TxInstruction};

/// Privilege flags of an account as supplied to the outer instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuppliedAccount {
    pub key: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl From<&AccountInfo<'_>> for SuppliedAccount {
    fn from(info: &AccountInfo<'_>) -> Self {
        Self {
            key: info.key(),
            is_signer: info.is_signer,
            is_writable: info.is_writable,
        }
    }
}

/// Checks a batch before anything is forwarded: every target and participant
/// must be supplied, no participant may gain signer or writable privilege it
/// did not have in the outer call, and targets must pass the policy if any.
pub fn validate_batch(
    ixs: &[TxInstruction],
    supplied: &[SuppliedAccount],
    policy: Option<&RelayPolicy>,
) -> std::result::Result<(), VestingError> {
    if ixs.is_empty() {
        return Err(VestingError::EmptyBatch);
    }
    let find = |key: &Pubkey| supplied.iter().find(|a| a.key == *key);

    for ix in ixs {
        if let Some(policy) = policy {
            if !policy.permits(&ix.program_id) {
                return Err(VestingError::TargetNotAllowed);
            }
        }
        find(&ix.program_id).ok_or(VestingError::MissingRelayAccount)?;

        for meta in &ix.keys {
            let account = find(&meta.pubkey).ok_or(VestingError::MissingRelayAccount)?;
            if meta.is_signer && !account.is_signer {
                return Err(VestingError::InvalidSigner);
            }
            if meta.is_writable && !account.is_writable {
                return Err(VestingError::WritablePrivilegeEscalation);
            }
        }
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteTransaction<'info> {
    pub payer: Signer<'info>,

    #[account(seeds = [RELAY_POLICY_SEED], bump)]
    /// CHECK: empty until `init_relay_policy` runs; `RelayPolicy::load` checks owner and discriminator.
    pub relay_policy: UncheckedAccount<'info>,
}

impl<'info> ExecuteTransaction<'info> {
    pub fn execute_transaction(
        &self,
        remaining_accounts: &[AccountInfo<'info>],
        instructions: Vec<TxInstruction>,
    ) -> Result<()> {
        let policy = RelayPolicy::load(&self.relay_policy)?;
        let supplied: Vec<SuppliedAccount> = remaining_accounts.iter().map(Into::into).collect();
        validate_batch(&instructions, &supplied, policy.as_ref())?;

        for ix in instructions.iter() {
            invoke(&ix.into(), remaining_accounts)?;
        }

        emit!(TransactionExecuted {
            payer: self.payer.key(),
            instruction_count: instructions.len() as u32,
            batch_digest: batch_digest(&instructions)?,
        });

        Ok(())
    }
}

#[event]
pub struct TransactionExecuted {
    pub payer: Pubkey,
    pub instruction_count: u32,
    pub batch_digest: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TxAccountMeta;

    fn supplied(key: Pubkey, is_signer: bool, is_writable: bool) -> SuppliedAccount {
        SuppliedAccount {
            key,
            is_signer,
            is_writable,
        }
    }

    fn meta(pubkey: Pubkey, is_signer: bool, is_writable: bool) -> TxAccountMeta {
        TxAccountMeta {
            pubkey,
            is_signer,
            is_writable,
        }
    }

    struct Batch {
        target: Pubkey,
        signer: Pubkey,
        readonly: Pubkey,
        accounts: Vec<SuppliedAccount>,
    }

    impl Batch {
        fn new() -> Self {
            let (target, signer, readonly) =
                (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
            Self {
                target,
                signer,
                readonly,
                accounts: vec![
                    supplied(target, false, false),
                    supplied(signer, true, true),
                    supplied(readonly, false, false),
                ],
            }
        }

        fn ix(&self, keys: Vec<TxAccountMeta>) -> TxInstruction {
            TxInstruction {
                program_id: self.target,
                keys,
                data: vec![7],
            }
        }
    }

    #[test]
    fn declared_privileges_pass() {
        let b = Batch::new();
        let ix = b.ix(vec![meta(b.signer, true, true), meta(b.readonly, false, false)]);
        assert!(validate_batch(&[ix], &b.accounts, None).is_ok());
    }

    #[test]
    fn empty_batch_is_rejected() {
        let b = Batch::new();
        assert!(matches!(
            validate_batch(&[], &b.accounts, None),
            Err(VestingError::EmptyBatch)
        ));
    }

    #[test]
    fn signer_privilege_cannot_be_elevated() {
        let b = Batch::new();
        let ix = b.ix(vec![meta(b.readonly, true, false)]);
        assert!(matches!(
            validate_batch(&[ix], &b.accounts, None),
            Err(VestingError::InvalidSigner)
        ));
    }

    #[test]
    fn writable_privilege_cannot_be_elevated() {
        let b = Batch::new();
        let ix = b.ix(vec![meta(b.readonly, false, true)]);
        assert!(matches!(
            validate_batch(&[ix], &b.accounts, None),
            Err(VestingError::WritablePrivilegeEscalation)
        ));
    }

    #[test]
    fn unsupplied_accounts_are_rejected() {
        let b = Batch::new();
        let ix = b.ix(vec![meta(Pubkey::new_unique(), false, false)]);
        assert!(matches!(
            validate_batch(&[ix], &b.accounts, None),
            Err(VestingError::MissingRelayAccount)
        ));

        let mut ix = b.ix(vec![]);
        ix.program_id = Pubkey::new_unique();
        assert!(matches!(
            validate_batch(&[ix], &b.accounts, None),
            Err(VestingError::MissingRelayAccount)
        ));
    }

    #[test]
    fn one_bad_instruction_rejects_the_whole_batch() {
        let b = Batch::new();
        let good = b.ix(vec![meta(b.signer, true, false)]);
        let bad = b.ix(vec![meta(b.readonly, true, false)]);
        assert!(validate_batch(&[good, bad], &b.accounts, None).is_err());
    }

    #[test]
    fn enforcing_policy_restricts_targets() {
        let b = Batch::new();
        let ix = b.ix(vec![]);

        let mut policy = RelayPolicy::default();
        policy.apply(true, vec![Pubkey::new_unique()]).unwrap();
        assert!(matches!(
            validate_batch(&[ix.clone()], &b.accounts, Some(&policy)),
            Err(VestingError::TargetNotAllowed)
        ));

        policy.apply(true, vec![b.target]).unwrap();
        assert!(validate_batch(&[ix.clone()], &b.accounts, Some(&policy)).is_ok());

        policy.apply(false, vec![]).unwrap();
        assert!(validate_batch(&[ix], &b.accounts, Some(&policy)).is_ok());
    }
}
