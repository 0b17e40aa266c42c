use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

/// One sub-instruction forwarded by `execute_transaction`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct TxInstruction {
    pub program_id: Pubkey,
    pub keys: Vec<TxAccountMeta>,
    pub data: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct TxAccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl From<&TxInstruction> for Instruction {
    fn from(ix: &TxInstruction) -> Instruction {
        Instruction {
            program_id: ix.program_id,
            accounts: ix.keys.iter().copied().map(Into::into).collect(),
            data: ix.data.clone(),
        }
    }
}

impl From<TxAccountMeta> for AccountMeta {
    fn from(
        TxAccountMeta {
            pubkey,
            is_signer,
            is_writable,
        }: TxAccountMeta,
    ) -> AccountMeta {
        AccountMeta {
            pubkey,
            is_signer,
            is_writable,
        }
    }
}

/// BLAKE3 digest of the Borsh-encoded batch, for the audit event.
pub fn batch_digest(ixs: &[TxInstruction]) -> Result<[u8; 32]> {
    let mut encoded = Vec::new();
    ixs.serialize(&mut encoded)
        .map_err(|_| anchor_lang::error::ErrorCode::AccountDidNotSerialize)?;
    Ok(*blake3::hash(&encoded).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TxInstruction {
        TxInstruction {
            program_id: Pubkey::new_unique(),
            keys: vec![
                TxAccountMeta {
                    pubkey: Pubkey::new_unique(),
                    is_signer: true,
                    is_writable: false,
                },
                TxAccountMeta {
                    pubkey: Pubkey::new_unique(),
                    is_signer: false,
                    is_writable: true,
                },
            ],
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn converts_into_runtime_instruction() {
        let tx = sample();
        let ix: Instruction = (&tx).into();
        assert_eq!(ix.program_id, tx.program_id);
        assert_eq!(ix.data, tx.data);
        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0].pubkey, tx.keys[0].pubkey);
        assert!(ix.accounts[0].is_signer);
        assert!(!ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
    }

    #[test]
    fn digest_tracks_content_and_order() {
        let a = sample();
        let b = sample();
        let ab = batch_digest(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(ab, batch_digest(&[a.clone(), b.clone()]).unwrap());
        assert_ne!(ab, batch_digest(&[b.clone(), a.clone()]).unwrap());

        let mut tampered = a.clone();
        tampered.data.push(4);
        assert_ne!(ab, batch_digest(&[tampered, b]).unwrap());
    }

    #[test]
    fn digest_covers_the_instruction_data_encoding() {
        let batch = vec![sample(), sample()];
        // Exactly what a client submits as the `instructions` argument.
        let mut encoded = Vec::new();
        batch.serialize(&mut encoded).unwrap();
        assert_eq!(encoded.len(), 4 + 2 * (32 + 4 + 2 * 34 + 4 + 3));
        assert_eq!(
            batch_digest(&batch).unwrap(),
            *blake3::hash(&encoded).as_bytes()
        );
    }
}
