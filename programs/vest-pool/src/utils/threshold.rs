//! Multi-signature threshold evaluation.
//!
//! Only counts and matches identities: whether a presented key actually signed
//! is decided by the runtime (`AccountInfo::is_signer`) before we get here.

use anchor_lang::prelude::*;

/// Number of distinct `presented` keys that are also in `recognized`.
pub fn concurring_count(recognized: &[Pubkey], presented: &[Pubkey]) -> usize {
    let mut seen: Vec<&Pubkey> = Vec::with_capacity(presented.len());
    for key in presented {
        if recognized.contains(key) && !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen.len()
}

/// True iff at least `required` distinct recognized signers are presented.
pub fn satisfies_threshold(recognized: &[Pubkey], required: u8, presented: &[Pubkey]) -> bool {
    concurring_count(recognized, presented) >= required as usize
}

/// Keys of `accounts`, signed or not, in order.
pub fn account_keys(accounts: &[AccountInfo]) -> Vec<Pubkey> {
    accounts.iter().map(|a| a.key()).collect()
}

/// Keys of the accounts the runtime marked as signers of this transaction.
pub fn authenticated_signers(accounts: &[AccountInfo]) -> Vec<Pubkey> {
    accounts
        .iter()
        .filter(|a| a.is_signer)
        .map(|a| a.key())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn exact_threshold_passes_one_short_fails() {
        let recognized = keys(4);
        assert!(satisfies_threshold(&recognized, 3, &recognized[..3]));
        assert!(!satisfies_threshold(&recognized, 3, &recognized[..2]));
    }

    #[test]
    fn duplicates_count_once() {
        let recognized = keys(4);
        let presented = vec![recognized[1], recognized[1], recognized[2], recognized[2]];
        assert_eq!(concurring_count(&recognized, &presented), 2);
        assert!(!satisfies_threshold(&recognized, 3, &presented));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let recognized = keys(3);
        let outsiders = keys(5);
        assert_eq!(concurring_count(&recognized, &outsiders), 0);

        let mut presented = outsiders.clone();
        presented.push(recognized[0]);
        assert!(satisfies_threshold(&recognized, 1, &presented));
        assert!(!satisfies_threshold(&recognized, 2, &presented));
    }

    #[test]
    fn zero_required_is_trivially_met() {
        assert!(satisfies_threshold(&keys(2), 0, &[]));
    }

    #[test]
    fn only_signer_accounts_are_authenticated() {
        let program_id = Pubkey::new_unique();
        let signed = Pubkey::new_unique();
        let unsigned = Pubkey::new_unique();
        let (mut l1, mut l2) = (0u64, 0u64);
        let (mut d1, mut d2) = ([0u8; 0], [0u8; 0]);
        let accounts = vec![
            AccountInfo::new(&signed, true, false, &mut l1, &mut d1, &program_id, false, 0),
            AccountInfo::new(&unsigned, false, false, &mut l2, &mut d2, &program_id, false, 0),
        ];
        assert_eq!(authenticated_signers(&accounts), vec![signed]);
        assert_eq!(account_keys(&accounts), vec![signed, unsigned]);
    }
}
