//! Time-lock gate for claims.
//! - unlocks_at = deposit_time + locked_period, saturating at i64::MAX
//! - eligible iff now - deposit_time >= locked_period (inclusive at the boundary)

use crate::error::VestingError;

pub fn is_claim_eligible(
    deposit_time: i64,
    locked_period: i64,
    now_ts: i64,
) -> Result<bool, VestingError> {
    let elapsed = now_ts
        .checked_sub(deposit_time)
        .ok_or(VestingError::MathOverflow)?;
    Ok(elapsed >= locked_period)
}

/// First timestamp at which a claim is accepted. A lock that ends past
/// `i64::MAX` reports `i64::MAX`, which the clock never reaches.
pub fn claim_unlocks_at(deposit_time: i64, locked_period: i64) -> i64 {
    deposit_time.saturating_add(locked_period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_boundary_inclusive() {
        let deposit = 1_700_000_000;
        assert!(!is_claim_eligible(deposit, 30, deposit + 10).unwrap());
        assert!(!is_claim_eligible(deposit, 30, deposit + 29).unwrap());
        assert!(is_claim_eligible(deposit, 30, deposit + 30).unwrap());
        assert!(is_claim_eligible(deposit, 30, deposit + 31).unwrap());
    }

    #[test]
    fn clock_behind_deposit_is_not_eligible() {
        let deposit = 1_700_000_000;
        assert!(!is_claim_eligible(deposit, 1, deposit - 5).unwrap());
    }

    #[test]
    fn unlock_time_matches_gate() {
        let deposit = 1_700_000_000;
        let at = claim_unlocks_at(deposit, 30);
        assert!(is_claim_eligible(deposit, 30, at).unwrap());
        assert!(!is_claim_eligible(deposit, 30, at - 1).unwrap());
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            is_claim_eligible(i64::MIN, 1, i64::MAX),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn unlock_time_saturates_for_unbounded_locks() {
        let deposit = 1_700_000_000;
        assert_eq!(claim_unlocks_at(deposit, i64::MAX), i64::MAX);
        assert_eq!(claim_unlocks_at(i64::MAX, 1), i64::MAX);
        assert!(!is_claim_eligible(deposit, i64::MAX, i64::MAX).unwrap());
    }
}
