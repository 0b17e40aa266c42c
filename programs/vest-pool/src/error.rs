use anchor_lang::prelude::*;

/// Custom error codes for the vest pool program.
///
/// Codes are assigned in declaration order from 6000; clients match on the
/// numeric code, so new variants go at the end.
#[error_code]
pub enum VestingError {
    #[msg("Sender is not an authenticated signer of this pool")]
    InvalidSender,

    #[msg("Vest amount must be greater than zero")]
    ZeroVestAmount,

    #[msg("Locking period must be greater than zero")]
    InvalidLockingPeriod,

    #[msg("Signer threshold not met")]
    InsufficientSigners,

    #[msg("Token mint does not match the pool")]
    InvalidMint,

    #[msg("Invalid receiver")]
    InvalidReceiver,

    #[msg("Claim attempted before the locking period elapsed")]
    InvalidClaimTime,

    #[msg("Pool is not in the required status")]
    InvalidVestingStatus,

    #[msg("Base key does not derive the pool address")]
    InvalidBaseKey,

    #[msg("Invalid signer")]
    InvalidSigner,

    #[msg("Duplicate signer")]
    DuplicateSigner,

    #[msg("Too many signers")]
    TooManySigners,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Relayed instruction references an account that was not supplied")]
    MissingRelayAccount,

    #[msg("Relayed instruction requests write access that was not granted")]
    WritablePrivilegeEscalation,

    #[msg("Relay target program is not allowed")]
    TargetNotAllowed,

    #[msg("Relay allow-list is full")]
    TooManyRelayTargets,

    #[msg("Unauthorized: relay policy admin signature required")]
    UnauthorizedPolicyAdmin,

    #[msg("A pool already exists at this address")]
    PoolAlreadyExists,
}
