//! Program-wide constants.

use anchor_lang::prelude::*;

/// Domain-separation seed for vest pool PDAs: `[VEST_POOL_SEED, base]`.
#[constant]
pub const VEST_POOL_SEED: &[u8] = b"VestPool";

/// Seed of the singleton relay policy PDA.
#[constant]
pub const RELAY_POLICY_SEED: &[u8] = b"relay_policy";

/// Max signers stored on a pool, sender included.
pub const MAX_SIGNERS: usize = 11;

/// Max program ids on the relay allow-list.
pub const MAX_RELAY_TARGETS: usize = 16;
