use anchor_lang::prelude::*;

use crate::constants::{MAX_SIGNERS, VEST_POOL_SEED};
use crate::error::VestingError;
use crate::utils::{threshold, time};

/// Lifecycle stage of a pool. Only ever advances, one step at a time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VestStatus {
    #[default]
    Created,
    Deposited,
    Nominated,
    Claimed,
}

/// Escrow record for one vesting pool.
/// Seeds: [VEST_POOL_SEED, base]
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct VestPool {
    /// Seed key that derived this pool's address.
    pub base: Pubkey,
    /// Creator and funder; always `signers[0]`.
    pub sender: Pubkey,
    /// Claimant. `Pubkey::default()` until nominated.
    pub recipient: Pubkey,
    /// Token mint locked by this pool.
    pub mint: Pubkey,
    /// Amount to vest (> 0).
    pub amount: u64,
    /// Seconds between deposit and the first accepted claim (> 0).
    pub locked_period: i64,
    /// Unix seconds of the deposit; 0 while Created.
    pub deposit_time: i64,
    /// Signers required for deposit and nomination, sender included.
    pub min_sign: u8,
    pub status: VestStatus,
    /// PDA bump.
    pub bump: u8,
    /// Multisig set, sender first.
    pub signers: Vec<Pubkey>,
}

impl VestPool {
    pub const FIXED_SIZE: usize =
        32 + // base
        32 + // sender
        32 + // recipient
        32 + // mint
        8 +  // amount
        8 +  // locked_period
        8 +  // deposit_time
        1 +  // min_sign
        1 +  // status
        1 +  // bump
        4;   // signers vec length

    /// Space for discriminator + record with `signer_count` signers.
    pub const fn space(signer_count: usize) -> usize {
        8 + Self::FIXED_SIZE + 32 * signer_count
    }

    pub fn derive_address(base: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VEST_POOL_SEED, base.as_ref()], program_id)
    }

    /// Builds a fresh Created record, validating the creation parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base: Pubkey,
        sender: Pubkey,
        mint: Pubkey,
        amount: u64,
        locked_period: i64,
        min_sign: u8,
        extra_signers: &[Pubkey],
        bump: u8,
    ) -> std::result::Result<Self, VestingError> {
        if sender == Pubkey::default() {
            return Err(VestingError::InvalidSender);
        }
        if amount == 0 {
            return Err(VestingError::ZeroVestAmount);
        }
        if locked_period <= 0 {
            return Err(VestingError::InvalidLockingPeriod);
        }

        let signer_count = extra_signers
            .len()
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        if signer_count > MAX_SIGNERS {
            return Err(VestingError::TooManySigners);
        }
        if min_sign == 0 || min_sign as usize > signer_count {
            return Err(VestingError::InsufficientSigners);
        }

        let mut signers = Vec::with_capacity(signer_count);
        signers.push(sender);
        for key in extra_signers {
            if *key == Pubkey::default() {
                return Err(VestingError::InvalidSigner);
            }
            if signers.contains(key) {
                return Err(VestingError::DuplicateSigner);
            }
            signers.push(*key);
        }

        Ok(Self {
            base,
            sender,
            recipient: Pubkey::default(),
            mint,
            amount,
            locked_period,
            deposit_time: 0,
            min_sign,
            status: VestStatus::Created,
            bump,
            signers,
        })
    }

    /// A record read back from a freshly allocated account is all zeroes;
    /// any record that went through `new` carries a real sender.
    pub fn ensure_vacant(&self) -> std::result::Result<(), VestingError> {
        if self.sender != Pubkey::default() {
            return Err(VestingError::PoolAlreadyExists);
        }
        Ok(())
    }

    pub fn unlocks_at(&self) -> i64 {
        time::claim_unlocks_at(self.deposit_time, self.locked_period)
    }

    /// Threshold over `presented ∪ {sender}`; the caller has already checked
    /// that the sender signed.
    pub fn check_threshold(
        &self,
        presented: &[Pubkey],
    ) -> std::result::Result<(), VestingError> {
        let mut concurring = Vec::with_capacity(presented.len() + 1);
        concurring.push(self.sender);
        concurring.extend_from_slice(presented);
        if !threshold::satisfies_threshold(&self.signers, self.min_sign, &concurring) {
            return Err(VestingError::InsufficientSigners);
        }
        Ok(())
    }

    fn require_status(&self, expected: VestStatus) -> std::result::Result<(), VestingError> {
        if self.status != expected {
            return Err(VestingError::InvalidVestingStatus);
        }
        Ok(())
    }

    fn require_sender(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        if *caller != self.sender {
            return Err(VestingError::InvalidSender);
        }
        Ok(())
    }

    pub fn verify_mint(&self, mint: &Pubkey) -> std::result::Result<(), VestingError> {
        if *mint != self.mint {
            return Err(VestingError::InvalidMint);
        }
        Ok(())
    }

    /// Re-derives the pool address from `base` and the stored bump.
    pub fn verify_address(
        &self,
        pool_key: &Pubkey,
        base: &Pubkey,
        program_id: &Pubkey,
    ) -> std::result::Result<(), VestingError> {
        if *base != self.base {
            return Err(VestingError::InvalidBaseKey);
        }
        let derived = Pubkey::create_program_address(
            &[VEST_POOL_SEED, base.as_ref(), &[self.bump]],
            program_id,
        )
        .map_err(|_| VestingError::InvalidBaseKey)?;
        if derived != *pool_key {
            return Err(VestingError::InvalidBaseKey);
        }
        Ok(())
    }

    pub fn validate_deposit(
        &self,
        caller: &Pubkey,
        presented: &[Pubkey],
    ) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Created)?;
        self.require_sender(caller)?;
        self.check_threshold(presented)
    }

    pub fn mark_deposited(&mut self, now_ts: i64) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Created)?;
        self.deposit_time = now_ts;
        self.status = VestStatus::Deposited;
        Ok(())
    }

    pub fn validate_nomination(
        &self,
        caller: &Pubkey,
        receiver: &Pubkey,
        presented: &[Pubkey],
    ) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Deposited)?;
        self.require_sender(caller)?;
        self.check_threshold(presented)?;
        if *receiver == Pubkey::default() {
            return Err(VestingError::InvalidReceiver);
        }
        Ok(())
    }

    pub fn mark_nominated(
        &mut self,
        receiver: Pubkey,
    ) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Deposited)?;
        self.recipient = receiver;
        self.status = VestStatus::Nominated;
        Ok(())
    }

    pub fn validate_claim(
        &self,
        claimant: &Pubkey,
        now_ts: i64,
    ) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Nominated)?;
        if *claimant != self.recipient {
            return Err(VestingError::InvalidReceiver);
        }
        if !time::is_claim_eligible(self.deposit_time, self.locked_period, now_ts)? {
            return Err(VestingError::InvalidClaimTime);
        }
        Ok(())
    }

    pub fn mark_claimed(&mut self) -> std::result::Result<(), VestingError> {
        self.require_status(VestStatus::Nominated)?;
        self.status = VestStatus::Claimed;
        Ok(())
    }
}
