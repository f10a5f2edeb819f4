use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::constants::MAX_MILESTONES;
use crate::error::VestingError;
use crate::state::MetricType;
use crate::utils::unlock;

/// A single milestone entry stored inline in the schedule PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Milestone {
    /// Metric value at which this milestone unlocks (inclusive).
    pub threshold: u64,
    /// Fraction of the total amount released, in basis points (10000 = 100%).
    pub unlock_percentage: u16,
    /// 0/1 flag; flips 0 -> 1 once, never reset.
    pub reached: u8,
    pub _padding: [u8; 5],
}

impl Milestone {
    pub const SIZE: usize = core::mem::size_of::<Milestone>();

    pub fn new(threshold: u64, unlock_percentage: u16) -> Self {
        Self {
            threshold,
            unlock_percentage,
            reached: 0,
            _padding: [0u8; 5],
        }
    }

    pub fn is_reached(&self) -> bool {
        self.reached != 0
    }

    pub fn mark_reached(&mut self) {
        self.reached = 1;
    }
}

impl Default for Milestone {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Milestone vesting schedule PDA.
/// Seeds: [b"vesting_schedule", vesting_id.to_le_bytes()]
#[account]
pub struct VestingSchedule {
    /// Creator wallet; only signer allowed to withdraw.
    pub creator: Pubkey,
    /// Mint of the vested asset.
    pub token_mint: Pubkey,
    /// MetricOracle account consulted for milestone checks.
    pub oracle_feed: Pubkey,
    /// Escrowed amount, fixed at creation (smallest token unit).
    pub total_amount: u64,
    /// Lifetime withdrawn amount; monotonically non-decreasing,
    /// mutated only by withdrawal.
    pub unlocked_amount: u64,
    /// Which oracle metric drives the milestones.
    pub metric_type: MetricType,
    /// Cleared only by an explicit authority action.
    pub active: bool,
    /// Id assigned from the global counter at creation.
    pub vesting_id: u64,
    /// Number of populated milestone slots.
    pub milestone_count: u8,
    pub milestones: [Milestone; MAX_MILESTONES],
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // creator
        32 + // token_mint
        32 + // oracle_feed
        8 +  // total_amount
        8 +  // unlocked_amount
        1 +  // metric_type
        1 +  // active
        8 +  // vesting_id
        1 +  // milestone_count
        MAX_MILESTONES * Milestone::SIZE; // milestones

    /// The populated milestone slots.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones[..self.milestone_count as usize]
    }

    pub fn reached_count(&self) -> u8 {
        self.milestones().iter().filter(|m| m.is_reached()).count() as u8
    }

    /// Portion of the unlocked total not yet withdrawn.
    pub fn withdrawable(&self) -> core::result::Result<u64, VestingError> {
        if !self.active {
            return Err(VestingError::VestingNotActive);
        }
        let unlocked_total = unlock::unlocked_total(self.milestones(), self.total_amount)?;
        let amount = unlocked_total
            .checked_sub(self.unlocked_amount)
            .ok_or(VestingError::MathOverflow)?;
        if amount == 0 {
            return Err(VestingError::NoTokensToWithdraw);
        }
        Ok(amount)
    }

    /// Move the withdrawable amount onto the lifetime withdrawn counter
    /// and return it. Fails exactly when `withdrawable` fails.
    pub fn apply_withdrawal(&mut self) -> core::result::Result<u64, VestingError> {
        let amount = self.withdrawable()?;
        self.unlocked_amount = self
            .unlocked_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(amount)
    }
}
