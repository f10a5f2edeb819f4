//! Program-wide constants.

/// Basis-point denominator (10000 bps = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Max milestones stored on-chain per vesting schedule.
pub const MAX_MILESTONES: usize = 10;

/// Max vesting ids tracked in a creator's index PDA.
pub const MAX_VESTINGS_PER_CREATOR: usize = 10;
