use anchor_lang::prelude::*;

use crate::constants::MAX_VESTINGS_PER_CREATOR;

/// Global program state PDA holding the schedule id counter.
#[account]
pub struct VestingState {
    /// Authority allowed to deactivate/reactivate schedules.
    pub authority: Pubkey,
    /// Monotonic counter; the first issued schedule id is 1.
    pub vesting_id_counter: u64,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // authority
        8;   // vesting_id_counter
}

/// Per-creator index of owned vesting schedule ids (<= 10 entries).
#[account]
pub struct CreatorVestings {
    pub creator: Pubkey,
    pub vesting_ids: Vec<u64>,
}

impl CreatorVestings {
    pub const SIZE: usize =
        32 + // creator
        4 + 8 * MAX_VESTINGS_PER_CREATOR; // vesting_ids vec header + entries
}
