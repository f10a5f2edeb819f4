use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{MetricOracle, VestingSchedule};
use crate::utils::unlock;

/// Permissionless crank: fold the latest oracle reading into the
/// schedule's reached flags.
pub fn check_milestones(ctx: Context<CheckMilestones>) -> Result<()> {
    let current_value = ctx.accounts.oracle.value;

    let st = &mut ctx.accounts.vesting_schedule;
    require!(st.active, VestingError::VestingNotActive);

    let newly = unlock::newly_reached(st.milestones(), current_value);
    require!(!newly.is_empty(), VestingError::NoNewMilestonesReached);

    for &i in &newly {
        st.milestones[i as usize].mark_reached();
    }
    let unlocked_total = unlock::unlocked_total(st.milestones(), st.total_amount)?;

    for &i in &newly {
        emit!(MilestoneReached {
            vesting_id: st.vesting_id,
            milestone_index: i,
            threshold: st.milestones[i as usize].threshold,
            unlocked_total,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct CheckMilestones<'info> {
    #[account(
        mut,
        seeds = [b"vesting_schedule", vesting_schedule.vesting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        constraint = oracle.key() == vesting_schedule.oracle_feed @ VestingError::InvalidOracleFeed,
        constraint = oracle.metric_type == vesting_schedule.metric_type @ VestingError::MetricTypeMismatch,
    )]
    pub oracle: Account<'info, MetricOracle>,

    pub signer: Signer<'info>,
}

#[event]
pub struct MilestoneReached {
    pub vesting_id: u64,
    pub milestone_index: u8,
    pub threshold: u64,
    /// Cumulative unlocked total after this crank, not a per-milestone delta.
    pub unlocked_total: u64,
}
