use anchor_lang::prelude::*;

use crate::state::VestingSchedule;
use crate::utils::unlock;

/// Read-only quote for the presentation layer: unlock progress and the
/// amount a withdrawal would currently move.
pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>) -> Result<()> {
    let st = &ctx.accounts.vesting_schedule;
    let unlocked_total = unlock::unlocked_total(st.milestones(), st.total_amount)?;

    emit!(UnlockQuote {
        vesting_id: st.vesting_id,
        unlocked_total,
        withdrawn_amount: st.unlocked_amount,
        withdrawable: unlocked_total.saturating_sub(st.unlocked_amount),
        milestones_reached: st.reached_count(),
        milestone_count: st.milestone_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitUnlockQuote<'info> {
    #[account(
        seeds = [b"vesting_schedule", vesting_schedule.vesting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct UnlockQuote {
    pub vesting_id: u64,
    pub unlocked_total: u64,
    pub withdrawn_amount: u64,
    /// Zero when nothing is pending; the quote never errors on that.
    pub withdrawable: u64,
    pub milestones_reached: u8,
    pub milestone_count: u8,
}
