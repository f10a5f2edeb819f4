use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingState};

pub fn deactivate_vesting(ctx: Context<DeactivateVesting>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.vesting_state.authority,
        VestingError::UnauthorizedAuthority
    );

    let st = &mut ctx.accounts.vesting_schedule;
    require!(st.active, VestingError::VestingNotActive);
    st.active = false;

    emit!(VestingDeactivated {
        vesting_id: st.vesting_id,
        authority: ctx.accounts.authority.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DeactivateVesting<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"vesting_schedule", vesting_schedule.vesting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    pub authority: Signer<'info>,
}

#[event]
pub struct VestingDeactivated {
    pub vesting_id: u64,
    pub authority: Pubkey,
}
