use anchor_lang::prelude::*;

use crate::state::VestingState;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let vesting_state = &mut ctx.accounts.vesting_state;
    vesting_state.authority = ctx.accounts.authority.key();
    vesting_state.vesting_id_counter = 0;

    emit!(VestingStateInitialized {
        authority: vesting_state.authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingStateInitialized {
    pub authority: Pubkey,
}
