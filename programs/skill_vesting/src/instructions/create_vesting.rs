use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{MAX_MILESTONES, MAX_VESTINGS_PER_CREATOR};
use crate::error::VestingError;
use crate::state::{
    CreatorVestings, MetricOracle, MetricType, Milestone, VestingSchedule, VestingState,
};
use crate::utils::unlock;

pub fn create_vesting(
    ctx: Context<CreateVesting>,
    amount: u64,
    metric_type: MetricType,
    thresholds: Vec<u64>,
    unlock_percentages: Vec<u16>,
) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);
    unlock::validate_milestones(&thresholds, &unlock_percentages)?;

    // Escrow the vested amount up front; the schedule PDA owns the vault.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_from.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        amount,
    )?;

    let vesting_state = &mut ctx.accounts.vesting_state;
    vesting_state.vesting_id_counter = vesting_state
        .vesting_id_counter
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;
    let vesting_id = vesting_state.vesting_id_counter;

    let st = &mut ctx.accounts.vesting_schedule;
    st.creator = ctx.accounts.creator.key();
    st.token_mint = ctx.accounts.token_mint.key();
    st.oracle_feed = ctx.accounts.oracle.key();
    st.total_amount = amount;
    st.unlocked_amount = 0;
    st.metric_type = metric_type;
    st.active = true;
    st.vesting_id = vesting_id;
    st.milestone_count = thresholds.len() as u8;
    st.milestones = [Milestone::default(); MAX_MILESTONES];
    for (i, (&threshold, &bps)) in thresholds.iter().zip(unlock_percentages.iter()).enumerate() {
        st.milestones[i] = Milestone::new(threshold, bps);
    }

    let creator_vestings = &mut ctx.accounts.creator_vestings;
    if creator_vestings.creator == Pubkey::default() {
        creator_vestings.creator = ctx.accounts.creator.key();
    }
    require!(
        creator_vestings.vesting_ids.len() < MAX_VESTINGS_PER_CREATOR,
        VestingError::CreatorVestingListFull
    );
    creator_vestings.vesting_ids.push(vesting_id);

    emit!(VestingCreated {
        vesting_id,
        creator: st.creator,
        token_mint: st.token_mint,
        total_amount: amount,
        metric_type,
        milestone_count: st.milestone_count,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, metric_type: MetricType)]
pub struct CreateVesting<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = creator,
        space = 8 + VestingSchedule::SIZE,
        seeds = [
            b"vesting_schedule",
            vesting_state.vesting_id_counter.saturating_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorVestings::SIZE,
        seeds = [b"creator_vestings", creator.key().as_ref()],
        bump
    )]
    pub creator_vestings: Account<'info, CreatorVestings>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = token_from.mint == token_mint.key() @ VestingError::InvalidTokenMint,
        constraint = token_from.owner == creator.key() @ VestingError::InvalidTokenAccount,
    )]
    pub token_from: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = creator,
        token::mint = token_mint,
        token::authority = vesting_schedule,
        seeds = [
            b"token_vault",
            vesting_state.vesting_id_counter.saturating_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = oracle.metric_type == metric_type @ VestingError::MetricTypeMismatch,
    )]
    pub oracle: Account<'info, MetricOracle>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingCreated {
    pub vesting_id: u64,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub total_amount: u64,
    pub metric_type: MetricType,
    pub milestone_count: u8,
}
