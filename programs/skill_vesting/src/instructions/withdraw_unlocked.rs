use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{MetricOracle, VestingSchedule};
use crate::utils::unlock;

pub fn withdraw_unlocked(ctx: Context<WithdrawUnlocked>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let schedule_ai = ctx.accounts.vesting_schedule.to_account_info();
    let schedule_bump = ctx.bumps.vesting_schedule;
    let current_value = ctx.accounts.oracle.value;

    let st = &mut ctx.accounts.vesting_schedule;
    require_keys_eq!(
        ctx.accounts.creator.key(),
        st.creator,
        VestingError::UnauthorizedCreator
    );

    // Fold in milestones the crank has not picked up yet. An empty result
    // here is a no-op, not a failure.
    let newly = unlock::newly_reached(st.milestones(), current_value);
    for &i in &newly {
        st.milestones[i as usize].mark_reached();
    }

    let amount = st.apply_withdrawal()?;
    require!(
        ctx.accounts.token_vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    let vesting_id = st.vesting_id;
    let total_withdrawn = st.unlocked_amount;
    let id_bytes = vesting_id.to_le_bytes();

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_schedule", id_bytes.as_ref(), &[schedule_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.token_to.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensWithdrawn {
        vesting_id,
        creator: ctx.accounts.creator.key(),
        amount,
        total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawUnlocked<'info> {
    #[account(
        mut,
        seeds = [b"vesting_schedule", vesting_schedule.vesting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"token_vault", vesting_schedule.vesting_id.to_le_bytes().as_ref()],
        bump,
        constraint = token_vault.mint == vesting_schedule.token_mint @ VestingError::InvalidTokenMint,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = token_to.mint == vesting_schedule.token_mint @ VestingError::InvalidTokenMint,
        constraint = token_to.owner == creator.key() @ VestingError::InvalidTokenAccount,
    )]
    pub token_to: Account<'info, TokenAccount>,

    #[account(
        constraint = oracle.key() == vesting_schedule.oracle_feed @ VestingError::InvalidOracleFeed,
        constraint = oracle.metric_type == vesting_schedule.metric_type @ VestingError::MetricTypeMismatch,
    )]
    pub oracle: Account<'info, MetricOracle>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub vesting_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    /// Lifetime withdrawn total after this withdrawal.
    pub total_withdrawn: u64,
}
