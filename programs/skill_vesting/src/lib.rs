use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::MetricType;

declare_id!("9X2Yx7BBpdSAxeY6ZCJw3tYzK36qVoHCcToK7sD6cqb6");

#[program]
pub mod skill_vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn initialize_oracle(
        ctx: Context<InitializeOracle>,
        metric_type: MetricType,
    ) -> Result<()> {
        instructions::initialize_oracle::initialize_oracle(ctx, metric_type)
    }

    pub fn publish_metric(ctx: Context<PublishMetric>, value: u64) -> Result<()> {
        instructions::publish_metric::publish_metric(ctx, value)
    }

    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        amount: u64,
        metric_type: MetricType,
        thresholds: Vec<u64>,
        unlock_percentages: Vec<u16>,
    ) -> Result<()> {
        instructions::create_vesting::create_vesting(
            ctx,
            amount,
            metric_type,
            thresholds,
            unlock_percentages,
        )
    }

    pub fn check_milestones(ctx: Context<CheckMilestones>) -> Result<()> {
        instructions::check_milestones::check_milestones(ctx)
    }

    pub fn withdraw_unlocked(ctx: Context<WithdrawUnlocked>) -> Result<()> {
        instructions::withdraw_unlocked::withdraw_unlocked(ctx)
    }

    pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>) -> Result<()> {
        instructions::emit_unlock_quote::emit_unlock_quote(ctx)
    }

    pub fn deactivate_vesting(ctx: Context<DeactivateVesting>) -> Result<()> {
        instructions::deactivate_vesting::deactivate_vesting(ctx)
    }

    pub fn reactivate_vesting(ctx: Context<ReactivateVesting>) -> Result<()> {
        instructions::reactivate_vesting::reactivate_vesting(ctx)
    }
}
