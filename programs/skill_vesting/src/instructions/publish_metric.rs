use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{MetricOracle, MetricType};

pub fn publish_metric(ctx: Context<PublishMetric>, value: u64) -> Result<()> {
    let oracle_key = ctx.accounts.oracle.key();

    let oracle = &mut ctx.accounts.oracle;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        oracle.authority,
        VestingError::UnauthorizedOracleAuthority
    );

    // No ordering constraint: social metrics can drop. Reached milestone
    // flags never reset, so a falling reading claws nothing back.
    oracle.value = value;
    oracle.updated_at = Clock::get()?.unix_timestamp;

    emit!(MetricPublished {
        oracle: oracle_key,
        metric_type: oracle.metric_type,
        value,
        updated_at: oracle.updated_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PublishMetric<'info> {
    #[account(mut)]
    pub oracle: Account<'info, MetricOracle>,

    pub authority: Signer<'info>,
}

#[event]
pub struct MetricPublished {
    pub oracle: Pubkey,
    pub metric_type: MetricType,
    pub value: u64,
    pub updated_at: i64,
}
