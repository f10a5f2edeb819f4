use anchor_lang::prelude::*;

use crate::state::{MetricOracle, MetricType};

pub fn initialize_oracle(ctx: Context<InitializeOracle>, metric_type: MetricType) -> Result<()> {
    let oracle_key = ctx.accounts.oracle.key();

    let oracle = &mut ctx.accounts.oracle;
    oracle.authority = ctx.accounts.authority.key();
    oracle.metric_type = metric_type;
    oracle.value = 0;
    oracle.updated_at = Clock::get()?.unix_timestamp;

    emit!(OracleInitialized {
        oracle: oracle_key,
        authority: oracle.authority,
        metric_type,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(metric_type: MetricType)]
pub struct InitializeOracle<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + MetricOracle::SIZE,
        seeds = [b"metric_oracle", authority.key().as_ref(), &[metric_type.seed_byte()]],
        bump
    )]
    pub oracle: Account<'info, MetricOracle>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct OracleInitialized {
    pub oracle: Pubkey,
    pub authority: Pubkey,
    pub metric_type: MetricType,
}
