use anchor_lang::prelude::*;

/// Social metric a vesting schedule is keyed on.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricType {
    Followers,
    Views,
    Likes,
}

impl MetricType {
    /// Stable byte tag used in oracle PDA seeds.
    pub const fn seed_byte(&self) -> u8 {
        match *self {
            MetricType::Followers => 0,
            MetricType::Views => 1,
            MetricType::Likes => 2,
        }
    }
}

/// Authority-published metric feed consulted by milestone checks.
/// Carries no freshness guarantee; staleness is the publisher's concern.
#[account]
pub struct MetricOracle {
    /// Signer allowed to publish new readings.
    pub authority: Pubkey,
    /// Which metric this feed reports.
    pub metric_type: MetricType,
    /// Latest reported metric value.
    pub value: u64,
    /// Unix timestamp of the last publish.
    pub updated_at: i64,
}

impl MetricOracle {
    pub const SIZE: usize =
        32 + // authority
        1 +  // metric_type
        8 +  // value
        8;   // updated_at
}
