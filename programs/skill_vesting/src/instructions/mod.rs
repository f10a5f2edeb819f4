pub mod check_milestones;
pub mod create_vesting;
pub mod deactivate_vesting;
pub mod emit_unlock_quote;
pub mod initialize;
pub mod initialize_oracle;
pub mod publish_metric;
pub mod reactivate_vesting;
pub mod withdraw_unlocked;

pub use check_milestones::*;
pub use create_vesting::*;
pub use deactivate_vesting::*;
pub use emit_unlock_quote::*;
pub use initialize::*;
pub use initialize_oracle::*;
pub use publish_metric::*;
pub use reactivate_vesting::*;
pub use withdraw_unlocked::*;
