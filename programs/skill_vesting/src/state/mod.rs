pub mod oracle;
pub mod schedule;
pub mod vesting_state;

pub use oracle::*;
pub use schedule::*;
pub use vesting_state::*;
