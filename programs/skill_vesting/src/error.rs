use anchor_lang::prelude::*;

/// Custom error codes for the skill vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: vesting authority signature required")]
    UnauthorizedAuthority,

    #[msg("Unauthorized: creator signature required")]
    UnauthorizedCreator,

    #[msg("Unauthorized: oracle authority signature required")]
    UnauthorizedOracleAuthority,

    #[msg("Vesting amount must be greater than zero")]
    InvalidAmount,

    #[msg("Threshold and percentage arrays must be the same length")]
    ArrayLengthMismatch,

    #[msg("Must have at least one milestone")]
    NoMilestones,

    #[msg("Milestone list is full")]
    TooManyMilestones,

    #[msg("Total unlock percentage cannot exceed 100%")]
    TotalPercentageExceeded,

    #[msg("Vesting schedule not active")]
    VestingNotActive,

    #[msg("Vesting schedule already active")]
    VestingAlreadyActive,

    #[msg("No new milestones reached")]
    NoNewMilestonesReached,

    #[msg("No tokens to withdraw")]
    NoTokensToWithdraw,

    #[msg("Oracle account does not match schedule oracle feed")]
    InvalidOracleFeed,

    #[msg("Oracle metric type does not match schedule")]
    MetricTypeMismatch,

    #[msg("Creator vesting list is full")]
    CreatorVestingListFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
