//! Milestone unlock math over a schedule's basis-point table.
//! - thresholds are inclusive (value == threshold counts as reached)
//! - milestones evaluate independently; thresholds need not be sorted
//! - unlocked total = floor(total_amount * reached_bps / 10000), one
//!   floor over the summed basis points, widened through u128

use crate::constants::{BPS_DENOMINATOR, MAX_MILESTONES};
use crate::error::VestingError;
use crate::state::Milestone;

/// Validate the parallel threshold/percentage arrays a schedule is
/// created from. A basis-point sum below 10000 is legal (the schedule
/// intentionally unlocks less than 100%).
pub fn validate_milestones(
    thresholds: &[u64],
    unlock_percentages: &[u16],
) -> Result<(), VestingError> {
    if thresholds.len() != unlock_percentages.len() {
        return Err(VestingError::ArrayLengthMismatch);
    }
    if thresholds.is_empty() {
        return Err(VestingError::NoMilestones);
    }
    if thresholds.len() > MAX_MILESTONES {
        return Err(VestingError::TooManyMilestones);
    }

    let mut total_bps: u64 = 0;
    for &bps in unlock_percentages {
        total_bps = total_bps
            .checked_add(bps as u64)
            .ok_or(VestingError::MathOverflow)?;
    }
    if total_bps > BPS_DENOMINATOR {
        return Err(VestingError::TotalPercentageExceeded);
    }
    Ok(())
}

/// Indices (input order) of milestones newly crossed at `current_value`.
/// Already-reached entries are skipped; an empty result is a normal
/// outcome, not a failure. Pure: the caller persists the flag flips.
pub fn newly_reached(milestones: &[Milestone], current_value: u64) -> Vec<u8> {
    let mut indices = Vec::new();
    for (i, m) in milestones.iter().enumerate() {
        if !m.is_reached() && current_value >= m.threshold {
            indices.push(i as u8);
        }
    }
    indices
}

/// Total amount unlocked by the reached milestones:
/// floor(total_amount * reached_bps / 10000).
pub fn unlocked_total(milestones: &[Milestone], total_amount: u64) -> Result<u64, VestingError> {
    let mut reached_bps: u64 = 0;
    for m in milestones.iter().filter(|m| m.is_reached()) {
        reached_bps = reached_bps
            .checked_add(m.unlock_percentage as u64)
            .ok_or(VestingError::MathOverflow)?;
    }

    let unlocked = (total_amount as u128)
        .checked_mul(reached_bps as u128)
        .ok_or(VestingError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(unlocked).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MetricType, VestingSchedule};
    use anchor_lang::prelude::Pubkey;

    fn milestone(threshold: u64, bps: u16) -> Milestone {
        Milestone::new(threshold, bps)
    }

    fn reached(threshold: u64, bps: u16) -> Milestone {
        let mut m = Milestone::new(threshold, bps);
        m.mark_reached();
        m
    }

    fn schedule(total: u64, withdrawn: u64, active: bool, ms: &[Milestone]) -> VestingSchedule {
        let mut s = VestingSchedule {
            creator: Pubkey::default(),
            token_mint: Pubkey::default(),
            oracle_feed: Pubkey::default(),
            total_amount: total,
            unlocked_amount: withdrawn,
            metric_type: MetricType::Followers,
            active,
            vesting_id: 1,
            milestone_count: ms.len() as u8,
            milestones: [Milestone::default(); MAX_MILESTONES],
        };
        s.milestones[..ms.len()].copy_from_slice(ms);
        s
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(matches!(
            validate_milestones(&[], &[]),
            Err(VestingError::NoMilestones)
        ));
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        assert!(matches!(
            validate_milestones(&[1000, 2000], &[5000]),
            Err(VestingError::ArrayLengthMismatch)
        ));
        // Mismatch is reported before emptiness of either side.
        assert!(matches!(
            validate_milestones(&[1000], &[]),
            Err(VestingError::ArrayLengthMismatch)
        ));
    }

    #[test]
    fn validate_rejects_total_over_full() {
        assert!(matches!(
            validate_milestones(&[1000, 2000], &[6000, 5000]),
            Err(VestingError::TotalPercentageExceeded)
        ));
    }

    #[test]
    fn validate_accepts_partial_total() {
        // Summing below 10000 is an intentional partial unlock, not an error.
        assert!(validate_milestones(&[1000, 2000], &[2500, 2500]).is_ok());
        assert!(validate_milestones(&[1000], &[10000]).is_ok());
    }

    #[test]
    fn validate_rejects_too_many() {
        let thresholds = vec![0u64; MAX_MILESTONES + 1];
        let percentages = vec![0u16; MAX_MILESTONES + 1];
        assert!(matches!(
            validate_milestones(&thresholds, &percentages),
            Err(VestingError::TooManyMilestones)
        ));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let ms = [milestone(1000, 10000)];
        assert!(newly_reached(&ms, 999).is_empty());
        assert_eq!(newly_reached(&ms, 1000), vec![0]);
    }

    #[test]
    fn newly_reached_is_pure_and_repeatable() {
        let ms = [milestone(1000, 2500), milestone(5000, 2500)];
        let first = newly_reached(&ms, 1500);
        let second = newly_reached(&ms, 1500);
        assert_eq!(first, vec![0]);
        assert_eq!(first, second);
        // Input untouched until the caller persists the flips.
        assert!(!ms[0].is_reached());
    }

    #[test]
    fn newly_reached_skips_persisted_flags() {
        let ms = [reached(1000, 2500), milestone(5000, 2500)];
        assert!(newly_reached(&ms, 1500).is_empty());
        assert_eq!(newly_reached(&ms, 5000), vec![1]);
    }

    #[test]
    fn newly_reached_reports_input_order_for_unsorted_thresholds() {
        // Milestones evaluate independently; reaching one never requires
        // reaching a lower-threshold neighbor first.
        let ms = [
            milestone(5000, 2500),
            milestone(1000, 2500),
            milestone(20000, 5000),
        ];
        assert_eq!(newly_reached(&ms, 6000), vec![0, 1]);
        assert_eq!(newly_reached(&ms, 1000), vec![1]);
    }

    #[test]
    fn unlocked_total_uses_floor_division() {
        let ms = [
            reached(1000, 2500),
            milestone(5000, 2500),
            milestone(10000, 5000),
        ];
        assert_eq!(unlocked_total(&ms, 10000).unwrap(), 2500);

        // 9999 * 3333 / 10000 truncates.
        let ms = [reached(1000, 3333)];
        assert_eq!(unlocked_total(&ms, 9999).unwrap(), 3332);
    }

    #[test]
    fn unlocked_total_never_exceeds_total_amount() {
        let total = (1u64 << 63) - 1;
        let ms = [reached(1, 2500), reached(2, 2500), reached(3, 5000)];
        assert_eq!(unlocked_total(&ms, total).unwrap(), total);

        let partial = [reached(1, 2500), milestone(2, 7500)];
        let unlocked = unlocked_total(&partial, total).unwrap();
        assert!(unlocked < total);
    }

    #[test]
    fn unlocked_total_is_monotonic_in_reached_flags() {
        let mut ms = [
            milestone(1000, 1500),
            milestone(5000, 3500),
            milestone(10000, 5000),
        ];
        let mut previous = 0u64;
        for i in 0..ms.len() {
            ms[i].mark_reached();
            let unlocked = unlocked_total(&ms, 987_654_321).unwrap();
            assert!(unlocked >= previous);
            previous = unlocked;
        }
    }

    #[test]
    fn withdrawable_requires_active_schedule() {
        let s = schedule(10000, 0, false, &[reached(1000, 10000)]);
        assert!(matches!(
            s.withdrawable(),
            Err(VestingError::VestingNotActive)
        ));
    }

    #[test]
    fn withdrawable_requires_new_unlocks() {
        // Nothing reached yet.
        let s = schedule(10000, 0, true, &[milestone(1000, 10000)]);
        assert!(matches!(
            s.withdrawable(),
            Err(VestingError::NoTokensToWithdraw)
        ));
    }

    #[test]
    fn withdrawal_sequencing_round_trip() {
        let mut s = schedule(10000, 0, true, &[milestone(1000, 10000)]);

        // Below threshold: no milestone crossed.
        assert!(newly_reached(s.milestones(), 500).is_empty());

        // Crossing the threshold reports index 0; the caller persists it.
        let newly = newly_reached(s.milestones(), 1500);
        assert_eq!(newly, vec![0]);
        for &i in &newly {
            s.milestones[i as usize].mark_reached();
        }

        assert_eq!(s.withdrawable().unwrap(), 10000);
        assert_eq!(s.apply_withdrawal().unwrap(), 10000);
        assert_eq!(s.unlocked_amount, 10000);

        // Everything already withdrawn.
        assert!(matches!(
            s.withdrawable(),
            Err(VestingError::NoTokensToWithdraw)
        ));
    }

    #[test]
    fn withdrawal_in_two_tranches() {
        let mut s = schedule(
            10000,
            0,
            true,
            &[milestone(1000, 2500), milestone(5000, 2500)],
        );

        for &i in &newly_reached(s.milestones(), 1000) {
            s.milestones[i as usize].mark_reached();
        }
        assert_eq!(s.apply_withdrawal().unwrap(), 2500);

        for &i in &newly_reached(s.milestones(), 5000) {
            s.milestones[i as usize].mark_reached();
        }
        assert_eq!(s.apply_withdrawal().unwrap(), 2500);
        assert_eq!(s.unlocked_amount, 5000);

        // Partial-unlock schedule: half the escrow stays locked forever.
        assert!(matches!(
            s.withdrawable(),
            Err(VestingError::NoTokensToWithdraw)
        ));
    }

    #[test]
    fn reached_count_tracks_progress() {
        let s = schedule(
            10000,
            0,
            true,
            &[reached(1000, 2500), milestone(5000, 2500), reached(10, 100)],
        );
        assert_eq!(s.reached_count(), 2);
        assert_eq!(s.milestone_count, 3);
    }
}
