//! Fixed-capacity top-K leaderboard.
//!
//! The leaderboard of a competition is `K` unordered slots. A new personal best
//! evicts the slot with the lowest score, and only if it beats that score. Who
//! holds a slot plays no part, so one player may hold several slots. One
//! linear scan, no sorting.

use crate::Error;

/// Capacity used when deploying with the reference policy.
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 10;

/// Upper bound on K. Every ranked submission reads all K slots.
pub const MAX_LEADERBOARD_SIZE: u32 = 100;

/// Check a configured capacity.
pub fn validate_capacity(size: u32) -> Result<u32, Error> {
    if size == 0 || size > MAX_LEADERBOARD_SIZE {
        return Err(Error::CapacityMisconfigured);
    }
    Ok(size)
}

/// Pick the slot a candidate `score` should be written to.
///
/// `slots` yields the score of every slot in index order, `None` for an empty
/// slot (an empty slot counts as score 0). The slot with the strictly lowest
/// score is tracked, ties keeping the earliest index, and returned only when
/// `score` is greater than it.
///
/// `None` means the candidate is dropped and the leaderboard stays unchanged.
pub fn select_slot<I>(slots: I, score: u64) -> Option<u32>
where
    I: IntoIterator<Item = Option<u64>>,
{
    let mut loser: Option<(u32, u64)> = None;

    for (index, slot) in (0u32..).zip(slots) {
        let slot_score = slot.unwrap_or(0);
        match loser {
            Some((_, lowest)) if slot_score >= lowest => {}
            _ => loser = Some((index, slot_score)),
        }
    }

    loser
        .filter(|&(_, lowest)| score > lowest)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec;
    use std::vec::Vec;

    /// Slots are `(score, player)` pairs with plain ids; the contract uses `Address`.
    type Slots = Vec<Option<(u64, u32)>>;

    fn board(entries: &[(u64, u32)]) -> Slots {
        entries.iter().copied().map(Some).collect()
    }

    fn apply(slots: &mut Slots, score: u64, player: u32) -> Option<u32> {
        let slot = select_slot(slots.iter().map(|s| s.map(|(held, _)| held)), score);
        if let Some(index) = slot {
            slots[index as usize] = Some((score, player));
        }
        slot
    }

    #[test]
    fn evicts_the_minimum() {
        let mut slots = board(&[(10, 1), (20, 2), (30, 3)]);
        assert_eq!(apply(&mut slots, 25, 4), Some(0));
        assert_eq!(slots, board(&[(25, 4), (20, 2), (30, 3)]));
    }

    #[test]
    fn drops_score_below_minimum() {
        let mut slots = board(&[(10, 1), (20, 2), (30, 3)]);
        assert_eq!(apply(&mut slots, 5, 4), None);
        assert_eq!(slots, board(&[(10, 1), (20, 2), (30, 3)]));
    }

    #[test]
    fn drops_score_equal_to_minimum() {
        let slots = [Some(10), Some(20), Some(30)];
        assert_eq!(select_slot(slots, 10), None);
    }

    #[test]
    fn zero_never_displaces_a_populated_slot() {
        // The unguarded scan would overwrite slot 0 here.
        assert_eq!(select_slot([Some(7), Some(8)], 0), None);
    }

    #[test]
    fn tie_for_minimum_keeps_earliest_index() {
        let slots = [Some(30), Some(10), Some(10), Some(20)];
        assert_eq!(select_slot(slots, 11), Some(1));
    }

    #[test]
    fn fills_first_empty_slot() {
        assert_eq!(select_slot([Some(40), None, None], 1), Some(1));
    }

    #[test]
    fn empty_board_takes_slot_zero() {
        assert_eq!(select_slot(vec![None; 10], 100), Some(0));
    }

    #[test]
    fn same_player_can_hold_two_slots() {
        let mut slots = vec![Some((100, 1)), None, Some((50, 2))];
        assert_eq!(apply(&mut slots, 150, 1), Some(1));
        assert_eq!(slots, vec![Some((100, 1)), Some((150, 1)), Some((50, 2))]);
    }

    #[test]
    fn minimum_is_evicted_even_when_player_holds_a_higher_slot() {
        let mut slots = board(&[(10, 1), (20, 2), (30, 3)]);
        assert_eq!(apply(&mut slots, 35, 3), Some(0));
        assert_eq!(slots, board(&[(35, 3), (20, 2), (30, 3)]));
    }

    #[test]
    fn never_grows_past_capacity() {
        let mut slots: Slots = vec![None; 3];
        for player in 0..20u32 {
            apply(&mut slots, u64::from(player) * 7 % 23 + 1, player);
            assert_eq!(slots.len(), 3);
        }
        let mut kept: Vec<u64> = slots.iter().flatten().map(|(s, _)| *s).collect();
        kept.sort_unstable();
        // Top three of (p * 7 % 23 + 1) for p in 0..20.
        assert_eq!(kept, vec![21, 22, 23]);
    }

    #[test]
    fn capacity_bounds() {
        assert_eq!(validate_capacity(0), Err(Error::CapacityMisconfigured));
        assert_eq!(
            validate_capacity(MAX_LEADERBOARD_SIZE + 1),
            Err(Error::CapacityMisconfigured)
        );
        assert_eq!(validate_capacity(1), Ok(1));
        assert_eq!(
            validate_capacity(DEFAULT_LEADERBOARD_SIZE),
            Ok(DEFAULT_LEADERBOARD_SIZE)
        );
    }
}
