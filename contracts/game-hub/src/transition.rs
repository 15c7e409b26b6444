//! State transitions of the game hub.
//!
//! Each function runs as one host invocation: it either returns `Ok` with all
//! of its writes applied, or `Err` with none. Every precondition is checked
//! before the first write, and nothing here reads the clock or any other
//! input besides `HubState` and its arguments, so replaying the same
//! transitions in the same order reproduces the same state.

use soroban_sdk::Address;

use crate::events;
use crate::leaderboard;
use crate::oracle::ProofOracle;
use crate::state::HubState;
use crate::types::{Competition, GameProof, GameRecordKey, LeaderboardScore, SubmitOutcome};
use crate::Error;

/// Store a new competition under the next id and return that id.
pub fn create_competition(
    state: &HubState,
    creator: &Address,
    competition: &Competition,
) -> Result<u64, Error> {
    let competition_id = state.last_competition_id();
    let next = competition_id.checked_add(1).ok_or(Error::Overflow)?;

    state.set_competition(competition_id, competition);
    state.set_competition_creator(competition_id, creator);
    state.set_last_competition_id(next);

    events::competition_created(state.env(), competition_id, creator);
    Ok(competition_id)
}

/// Mark `player` as registered for `competition_id`.
///
/// Returns `false` when the player was already registered. The competition is
/// not required to exist.
pub fn register(state: &HubState, competition_id: u64, player: &Address) -> bool {
    let key = GameRecordKey {
        competition_id,
        player: player.clone(),
    };
    if state.is_registered(&key) {
        return false;
    }

    state.set_registered(&key);
    events::registered(state.env(), competition_id, player);
    true
}

/// Record a proven game result for `player`.
pub fn submit_result<O: ProofOracle>(
    state: &HubState,
    oracle: &O,
    competition_id: u64,
    player: &Address,
    proof: &GameProof,
) -> Result<SubmitOutcome, Error> {
    let output = oracle.verify(proof)?;

    let competition = state
        .competition(competition_id)
        .ok_or(Error::UnknownCompetition)?;

    let key = GameRecordKey {
        competition_id,
        player: player.clone(),
    };
    if competition.prereg && !state.is_registered(&key) {
        return Err(Error::RegistrationRequired);
    }

    let current_best = state.best_score(&key);
    if output.score <= current_best {
        return Ok(SubmitOutcome::Unchanged);
    }

    state.set_best_score(&key, output.score);
    let slot = try_insert(state, competition_id, output.score, player);

    events::new_best(state.env(), competition_id, player, output.score, slot);
    Ok(match slot {
        Some(index) => SubmitOutcome::Ranked(index),
        None => SubmitOutcome::Recorded,
    })
}

/// Append `seed` to the seed log and return the index it was stored at.
pub fn update_seed(state: &HubState, seed: u64) -> Result<u64, Error> {
    let index = state.last_seed_index();
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    state.set_seed(index, seed);
    state.set_last_seed_index(next);

    events::seed_updated(state.env(), index, seed);
    Ok(index)
}

/// Offer `(score, player)` to the competition's leaderboard.
fn try_insert(state: &HubState, competition_id: u64, score: u64, player: &Address) -> Option<u32> {
    let slots = (0..state.leaderboard_size()).map(|index| {
        state
            .leaderboard_slot(competition_id, index)
            .map(|entry| entry.score)
    });

    let index = leaderboard::select_slot(slots, score)?;
    state.set_leaderboard_slot(
        competition_id,
        index,
        &LeaderboardScore {
            score,
            player: player.clone(),
        },
    );
    Some(index)
}
