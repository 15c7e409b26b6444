//! Contract events, one per applied state change. Rejections and no-op
//! submissions publish nothing.

use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompetitionCreated {
    #[topic]
    pub competition_id: u64,
    pub creator: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerRegistered {
    #[topic]
    pub competition_id: u64,
    #[topic]
    pub player: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBest {
    #[topic]
    pub competition_id: u64,
    #[topic]
    pub player: Address,
    pub score: u64,
    /// Leaderboard slot written, if the score made the leaderboard.
    pub slot: Option<u32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeedUpdated {
    #[topic]
    pub index: u64,
    pub seed: u64,
}

pub(crate) fn competition_created(env: &Env, competition_id: u64, creator: &Address) {
    CompetitionCreated {
        competition_id,
        creator: creator.clone(),
    }
    .publish(env);
}

pub(crate) fn registered(env: &Env, competition_id: u64, player: &Address) {
    PlayerRegistered {
        competition_id,
        player: player.clone(),
    }
    .publish(env);
}

pub(crate) fn new_best(
    env: &Env,
    competition_id: u64,
    player: &Address,
    score: u64,
    slot: Option<u32>,
) {
    NewBest {
        competition_id,
        player: player.clone(),
        score,
        slot,
    }
    .publish(env);
}

pub(crate) fn seed_updated(env: &Env, index: u64, seed: u64) {
    SeedUpdated { index, seed }.publish(env);
}
