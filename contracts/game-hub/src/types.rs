//! Value types stored in, and used as keys into, the hub's ledger state.

use soroban_sdk::{contracttype, Address, Bytes, String};

/// Rules of one competition. Immutable once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Competition {
    pub name: String,
    /// Level-generation seed the game client derives the layout from.
    pub seed: u64,
    /// Players must `register` before their results are accepted.
    pub prereg: bool,
}

/// `(competition, player)` key shared by registrations and personal bests.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRecordKey {
    pub competition_id: u64,
    pub player: Address,
}

/// `(competition, slot)` key of one leaderboard cell.
///
/// Slot indices carry no rank: the leaderboard is an unordered set of at most
/// `leaderboard_size` entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardIndex {
    pub competition_id: u64,
    pub index: u32,
}

/// A populated leaderboard slot. An absent slot reads as score 0.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardScore {
    pub score: u64,
    pub player: Address,
}

/// A game-run proof as produced by the client-side prover.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameProof {
    /// Raw proof bytes, opaque to the hub.
    pub proof: Bytes,
    /// Public inputs as 32-byte big-endian field elements. The first one is
    /// the score.
    pub public_inputs: Bytes,
}

/// Public output of a verified game run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoreOutput {
    pub score: u64,
}

/// Successful result of `submit_result`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Score did not beat the personal best; nothing was written.
    Unchanged,
    /// Personal best improved but the score did not make the leaderboard.
    Recorded,
    /// Personal best improved and was written to this leaderboard slot.
    Ranked(u32),
}

/// Storage keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address (instance storage).
    Admin,
    /// Address of the proof verifier contract (instance storage).
    VerifierAddress,
    /// Leaderboard capacity K (instance storage).
    LeaderboardSize,
    /// Number of competitions ever created (instance storage).
    LastCompetitionId,
    /// Number of seeds ever appended (instance storage).
    LastSeedIndex,
    /// Competition rules by id (persistent storage).
    Competition(u64),
    /// Address that created the competition (persistent storage).
    CompetitionCreator(u64),
    /// Registration flag (persistent storage).
    Registration(GameRecordKey),
    /// Personal best score (persistent storage).
    GameRecord(GameRecordKey),
    /// Leaderboard slot (persistent storage).
    Leaderboard(LeaderboardIndex),
    /// Seed log entry (persistent storage).
    Seed(u64),
}
