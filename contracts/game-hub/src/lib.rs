#![no_std]

//! # Game Hub — Proof-Gated Competition Leaderboards
//!
//! Keeps per-competition personal bests and a bounded top-K leaderboard for
//! single-player games whose runs are proven off-chain.
//!
//! ## Flow
//! 1. Admin deploys the proof verifier (VK embedded at compile time).
//! 2. Admin deploys this contract with (`admin`, `verifier`, `leaderboard_size`).
//! 3. Anyone calls `create_competition`; ids are handed out as 0, 1, 2, ...
//!    The competition `seed` is what the game client builds its level from.
//! 4. If the competition has `prereg` set, players call `register` first.
//! 5. A player proves a run and calls `submit_result(player, competition_id, proof)`:
//!    - the verifier call must succeed, otherwise `InvalidProof`;
//!    - the competition must exist, otherwise `UnknownCompetition`;
//!    - a `prereg` competition needs a registration, otherwise `RegistrationRequired`;
//!    - a score that does not beat the personal best is a no-op (`Unchanged`);
//!    - a new personal best is stored and offered to the leaderboard.
//!
//! ## Leaderboard
//! K unordered slots per competition. A new personal best evicts the lowest
//! slot (earliest index on ties), but only when it is strictly higher. A low
//! score never displaces a better one, and the leaderboard never holds more
//! than K entries. A player may hold more than one slot.
//!
//! ## Public Inputs
//! The verifier's public inputs are 32-byte big-endian field elements. The first
//! one is the score and must fit in a `u64`.
//!
//! ## Seeds
//! `update_seed` appends to an admin-controlled seed log that versions level
//! layouts independently of competitions.

use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, panic_with_error, Address, Bytes,
    BytesN, Env, Vec,
};

pub mod events;
pub mod leaderboard;
pub mod oracle;
pub mod state;
pub mod transition;
pub mod types;

use crate::oracle::VerifierOracle;
use crate::state::HubState;
pub use crate::types::{
    Competition, GameProof, GameRecordKey, LeaderboardIndex, LeaderboardScore, ScoreOutput,
    SubmitOutcome,
};

// ============================================================================
// External Contract Interfaces
// ============================================================================

/// Interface of the game-run verifier contract.
///
/// The verifier MUST trap on an invalid proof. Returning normally signals a
/// valid proof over `public_inputs`.
#[contractclient(name = "ScoreVerifierClient")]
pub trait ScoreVerifier {
    fn verify_proof(env: Env, proof: Bytes, public_inputs: Bytes);
}

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The verifier rejected the proof, or its public inputs are malformed.
    InvalidProof = 1,
    /// No competition was ever created with this id.
    UnknownCompetition = 2,
    /// The competition requires preregistration and the player has none.
    RegistrationRequired = 3,
    /// Leaderboard capacity is zero or above `MAX_LEADERBOARD_SIZE`.
    CapacityMisconfigured = 4,
    /// A counter would exceed `u64::MAX`.
    Overflow = 5,
}

// ============================================================================
// Contract
// ============================================================================

#[contract]
pub struct GameHubContract;

#[contractimpl]
impl GameHubContract {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Deploy and configure the contract.
    ///
    /// # Arguments
    /// * `admin`            – Admin address (`set_*`, `update_seed`, `upgrade`).
    /// * `verifier`         – Address of the deployed proof verifier.
    /// * `leaderboard_size` – Leaderboard capacity K, in `1..=MAX_LEADERBOARD_SIZE`.
    pub fn __constructor(env: Env, admin: Address, verifier: Address, leaderboard_size: u32) {
        let size = match leaderboard::validate_capacity(leaderboard_size) {
            Ok(size) => size,
            Err(err) => panic_with_error!(&env, err),
        };

        let state = HubState::new(&env);
        state.set_admin(&admin);
        state.set_verifier(&verifier);
        state.set_leaderboard_size(size);
        state.bump_instance();
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Create a competition and return its id.
    pub fn create_competition(
        env: Env,
        creator: Address,
        competition: Competition,
    ) -> Result<u64, Error> {
        creator.require_auth();

        let state = HubState::new(&env);
        state.bump_instance();
        transition::create_competition(&state, &creator, &competition)
    }

    /// Register `player` for a competition.
    ///
    /// Returns `true` if the player was not registered before. Registering
    /// again is accepted and changes nothing.
    pub fn register(env: Env, player: Address, competition_id: u64) -> bool {
        player.require_auth();

        let state = HubState::new(&env);
        state.bump_instance();
        transition::register(&state, competition_id, &player)
    }

    /// Submit a proven game result.
    ///
    /// # Arguments
    /// * `player`         – Player the run belongs to (must authorize).
    /// * `competition_id` – Competition the run was played in.
    /// * `proof`          – Proof bytes and public inputs for the verifier.
    ///
    /// A score that does not beat the stored personal best succeeds with
    /// `SubmitOutcome::Unchanged` and writes nothing.
    pub fn submit_result(
        env: Env,
        player: Address,
        competition_id: u64,
        proof: GameProof,
    ) -> Result<SubmitOutcome, Error> {
        player.require_auth();

        let state = HubState::new(&env);
        state.bump_instance();
        let oracle = VerifierOracle::new(&env, state.verifier());
        transition::submit_result(&state, &oracle, competition_id, &player, &proof)
    }

    /// Append a level seed and return its index in the seed log.
    pub fn update_seed(env: Env, seed: u64) -> Result<u64, Error> {
        let state = HubState::new(&env);
        state.admin().require_auth();
        state.bump_instance();
        transition::update_seed(&state, seed)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_competition(env: Env, competition_id: u64) -> Option<Competition> {
        HubState::new(&env).competition(competition_id)
    }

    pub fn get_competition_creator(env: Env, competition_id: u64) -> Option<Address> {
        HubState::new(&env).competition_creator(competition_id)
    }

    /// Number of competitions created so far; also the next id.
    pub fn last_competition_id(env: Env) -> u64 {
        HubState::new(&env).last_competition_id()
    }

    pub fn is_registered(env: Env, competition_id: u64, player: Address) -> bool {
        HubState::new(&env).is_registered(&GameRecordKey {
            competition_id,
            player,
        })
    }

    /// Personal best of `player` in a competition, 0 if none.
    pub fn get_score(env: Env, competition_id: u64, player: Address) -> u64 {
        HubState::new(&env).best_score(&GameRecordKey {
            competition_id,
            player,
        })
    }

    pub fn get_leaderboard_slot(
        env: Env,
        competition_id: u64,
        index: u32,
    ) -> Option<LeaderboardScore> {
        HubState::new(&env).leaderboard_slot(competition_id, index)
    }

    /// Populated leaderboard slots in slot order. Slot order is not rank.
    pub fn get_leaderboard(env: Env, competition_id: u64) -> Vec<LeaderboardScore> {
        let state = HubState::new(&env);
        let mut entries = Vec::new(&env);
        for index in 0..state.leaderboard_size() {
            if let Some(entry) = state.leaderboard_slot(competition_id, index) {
                entries.push_back(entry);
            }
        }
        entries
    }

    pub fn leaderboard_size(env: Env) -> u32 {
        HubState::new(&env).leaderboard_size()
    }

    pub fn get_seed(env: Env, index: u64) -> Option<u64> {
        HubState::new(&env).seed(index)
    }

    /// Most recently appended seed.
    pub fn current_seed(env: Env) -> Option<u64> {
        let state = HubState::new(&env);
        let last = state.last_seed_index().checked_sub(1)?;
        state.seed(last)
    }

    /// Number of seeds appended so far; also the next seed index.
    pub fn last_seed_index(env: Env) -> u64 {
        HubState::new(&env).last_seed_index()
    }

    // ========================================================================
    // Admin Functions
    // ========================================================================

    pub fn get_admin(env: Env) -> Address {
        HubState::new(&env).admin()
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let state = HubState::new(&env);
        state.admin().require_auth();
        state.set_admin(&new_admin);
    }

    pub fn get_verifier(env: Env) -> Address {
        HubState::new(&env).verifier()
    }

    /// Update the verifier contract address.
    ///
    /// Proofs generated against the old verification key fail once the new
    /// verifier is in place.
    pub fn set_verifier(env: Env, new_verifier: Address) {
        let state = HubState::new(&env);
        state.admin().require_auth();
        state.set_verifier(&new_verifier);
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        HubState::new(&env).admin().require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}

// ============================================================================
// Tests
// ============================================================================
