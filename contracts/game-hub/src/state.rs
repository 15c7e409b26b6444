//! Typed view over the hub's ledger state.
//!
//! All reads and writes of the transition logic go through [`HubState`], so a
//! transition is a function of this state and its arguments only.

use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

use crate::types::{Competition, DataKey, GameRecordKey, LeaderboardIndex, LeaderboardScore};

/// ~30 days at a 5-second ledger close.
pub const INSTANCE_TTL_LEDGERS: u32 = 518_400;

/// ~120 days. Competitions, records and seeds outlive a single session.
pub const PERSISTENT_TTL_LEDGERS: u32 = 2_073_600;

pub struct HubState {
    env: Env,
}

impl HubState {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Keep the instance entry (config and counters) alive.
    pub fn bump_instance(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_LEDGERS, INSTANCE_TTL_LEDGERS);
    }

    fn get_persistent<V>(&self, key: &DataKey) -> Option<V>
    where
        V: TryFromVal<Env, Val>,
    {
        self.env.storage().persistent().get(key)
    }

    fn set_persistent<V>(&self, key: &DataKey, value: &V)
    where
        V: IntoVal<Env, Val>,
    {
        let storage = self.env.storage().persistent();
        storage.set(key, value);
        storage.extend_ttl(key, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_LEDGERS);
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    pub fn admin(&self) -> Address {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Admin not set")
    }

    pub fn set_admin(&self, admin: &Address) {
        self.env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn verifier(&self) -> Address {
        self.env
            .storage()
            .instance()
            .get(&DataKey::VerifierAddress)
            .expect("Verifier not set")
    }

    pub fn set_verifier(&self, verifier: &Address) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::VerifierAddress, verifier);
    }

    pub fn leaderboard_size(&self) -> u32 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::LeaderboardSize)
            .expect("Leaderboard size not set")
    }

    pub fn set_leaderboard_size(&self, size: u32) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::LeaderboardSize, &size);
    }

    // ------------------------------------------------------------------------
    // Counters
    // ------------------------------------------------------------------------

    pub fn last_competition_id(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::LastCompetitionId)
            .unwrap_or(0)
    }

    pub fn set_last_competition_id(&self, value: u64) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::LastCompetitionId, &value);
    }

    pub fn last_seed_index(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::LastSeedIndex)
            .unwrap_or(0)
    }

    pub fn set_last_seed_index(&self, value: u64) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::LastSeedIndex, &value);
    }

    // ------------------------------------------------------------------------
    // Competition store
    // ------------------------------------------------------------------------

    pub fn competition(&self, competition_id: u64) -> Option<Competition> {
        self.get_persistent(&DataKey::Competition(competition_id))
    }

    pub fn set_competition(&self, competition_id: u64, competition: &Competition) {
        self.set_persistent(&DataKey::Competition(competition_id), competition);
    }

    pub fn competition_creator(&self, competition_id: u64) -> Option<Address> {
        self.get_persistent(&DataKey::CompetitionCreator(competition_id))
    }

    pub fn set_competition_creator(&self, competition_id: u64, creator: &Address) {
        self.set_persistent(&DataKey::CompetitionCreator(competition_id), creator);
    }

    // ------------------------------------------------------------------------
    // Registration and score ledgers
    // ------------------------------------------------------------------------

    pub fn is_registered(&self, key: &GameRecordKey) -> bool {
        self.get_persistent(&DataKey::Registration(key.clone()))
            .unwrap_or(false)
    }

    pub fn set_registered(&self, key: &GameRecordKey) {
        self.set_persistent(&DataKey::Registration(key.clone()), &true);
    }

    pub fn best_score(&self, key: &GameRecordKey) -> u64 {
        self.get_persistent(&DataKey::GameRecord(key.clone()))
            .unwrap_or(0)
    }

    pub fn set_best_score(&self, key: &GameRecordKey, score: u64) {
        self.set_persistent(&DataKey::GameRecord(key.clone()), &score);
    }

    // ------------------------------------------------------------------------
    // Leaderboard
    // ------------------------------------------------------------------------

    pub fn leaderboard_slot(&self, competition_id: u64, index: u32) -> Option<LeaderboardScore> {
        self.get_persistent(&DataKey::Leaderboard(LeaderboardIndex {
            competition_id,
            index,
        }))
    }

    pub fn set_leaderboard_slot(&self, competition_id: u64, index: u32, entry: &LeaderboardScore) {
        self.set_persistent(
            &DataKey::Leaderboard(LeaderboardIndex {
                competition_id,
                index,
            }),
            entry,
        );
    }

    // ------------------------------------------------------------------------
    // Seed log
    // ------------------------------------------------------------------------

    pub fn seed(&self, index: u64) -> Option<u64> {
        self.get_persistent(&DataKey::Seed(index))
    }

    pub fn set_seed(&self, index: u64, seed: u64) {
        self.set_persistent(&DataKey::Seed(index), &seed);
    }
}
