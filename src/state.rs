//! Application state for the HTTP API: in-memory challenge stores and the generator.
//!
//! This module owns:
//!   - challenge stores (by id, ids by difficulty, insertion order)
//!   - the challenge generator (and with it the random source)
//!   - the effective configuration

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, instrument};

use crate::catalogue::{generate_all, load_exercises};
use crate::config::ForgeConfig;
use crate::domain::{Challenge, RawExercise, Tier};
use crate::generator::{ChallengeGenerator, Classification};

pub struct AppState {
    pub by_id: Arc<RwLock<HashMap<String, Challenge>>>,
    pub by_diff: Arc<RwLock<HashMap<Tier, Vec<String>>>>,
    pub order: Arc<RwLock<Vec<String>>>,
    pub generator: Mutex<ChallengeGenerator>,
    pub config: ForgeConfig,
}

impl AppState {
    /// Empty stores; nothing is read from disk.
    pub fn empty(config: ForgeConfig) -> Self {
        Self {
            by_id: Arc::new(RwLock::new(HashMap::new())),
            by_diff: Arc::new(RwLock::new(HashMap::new())),
            order: Arc::new(RwLock::new(Vec::new())),
            generator: Mutex::new(ChallengeGenerator::from_config(&config)),
            config,
        }
    }

    /// Build state and seed the catalogue from the configured exercises file, if readable.
    #[instrument(level = "info", skip_all)]
    pub async fn new(config: ForgeConfig) -> Self {
        let state = Self::empty(config);
        match load_exercises(&state.config.exercises_path) {
            Ok(exercises) => {
                let challenges = {
                    let mut generator = state.generator.lock().await;
                    generate_all(&mut generator, &exercises)
                };
                for c in challenges {
                    state.insert_challenge(c).await;
                }
            }
            Err(e) => {
                error!(target: "forge", error = %e, "No startup catalogue; starting empty");
            }
        }

        let by_diff = state.by_diff.read().await;
        for (tier, ids) in by_diff.iter() {
            info!(target: "forge", tier = tier.as_str(), count = ids.len(), "Startup challenge inventory");
        }
        drop(by_diff);
        state
    }

    /// Insert challenge into stores.
    #[instrument(level = "debug", skip(self, c), fields(id = %c.id))]
    pub async fn insert_challenge(&self, c: Challenge) {
        let mut by_id = self.by_id.write().await;
        let mut by_diff = self.by_diff.write().await;
        let mut order = self.order.write().await;
        let id = c.id.clone();
        by_diff.entry(c.difficulty).or_default().push(id.clone());
        order.push(id.clone());
        by_id.insert(id, c);
    }

    /// Generate a challenge for `ex` and store it.
    #[instrument(level = "info", skip_all)]
    pub async fn create_challenge(&self, ex: &RawExercise) -> Challenge {
        let c = { self.generator.lock().await.generate(ex) };
        self.insert_challenge(c.clone()).await;
        info!(target: "forge", id = %c.id, tier = c.difficulty.as_str(), "Challenge created");
        c
    }

    /// Classification only; does not touch the generator, so it never waits on a batch.
    pub fn classify(&self, ex: &RawExercise) -> Classification {
        Classification::of(ex, &self.config.default_category)
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_challenge(&self, id: &str) -> Option<Challenge> {
        self.by_id.read().await.get(id).cloned()
    }

    /// All challenges in insertion order, optionally restricted to one tier.
    pub async fn list_challenges(&self, tier: Option<Tier>) -> Vec<Challenge> {
        let ids = match tier {
            Some(t) => self.by_diff.read().await.get(&t).cloned().unwrap_or_default(),
            None => self.order.read().await.clone(),
        };
        let by_id = self.by_id.read().await;
        ids.iter().filter_map(|id| by_id.get(id).cloned()).collect()
    }
}
