//! Public protocol structs for HTTP endpoints (serde ready).

use serde::{Deserialize, Serialize};

use crate::domain::{Archetype, Tier};
use crate::generator::Classification;

#[derive(Debug, Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeQuery {
    #[serde(default)]
    pub difficulty: Option<Tier>,
}

/// Body of `POST /api/v1/classify`; same keys as a catalogue exercise.
#[derive(Debug, Deserialize)]
pub struct ClassifyIn {
    #[serde(default)]
    pub enonce: Option<String>,
    #[serde(default, rename = "type")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyOut {
    pub archetype: Archetype,
    pub difficulty: Tier,
    pub xp_reward: u32,
}

impl From<Classification> for ClassifyOut {
    fn from(c: Classification) -> Self {
        Self { archetype: c.archetype, difficulty: c.difficulty, xp_reward: c.xp_reward }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
