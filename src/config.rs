//! Loading forge configuration (paths, seed, record templates) from TOML.
//!
//! See `ForgeConfig` and `Templates` for expected schema.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_EXERCISES_PATH: &str = "assets/exercices.json";
pub const DEFAULT_CHALLENGES_PATH: &str = "assets/challenges.json";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
  pub exercises_path: PathBuf,
  pub challenges_path: PathBuf,
  /// Fixed RNG seed for reproducible catalogues; entropy when absent.
  pub seed: Option<u64>,
  /// Label used when an exercise has neither `numero` nor `titre`.
  pub default_label: String,
  /// Category used when an exercise has no `type`.
  pub default_category: String,
  pub initial_code: String,
  pub templates: Templates,
}

impl Default for ForgeConfig {
  fn default() -> Self {
    Self {
      exercises_path: PathBuf::from(DEFAULT_EXERCISES_PATH),
      challenges_path: PathBuf::from(DEFAULT_CHALLENGES_PATH),
      seed: None,
      default_label: "Exo".into(),
      default_category: "GÉNÉRAL".into(),
      initial_code: "Algorithme Solution\nDébut\nFin".into(),
      templates: Templates::default(),
    }
  }
}

/// Wording of generated records. Placeholders: `{num}`, `{type}`, `{statement}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Templates {
  pub title: String,
  pub instructions: String,
}

impl Default for Templates {
  fn default() -> Self {
    Self {
      title: "Exercice {num}: {type}".into(),
      instructions: "Objectif : {statement}".into(),
    }
  }
}

/// Read `ForgeConfig` from `path`. On any IO/parse error, logs and returns defaults.
pub fn load_config(path: Option<PathBuf>) -> ForgeConfig {
  let Some(path) = path.or_else(|| std::env::var("FORGE_CONFIG_PATH").ok().map(PathBuf::from)) else {
    return ForgeConfig::default();
  };
  let shown = path.display().to_string();
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ForgeConfig>(&s) {
      Ok(cfg) => {
        info!(target: "forge", path = %shown, "Loaded forge config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "forge", path = %shown, error = %e, "Failed to parse TOML config; using defaults");
        ForgeConfig::default()
      }
    },
    Err(e) => {
      error!(target: "forge", path = %shown, error = %e, "Failed to read TOML config file; using defaults");
      ForgeConfig::default()
    }
  }
}
