//! Catalogue files: read the exercise list, write the challenge list, and the
//! batch transform that ties them together.

use std::path::Path;

use thiserror::Error;
use tracing::{info, instrument};

use crate::config::ForgeConfig;
use crate::domain::{Challenge, RawExercise};
use crate::generator::ChallengeGenerator;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize challenges: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_exercises(path: &Path) -> Result<Vec<RawExercise>, CatalogueError> {
    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read { path: shown.clone(), source })?;
    let exercises: Vec<RawExercise> =
        serde_json::from_str(&text).map_err(|source| CatalogueError::Parse { path: shown, source })?;
    info!(target: "forge", count = exercises.len(), "Loaded exercises");
    Ok(exercises)
}

/// Pretty JSON (2-space indent), UTF-8 kept as is. Parent directories are created.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = challenges.len()))]
pub fn write_challenges(path: &Path, challenges: &[Challenge]) -> Result<(), CatalogueError> {
    let shown = path.display().to_string();
    let json = serde_json::to_string_pretty(challenges)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CatalogueError::Write { path: shown.clone(), source })?;
    }
    std::fs::write(path, json).map_err(|source| CatalogueError::Write { path: shown, source })
}

/// One challenge per exercise, in input order.
pub fn generate_all(generator: &mut ChallengeGenerator, exercises: &[RawExercise]) -> Vec<Challenge> {
    exercises.iter().map(|ex| generator.generate(ex)).collect()
}

/// Batch run: exercises file in, challenges file out. Returns the number written.
#[instrument(level = "info", skip(cfg))]
pub fn transform(cfg: &ForgeConfig) -> Result<usize, CatalogueError> {
    let exercises = load_exercises(&cfg.exercises_path)?;
    let mut generator = ChallengeGenerator::from_config(cfg);
    let challenges = generate_all(&mut generator, &exercises);
    write_challenges(&cfg.challenges_path, &challenges)?;
    info!(target: "forge", count = challenges.len(), "Generated {} challenges.", challenges.len());
    Ok(challenges.len())
}
