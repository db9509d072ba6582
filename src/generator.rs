//! Challenge assembly: wraps the classification/synthesis engine with the
//! record fields (id, title, timestamps) a catalogue entry needs.
//!
//! The generator owns the random source. Seed it for reproducible output.

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::classifier::{classify, Statement};
use crate::config::{ForgeConfig, Templates};
use crate::difficulty::map_difficulty;
use crate::domain::{Archetype, Challenge, RawExercise, Tier};
use crate::synth;
use crate::util::{fill_template, trunc_for_log};

pub struct ChallengeGenerator {
  rng: StdRng,
  default_label: String,
  default_category: String,
  initial_code: String,
  templates: Templates,
}

/// What the engine decides for an exercise without synthesizing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
  pub archetype: Archetype,
  pub difficulty: Tier,
  pub xp_reward: u32,
}

impl Classification {
  /// Archetype and tier for `ex`; `default_category` stands in for a missing `type`.
  pub fn of(ex: &RawExercise, default_category: &str) -> Self {
    let archetype = classify(&Statement::new(ex.statement()));
    let (difficulty, xp_reward) = map_difficulty(ex.category.as_deref().unwrap_or(default_category));
    Self { archetype, difficulty, xp_reward }
  }
}

impl ChallengeGenerator {
  pub fn from_config(cfg: &ForgeConfig) -> Self {
    let rng = match cfg.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    Self {
      rng,
      default_label: cfg.default_label.clone(),
      default_category: cfg.default_category.clone(),
      initial_code: cfg.initial_code.clone(),
      templates: cfg.templates.clone(),
    }
  }

  #[cfg(test)]
  pub fn with_seed(seed: u64) -> Self {
    Self::from_config(&ForgeConfig { seed: Some(seed), ..ForgeConfig::default() })
  }

  #[instrument(level = "debug", skip(self, ex), fields(statement = %trunc_for_log(ex.statement(), 60)))]
  pub fn generate(&mut self, ex: &RawExercise) -> Challenge {
    let statement = ex.statement();
    let category = ex.category.clone().unwrap_or_else(|| self.default_category.clone());
    let label = ex.label().unwrap_or_else(|| self.default_label.clone());

    let (archetype, test_cases) = synth::synthesize(&Statement::new(statement), &mut self.rng);
    let (difficulty, xp_reward) = map_difficulty(&category);
    debug!(target: "synth", archetype = archetype.as_str(), tier = difficulty.as_str(), xp_reward, "Challenge assembled");

    Challenge {
      id: Uuid::new_v4().to_string(),
      title: fill_template(&self.templates.title, &[("num", label.as_str()), ("type", category.as_str())]),
      description: statement.to_string(),
      instructions: fill_template(&self.templates.instructions, &[("statement", statement)]),
      difficulty,
      xp_reward,
      initial_code: self.initial_code.clone(),
      test_cases,
      created_at: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::CASES_PER_CHALLENGE;

  fn exercise(json: &str) -> RawExercise {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn assembles_record_fields() {
    let mut forge = ChallengeGenerator::with_seed(1);
    let ex = exercise(r#"{"numero": 12, "type": "Structures conditionnelles", "enonce": "Dire si N est pair ou impair"}"#);
    let ch = forge.generate(&ex);
    assert_eq!(ch.title, "Exercice 12: Structures conditionnelles");
    assert_eq!(ch.description, "Dire si N est pair ou impair");
    assert_eq!(ch.instructions, "Objectif : Dire si N est pair ou impair");
    assert_eq!((ch.difficulty, ch.xp_reward), (Tier::Medium, 50));
    assert_eq!(ch.initial_code, "Algorithme Solution\nDébut\nFin");
    assert_eq!(ch.test_cases.len(), CASES_PER_CHALLENGE);
    assert!(ch.test_cases.iter().all(|c| c.output == "pair" || c.output == "impair"));
    assert!(Uuid::parse_str(&ch.id).is_ok());
    assert!(ch.created_at.contains('T'));
  }

  #[test]
  fn empty_record_uses_defaults() {
    let mut forge = ChallengeGenerator::with_seed(2);
    let ch = forge.generate(&RawExercise::default());
    assert_eq!(ch.title, "Exercice Exo: GÉNÉRAL");
    assert_eq!((ch.difficulty, ch.xp_reward), (Tier::Medium, 100));
    assert_eq!(ch.test_cases.len(), CASES_PER_CHALLENGE);
    let c = Classification::of(&RawExercise::default(), "GÉNÉRAL");
    assert_eq!((c.archetype, c.difficulty, c.xp_reward), (Archetype::Generic, Tier::Medium, 100));
  }

  #[test]
  fn seeded_generators_agree_on_cases() {
    let ex = exercise(r#"{"titre": "Table", "type": "ITERATIVES", "enonce": "Afficher la table de multiplication de N"}"#);
    let a = ChallengeGenerator::with_seed(99).generate(&ex);
    let b = ChallengeGenerator::with_seed(99).generate(&ex);
    assert_eq!(a.test_cases, b.test_cases);
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn templates_come_from_config() {
    let cfg = ForgeConfig {
      seed: Some(3),
      templates: Templates { title: "#{num} [{type}]".into(), instructions: "{statement}!".into() },
      ..ForgeConfig::default()
    };
    let mut forge = ChallengeGenerator::from_config(&cfg);
    let ch = forge.generate(&exercise(r#"{"numero": "4b", "type": "BASES", "enonce": "Afficher Bonjour"}"#));
    assert_eq!(ch.title, "#4b [BASES]");
    assert_eq!(ch.instructions, "Afficher Bonjour!");
    assert_eq!((ch.difficulty, ch.xp_reward), (Tier::Easy, 25));
    assert!(ch.test_cases.iter().all(|c| c.output == "Bonjour"));
  }

  #[test]
  fn classify_reports_without_synthesizing() {
    let c = Classification::of(&exercise(r#"{"type": "Tableaux", "enonce": "Somme des éléments d'un tableau"}"#), "GÉNÉRAL");
    assert_eq!(c, Classification { archetype: Archetype::ArraySum, difficulty: Tier::Hard, xp_reward: 150 });
  }
}
