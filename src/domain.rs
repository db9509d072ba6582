//! Domain models: raw exercises coming in, challenges and test cases going out,
//! plus the difficulty tiers and the closed set of problem archetypes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Exercise record as found in the source catalogue.
/// Every field is optional; `numero` and `titre` may be strings or numbers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawExercise {
  #[serde(default)] pub numero: Option<Value>,
  #[serde(default)] pub titre: Option<Value>,
  #[serde(default, rename = "type")] pub category: Option<String>,
  #[serde(default)] pub enonce: Option<String>,
}

impl RawExercise {
  /// First non-empty of `numero`, `titre`; empty strings, nulls and zero don't count.
  pub fn label(&self) -> Option<String> {
    self.numero.as_ref().and_then(non_empty_text)
      .or_else(|| self.titre.as_ref().and_then(non_empty_text))
  }

  pub fn statement(&self) -> &str {
    self.enonce.as_deref().unwrap_or("")
  }
}

fn non_empty_text(v: &Value) -> Option<String> {
  match v {
    Value::String(s) if !s.is_empty() => Some(s.clone()),
    Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
    _ => None,
  }
}

/// One grading pair. Both sides are plain text, multi-value data is newline-joined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
  pub input: String,
  pub output: String,
}

impl TestCase {
  pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
    Self { input: input.into(), output: output.into() }
  }
}

/// Difficulty label attached to a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
  Easy,
  Medium,
  Hard,
  Expert,
}

impl Tier {
  pub fn as_str(&self) -> &'static str {
    match self {
      Tier::Easy => "Easy",
      Tier::Medium => "Medium",
      Tier::Hard => "Hard",
      Tier::Expert => "Expert",
    }
  }
}

/// Recognized exercise families driving test-case synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
  Greeting,
  Temperature,
  CircleGeometry,
  Salary,
  Swap,
  LengthUnits,
  SeriesSum,
  MultiplicationTable,
  Parity,
  Extremum,
  FreeFall,
  ArraySum,
  IdentityMatrix,
  /// No keyword rule matched.
  Generic,
}

impl Archetype {
  #[cfg(test)]
  pub const ALL: [Archetype; 14] = [
    Archetype::Greeting,
    Archetype::Temperature,
    Archetype::CircleGeometry,
    Archetype::Salary,
    Archetype::Swap,
    Archetype::LengthUnits,
    Archetype::SeriesSum,
    Archetype::MultiplicationTable,
    Archetype::Parity,
    Archetype::Extremum,
    Archetype::FreeFall,
    Archetype::ArraySum,
    Archetype::IdentityMatrix,
    Archetype::Generic,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Archetype::Greeting => "greeting",
      Archetype::Temperature => "temperature",
      Archetype::CircleGeometry => "circle_geometry",
      Archetype::Salary => "salary",
      Archetype::Swap => "swap",
      Archetype::LengthUnits => "length_units",
      Archetype::SeriesSum => "series_sum",
      Archetype::MultiplicationTable => "multiplication_table",
      Archetype::Parity => "parity",
      Archetype::Extremum => "extremum",
      Archetype::FreeFall => "free_fall",
      Archetype::ArraySum => "array_sum",
      Archetype::IdentityMatrix => "identity_matrix",
      Archetype::Generic => "generic",
    }
  }
}

/// Executable coding challenge, created once per exercise and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Challenge {
  pub id: String,
  pub title: String,
  pub description: String,
  pub instructions: String,
  pub difficulty: Tier,
  pub xp_reward: u32,
  pub initial_code: String,
  pub test_cases: Vec<TestCase>,
  pub created_at: String,
}
