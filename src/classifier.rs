//! Statement -> archetype, via an ordered keyword rule table.
//!
//! Statements routinely mention several families at once ("tableau" next to
//! "pair", "somme" next to "tableau"); the first rule in `RULES` that holds
//! decides. Keep the table order stable.

use crate::domain::Archetype;

/// Exercise statement, lower-cased once. All keyword tests are substring tests on it.
#[derive(Clone, Debug)]
pub struct Statement {
  lower: String,
}

impl Statement {
  pub fn new(raw: &str) -> Self {
    Self { lower: raw.to_lowercase() }
  }

  pub fn has(&self, needle: &str) -> bool {
    self.lower.contains(needle)
  }

  pub fn has_any(&self, needles: &[&str]) -> bool {
    needles.iter().any(|n| self.lower.contains(n))
  }
}

pub struct Rule {
  pub archetype: Archetype,
  pub matches: fn(&Statement) -> bool,
}

pub const RULES: &[Rule] = &[
  Rule { archetype: Archetype::Greeting, matches: |s| s.has_any(&["bonjour", "merci momo"]) },
  Rule { archetype: Archetype::Temperature, matches: |s| s.has("fahrenheit") && s.has("celsius") },
  Rule { archetype: Archetype::CircleGeometry, matches: |s| s.has("rayon") && s.has_any(&["cercle", "sphère"]) },
  Rule { archetype: Archetype::Salary, matches: |s| s.has("salaire") },
  Rule { archetype: Archetype::Swap, matches: |s| s.has_any(&["échange", "échanger"]) },
  Rule { archetype: Archetype::LengthUnits, matches: |s| s.has("pouce") && s.has("pied") },
  Rule { archetype: Archetype::SeriesSum, matches: |s| s.has("somme s =") || (s.has("somme") && s.has("1 à n")) },
  Rule { archetype: Archetype::MultiplicationTable, matches: |s| s.has("table de multiplication") },
  Rule { archetype: Archetype::Parity, matches: |s| s.has_any(&["pair", "impair"]) },
  Rule { archetype: Archetype::Extremum, matches: |s| s.has_any(&["grand", "petit", "maximum", "minimum"]) },
  Rule { archetype: Archetype::FreeFall, matches: |s| s.has("chute libre") },
  Rule { archetype: Archetype::ArraySum, matches: |s| s.has("tableau") },
  Rule { archetype: Archetype::IdentityMatrix, matches: |s| s.has("matrice") },
];

pub fn classify(statement: &Statement) -> Archetype {
  RULES
    .iter()
    .find(|r| (r.matches)(statement))
    .map(|r| r.archetype)
    .unwrap_or(Archetype::Generic)
}
