//! Category tag -> (tier, reward).
//!
//! Rules are checked in order against the upper-cased tag; first hit wins.

use crate::domain::Tier;

pub const DEFAULT_DIFFICULTY: (Tier, u32) = (Tier::Medium, 100);

struct DifficultyRule {
  any_of: &'static [&'static str],
  none_of: &'static [&'static str],
  tier: Tier,
  reward: u32,
}

const RULES: &[DifficultyRule] = &[
  DifficultyRule { any_of: &["BASES"], none_of: &[], tier: Tier::Easy, reward: 25 },
  DifficultyRule { any_of: &["CONDITIONNELLES"], none_of: &[], tier: Tier::Medium, reward: 50 },
  DifficultyRule { any_of: &["ITERATIVES"], none_of: &[], tier: Tier::Medium, reward: 75 },
  DifficultyRule { any_of: &["TABLEAUX"], none_of: &["2D"], tier: Tier::Hard, reward: 150 },
  DifficultyRule { any_of: &["PROCEDURES", "FONCTIONS"], none_of: &[], tier: Tier::Hard, reward: 200 },
  DifficultyRule {
    any_of: &["RECURSIVES", "MATRICES", "APPROFONDISSEMENTS"],
    none_of: &[],
    tier: Tier::Expert,
    reward: 500,
  },
];

impl DifficultyRule {
  fn matches(&self, tag: &str) -> bool {
    self.any_of.iter().any(|k| tag.contains(k)) && !self.none_of.iter().any(|k| tag.contains(k))
  }
}

pub fn map_difficulty(category: &str) -> (Tier, u32) {
  let tag = category.to_uppercase();
  RULES
    .iter()
    .find(|r| r.matches(&tag))
    .map(|r| (r.tier, r.reward))
    .unwrap_or(DEFAULT_DIFFICULTY)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_categories_map_to_their_rewards() {
    assert_eq!(map_difficulty("Actions élémentaires: BASES"), (Tier::Easy, 25));
    assert_eq!(map_difficulty("structures conditionnelles"), (Tier::Medium, 50));
    assert_eq!(map_difficulty("Structures ITERATIVES"), (Tier::Medium, 75));
    assert_eq!(map_difficulty("Les tableaux"), (Tier::Hard, 150));
    assert_eq!(map_difficulty("Procedures et fonctions"), (Tier::Hard, 200));
    assert_eq!(map_difficulty("Fonctions"), (Tier::Hard, 200));
    assert_eq!(map_difficulty("Fonctions récursives"), (Tier::Hard, 200));
    assert_eq!(map_difficulty("RECURSIVES"), (Tier::Expert, 500));
    assert_eq!(map_difficulty("Approfondissements"), (Tier::Expert, 500));
  }

  #[test]
  fn two_dimensional_arrays_are_not_hard_150() {
    assert_eq!(map_difficulty("TABLEAUX 2D"), DEFAULT_DIFFICULTY);
    assert_eq!(map_difficulty("Tableaux 2D et MATRICES"), (Tier::Expert, 500));
  }

  #[test]
  fn order_decides_overlapping_tags() {
    assert_eq!(map_difficulty("BASES et TABLEAUX"), (Tier::Easy, 25));
  }

  #[test]
  fn unknown_and_empty_tags_use_default() {
    assert_eq!(map_difficulty(""), DEFAULT_DIFFICULTY);
    assert_eq!(map_difficulty("GÉNÉRAL"), DEFAULT_DIFFICULTY);
    // accented spelling is a different tag
    assert_eq!(map_difficulty("ITÉRATIVES"), DEFAULT_DIFFICULTY);
    assert_eq!(map_difficulty("bases"), map_difficulty("bases"));
  }
}
