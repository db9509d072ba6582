//! Fixed-output and lightly computed archetypes: greeting, swap, parity,
//! identity matrix, and the catch-all fallback.

use rand::{Rng, RngCore};

use super::Synthesizer;
use crate::classifier::Statement;
use crate::domain::{Archetype, TestCase};
use crate::util::join_lines;

pub struct Greeting;

impl Synthesizer for Greeting {
  fn archetype(&self) -> Archetype { Archetype::Greeting }

  fn case(&self, statement: &Statement, _rng: &mut dyn RngCore) -> TestCase {
    let output = if statement.has("bonjour") { "Bonjour" } else { "Merci MOMO" };
    TestCase::new("", output)
  }
}

pub struct Swap;

pub fn swap_case(a: i64, b: i64) -> TestCase {
  TestCase::new(join_lines(&[a, b]), format!("A={}, B={}", b, a))
}

impl Synthesizer for Swap {
  fn archetype(&self) -> Archetype { Archetype::Swap }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    let a = rng.gen_range(1..=100);
    let b = rng.gen_range(1..=100);
    swap_case(a, b)
  }
}

pub struct Parity;

pub fn parity_case(n: i64) -> TestCase {
  TestCase::new(n.to_string(), if n % 2 == 0 { "pair" } else { "impair" })
}

impl Synthesizer for Parity {
  fn archetype(&self) -> Archetype { Archetype::Parity }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    parity_case(rng.gen_range(0..=100))
  }
}

pub struct IdentityMatrix;

impl Synthesizer for IdentityMatrix {
  fn archetype(&self) -> Archetype { Archetype::IdentityMatrix }

  fn case(&self, _statement: &Statement, _rng: &mut dyn RngCore) -> TestCase {
    TestCase::new("2", "Identité 2x2")
  }
}

/// Used when no keyword rule matches.
pub struct Fallback;

pub fn fallback_case(n: i64) -> TestCase {
  TestCase::new(join_lines(&[n, n + 5]), (n * 2 + 5).to_string())
}

impl Synthesizer for Fallback {
  fn archetype(&self) -> Archetype { Archetype::Generic }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    fallback_case(rng.gen_range(1..=100))
  }
}
