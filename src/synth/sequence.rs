//! Archetypes over integer sequences: 1..n sums, multiplication tables,
//! extremum of a few values, and array sums.

use rand::{Rng, RngCore};

use super::Synthesizer;
use crate::classifier::Statement;
use crate::domain::{Archetype, TestCase};
use crate::util::join_lines;

pub const ARRAY_LEN: usize = 5;

pub struct SeriesSum;

pub fn series_sum_case(n: i64) -> TestCase {
  TestCase::new(n.to_string(), (1..=n).sum::<i64>().to_string())
}

impl Synthesizer for SeriesSum {
  fn archetype(&self) -> Archetype { Archetype::SeriesSum }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    series_sum_case(rng.gen_range(1..=100))
  }
}

pub struct MultiplicationTable;

pub fn multiplication_table_case(n: i64) -> TestCase {
  let rows: Vec<String> = (1..=10).map(|j| format!("{} * {} = {}", n, j, n * j)).collect();
  TestCase::new(n.to_string(), rows.join("\n"))
}

impl Synthesizer for MultiplicationTable {
  fn archetype(&self) -> Archetype { Archetype::MultiplicationTable }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    multiplication_table_case(rng.gen_range(1..=10))
  }
}

pub struct Extremum;

impl Extremum {
  pub fn arity(statement: &Statement) -> usize {
    if statement.has("trois") { 3 } else { 2 }
  }

  pub fn wants_max(statement: &Statement) -> bool {
    statement.has_any(&["grand", "maximum"])
  }
}

pub fn extremum_case(values: &[i64], wants_max: bool) -> TestCase {
  let picked = if wants_max { values.iter().max() } else { values.iter().min() };
  let output = picked.map(|v| v.to_string()).unwrap_or_default();
  TestCase::new(join_lines(values), output)
}

impl Synthesizer for Extremum {
  fn archetype(&self) -> Archetype { Archetype::Extremum }

  fn case(&self, statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    let values: Vec<i64> = (0..Self::arity(statement)).map(|_| rng.gen_range(1..=100)).collect();
    extremum_case(&values, Self::wants_max(statement))
  }
}

pub struct ArraySum;

pub fn array_sum_case(values: &[i64]) -> TestCase {
  TestCase::new(join_lines(values), values.iter().sum::<i64>().to_string())
}

impl Synthesizer for ArraySum {
  fn archetype(&self) -> Archetype { Archetype::ArraySum }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    let values: Vec<i64> = (0..ARRAY_LEN).map(|_| rng.gen_range(1..=50)).collect();
    array_sum_case(&values)
  }
}
