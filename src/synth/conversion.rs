//! Unit conversions: temperature scales and feet/inches.

use rand::{Rng, RngCore};

use super::Synthesizer;
use crate::classifier::Statement;
use crate::domain::{Archetype, TestCase};
use crate::util::{fmt_rounded, join_lines};

pub struct Temperature;

impl Temperature {
  /// Celsius -> Fahrenheit exercises; the default direction is F -> C.
  pub fn is_inverse(statement: &Statement) -> bool {
    statement.has("inverse") || statement.has("celsius en degrés fahrenheit")
  }
}

pub fn fahrenheit_to_celsius_case(f: i64) -> TestCase {
  let c = ((f - 32) * 5) as f64 / 9.0;
  TestCase::new(f.to_string(), fmt_rounded(c))
}

pub fn celsius_to_fahrenheit_case(c: i64) -> TestCase {
  let f = (c * 9) as f64 / 5.0 + 32.0;
  TestCase::new(c.to_string(), fmt_rounded(f))
}

impl Synthesizer for Temperature {
  fn archetype(&self) -> Archetype { Archetype::Temperature }

  fn case(&self, statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    if Self::is_inverse(statement) {
      celsius_to_fahrenheit_case(rng.gen_range(-40..=100))
    } else {
      fahrenheit_to_celsius_case(rng.gen_range(-40..=212))
    }
  }
}

pub struct LengthUnits;

pub fn inches_to_feet_case(inches: i64) -> TestCase {
  TestCase::new(inches.to_string(), format!("{} pieds et {} pouces", inches / 12, inches % 12))
}

pub fn feet_to_inches_case(feet: i64, inches: i64) -> TestCase {
  TestCase::new(join_lines(&[feet, inches]), format!("{} pouces", feet * 12 + inches))
}

impl Synthesizer for LengthUnits {
  fn archetype(&self) -> Archetype { Archetype::LengthUnits }

  fn case(&self, statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    if statement.has("inverse") {
      inches_to_feet_case(rng.gen_range(1..=100))
    } else {
      let feet = rng.gen_range(1..=10);
      let inches = rng.gen_range(0..=11);
      feet_to_inches_case(feet, inches)
    }
  }
}
