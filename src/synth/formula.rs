//! Closed-form numeric archetypes: circle/sphere measures, net salary, free fall.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

use super::Synthesizer;
use crate::classifier::Statement;
use crate::domain::{Archetype, TestCase};
use crate::util::{fmt_float, fmt_rounded, round2};

pub const GRAVITY: f64 = 9.81;

pub struct CircleGeometry;

pub fn circle_case(radius: i64) -> TestCase {
  let r = radius as f64;
  let perimeter = 2.0 * PI * r;
  let surface = PI * r * r;
  let volume = (4.0 / 3.0) * PI * r.powi(3);
  TestCase::new(
    radius.to_string(),
    format!(
      "Périmètre: {}\nSurface: {}\nVolume: {}",
      fmt_rounded(perimeter),
      fmt_rounded(surface),
      fmt_rounded(volume)
    ),
  )
}

impl Synthesizer for CircleGeometry {
  fn archetype(&self) -> Archetype { Archetype::CircleGeometry }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    circle_case(rng.gen_range(1..=100))
  }
}

pub struct Salary;

/// `rate` is expected already rounded to 2 decimals; it is printed and used as is.
pub fn salary_case(hours: i64, hourly: i64, rate: f64) -> TestCase {
  let net = (hours * hourly) as f64 * (1.0 - rate);
  TestCase::new(format!("{}\n{}\n{}", hours, hourly, fmt_float(rate)), fmt_rounded(net))
}

impl Synthesizer for Salary {
  fn archetype(&self) -> Archetype { Archetype::Salary }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    let hours = rng.gen_range(100..=1000);
    let hourly = rng.gen_range(50..=100);
    let rate = round2(rng.gen_range(0.05..=0.15));
    salary_case(hours, hourly, rate)
  }
}

pub struct FreeFall;

pub fn free_fall_case(t: i64) -> TestCase {
  let t_f = t as f64;
  TestCase::new(t.to_string(), fmt_rounded(0.5 * GRAVITY * t_f * t_f))
}

impl Synthesizer for FreeFall {
  fn archetype(&self) -> Archetype { Archetype::FreeFall }

  fn case(&self, _statement: &Statement, rng: &mut dyn RngCore) -> TestCase {
    free_fall_case(rng.gen_range(1..=10))
  }
}
