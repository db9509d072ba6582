//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Round to 2 decimals on the exact binary value; exact ties go away from zero.
///
/// A value sits exactly halfway between two hundredths only when it is an
/// odd multiple of 1/8, so those are the only inputs handled by the tie rule.
/// `{:.2}` formatting is correctly rounded for everything else.
pub fn round2(x: f64) -> f64 {
  if !x.is_finite() {
    return x;
  }
  let eighths = x * 8.0;
  if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
    return (x * 100.0).round() / 100.0;
  }
  format!("{:.2}", x).parse().unwrap_or(x)
}

/// Canonical text of a float: shortest round-trip digits, at least one
/// fractional digit, no negative zero.
pub fn fmt_float(x: f64) -> String {
  let x = if x == 0.0 { 0.0 } else { x };
  let s = x.to_string();
  if s.contains('.') || !x.is_finite() { s } else { format!("{s}.0") }
}

pub fn fmt_rounded(x: f64) -> String {
  fmt_float(round2(x))
}

/// Newline-joined rendering of argument values.
pub fn join_lines<T: ToString>(values: &[T]) -> String {
  values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("\n")
}

/// Log-safe truncation for long statements.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} chars total)", head, s.chars().count())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounding_goes_half_away_from_zero() {
    assert_eq!(fmt_rounded(0.125), "0.13");
    assert_eq!(fmt_rounded(-0.125), "-0.13");
    assert_eq!(fmt_rounded(2.5), "2.5");
    assert_eq!(fmt_rounded(37.7777), "37.78");
    assert_eq!(fmt_rounded(1.375), "1.38");
  }

  #[test]
  fn near_halves_round_by_their_binary_value() {
    // 44.145 and 240.345 are stored just below the half, 4.905 just above
    assert_eq!(fmt_rounded(0.5 * 9.81 * 3.0 * 3.0), "44.14");
    assert_eq!(fmt_rounded(0.5 * 9.81 * 7.0 * 7.0), "240.34");
    assert_eq!(fmt_rounded(4.905), "4.91");
    assert_eq!(fmt_rounded(-0.5555555555555556), "-0.56");
  }

  #[test]
  fn floats_keep_a_fractional_digit() {
    assert_eq!(fmt_float(0.0), "0.0");
    assert_eq!(fmt_float(-0.0), "0.0");
    assert_eq!(fmt_float(100.0), "100.0");
    assert_eq!(fmt_float(-40.0), "-40.0");
    assert_eq!(fmt_rounded(98.60000000000001), "98.6");
  }

  #[test]
  fn template_and_lines() {
    assert_eq!(fill_template("Exercice {num}: {type}", &[("num", "4"), ("type", "BASES")]), "Exercice 4: BASES");
    assert_eq!(join_lines(&[3, 9]), "3\n9");
    assert_eq!(trunc_for_log("abcdef", 3), "abc… (6 chars total)");
    assert_eq!(trunc_for_log("été", 3), "été");
  }
}
