use nanoserde::DeJson;

use crate::{
  curve::{sample_count, sample_curve, Curve, MAX_SAMPLES},
  volume::VolumeVariant,
};

pub const MIN_RADIUS: f64 = 0.5;
pub const MAX_RADIUS: f64 = 4.;
/// Radius the slider starts at when the page loads
pub const INITIAL_RADIUS: f64 = 2.31;
pub const DEFAULT_STEP: f64 = 0.1;

/// Bounds of the radius slider.  Everything downstream of the slider expects radii in this range.
pub struct RadiusDomain;

impl RadiusDomain {
  pub fn clamp(r: f64) -> f64 {
    if r.is_nan() {
      return INITIAL_RADIUS;
    }
    r.clamp(MIN_RADIUS, MAX_RADIUS)
  }

  pub fn contains(r: f64) -> bool {
    (MIN_RADIUS..=MAX_RADIUS).contains(&r)
  }
}

/// Wire format for sampling params.  Every field is optional and falls back to the chart's
/// defaults.
#[derive(DeJson)]
struct RawCurveParams {
  #[nserde(default)]
  r_start: Option<f64>,
  #[nserde(default)]
  r_end: Option<f64>,
  #[nserde(default)]
  step: Option<f64>,
  #[nserde(default)]
  variant: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
  pub r_start: f64,
  pub r_end: f64,
  pub step: f64,
  pub variant: VolumeVariant,
}

impl Default for CurveParams {
  fn default() -> Self {
    CurveParams {
      r_start: MIN_RADIUS,
      r_end: MAX_RADIUS,
      step: DEFAULT_STEP,
      variant: VolumeVariant::Precise,
    }
  }
}

impl CurveParams {
  /// Parses params from JSON, filling in defaults for anything missing, and validates them.
  pub fn from_json(json: &str) -> Result<Self, String> {
    if json.trim().is_empty() {
      return Ok(Self::default());
    }

    let raw = RawCurveParams::deserialize_json(json)
      .map_err(|err| format!("Failed to deserialize curve params: {err}"))?;
    let defaults = Self::default();
    let variant = match raw.variant {
      Some(name) => name.parse()?,
      None => defaults.variant,
    };

    CurveParams {
      r_start: raw.r_start.unwrap_or(defaults.r_start),
      r_end: raw.r_end.unwrap_or(defaults.r_end),
      step: raw.step.unwrap_or(defaults.step),
      variant,
    }
    .validate()
  }

  /// Checks the preconditions of `sample_curve`.
  pub fn validate(self) -> Result<Self, String> {
    for (name, val) in [
      ("r_start", self.r_start),
      ("r_end", self.r_end),
      ("step", self.step),
    ] {
      if !val.is_finite() {
        return Err(format!("{name} must be finite; got {val}"));
      }
    }
    if self.step <= 0. {
      return Err(format!("step must be positive; got {}", self.step));
    }
    if self.r_end < self.r_start {
      return Err(format!(
        "r_end ({}) must not be less than r_start ({})",
        self.r_end, self.r_start
      ));
    }
    if sample_count(self.r_start, self.r_end, self.step).is_none() {
      return Err(format!(
        "sampling [{}, {}] with step {} would take more than {MAX_SAMPLES} samples",
        self.r_start, self.r_end, self.step
      ));
    }

    Ok(self)
  }

  pub fn sample(&self) -> Curve {
    sample_curve(self.r_start, self.r_end, self.step, self.variant)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_json_uses_defaults() {
    assert_eq!(CurveParams::from_json(""), Ok(CurveParams::default()));
    assert_eq!(CurveParams::from_json("{}"), Ok(CurveParams::default()));
  }

  #[test]
  fn partial_json_overrides() {
    let params = CurveParams::from_json(r#"{"step": 0.5, "variant": "simplified"}"#).unwrap();
    assert_eq!(params.r_start, 0.5);
    assert_eq!(params.r_end, 4.);
    assert_eq!(params.step, 0.5);
    assert_eq!(params.variant, VolumeVariant::Simplified);
    assert_eq!(params.sample().len(), 8);
  }

  #[test]
  fn rejects_bad_params() {
    assert!(CurveParams::from_json(r#"{"step": 0.0}"#).is_err());
    assert!(CurveParams::from_json(r#"{"step": -0.1}"#).is_err());
    assert!(CurveParams::from_json(r#"{"r_start": 3.0, "r_end": 1.0}"#).is_err());
    assert!(CurveParams::from_json(r#"{"variant": "cone"}"#).is_err());
    assert!(CurveParams::from_json("{not json").is_err());
    assert!(CurveParams::from_json(r#"{"step": 1e-12}"#).is_err());
    assert!(CurveParams::from_json(r#"{"step": 1e-300}"#).is_err());

    let params = CurveParams {
      r_end: f64::INFINITY,
      ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = CurveParams {
      step: 1e-12,
      ..Default::default()
    };
    let err = params.validate().unwrap_err();
    assert!(err.contains("samples"), "unexpected error: {err}");
  }

  #[test]
  fn radius_domain_clamping() {
    assert_eq!(RadiusDomain::clamp(0.1), MIN_RADIUS);
    assert_eq!(RadiusDomain::clamp(10.), MAX_RADIUS);
    assert_eq!(RadiusDomain::clamp(2.), 2.);
    assert_eq!(RadiusDomain::clamp(f64::NAN), INITIAL_RADIUS);
    assert!(RadiusDomain::contains(INITIAL_RADIUS));
    assert!(!RadiusDomain::contains(4.01));
  }
}
