use std::f64::consts::PI;
use std::str::FromStr;

/// Height of the cylinder used by the display formula.
pub const DISPLAY_HEIGHT: f64 = 8.;
const DISPLAY_FILL_FACTOR: f64 = 0.7;

/// The page uses three independent volume formulas in different places.  They
/// are not equivalent and diverge as `r` grows, so they're kept separate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VolumeVariant {
  /// Cylindrical-sector volume with a cubic correction term.  Drives the chart.
  #[default]
  Precise,
  /// Lightweight approximation used by the hover tooltip.
  Simplified,
  /// `pi * r^2 * h * 0.7` used by the on-model label and the slider readout.
  Display,
}

impl VolumeVariant {
  pub const ALL: [VolumeVariant; 3] = [
    VolumeVariant::Precise,
    VolumeVariant::Simplified,
    VolumeVariant::Display,
  ];

  pub fn from_ix(ix: u32) -> Option<Self> {
    Self::ALL.get(ix as usize).copied()
  }

  pub fn name(&self) -> &'static str {
    match self {
      VolumeVariant::Precise => "precise",
      VolumeVariant::Simplified => "simplified",
      VolumeVariant::Display => "display",
    }
  }
}

impl FromStr for VolumeVariant {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|variant| variant.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| {
        format!("Unknown volume variant \"{s}\"; expected one of precise, simplified, display")
      })
  }
}

fn precise_volume(r: f64) -> f64 {
  let base = 8. * PI * r;
  let sector = r * r * PI * (1. - 2. / PI);
  let correction = r * r * r * 0.1;
  (base - sector - correction).max(0.)
}

fn simplified_volume(r: f64) -> f64 {
  (8. * PI * r - r * r * (PI - 2.)).max(0.)
}

fn display_volume(r: f64) -> f64 {
  PI * r * r * DISPLAY_HEIGHT * DISPLAY_FILL_FACTOR
}

/// Computes the volume for radius `r` using the given formula.
///
/// `r >= 0` is expected but not enforced; callers clamp at the slider boundary.
/// The precise and simplified variants are clamped to be non-negative since
/// they go negative for large `r`.
pub fn compute_volume(r: f64, variant: VolumeVariant) -> f64 {
  match variant {
    VolumeVariant::Precise => precise_volume(r),
    VolumeVariant::Simplified => simplified_volume(r),
    VolumeVariant::Display => display_volume(r),
  }
}
