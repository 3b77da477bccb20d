use crate::volume::{compute_volume, VolumeVariant};

/// Absorbs rounding in `(end - start) / step` so that an end point which is a whole number of
/// steps away from the start is always included.
const STEP_COUNT_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
  pub r: f64,
  pub volume: f64,
}

/// Samples of the volume function ordered by ascending radius.
///
/// Curves are never modified after they're built; changing any of the sampling parameters
/// produces a new curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
  points: Vec<SamplePoint>,
}

impl Curve {
  pub fn points(&self) -> &[SamplePoint] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> + '_ {
    self.points.iter()
  }
}

impl FromIterator<SamplePoint> for Curve {
  fn from_iter<I: IntoIterator<Item = SamplePoint>>(iter: I) -> Self {
    Curve {
      points: iter.into_iter().collect(),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimalPoint {
  /// Position of the point within the curve it was found in
  pub index: usize,
  pub point: SamplePoint,
}

/// Upper bound on the number of samples in a single curve
pub const MAX_SAMPLES: usize = 100_000;

/// Number of samples `sample_curve` produces for the given range, or `None` if the range can't be
/// sampled: a non-positive or non-finite step, an end before the start, or more than
/// `MAX_SAMPLES` points.
pub fn sample_count(r_start: f64, r_end: f64, step: f64) -> Option<usize> {
  if !(step > 0.) {
    return None;
  }
  let span = (r_end - r_start) / step;
  if !span.is_finite() || span < -STEP_COUNT_EPSILON {
    return None;
  }

  let whole_steps = (span + STEP_COUNT_EPSILON).floor().max(0.);
  if whole_steps >= MAX_SAMPLES as f64 {
    return None;
  }
  Some(whole_steps as usize + 1)
}

/// Samples `compute_volume` from `r_start` to `r_end` inclusive in increments of `step`.
///
/// Radii are computed as `r_start + i * step` rather than by accumulating `step` so the sample
/// positions don't drift and the end point is hit.
///
/// `step` must be positive and the range must fit in `MAX_SAMPLES` points; this is the caller's job
/// to guarantee.  If it doesn't, an empty curve is returned.
pub fn sample_curve(r_start: f64, r_end: f64, step: f64, variant: VolumeVariant) -> Curve {
  let Some(count) = sample_count(r_start, r_end, step) else {
    log::warn!("Refusing to sample volume curve over [{r_start}, {r_end}] with step {step}");
    return Curve::default();
  };

  (0..count)
    .map(|i| {
      let r = r_start + i as f64 * step;
      SamplePoint {
        r,
        volume: compute_volume(r, variant),
      }
    })
    .collect()
}

/// Returns the sample with the largest volume.  Ties go to the first such sample, which is also
/// the one with the smallest radius.
///
/// Returns `None` for an empty curve.
pub fn find_optimal_point(curve: &Curve) -> Option<OptimalPoint> {
  let mut points = curve.iter().enumerate();
  let (first_ix, first) = points.next()?;
  let mut best = OptimalPoint {
    index: first_ix,
    point: *first,
  };

  for (index, point) in points {
    if point.volume > best.point.volume {
      best = OptimalPoint {
        index,
        point: *point,
      };
    }
  }

  Some(best)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::params::CurveParams;

  fn default_curve() -> Curve {
    let params = CurveParams::default();
    sample_curve(params.r_start, params.r_end, params.step, params.variant)
  }

  #[test]
  fn default_curve_shape() {
    let curve = default_curve();
    assert_eq!(curve.len(), 36);

    for (i, point) in curve.iter().enumerate() {
      let expected_r = 0.5 + i as f64 * 0.1;
      assert!((point.r - expected_r).abs() < 1e-9, "sample {i} has r={}", point.r);
      assert_eq!(point.volume, compute_volume(point.r, VolumeVariant::Precise));
    }
    assert!((curve.points()[35].r - 4.).abs() < 1e-9);

    for pair in curve.points().windows(2) {
      assert!(pair[1].r > pair[0].r);
    }
  }

  #[test]
  fn sampling_is_deterministic() {
    let a = default_curve();
    let b = default_curve();
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(b.iter()) {
      assert_eq!(pa.r.to_bits(), pb.r.to_bits());
      assert_eq!(pa.volume.to_bits(), pb.volume.to_bits());
    }
  }

  #[test]
  fn optimal_point_is_global_max() {
    let curve = default_curve();
    let optimal = find_optimal_point(&curve).unwrap();
    assert!(curve.iter().all(|p| p.volume <= optimal.point.volume));
    assert_eq!(curve.points()[optimal.index], optimal.point);
    // first point attaining the max
    assert!(curve.points()[..optimal.index]
      .iter()
      .all(|p| p.volume < optimal.point.volume));
  }

  #[test]
  fn optimal_point_ties_favor_first() {
    let curve: Curve = [(0.5, 1.), (1., 3.), (1.5, 3.), (2., 2.)]
      .into_iter()
      .map(|(r, volume)| SamplePoint { r, volume })
      .collect();
    let optimal = find_optimal_point(&curve).unwrap();
    assert_eq!(optimal.index, 1);
    assert_eq!(optimal.point.r, 1.);

    // clamped tail of the simplified formula is flat at zero
    let flat = sample_curve(100., 101., 0.5, VolumeVariant::Simplified);
    assert_eq!(flat.len(), 3);
    assert_eq!(find_optimal_point(&flat).unwrap().index, 0);
  }

  #[test]
  fn empty_curve_has_no_optimum() {
    assert_eq!(find_optimal_point(&Curve::default()), None);
  }

  #[test]
  fn degenerate_ranges() {
    assert!(sample_curve(0.5, 4., 0., VolumeVariant::Precise).is_empty());
    assert!(sample_curve(0.5, 4., -0.1, VolumeVariant::Precise).is_empty());
    assert!(sample_curve(0.5, 4., f64::NAN, VolumeVariant::Precise).is_empty());
    assert!(sample_curve(4., 0.5, 0.1, VolumeVariant::Precise).is_empty());

    assert!(sample_curve(0.5, 4., 1e-300, VolumeVariant::Precise).is_empty());
    assert!(sample_curve(0.5, 4., 1e-12, VolumeVariant::Precise).is_empty());
    assert_eq!(sample_count(0.5, 4., f64::MIN_POSITIVE), None);

    let single = sample_curve(2., 2., 0.1, VolumeVariant::Display);
    assert_eq!(single.len(), 1);
    assert_eq!(single.points()[0].r, 2.);
  }

  #[test]
  fn sample_count_limit() {
    assert_eq!(sample_count(0.5, 4., 0.1), Some(36));
    assert_eq!(sample_count(0., (MAX_SAMPLES - 1) as f64, 1.), Some(MAX_SAMPLES));
    assert_eq!(sample_count(0., MAX_SAMPLES as f64, 1.), None);

    let curve = sample_curve(0., (MAX_SAMPLES - 1) as f64 * 0.5, 0.5, VolumeVariant::Display);
    assert_eq!(curve.len(), MAX_SAMPLES);
  }
}
