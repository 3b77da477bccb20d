//! Chart-facing views of a sampled curve: the parallel arrays and per-point styling fed to the
//! line chart, plus the projection used by the lightweight SVG plot and its hover tooltip.

use std::fmt::Write;

use crate::{
  curve::{Curve, OptimalPoint, SamplePoint},
  params::MAX_RADIUS,
  volume::{compute_volume, VolumeVariant},
};

pub const POINT_RADIUS: f64 = 4.;
pub const OPTIMAL_POINT_RADIUS: f64 = 8.;
pub const POINT_COLOR: &str = "rgba(102, 126, 234, 1)";
pub const OPTIMAL_POINT_COLOR: &str = "rgba(231, 76, 60, 1)";

pub fn radii(curve: &Curve) -> Vec<f64> {
  curve.iter().map(|p| p.r).collect()
}

pub fn volumes(curve: &Curve) -> Vec<f64> {
  curve.iter().map(|p| p.volume).collect()
}

/// X axis labels; radius with a single decimal.
pub fn labels(curve: &Curve) -> Vec<String> {
  curve.iter().map(|p| format!("{:.1}", p.r)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
  pub radius: f64,
  pub color: &'static str,
}

/// Styles every point of the curve, enlarging and recoloring the optimum.
pub fn point_styles(curve: &Curve, optimal: Option<&OptimalPoint>) -> Vec<PointStyle> {
  let optimal_ix = optimal.map(|o| o.index);
  (0..curve.len())
    .map(|ix| {
      if Some(ix) == optimal_ix {
        PointStyle {
          radius: OPTIMAL_POINT_RADIUS,
          color: OPTIMAL_POINT_COLOR,
        }
      } else {
        PointStyle {
          radius: POINT_RADIUS,
          color: POINT_COLOR,
        }
      }
    })
    .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
  pub width: f64,
  pub height: f64,
  pub margin: f64,
}

impl Default for PlotLayout {
  fn default() -> Self {
    PlotLayout {
      width: 400.,
      height: 300.,
      margin: 50.,
    }
  }
}

impl PlotLayout {
  pub fn inner_width(&self) -> f64 {
    self.width - 2. * self.margin
  }

  pub fn inner_height(&self) -> f64 {
    self.height - 2. * self.margin
  }
}

/// Maps curve space to plot pixel space.  The origin of curve space sits at the bottom left corner
/// of the inner plot area and the largest radius/volume sit at its right/top edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotProjection {
  pub layout: PlotLayout,
  pub scale_x: f64,
  pub scale_y: f64,
}

impl PlotProjection {
  /// Returns `None` if the curve has no positive extent on either axis, since there's nothing to
  /// scale against.
  pub fn new(curve: &Curve, layout: PlotLayout) -> Option<Self> {
    let max_r = curve.iter().map(|p| p.r).fold(f64::NEG_INFINITY, f64::max);
    let max_volume = curve
      .iter()
      .map(|p| p.volume)
      .fold(f64::NEG_INFINITY, f64::max);
    if !(max_r > 0.) || !(max_volume > 0.) {
      return None;
    }

    Some(PlotProjection {
      layout,
      scale_x: layout.inner_width() / max_r,
      scale_y: layout.inner_height() / max_volume,
    })
  }

  pub fn project(&self, point: &SamplePoint) -> (f64, f64) {
    let x = self.layout.margin + point.r * self.scale_x;
    let y = self.layout.height - self.layout.margin - point.volume * self.scale_y;
    (x, y)
  }

  /// SVG path data tracing the curve.
  pub fn path_data(&self, curve: &Curve) -> String {
    let mut out = String::new();
    for (ix, point) in curve.iter().enumerate() {
      let (x, y) = self.project(point);
      let cmd = if ix == 0 { "M" } else { " L" };
      let _ = write!(out, "{cmd} {x} {y}");
    }
    out
  }

  /// Converts a cursor x offset, measured from the left edge of the inner plot area, back into a
  /// radius and evaluates the tooltip's volume formula there.  Returns `None` outside of
  /// `[0, MAX_RADIUS]`.
  pub fn probe(&self, cursor_x: f64) -> Option<SamplePoint> {
    let r = cursor_x / self.scale_x;
    if !(0. ..=MAX_RADIUS).contains(&r) {
      return None;
    }

    Some(SamplePoint {
      r,
      volume: compute_volume(r, VolumeVariant::Simplified),
    })
  }
}

pub fn tooltip_text(point: &SamplePoint) -> String {
  format!("r = {:.2}\nV = {:.2}", point.r, point.volume)
}
