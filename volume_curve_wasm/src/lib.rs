use volume_curve::{
  chart::{self, PlotLayout, PlotProjection},
  find_optimal_point,
  model::{self, TacoDimensions},
  Curve, CurveParams, OptimalPoint, RadiusDomain, SamplePoint,
};

#[cfg(feature = "bindgen")]
pub mod interface;

/// Holds the most recently sampled curve for the chart along with everything derived from it.
pub struct VolumeCurveCtx {
  pub curve: Curve,
  pub optimal: Option<OptimalPoint>,
  pub projection: Option<PlotProjection>,
}

impl VolumeCurveCtx {
  pub fn new(params: CurveParams) -> Self {
    let curve = params.sample();
    let optimal = find_optimal_point(&curve);
    let projection = PlotProjection::new(&curve, PlotLayout::default());
    match &optimal {
      Some(optimal) => log::info!(
        "Sampled {} points with {} formula; max volume {:.2} at r={:.2}",
        curve.len(),
        params.variant.name(),
        optimal.point.volume,
        optimal.point.r
      ),
      None => log::warn!("Sampled an empty volume curve with params {params:?}"),
    }

    VolumeCurveCtx {
      curve,
      optimal,
      projection,
    }
  }

  pub fn from_json(params_json: &str) -> Result<Self, String> {
    CurveParams::from_json(params_json).map(Self::new)
  }

  pub fn point_radii(&self) -> Vec<f64> {
    chart::point_styles(&self.curve, self.optimal.as_ref())
      .into_iter()
      .map(|style| style.radius)
      .collect()
  }

  pub fn point_colors(&self) -> Vec<String> {
    chart::point_styles(&self.curve, self.optimal.as_ref())
      .into_iter()
      .map(|style| style.color.to_owned())
      .collect()
  }

  /// Index of the optimal point, or -1 if the curve is empty.
  pub fn optimal_ix(&self) -> i32 {
    self.optimal.map(|o| o.index as i32).unwrap_or(-1)
  }

  pub fn path_data(&self) -> String {
    self
      .projection
      .map(|projection| projection.path_data(&self.curve))
      .unwrap_or_default()
  }

  pub fn probe(&self, cursor_x: f64) -> Option<SamplePoint> {
    self
      .projection
      .and_then(|projection| projection.probe(cursor_x))
  }
}

/// Clamps raw slider input onto the radius domain.
pub fn slider_radius(r: f64) -> f64 {
  if !RadiusDomain::contains(r) {
    log::debug!("Slider radius {r} is outside of the radius domain; clamping");
  }
  RadiusDomain::clamp(r)
}

pub fn slider_dimensions(r: f64) -> TacoDimensions {
  TacoDimensions::for_radius(slider_radius(r))
}

pub fn slider_readout(r: f64) -> String {
  model::volume_readout(slider_dimensions(r).display_volume)
}

pub fn slider_label(r: f64) -> String {
  model::volume_label(slider_dimensions(r).display_volume)
}
