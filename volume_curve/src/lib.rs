pub mod chart;
pub mod curve;
pub mod model;
pub mod params;
pub mod volume;

pub use self::{
  curve::{find_optimal_point, sample_curve, Curve, OptimalPoint, SamplePoint},
  params::{CurveParams, RadiusDomain},
  volume::{compute_volume, VolumeVariant},
};
