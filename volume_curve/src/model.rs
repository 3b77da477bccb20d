use crate::volume::{compute_volume, VolumeVariant, DISPLAY_HEIGHT};

const MODEL_SCALE_PER_RADIUS: f64 = 0.5;
const PLATE_RADIUS_PER_RADIUS: f64 = 3.;
const PLATE_DROP_PER_RADIUS: f64 = 0.8;
const PLATE_THICKNESS: f64 = 0.2;
const RIM_TUBE_RADIUS: f64 = 0.1;
const FALLBACK_TORTILLA_THICKNESS: f64 = 0.2;

/// Everything about the 3D taco scene that depends on the slider's radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TacoDimensions {
  pub radius: f64,
  /// Uniform scale applied to the loaded taco model
  pub model_scale: f64,
  /// The translucent cylinder visualizing the integrated volume.  Its height is fixed.
  pub cylinder_radius: f64,
  pub cylinder_height: f64,
  /// Flat disc shown in place of the model if it fails to load
  pub fallback_radius: f64,
  pub fallback_thickness: f64,
  pub plate_radius: f64,
  pub plate_thickness: f64,
  pub plate_y: f64,
  pub rim_radius: f64,
  pub rim_tube_radius: f64,
  pub rim_y: f64,
  pub display_volume: f64,
}

impl TacoDimensions {
  pub fn for_radius(radius: f64) -> Self {
    let plate_y = -radius * PLATE_DROP_PER_RADIUS;
    TacoDimensions {
      radius,
      model_scale: radius * MODEL_SCALE_PER_RADIUS,
      cylinder_radius: radius,
      cylinder_height: DISPLAY_HEIGHT,
      fallback_radius: radius,
      fallback_thickness: FALLBACK_TORTILLA_THICKNESS,
      plate_radius: radius * PLATE_RADIUS_PER_RADIUS,
      plate_thickness: PLATE_THICKNESS,
      plate_y,
      rim_radius: radius * PLATE_RADIUS_PER_RADIUS,
      rim_tube_radius: RIM_TUBE_RADIUS,
      rim_y: plate_y + RIM_TUBE_RADIUS,
      display_volume: compute_volume(radius, VolumeVariant::Display),
    }
  }

  /// Flattened in field declaration order for handing across the wasm boundary.
  pub fn to_array(&self) -> [f64; 13] {
    [
      self.radius,
      self.model_scale,
      self.cylinder_radius,
      self.cylinder_height,
      self.fallback_radius,
      self.fallback_thickness,
      self.plate_radius,
      self.plate_thickness,
      self.plate_y,
      self.rim_radius,
      self.rim_tube_radius,
      self.rim_y,
      self.display_volume,
    ]
  }
}

/// Text for the live readout beneath the slider
pub fn volume_readout(volume: f64) -> String {
  format!("Volumen: {volume:.2} in³")
}

/// Text drawn onto the label sprite floating above the model
pub fn volume_label(volume: f64) -> String {
  format!("V = {volume:.2} in³")
}
