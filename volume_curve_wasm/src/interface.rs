use volume_curve::{chart, VolumeVariant};
use wasm_bindgen::prelude::*;

use crate::VolumeCurveCtx;

static mut DID_INIT: bool = false;

fn maybe_init() {
  unsafe {
    if DID_INIT {
      return;
    }
    DID_INIT = true;
  }

  console_error_panic_hook::set_once();
  wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

/// Null pointers (handed out by `volume_curve_sample` for invalid params) read as no curve.
fn ctx_ref<'a>(ctx: *const VolumeCurveCtx) -> Option<&'a VolumeCurveCtx> {
  unsafe { ctx.as_ref() }
}

/// Installs the console logger and panic hook.  Safe to call more than once.
#[wasm_bindgen]
pub fn volume_curve_init() {
  maybe_init();
}

/// `variant_ix` is 0 for precise, 1 for simplified, 2 for display.  Unknown indices fall back to
/// the precise formula.
#[wasm_bindgen]
pub fn compute_volume(r: f64, variant_ix: u32) -> f64 {
  let variant = VolumeVariant::from_ix(variant_ix).unwrap_or_else(|| {
    log::warn!("Unknown volume variant index {variant_ix}; using precise");
    VolumeVariant::Precise
  });
  volume_curve::compute_volume(r, variant)
}

/// Samples a curve from JSON params (see `CurveParams`; `""` or `"{}"` gives the chart defaults).
///
/// Returns null if the params are invalid.  Getters treat null as an empty curve.
#[wasm_bindgen]
pub fn volume_curve_sample(params_json: &str) -> *mut VolumeCurveCtx {
  match VolumeCurveCtx::from_json(params_json) {
    Ok(ctx) => Box::into_raw(Box::new(ctx)),
    Err(err) => {
      log::error!("{err}");
      std::ptr::null_mut()
    }
  }
}

#[wasm_bindgen]
pub fn volume_curve_ctx_free(ctx: *mut VolumeCurveCtx) {
  if ctx.is_null() {
    return;
  }
  drop(unsafe { Box::from_raw(ctx) });
}

#[wasm_bindgen]
pub fn volume_curve_get_radii(ctx: *const VolumeCurveCtx) -> Vec<f64> {
  ctx_ref(ctx)
    .map(|ctx| chart::radii(&ctx.curve))
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn volume_curve_get_volumes(ctx: *const VolumeCurveCtx) -> Vec<f64> {
  ctx_ref(ctx)
    .map(|ctx| chart::volumes(&ctx.curve))
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn volume_curve_get_labels(ctx: *const VolumeCurveCtx) -> Vec<String> {
  ctx_ref(ctx)
    .map(|ctx| chart::labels(&ctx.curve))
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn volume_curve_get_point_radii(ctx: *const VolumeCurveCtx) -> Vec<f64> {
  ctx_ref(ctx)
    .map(VolumeCurveCtx::point_radii)
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn volume_curve_get_point_colors(ctx: *const VolumeCurveCtx) -> Vec<String> {
  ctx_ref(ctx)
    .map(VolumeCurveCtx::point_colors)
    .unwrap_or_default()
}

/// Index of the optimal point, or -1 if there's no curve or it's empty.
#[wasm_bindgen]
pub fn volume_curve_get_optimal_ix(ctx: *const VolumeCurveCtx) -> i32 {
  ctx_ref(ctx).map(VolumeCurveCtx::optimal_ix).unwrap_or(-1)
}

/// `[r, volume]` of the optimal point, or an empty vec if there's no optimum.
#[wasm_bindgen]
pub fn volume_curve_get_optimal_point(ctx: *const VolumeCurveCtx) -> Vec<f64> {
  ctx_ref(ctx)
    .and_then(|ctx| ctx.optimal)
    .map(|optimal| vec![optimal.point.r, optimal.point.volume])
    .unwrap_or_default()
}

#[wasm_bindgen]
pub fn volume_curve_get_path_data(ctx: *const VolumeCurveCtx) -> String {
  ctx_ref(ctx)
    .map(VolumeCurveCtx::path_data)
    .unwrap_or_default()
}

/// Maps a cursor offset within the plot to `[r, volume]` for the hover tooltip.  Returns an empty
/// vec if the cursor is outside of the radius domain.
#[wasm_bindgen]
pub fn volume_curve_probe(ctx: *const VolumeCurveCtx, cursor_x: f64) -> Vec<f64> {
  ctx_ref(ctx)
    .and_then(|ctx| ctx.probe(cursor_x))
    .map(|point| vec![point.r, point.volume])
    .unwrap_or_default()
}

/// Tooltip text for a cursor offset within the plot, or an empty string if there's nothing to
/// show.
#[wasm_bindgen]
pub fn volume_curve_probe_tooltip(ctx: *const VolumeCurveCtx, cursor_x: f64) -> String {
  ctx_ref(ctx)
    .and_then(|ctx| ctx.probe(cursor_x))
    .map(|point| chart::tooltip_text(&point))
    .unwrap_or_default()
}

/// Scene dimensions for a slider radius; see `TacoDimensions::to_array` for the layout.
#[wasm_bindgen]
pub fn taco_dimensions(r: f64) -> Vec<f64> {
  crate::slider_dimensions(r).to_array().to_vec()
}

#[wasm_bindgen]
pub fn volume_readout(r: f64) -> String {
  crate::slider_readout(r)
}

#[wasm_bindgen]
pub fn volume_label(r: f64) -> String {
  crate::slider_label(r)
}
