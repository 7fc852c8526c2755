use wasm_bindgen::prelude::*;

mod common;
mod dashboard;

pub use dashboard::WasmDashboard;

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Marker color (CSS hex) for a crop identifier.
#[wasm_bindgen]
pub fn crop_color(crop: &str) -> String {
    agrimap_core::style::crop_color(crop).to_string()
}

/// Marker color (CSS hex) for a fertility level.
#[wasm_bindgen]
pub fn fertility_color(fertility: &str) -> String {
    agrimap_core::style::fertility_color(fertility).to_string()
}

/// Number of active clauses in a criteria object (the filter badge count).
#[wasm_bindgen]
pub fn active_filter_count(criteria: JsValue) -> Result<usize, JsValue> {
    let criteria: agrimap_core::FilterCriteria = common::from_js(criteria)?;
    Ok(criteria.active_count())
}

/// Select-control values for the filter panel.
#[wasm_bindgen]
pub fn filter_options() -> Result<JsValue, JsValue> {
    common::to_js(&agrimap_core::location::filter_options())
}
