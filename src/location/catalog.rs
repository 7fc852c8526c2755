//! Categorical values used by the surveyed datasets.

use serde::Serialize;

use super::record::Npk;

/// A crop profile: identifier, display name, typical nutrient requirement,
/// and the seasons and soils it is grown in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crop {
    pub id: &'static str,
    pub name: &'static str,
    pub npk: Npk,
    pub seasons: &'static [&'static str],
    pub soil_types: &'static [&'static str],
}

const fn crop(
    id: &'static str,
    name: &'static str,
    (nitrogen, phosphorus, potassium): (f64, f64, f64),
    seasons: &'static [&'static str],
    soil_types: &'static [&'static str],
) -> Crop {
    Crop { id, name, npk: Npk { nitrogen, phosphorus, potassium }, seasons, soil_types }
}

pub static CROPS: [Crop; 8] = [
    crop("rice",      "Rice",      (80.0, 60.0, 40.0), &["Kharif", "Rabi"],   &["Alluvial Soil", "Black Soil"]),
    crop("wheat",     "Wheat",     (70.0, 50.0, 30.0), &["Rabi"],             &["Alluvial Soil", "Black Soil"]),
    crop("cotton",    "Cotton",    (60.0, 40.0, 50.0), &["Kharif"],           &["Black Soil", "Red Soil"]),
    crop("sugarcane", "Sugarcane", (90.0, 70.0, 60.0), &["Annual"],           &["Alluvial Soil", "Black Soil"]),
    crop("maize",     "Maize",     (75.0, 55.0, 45.0), &["Kharif", "Rabi"],   &["Alluvial Soil", "Red Soil", "Black Soil"]),
    crop("groundnut", "Groundnut", (40.0, 60.0, 50.0), &["Kharif", "Rabi"],   &["Red Soil", "Black Soil"]),
    crop("tomato",    "Tomato",    (85.0, 65.0, 55.0), &["Rabi", "Summer"],   &["Alluvial Soil", "Red Soil"]),
    crop("banana",    "Banana",    (95.0, 75.0, 70.0), &["Annual"],           &["Alluvial Soil", "Laterite Soil"]),
];

pub const SEASONS: [&str; 5] = ["Kharif", "Rabi", "Summer", "Zaid", "Annual"];

pub const SOIL_TYPES: [&str; 4] = ["Red Soil", "Black Soil", "Alluvial Soil", "Laterite Soil"];

pub const FERTILITY_LEVELS: [&str; 3] = ["High", "Medium", "Low"];

impl Crop {
    /// Look up a crop profile by identifier (exact match).
    pub fn find(id: &str) -> Option<&'static Crop> {
        CROPS.iter().find(|crop| crop.id == id)
    }
}

/// Values offered by the filter panel's select controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub crops: Vec<&'static str>,
    pub seasons: &'static [&'static str],
    pub soil_types: &'static [&'static str],
    pub fertility_levels: &'static [&'static str],
}

pub fn filter_options() -> FilterOptions {
    FilterOptions {
        crops: CROPS.iter().map(|crop| crop.id).collect(),
        seasons: &SEASONS,
        soil_types: &SOIL_TYPES,
        fertility_levels: &FERTILITY_LEVELS,
    }
}
