//! Reproducible synthetic field surveys, for demos and test fixtures.

use geo::{Coord, Rect};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{catalog::{Crop, CROPS}, record::{LocationRecord, Npk}};

/// Relative spread of generated nutrient levels around a crop's requirement (±15%).
const NPK_VARIATION: f64 = 0.3;

/// Approximate bounding box of Tamil Nadu, (lng, lat).
pub fn tamil_nadu_extent() -> Rect<f64> {
    Rect::new(Coord { x: 76.0, y: 8.0 }, Coord { x: 80.5, y: 13.5 })
}

/// Generate `count` records inside the Tamil Nadu extent. Equal seeds give equal datasets.
pub fn generate(count: usize, seed: u64) -> Vec<LocationRecord> {
    generate_within(count, seed, tamil_nadu_extent())
}

/// Generate `count` records uniformly distributed inside `extent`.
pub fn generate_within(count: usize, seed: u64, extent: Rect<f64>) -> Vec<LocationRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let locations = (0..count)
        .map(|i| random_location(i + 1, extent, &mut rng))
        .collect::<Vec<_>>();
    tracing::debug!(count, seed, "generated synthetic locations");
    locations
}

fn random_location(n: usize, extent: Rect<f64>, rng: &mut impl Rng) -> LocationRecord {
    let crop = &CROPS[rng.random_range(0..CROPS.len())];

    let latitude = extent.min().y + rng.random::<f64>() * extent.height();
    let longitude = extent.min().x + rng.random::<f64>() * extent.width();

    let season = crop.seasons[rng.random_range(0..crop.seasons.len())];
    let soil_type = crop.soil_types[rng.random_range(0..crop.soil_types.len())];

    // Skewed odds: half High, then Medium 70% of the remainder.
    let fertility = if rng.random::<f64>() > 0.5 { "High" }
        else if rng.random::<f64>() > 0.3 { "Medium" }
        else { "Low" };

    LocationRecord::new(format!("loc_{n}"), format!("{} Field {n}", crop.name), latitude, longitude)
        .with_crop_type(crop.id)
        .with_season(season)
        .with_soil_type(soil_type)
        .with_fertility(fertility)
        .with_npk(random_npk(crop, rng))
        .with_ndvi(random_ndvi(rng))
        .with_area(round_to(5.0 + rng.random::<f64>() * 20.0, 1))
        .with_yield(round_to(2.0 + rng.random::<f64>() * 8.0, 1))
}

fn random_npk(crop: &Crop, rng: &mut impl Rng) -> Npk {
    let mut vary = |base: f64| (base * (1.0 + (rng.random::<f64>() - 0.5) * NPK_VARIATION)).clamp(0.0, 100.0);
    Npk::new(vary(crop.npk.nitrogen), vary(crop.npk.phosphorus), vary(crop.npk.potassium))
}

fn random_ndvi(rng: &mut impl Rng) -> f64 {
    let base = 0.4 + rng.random::<f64>() * 0.4;
    let seasonal = (rng.random::<f64>() - 0.5) * 0.2;
    round_to((base + seasonal).clamp(0.1, 0.9), 3)
}

#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
