use ahash::AHashMap;
use serde::Serialize;

use crate::location::LocationRecord;

/// Aggregate figures for a set of locations, as shown in the results panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub total_area: f64,         // hectares
    pub mean_yield: Option<f64>, // tons per hectare, None when empty
    pub mean_ndvi: Option<f64>,  // over records that report NDVI
    pub crops: Vec<(String, usize)>, // most common first, ties by name
}

impl Summary {
    pub fn of<'a>(locations: impl IntoIterator<Item = &'a LocationRecord>) -> Self {
        let mut count = 0;
        let mut total_area = 0.0;
        let mut total_yield = 0.0;
        let (mut ndvi_sum, mut ndvi_count) = (0.0, 0usize);
        let mut crops: AHashMap<&str, usize> = AHashMap::new();

        for location in locations {
            count += 1;
            total_area += location.area;
            total_yield += location.yield_;
            if let Some(ndvi) = location.ndvi {
                ndvi_sum += ndvi;
                ndvi_count += 1;
            }
            if let Some(crop) = location.crop_type.as_deref() {
                *crops.entry(crop).or_default() += 1;
            }
        }

        let mut crops = crops.into_iter()
            .map(|(crop, n)| (crop.to_string(), n))
            .collect::<Vec<_>>();
        crops.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            count,
            total_area,
            mean_yield: (count > 0).then(|| total_yield / count as f64),
            mean_ndvi: (ndvi_count > 0).then(|| ndvi_sum / ndvi_count as f64),
            crops,
        }
    }
}
