use serde::{Deserialize, Serialize};

use crate::location::{LocationRecord, Npk};

/// How the active clauses of a [`FilterCriteria`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CombineMode {
    /// Every active clause must match. With no active clauses everything matches.
    #[default]
    And,
    /// At least one active clause must match. With no active clauses nothing matches.
    Or,
}

/// A set of optional constraints on location records.
///
/// Each absent field means "no constraint". Empty strings in the categorical
/// fields are treated as absent, which is what a cleared select control sends.
/// The NPK constraint is only active when both `npk_min` and `npk_max` are set.
///
/// Values are built fresh for each query; the engine never holds on to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npk_min: Option<Npk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npk_max: Option<Npk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndvi_range: Option<[f64; 2]>, // inclusive [min, max]
    #[serde(default)]
    pub multi_criteria_mode: CombineMode,
}

/// One active constraint, borrowed from the criteria it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clause<'a> {
    CropType(&'a str),
    Season(&'a str),
    SoilType(&'a str),
    Fertility(&'a str),
    Npk { min: &'a Npk, max: &'a Npk },
    Ndvi { min: f64, max: f64 },
}

impl Clause<'_> {
    /// Evaluate against one record. A record missing the attribute never matches.
    pub fn matches(&self, location: &LocationRecord) -> bool {
        let matched = match *self {
            Clause::CropType(want) => location.crop_type.as_deref().map(|v| v == want),
            Clause::Season(want) => location.season.as_deref().map(|v| v == want),
            Clause::SoilType(want) => location.soil_type.as_deref().map(|v| v == want),
            Clause::Fertility(want) => location.fertility.as_deref().map(|v| v == want),
            Clause::Npk { min, max } => location.npk.map(|npk| npk.within(min, max)),
            Clause::Ndvi { min, max } => location.ndvi.map(|ndvi| (min..=max).contains(&ndvi)),
        };

        matched.unwrap_or_else(|| {
            tracing::trace!(location = %location.id, clause = self.field(), "attribute missing, clause does not match");
            false
        })
    }

    /// Name of the record attribute the clause constrains.
    pub fn field(&self) -> &'static str {
        match self {
            Clause::CropType(_) => "cropType",
            Clause::Season(_) => "season",
            Clause::SoilType(_) => "soilType",
            Clause::Fertility(_) => "fertility",
            Clause::Npk { .. } => "npk",
            Clause::Ndvi { .. } => "ndvi",
        }
    }
}

impl FilterCriteria {
    /// Criteria with no constraints in AND mode (matches everything).
    #[inline] pub fn new() -> Self { Self::default() }

    pub fn with_crop_type(mut self, value: impl Into<String>) -> Self { self.crop_type = Some(value.into()); self }

    pub fn with_season(mut self, value: impl Into<String>) -> Self { self.season = Some(value.into()); self }

    pub fn with_soil_type(mut self, value: impl Into<String>) -> Self { self.soil_type = Some(value.into()); self }

    pub fn with_fertility(mut self, value: impl Into<String>) -> Self { self.fertility = Some(value.into()); self }

    pub fn with_npk_range(mut self, min: Npk, max: Npk) -> Self {
        self.npk_min = Some(min);
        self.npk_max = Some(max);
        self
    }

    pub fn with_ndvi_range(mut self, min: f64, max: f64) -> Self { self.ndvi_range = Some([min, max]); self }

    pub fn with_mode(mut self, mode: CombineMode) -> Self { self.multi_criteria_mode = mode; self }

    #[inline] pub fn mode(&self) -> CombineMode { self.multi_criteria_mode }

    /// The active clauses, in a fixed order.
    pub fn clauses(&self) -> Vec<Clause<'_>> {
        /// Treat `Some("")` like `None`.
        #[inline] fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        let mut clauses = Vec::with_capacity(6);
        if let Some(v) = non_empty(&self.crop_type) { clauses.push(Clause::CropType(v)) }
        if let Some(v) = non_empty(&self.season) { clauses.push(Clause::Season(v)) }
        if let Some(v) = non_empty(&self.soil_type) { clauses.push(Clause::SoilType(v)) }
        if let Some(v) = non_empty(&self.fertility) { clauses.push(Clause::Fertility(v)) }
        if let (Some(min), Some(max)) = (&self.npk_min, &self.npk_max) {
            clauses.push(Clause::Npk { min, max });
        }
        if let Some([min, max]) = self.ndvi_range {
            clauses.push(Clause::Ndvi { min, max });
        }
        clauses
    }

    /// Number of active clauses (the filter panel's badge count).
    #[inline] pub fn active_count(&self) -> usize { self.clauses().len() }

    /// True when no clause is active, regardless of mode.
    #[inline] pub fn is_empty(&self) -> bool { self.active_count() == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_mode() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(criteria.mode(), CombineMode::And);
    }

    #[test]
    fn empty_strings_are_not_active() {
        let criteria = FilterCriteria::new().with_crop_type("").with_season("Rabi");
        assert_eq!(criteria.clauses(), vec![Clause::Season("Rabi")]);
    }

    #[test]
    fn npk_needs_both_bounds() {
        let mut criteria = FilterCriteria::new();
        criteria.npk_min = Some(Npk::new(10.0, 10.0, 10.0));
        assert_eq!(criteria.active_count(), 0);

        let criteria = criteria.with_npk_range(Npk::new(10.0, 10.0, 10.0), Npk::new(90.0, 90.0, 90.0));
        assert_eq!(criteria.active_count(), 1);
    }

    #[test]
    fn counts_every_kind_of_clause() {
        let criteria = FilterCriteria::new()
            .with_crop_type("rice")
            .with_season("Kharif")
            .with_soil_type("Black Soil")
            .with_fertility("High")
            .with_npk_range(Npk::default(), Npk::new(100.0, 100.0, 100.0))
            .with_ndvi_range(0.2, 0.8)
            .with_mode(CombineMode::Or);
        let fields = criteria.clauses().iter().map(Clause::field).collect::<Vec<_>>();
        assert_eq!(fields, ["cropType", "season", "soilType", "fertility", "npk", "ndvi"]);
        // Mode is not a clause.
        assert_eq!(criteria.active_count(), 6);
    }

    #[test]
    fn missing_attribute_never_matches() {
        let bare = LocationRecord::new("x", "X", 10.0, 78.0);
        assert!(!Clause::CropType("rice").matches(&bare));
        assert!(!Clause::Ndvi { min: 0.0, max: 1.0 }.matches(&bare));
        let (min, max) = (Npk::default(), Npk::new(100.0, 100.0, 100.0));
        assert!(!Clause::Npk { min: &min, max: &max }.matches(&bare));
    }

    #[test]
    fn categorical_match_is_case_sensitive() {
        let record = LocationRecord::new("x", "X", 10.0, 78.0).with_soil_type("Black Soil");
        assert!(Clause::SoilType("Black Soil").matches(&record));
        assert!(!Clause::SoilType("black soil").matches(&record));
        assert!(!Clause::SoilType("Black Soil ").matches(&record));
    }

    #[test]
    fn deserializes_ui_payload() {
        let json = r#"{
            "cropType": "rice",
            "season": "",
            "npkMin": { "nitrogen": 0, "phosphorus": 0, "potassium": 0 },
            "npkMax": { "nitrogen": 100, "phosphorus": 100, "potassium": 100 },
            "ndviRange": [0.2, 0.8],
            "waterRequirement": "High",
            "multiCriteriaMode": "OR"
        }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.mode(), CombineMode::Or);
        assert_eq!(criteria.ndvi_range, Some([0.2, 0.8]));
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn mode_serializes_uppercase() {
        let json = serde_json::to_value(FilterCriteria::new().with_mode(CombineMode::Or)).unwrap();
        assert_eq!(json, serde_json::json!({ "multiCriteriaMode": "OR" }));
    }
}
