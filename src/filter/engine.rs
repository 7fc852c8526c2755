use crate::location::LocationRecord;
use super::criteria::{Clause, CombineMode, FilterCriteria};

#[inline]
fn evaluate(location: &LocationRecord, clauses: &[Clause<'_>], mode: CombineMode) -> bool {
    // all() over no clauses is true, any() over no clauses is false.
    match mode {
        CombineMode::And => clauses.iter().all(|clause| clause.matches(location)),
        CombineMode::Or => clauses.iter().any(|clause| clause.matches(location)),
    }
}

/// Whether a single record passes `criteria`.
pub fn matches(location: &LocationRecord, criteria: &FilterCriteria) -> bool {
    evaluate(location, &criteria.clauses(), criteria.mode())
}

/// Select the records that pass `criteria`, preserving their relative order.
///
/// - AND mode: a record passes when every active clause matches; with no
///   active clauses every record passes.
/// - OR mode: a record passes when at least one active clause matches; with no
///   active clauses the result is empty.
///
/// A record missing an attribute that an active clause refers to fails that
/// clause. The result depends only on the arguments.
pub fn filter<'a, I>(locations: I, criteria: &FilterCriteria) -> Vec<&'a LocationRecord>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let clauses = criteria.clauses();
    let mode = criteria.mode();

    let mut total = 0usize;
    let selected = locations.into_iter()
        .inspect(|_| total += 1)
        .filter(|location| evaluate(location, &clauses, mode))
        .collect::<Vec<_>>();

    tracing::debug!(?mode, clauses = clauses.len(), selected = selected.len(), total, "filtered locations");
    selected
}

/// Like [`filter`], but returns owned copies.
pub fn filter_owned<'a, I>(locations: I, criteria: &FilterCriteria) -> Vec<LocationRecord>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    filter(locations, criteria).into_iter().cloned().collect()
}

/// Records to draw as map markers: nothing until at least one clause is active,
/// then the [`filter`] result.
pub fn visible_locations<'a, I>(locations: I, criteria: &FilterCriteria) -> Vec<&'a LocationRecord>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    if criteria.is_empty() { return Vec::new() }
    filter(locations, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Npk;

    fn fields() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("a", "A", 10.0, 78.0)
                .with_crop_type("rice").with_soil_type("Black Soil").with_fertility("High")
                .with_npk(Npk::new(80.0, 60.0, 40.0)).with_ndvi(0.8),
            LocationRecord::new("b", "B", 11.0, 79.0)
                .with_crop_type("cotton").with_soil_type("Red Soil").with_fertility("Low")
                .with_npk(Npk::new(60.0, 40.0, 50.0)).with_ndvi(0.3),
            LocationRecord::new("c", "C", 12.0, 77.0)
                .with_crop_type("rice").with_soil_type("Red Soil"),
        ]
    }

    fn ids(selected: &[&LocationRecord]) -> Vec<String> {
        selected.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_and_keeps_everything_in_order() {
        let locations = fields();
        assert_eq!(ids(&filter(&locations, &FilterCriteria::new())), ["a", "b", "c"]);
    }

    #[test]
    fn empty_or_keeps_nothing() {
        let locations = fields();
        assert!(filter(&locations, &FilterCriteria::new().with_mode(CombineMode::Or)).is_empty());
    }

    #[test]
    fn and_requires_every_clause() {
        let locations = fields();
        let criteria = FilterCriteria::new().with_crop_type("rice").with_soil_type("Red Soil");
        assert_eq!(ids(&filter(&locations, &criteria)), ["c"]);
    }

    #[test]
    fn or_requires_one_clause() {
        let locations = fields();
        let criteria = FilterCriteria::new()
            .with_crop_type("rice")
            .with_soil_type("Red Soil")
            .with_mode(CombineMode::Or);
        assert_eq!(ids(&filter(&locations, &criteria)), ["a", "b", "c"]);
    }

    #[test]
    fn missing_field_excluded_under_and_but_not_or() {
        let locations = fields();
        let and = FilterCriteria::new().with_crop_type("rice").with_ndvi_range(0.0, 1.0);
        assert_eq!(ids(&filter(&locations, &and)), ["a"]);

        let or = and.clone().with_mode(CombineMode::Or);
        assert_eq!(ids(&filter(&locations, &or)), ["a", "b", "c"]);
    }

    #[test]
    fn npk_range_checks_all_three() {
        let locations = fields();
        let criteria = FilterCriteria::new().with_npk_range(Npk::new(50.0, 30.0, 30.0), Npk::new(90.0, 70.0, 45.0));
        assert_eq!(ids(&filter(&locations, &criteria)), ["a"]);
    }

    #[test]
    fn inverted_ndvi_range_matches_nothing() {
        let locations = fields();
        assert!(filter(&locations, &FilterCriteria::new().with_ndvi_range(0.9, 0.1)).is_empty());
    }

    #[test]
    fn matches_agrees_with_filter() {
        let locations = fields();
        let criteria = FilterCriteria::new().with_fertility("Low").with_crop_type("rice").with_mode(CombineMode::Or);
        let selected = ids(&filter(&locations, &criteria));
        for location in &locations {
            assert_eq!(matches(location, &criteria), selected.contains(&location.id));
        }
    }

    #[test]
    fn filter_owned_clones() {
        let locations = fields();
        let owned = filter_owned(&locations, &FilterCriteria::new().with_crop_type("cotton"));
        assert_eq!(owned, vec![locations[1].clone()]);
    }

    #[test]
    fn visible_locations_waits_for_a_clause() {
        let locations = fields();
        assert!(visible_locations(&locations, &FilterCriteria::new()).is_empty());
        assert_eq!(ids(&visible_locations(&locations, &FilterCriteria::new().with_crop_type("rice"))), ["a", "c"]);
    }

    #[test]
    fn accepts_borrowed_subsets() {
        let locations = fields();
        let subset = vec![&locations[2], &locations[0]];
        assert_eq!(ids(&filter(subset, &FilterCriteria::new().with_crop_type("rice"))), ["c", "a"]);
    }
}
