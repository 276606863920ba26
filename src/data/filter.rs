use serde::Serialize;

use super::error::QueryError;
use super::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};

/// One point of the payload/outcome scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterRow {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Colour dimension, passed through untouched.
    pub booster_category: String,
    pub site: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

/// Launches at `site` (or everywhere for `All`) whose payload lies strictly
/// inside `range`, in load order.
pub fn filtered_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Result<Vec<ScatterRow>, QueryError> {
    Ok(dataset
        .select_site(site)?
        .filter(|r| range.contains(r.payload_mass_kg))
        .map(|r| ScatterRow {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
            site: r.site.clone(),
            flight_number: r.flight_number,
            booster_version: r.booster_version.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(
            vec![
                LaunchRecord::new("siteA", 500.0, Outcome::Success, "v1"),
                LaunchRecord::new("siteA", 6000.0, Outcome::Failure, "v1"),
                LaunchRecord::new("siteB", 3000.0, Outcome::Success, "v2"),
            ],
            "test",
        )
        .unwrap()
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    fn masses(rows: &[ScatterRow]) -> Vec<f64> {
        rows.iter().map(|r| r.payload_mass_kg).collect()
    }

    #[test]
    fn full_range_keeps_every_launch() {
        let rows = filtered_scatter(&dataset(), &SiteSelection::All, &range(0.0, 10000.0)).unwrap();
        assert_eq!(masses(&rows), vec![500.0, 6000.0, 3000.0]);
        assert_eq!(rows[2].booster_category, "v2");
        assert_eq!(rows[1].outcome, Outcome::Failure);
    }

    #[test]
    fn lower_bound_excludes_light_payloads() {
        let rows =
            filtered_scatter(&dataset(), &SiteSelection::All, &range(1000.0, 10000.0)).unwrap();
        assert_eq!(masses(&rows), vec![6000.0, 3000.0]);
    }

    #[test]
    fn site_and_range_combine() {
        let site = SiteSelection::Site("siteA".into());
        let rows = filtered_scatter(&dataset(), &site, &range(1000.0, 10000.0)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].site, "siteA");
        assert_eq!(rows[0].payload_mass_kg, 6000.0);
    }

    #[test]
    fn boundary_values_are_excluded() {
        let ds = dataset();
        let rows = filtered_scatter(&ds, &SiteSelection::All, &range(500.0, 6000.0)).unwrap();
        assert_eq!(masses(&rows), vec![3000.0]);

        let rows = filtered_scatter(&ds, &SiteSelection::All, &range(3000.0, 3000.0)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn unknown_site_is_an_error() {
        let site = SiteSelection::Site("Mars-Base-1".into());
        let err = filtered_scatter(&dataset(), &site, &range(0.0, 10000.0)).unwrap_err();
        assert_eq!(err, QueryError::UnknownSite("Mars-Base-1".into()));
    }

    #[test]
    fn repeated_calls_agree() {
        let ds = dataset();
        let r = range(0.0, 4000.0);
        assert_eq!(
            filtered_scatter(&ds, &SiteSelection::All, &r),
            filtered_scatter(&ds, &SiteSelection::All, &r)
        );
    }
}
