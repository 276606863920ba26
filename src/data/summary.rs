use std::collections::BTreeMap;

use serde::Serialize;

use super::error::QueryError;
use super::model::{LaunchDataset, Outcome, SiteSelection};

/// One labelled pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessCount {
    pub label: String,
    pub count: usize,
}

impl SuccessCount {
    fn new(label: impl Into<String>, count: usize) -> Self {
        SuccessCount {
            label: label.into(),
            count,
        }
    }
}

/// Success counts for the pie chart.
///
/// * `All` → one entry per site, counting successful launches (sites without
///   any success are kept with a zero count), sorted by site name.
/// * A known site → exactly `Failure` then `Success`, each with its row count.
/// * Anything else → [`QueryError::UnknownSite`].
pub fn success_summary(
    dataset: &LaunchDataset,
    site: &SiteSelection,
) -> Result<Vec<SuccessCount>, QueryError> {
    let selected = dataset.select_site(site)?;

    match site {
        SiteSelection::All => {
            let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();
            for record in selected {
                *per_site.entry(record.site.as_str()).or_default() +=
                    usize::from(record.outcome.class());
            }
            Ok(per_site
                .into_iter()
                .map(|(name, count)| SuccessCount::new(name, count))
                .collect())
        }
        SiteSelection::Site(_) => {
            let (mut failures, mut successes) = (0, 0);
            for record in selected {
                match record.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }
            Ok(vec![
                SuccessCount::new(Outcome::Failure.label(), failures),
                SuccessCount::new(Outcome::Success.label(), successes),
            ])
        }
    }
}
