use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::QueryError;

/// Label of the synthetic pseudo-site meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Fixed bounds of the payload range slider, independent of the data.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Launch outcome. The source encodes it as the integer `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the 0/1 class indicator. Anything else is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The class indicator: 1 for success, 0 for failure.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Colour dimension of the scatter view; no filtering semantics.
    pub booster_category: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

#[cfg(test)]
impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        LaunchRecord {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SiteCatalog / PayloadBounds – derived once at load time
// ---------------------------------------------------------------------------

/// Distinct launch sites, sorted. The `ALL` pseudo-site is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteCatalog {
    sites: BTreeSet<String>,
}

impl SiteCatalog {
    pub fn from_records(records: &[LaunchRecord]) -> Self {
        SiteCatalog {
            sites: records.iter().map(|r| r.site.clone()).collect(),
        }
    }

    pub fn contains(&self, site: &str) -> bool {
        self.sites.contains(site)
    }

    /// Concrete site names in sorted order.
    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(String::as_str)
    }

    /// Every selectable value: `ALL` first, then the concrete sites.
    pub fn options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(self.sites.iter().cloned().map(SiteSelection::Site))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Options whose label contains `query`, ignoring case. A blank query keeps all.
    pub fn filtered_options(&self, query: &str) -> Vec<SiteSelection> {
        let query = query.trim().to_lowercase();
        self.options()
            .into_iter()
            .filter(|option| {
                query.is_empty() || option.display_label().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Check that a selection names `ALL` or a known site.
    pub fn validate(&self, selection: &SiteSelection) -> Result<(), QueryError> {
        match selection {
            SiteSelection::All => Ok(()),
            SiteSelection::Site(name) if self.contains(name) => Ok(()),
            SiteSelection::Site(name) => Err(QueryError::UnknownSite(name.clone())),
        }
    }
}

/// Minimum and maximum payload mass across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// `None` for an empty record set.
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut masses = records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(PayloadBounds { min, max })
    }
}

// ---------------------------------------------------------------------------
// Selector state – owned by the shell, passed into every query
// ---------------------------------------------------------------------------

/// Value of the launch-site selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Human-readable label for the selector widget.
    pub fn display_label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}

impl FromStr for SiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(s.to_string())
        })
    }
}

/// Payload range selected on the slider. Both ends are exclusive when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, QueryError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(QueryError::InvalidPayloadRange { low, high });
        }
        Ok(PayloadRange { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Strictly between the two ends; boundary-equal masses are excluded.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low < payload_mass_kg && payload_mass_kg < self.high
    }
}

/// Current selector values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Default for SelectorState {
    /// All sites, full slider span.
    fn default() -> Self {
        SelectorState {
            site: SiteSelection::All,
            payload_range: PayloadRange {
                low: PAYLOAD_SLIDER_MIN,
                high: PAYLOAD_SLIDER_MAX,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the loaded, read-only context
// ---------------------------------------------------------------------------

/// The loaded dataset with its derived summaries. Never mutated after load.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: SiteCatalog,
    payload_bounds: PayloadBounds,
    /// Where the records came from (file name or a test label).
    pub source: String,
}

impl LaunchDataset {
    /// Build the context, deriving site catalog and payload bounds.
    /// Returns `None` when `records` is empty.
    pub fn from_records(records: Vec<LaunchRecord>, source: impl Into<String>) -> Option<Self> {
        let payload_bounds = PayloadBounds::from_records(&records)?;
        let sites = SiteCatalog::from_records(&records);
        Some(LaunchDataset {
            records,
            sites,
            payload_bounds,
            source: source.into(),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &SiteCatalog {
        &self.sites
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records at the selected site, in load order. Validates the selection first.
    pub fn select_site<'a>(
        &'a self,
        site: &'a SiteSelection,
    ) -> Result<impl Iterator<Item = &'a LaunchRecord> + 'a, QueryError> {
        self.sites.validate(site)?;
        Ok(self.records.iter().filter(move |r| site.matches(r)))
    }
}
