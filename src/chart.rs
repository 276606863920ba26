use std::collections::BTreeMap;
use std::f64::consts::TAU;

use serde::Serialize;

use crate::data::error::QueryError;
use crate::data::filter::{ScatterRow, filtered_scatter};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::data::summary::{SuccessCount, success_summary};

/// Largest arc (in turns) drawn as one polygon. egui_plot fills polygons as
/// convex shapes, so wider wedges are split.
const MAX_PART_TURNS: f64 = 0.125;
/// Angular resolution of the drawn arcs, in turns.
const ARC_STEP_TURNS: f64 = 1.0 / 180.0;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Renderable success pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<SuccessCount>,
}

/// Angular extent of one non-empty slice. Turns run clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge {
    /// Index into [`PieChart::slices`].
    pub slice: usize,
    pub fraction: f64,
    pub start_turn: f64,
    pub end_turn: f64,
}

impl PieChart {
    pub fn success_by_site(dataset: &LaunchDataset, site: &SiteSelection) -> Result<Self, QueryError> {
        let slices = success_summary(dataset, site)?;
        let title = match site {
            SiteSelection::All => "Total Successful Launches by Site".to_string(),
            SiteSelection::Site(name) => format!("Success rate for site {name}"),
        };
        Ok(PieChart { title, slices })
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Wedges for every slice with a non-zero count. Empty when the total is zero.
    pub fn wedges(&self) -> Vec<PieWedge> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut cursor = 0usize;
        self.slices
            .iter()
            .enumerate()
            .filter(|(_, s)| s.count > 0)
            .map(|(slice, s)| {
                let start = cursor;
                cursor += s.count;
                PieWedge {
                    slice,
                    fraction: s.count as f64 / total as f64,
                    start_turn: start as f64 / total as f64,
                    end_turn: cursor as f64 / total as f64,
                }
            })
            .collect()
    }
}

/// Point on a circle of `radius` at `turn` (0 = top, clockwise).
pub fn point_at(turn: f64, radius: f64) -> [f64; 2] {
    let angle = turn * TAU;
    [radius * angle.sin(), radius * angle.cos()]
}

impl PieWedge {
    /// The wedge as convex polygons (centre + arc), each spanning at most
    /// an eighth of a turn.
    pub fn convex_parts(&self) -> Vec<Vec<[f64; 2]>> {
        let span = self.end_turn - self.start_turn;
        let n_parts = (span / MAX_PART_TURNS).ceil().max(1.0) as usize;
        let part_span = span / n_parts as f64;
        let steps = (part_span / ARC_STEP_TURNS).ceil().max(1.0) as usize;

        (0..n_parts)
            .map(|p| {
                let from = self.start_turn + p as f64 * part_span;
                let mut polygon = Vec::with_capacity(steps + 2);
                polygon.push([0.0, 0.0]);
                for k in 0..=steps {
                    polygon.push(point_at(from + part_span * k as f64 / steps as f64, 1.0));
                }
                polygon
            })
            .collect()
    }

    /// Where to put the percentage label.
    pub fn label_anchor(&self) -> [f64; 2] {
        point_at((self.start_turn + self.end_turn) / 2.0, 0.65)
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Renderable payload vs. outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterRow>,
}

impl ScatterChart {
    pub fn payload_vs_outcome(
        dataset: &LaunchDataset,
        site: &SiteSelection,
        range: &PayloadRange,
    ) -> Result<Self, QueryError> {
        let points = filtered_scatter(dataset, site, range)?;
        let title = match site {
            SiteSelection::All => "Correlation between payload and success for all sites".to_string(),
            SiteSelection::Site(name) => format!("Correlation between payload and success for {name}"),
        };
        Ok(ScatterChart { title, points })
    }

    /// Points grouped by booster category, one plot series each.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&ScatterRow>> {
        let mut groups: BTreeMap<&str, Vec<&ScatterRow>> = BTreeMap::new();
        for p in &self.points {
            groups.entry(p.booster_category.as_str()).or_default().push(p);
        }
        groups
    }
}
