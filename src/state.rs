use crate::chart::{PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::error::QueryError;
use crate::data::model::{
    LaunchDataset, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PayloadRange, SelectorState,
    SiteSelection,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset. Replaced wholesale on reload, never mutated.
    pub dataset: LaunchDataset,

    /// Current control values.
    pub selector: SelectorState,

    /// Pie chart for the current site (None if the last query failed).
    pub pie: Option<PieChart>,

    /// Scatter chart for the current site and payload range.
    pub scatter: Option<ScatterChart>,

    /// Booster category colours for the scatter plot.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Text typed into the site selector's search field.
    pub site_search: String,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let mut state = Self {
            color_map: color_map_for(&dataset),
            dataset,
            selector: SelectorState::default(),
            pie: None,
            scatter: None,
            status_message: None,
            site_search: String::new(),
        };
        state.refresh_all();
        state
    }

    /// Swap in a newly loaded dataset and reset the controls.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.color_map = color_map_for(&dataset);
        self.dataset = dataset;
        self.selector = SelectorState::default();
        self.site_search.clear();
        self.status_message = None;
        self.refresh_all();
    }

    /// Select the configured start-up site. Unknown names are logged and
    /// leave the selector on `ALL`.
    pub fn apply_initial_site(&mut self, site: SiteSelection) {
        if let Err(e) = self.dataset.sites().validate(&site) {
            let known = self.dataset.sites().sites().collect::<Vec<_>>().join(", ");
            log::warn!("Ignoring start-up site: {e} (known sites: {known})");
            return;
        }
        self.set_site(site);
    }

    /// Site selector changed: both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selector.site == site {
            return;
        }
        log::debug!("site selection → {site}");
        self.selector.site = site;
        self.refresh_all();
    }

    /// Move the low handle; the high handle follows if it would be passed.
    pub fn set_payload_low(&mut self, low: f64) {
        let low = clamp_to_slider(low);
        let high = self.selector.payload_range.high().max(low);
        self.set_payload_range(low, high);
    }

    /// Move the high handle; the low handle follows if it would be passed.
    pub fn set_payload_high(&mut self, high: f64) {
        let high = clamp_to_slider(high);
        let low = self.selector.payload_range.low().min(high);
        self.set_payload_range(low, high);
    }

    /// Payload range changed: only the scatter chart depends on it.
    fn set_payload_range(&mut self, low: f64, high: f64) {
        match PayloadRange::new(low, high) {
            Ok(range) if range != self.selector.payload_range => {
                log::debug!("payload range → ({low}, {high})");
                self.selector.payload_range = range;
                self.refresh_scatter();
            }
            Ok(_) => {}
            Err(e) => self.report(e),
        }
    }

    /// Recompute both chart views from scratch.
    pub fn refresh_all(&mut self) {
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        match PieChart::success_by_site(&self.dataset, &self.selector.site) {
            Ok(pie) => self.pie = Some(pie),
            Err(e) => {
                self.pie = None;
                self.report(e);
            }
        }
    }

    fn refresh_scatter(&mut self) {
        match ScatterChart::payload_vs_outcome(
            &self.dataset,
            &self.selector.site,
            &self.selector.payload_range,
        ) {
            Ok(scatter) => self.scatter = Some(scatter),
            Err(e) => {
                self.scatter = None;
                self.report(e);
            }
        }
    }

    fn report(&mut self, err: QueryError) {
        log::error!("Query rejected: {err}");
        self.status_message = Some(format!("Error: {err}"));
    }
}

fn color_map_for(dataset: &LaunchDataset) -> ColorMap {
    ColorMap::from_categories(dataset.records().iter().map(|r| r.booster_category.as_str()))
}

fn clamp_to_slider(value: f64) -> f64 {
    if value.is_nan() {
        PAYLOAD_SLIDER_MIN
    } else {
        value.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
    }
}
