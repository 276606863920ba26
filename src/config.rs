use std::path::PathBuf;

use crate::data::model::SiteSelection;

/// Default location of the launch table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Start-up configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    /// Site selected at start-up (`SPACEX_DASH_SITE`), `ALL` when unset.
    pub initial_site: SiteSelection,
}

impl DashConfig {
    /// First CLI argument, then `SPACEX_DASH_DATA`, then the default path.
    pub fn from_env() -> Self {
        Self::from_sources(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    fn from_sources(arg: Option<String>, var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: arg
                .or_else(|| var("SPACEX_DASH_DATA"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            window_width: var("SPACEX_DASH_WIDTH").and_then(|v| v.parse().ok()).unwrap_or(1200.0),
            window_height: var("SPACEX_DASH_HEIGHT").and_then(|v| v.parse().ok()).unwrap_or(800.0),
            initial_site: var("SPACEX_DASH_SITE")
                .filter(|v| !v.trim().is_empty())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = DashConfig::from_sources(None, vars(&[]));
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cfg.window_width, 1200.0);
        assert_eq!(cfg.window_height, 800.0);
        assert_eq!(cfg.initial_site, SiteSelection::All);
    }

    #[test]
    fn initial_site_from_environment() {
        let cfg = DashConfig::from_sources(None, vars(&[("SPACEX_DASH_SITE", " KSC LC-39A ")]));
        assert_eq!(cfg.initial_site, SiteSelection::Site("KSC LC-39A".into()));

        let cfg = DashConfig::from_sources(None, vars(&[("SPACEX_DASH_SITE", "ALL")]));
        assert_eq!(cfg.initial_site, SiteSelection::All);

        let cfg = DashConfig::from_sources(None, vars(&[("SPACEX_DASH_SITE", "  ")]));
        assert_eq!(cfg.initial_site, SiteSelection::All);
    }

    #[test]
    fn argument_wins_over_environment() {
        let env = vars(&[("SPACEX_DASH_DATA", "env.csv"), ("SPACEX_DASH_WIDTH", "1600")]);
        let cfg = DashConfig::from_sources(Some("arg.parquet".into()), env);
        assert_eq!(cfg.data_path, PathBuf::from("arg.parquet"));
        assert_eq!(cfg.window_width, 1600.0);

        let cfg = DashConfig::from_sources(None, vars(&[("SPACEX_DASH_DATA", "env.csv")]));
        assert_eq!(cfg.data_path, PathBuf::from("env.csv"));
    }

    #[test]
    fn unparsable_sizes_fall_back() {
        let cfg = DashConfig::from_sources(None, vars(&[("SPACEX_DASH_HEIGHT", "tall")]));
        assert_eq!(cfg.window_height, 800.0);
    }
}
