//! Session setup and initialization

use crate::config::Config;
use crate::data::Dataset;
use crate::view::{Action, FilterError, KpiSelection, ViewController};
use std::error::Error;
use std::path::Path;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Controller seeded with the mock dataset and starting filters
    pub controller: ViewController,
    /// Configuration the session was started with
    pub config: Config,
}

/// Sets up a dashboard session
///
/// This function handles:
/// 1. Loading the config file, or defaults when there is none
/// 2. Building the controller with the configured default filters
/// 3. Applying command-line filter overrides and the initial KPI selection
///
/// # Arguments
/// * `config_path` - Path to the config file
/// * `kpi` - KPI to open insights for, if any
/// * `filters` - `FIELD=VALUE` overrides, applied in order
///
/// # Returns
/// * `Ok(SessionData)` - Ready-to-run session
/// * `Err` - The config file could not be read or a filter was rejected
pub fn setup_session(
    config_path: &Path,
    kpi: Option<KpiSelection>,
    filters: &[String],
) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::load_or_default(config_path)?;
    let mut controller = ViewController::new(Dataset::mock(), config.default_filters.clone());

    for assignment in filters {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| FilterError::MalformedAssignment(assignment.clone()))?;
        controller.set_filter_from_input(field.trim(), value)?;
    }
    if let Some(kpi) = kpi {
        controller.dispatch(Action::SelectKpi(kpi));
    }

    Ok(SessionData { controller, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;
    use crate::view::state::{DepartmentFilter, TimeRange, UnitFilter};
    use tempfile::tempdir;

    #[test]
    fn test_setup_without_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let session = setup_session(&dir.path().join("config.json"), None, &[]).unwrap();

        assert_eq!(session.config, Config::default());
        assert_eq!(session.controller.state().current_view, View::Dashboard);
        assert_eq!(session.controller.filters().time_range, TimeRange::Today);
    }

    #[test]
    // Command-line filters override the saved defaults field by field.
    fn test_overrides_apply_on_top_of_saved_filters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.default_filters.unit = UnitFilter::Unit2;
        config.default_filters.time_range = TimeRange::Week;
        config.save(&path).unwrap();

        let session = setup_session(
            &path,
            Some(KpiSelection::from("emissions")),
            &["timeRange=year".to_string(), "department=weaving".to_string()],
        )
        .unwrap();

        let filters = session.controller.filters();
        assert_eq!(filters.time_range, TimeRange::Year);
        assert_eq!(filters.unit, UnitFilter::Unit2);
        assert_eq!(filters.department, DepartmentFilter::Weaving);
        assert_eq!(session.controller.state().current_view, View::Insights);
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(setup_session(&path, None, &[]).is_err());
    }

    #[test]
    fn test_rejected_filter_fails_setup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = setup_session(&path, None, &["bogus=1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("bogus"));

        let err = setup_session(&path, None, &["unit".to_string()]).unwrap_err();
        assert!(err.to_string().contains("expected FIELD=VALUE"));
    }
}
