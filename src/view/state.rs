//! View and filter state
//!
//! Plain data owned by the view controller

use crate::data::KpiName;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// The two screens of the dashboard.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum View {
    #[default]
    Dashboard,
    Insights,
}

/// What the insights view is drilled into.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum KpiSelection {
    Metric(KpiName),
    Overall,
    /// An identifier outside the recognised set, kept verbatim.
    Other(String),
}

impl KpiSelection {
    pub fn as_str(&self) -> &str {
        match self {
            KpiSelection::Metric(name) => name.key(),
            KpiSelection::Overall => "overall",
            KpiSelection::Other(raw) => raw,
        }
    }

    /// Identifier with its first letter upper-cased, for panel titles.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn metric(&self) -> Option<KpiName> {
        match self {
            KpiSelection::Metric(name) => Some(*name),
            _ => None,
        }
    }
}

impl From<&str> for KpiSelection {
    fn from(raw: &str) -> Self {
        if raw == "overall" {
            return KpiSelection::Overall;
        }
        match KpiName::from_key(raw) {
            Some(name) => KpiSelection::Metric(name),
            None => KpiSelection::Other(raw.to_string()),
        }
    }
}

impl From<KpiName> for KpiSelection {
    fn from(name: KpiName) -> Self {
        KpiSelection::Metric(name)
    }
}

impl FromStr for KpiSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KpiSelection::from(s))
    }
}

impl Display for KpiSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
            TimeRange::Year => "This Year",
        }
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UnitFilter {
    #[default]
    All,
    Unit1,
    Unit2,
}

impl UnitFilter {
    pub fn label(&self) -> &'static str {
        match self {
            UnitFilter::All => "All Units",
            UnitFilter::Unit1 => "Unit 1",
            UnitFilter::Unit2 => "Unit 2",
        }
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DepartmentFilter {
    #[default]
    All,
    Dyeing,
    Weaving,
    Finishing,
}

impl DepartmentFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "All Departments",
            DepartmentFilter::Dyeing => "Dyeing",
            DepartmentFilter::Weaving => "Weaving",
            DepartmentFilter::Finishing => "Finishing",
        }
    }
}

/// Returns the option after `current`, wrapping to the first.
pub fn cycle<T>(current: T) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let mut options = T::iter().skip_while(|option| *option != current);
    options.next();
    options.next().or_else(|| T::iter().next()).unwrap_or(current)
}

/// Value shared by the free-form machine and shift filters when nothing is selected.
pub const ALL: &str = "all";

/// Filter bar selection. Never applied to any dataset.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub time_range: TimeRange,
    pub unit: UnitFilter,
    pub department: DepartmentFilter,
    pub machine: String,
    pub shift: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            unit: UnitFilter::default(),
            department: DepartmentFilter::default(),
            machine: ALL.to_string(),
            shift: ALL.to_string(),
        }
    }
}

/// Screen state. Mutated only through the view controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub current_view: View,
    pub selected_kpi: Option<KpiSelection>,
    pub alerts_panel_visible: bool,
    pub last_refreshed_at: DateTime<Local>,
}

impl ViewState {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            current_view: View::Dashboard,
            selected_kpi: None,
            alerts_panel_visible: false,
            last_refreshed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_selection_recognises_known_identifiers() {
        assert_eq!(
            KpiSelection::from("waste"),
            KpiSelection::Metric(KpiName::Waste)
        );
        assert_eq!(KpiSelection::from("overall"), KpiSelection::Overall);
        assert_eq!(
            KpiSelection::from("biodiversity"),
            KpiSelection::Other("biodiversity".to_string())
        );
    }

    #[test]
    // Only the exact lower-case identifiers are recognised; other casings stay verbatim.
    fn test_kpi_selection_keeps_other_casings_verbatim() {
        for raw in ["WASTE", "Overall", "Energy"] {
            let selection = KpiSelection::from(raw);
            assert_eq!(selection, KpiSelection::Other(raw.to_string()));
            assert_eq!(selection.as_str(), raw);
            assert_eq!(selection.metric(), None);
        }
    }

    #[test]
    fn test_kpi_selection_label() {
        assert_eq!(KpiSelection::from("waste").label(), "Waste");
        assert_eq!(KpiSelection::Overall.label(), "Overall");
        assert_eq!(KpiSelection::from("noise").label(), "Noise");
        assert_eq!(KpiSelection::Other(String::new()).label(), "");
    }

    #[test]
    fn test_cycle_wraps_around() {
        assert_eq!(cycle(TimeRange::Today), TimeRange::Week);
        assert_eq!(cycle(TimeRange::Year), TimeRange::Today);
        assert_eq!(cycle(UnitFilter::Unit2), UnitFilter::All);
        assert_eq!(cycle(DepartmentFilter::Weaving), DepartmentFilter::Finishing);
    }

    #[test]
    fn test_filter_defaults() {
        let filters = FilterSelection::default();
        assert_eq!(filters.time_range.to_string(), "today");
        assert_eq!(filters.unit.to_string(), "all");
        assert_eq!(filters.department.to_string(), "all");
        assert_eq!(filters.machine, "all");
        assert_eq!(filters.shift, "all");
    }

    #[test]
    fn test_filter_selection_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(FilterSelection::default()).unwrap();
        assert_eq!(json["timeRange"], "today");
        assert_eq!(json["department"], "all");

        let partial: FilterSelection = serde_json::from_str(r#"{"unit":"unit2"}"#).unwrap();
        assert_eq!(partial.unit, UnitFilter::Unit2);
        assert_eq!(partial.time_range, TimeRange::Today);
    }
}
