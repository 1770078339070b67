//! Actions accepted by the view controller

use super::error::FilterError;
use super::state::{DepartmentFilter, FilterSelection, KpiSelection, TimeRange, UnitFilter};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Every state transition the host may request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectKpi(KpiSelection),
    NavigateToDashboard,
    Refresh,
    ToggleAlertsPanel,
    SetFilter(FilterUpdate),
    /// Export is not implemented; dispatching it leaves the state untouched.
    Export,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::EnumIter)]
pub enum FilterField {
    TimeRange,
    Unit,
    Department,
    Machine,
    Shift,
}

impl FilterField {
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::TimeRange => "timeRange",
            FilterField::Unit => "unit",
            FilterField::Department => "department",
            FilterField::Machine => "machine",
            FilterField::Shift => "shift",
        }
    }
}

impl FromStr for FilterField {
    type Err = FilterError;

    /// Accepts `timeRange`, `time-range`, `time_range` and any casing thereof.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "timerange" => Ok(FilterField::TimeRange),
            "unit" => Ok(FilterField::Unit),
            "department" => Ok(FilterField::Department),
            "machine" => Ok(FilterField::Machine),
            "shift" => Ok(FilterField::Shift),
            _ => Err(FilterError::UnknownField(s.to_string())),
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A new value for exactly one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    TimeRange(TimeRange),
    Unit(UnitFilter),
    Department(DepartmentFilter),
    Machine(String),
    Shift(String),
}

impl FilterUpdate {
    pub fn field(&self) -> FilterField {
        match self {
            FilterUpdate::TimeRange(_) => FilterField::TimeRange,
            FilterUpdate::Unit(_) => FilterField::Unit,
            FilterUpdate::Department(_) => FilterField::Department,
            FilterUpdate::Machine(_) => FilterField::Machine,
            FilterUpdate::Shift(_) => FilterField::Shift,
        }
    }

    /// Parses a field name and a raw value.
    pub fn parse(field: &str, value: &str) -> Result<Self, FilterError> {
        let field = field.parse::<FilterField>()?;
        let invalid = || FilterError::InvalidValue {
            field: field.name().to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match field {
            FilterField::TimeRange => value
                .parse()
                .map(FilterUpdate::TimeRange)
                .map_err(|_| invalid()),
            FilterField::Unit => value.parse().map(FilterUpdate::Unit).map_err(|_| invalid()),
            FilterField::Department => value
                .parse()
                .map(FilterUpdate::Department)
                .map_err(|_| invalid()),
            FilterField::Machine if !value.is_empty() => {
                Ok(FilterUpdate::Machine(value.to_string()))
            }
            FilterField::Shift if !value.is_empty() => Ok(FilterUpdate::Shift(value.to_string())),
            FilterField::Machine | FilterField::Shift => Err(invalid()),
        }
    }

    /// Writes the value into `filters`, leaving every other field untouched.
    pub fn apply(self, filters: &mut FilterSelection) {
        match self {
            FilterUpdate::TimeRange(value) => filters.time_range = value,
            FilterUpdate::Unit(value) => filters.unit = value,
            FilterUpdate::Department(value) => filters.department = value,
            FilterUpdate::Machine(value) => filters.machine = value,
            FilterUpdate::Shift(value) => filters.shift = value,
        }
    }

    /// The value in its serialized form.
    pub fn value(&self) -> String {
        match self {
            FilterUpdate::TimeRange(value) => value.to_string(),
            FilterUpdate::Unit(value) => value.to_string(),
            FilterUpdate::Department(value) => value.to_string(),
            FilterUpdate::Machine(value) | FilterUpdate::Shift(value) => value.clone(),
        }
    }
}

/// Parses a `FIELD=VALUE` assignment.
impl FromStr for FilterUpdate {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| FilterError::MalformedAssignment(s.to_string()))?;
        FilterUpdate::parse(field.trim(), value)
    }
}

impl FilterSelection {
    /// Serialized value of one field.
    pub fn get(&self, field: FilterField) -> String {
        match field {
            FilterField::TimeRange => self.time_range.to_string(),
            FilterField::Unit => self.unit.to_string(),
            FilterField::Department => self.department.to_string(),
            FilterField::Machine => self.machine.clone(),
            FilterField::Shift => self.shift.clone(),
        }
    }
}
