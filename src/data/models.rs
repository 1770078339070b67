//! Dataset record types

use strum::{Display, EnumIter, IntoEnumIterator};

/// The four tracked sustainability metrics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum KpiName {
    Energy,
    Water,
    Waste,
    Emissions,
}

impl KpiName {
    /// Lower-case identifier used for selection and series lookup.
    pub fn key(&self) -> &'static str {
        match self {
            KpiName::Energy => "energy",
            KpiName::Water => "water",
            KpiName::Waste => "waste",
            KpiName::Emissions => "emissions",
        }
    }

    /// Exact match on the lower-case identifier.
    pub fn from_key(raw: &str) -> Option<Self> {
        KpiName::iter().find(|name| name.key() == raw)
    }
}

/// Status label attached to a KPI record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum KpiStatus {
    #[strum(to_string = "On Track")]
    OnTrack,
    #[strum(to_string = "Over Limit")]
    OverLimit,
    #[strum(to_string = "Warning")]
    Warning,
}

/// Consumption above `target` by at most this fraction is a warning rather than over limit.
const WARNING_TOLERANCE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiRecord {
    pub name: KpiName,
    pub current: f64,
    pub unit: String,
    /// Stored status. Not kept consistent with `current` and `target`.
    pub status: KpiStatus,
    pub target: f64,
    /// Signed percentage change versus target.
    pub trend_percent: f64,
}

impl KpiRecord {
    /// Status computed from `current` versus `target`.
    ///
    /// At or below target is on track, up to 10% above is a warning, anything
    /// beyond that is over limit.
    pub fn derived_status(&self) -> KpiStatus {
        if self.current <= self.target {
            KpiStatus::OnTrack
        } else if self.current <= self.target * (1.0 + WARNING_TOLERANCE) {
            KpiStatus::Warning
        } else {
            KpiStatus::OverLimit
        }
    }

    /// Whether the stored status differs from [`KpiRecord::derived_status`].
    pub fn status_disagrees(&self) -> bool {
        self.status != self.derived_status()
    }

    /// `true` when the trend points upwards, which is bad for consumption metrics.
    pub fn trending_up(&self) -> bool {
        self.trend_percent > 0.0
    }
}

/// Values of every metric for one reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub period: String,
    pub energy: f64,
    pub water: f64,
    pub waste: f64,
    pub emissions: f64,
}

impl TrendPoint {
    pub fn value(&self, kpi: KpiName) -> f64 {
        match kpi {
            KpiName::Energy => self.energy,
            KpiName::Water => self.water,
            KpiName::Waste => self.waste,
            KpiName::Emissions => self.emissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: String,
    /// Share in percent. Shares are not required to sum to 100.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotspotUsage {
    pub location: String,
    pub usage: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum AlertKind {
    Warning,
    Info,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Display)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub relative_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    pub metric: String,
    /// 0-100
    pub current: f64,
    /// 0-100
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverallPerformance {
    pub score_percent: u16,
    pub status: KpiStatus,
}

/// Cost figures shown on the insights view, in dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct CostImpact {
    pub estimated_savings: i64,
    pub savings_delta: i64,
    pub initiatives_cost: i64,
    pub cost_delta: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub label: String,
    pub percent: u16,
}

/// Every record the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub kpis: Vec<KpiRecord>,
    pub overall: OverallPerformance,
    pub trend: Vec<TrendPoint>,
    pub departments: Vec<DepartmentShare>,
    pub hotspots: Vec<HotspotUsage>,
    pub alerts: Vec<Alert>,
    pub radar: Vec<RadarPoint>,
    pub cost_impact: CostImpact,
    pub goals: Vec<GoalProgress>,
}

impl Dataset {
    pub fn kpi(&self, name: KpiName) -> Option<&KpiRecord> {
        self.kpis.iter().find(|record| record.name == name)
    }

    /// Whether any alert is high severity, which lights the notification marker.
    pub fn has_high_severity_alert(&self) -> bool {
        self.alerts
            .iter()
            .any(|alert| alert.severity == Severity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current: f64, target: f64, status: KpiStatus) -> KpiRecord {
        KpiRecord {
            name: KpiName::Energy,
            current,
            unit: "kWh".to_string(),
            status,
            target,
            trend_percent: 0.0,
        }
    }

    #[test]
    fn test_derived_status_policy() {
        assert_eq!(
            record(100.0, 100.0, KpiStatus::OnTrack).derived_status(),
            KpiStatus::OnTrack
        );
        assert_eq!(
            record(105.0, 100.0, KpiStatus::OnTrack).derived_status(),
            KpiStatus::Warning
        );
        assert_eq!(
            record(130.0, 100.0, KpiStatus::OnTrack).derived_status(),
            KpiStatus::OverLimit
        );
    }

    #[test]
    // Stored status is kept as-is even when it contradicts the numbers.
    fn test_status_disagreement_is_reported_not_fixed() {
        let stale = record(1500.0, 1200.0, KpiStatus::OnTrack);
        assert!(stale.status_disagrees());
        assert_eq!(stale.status, KpiStatus::OnTrack);

        let consistent = record(300.0, 250.0, KpiStatus::OverLimit);
        assert!(!consistent.status_disagrees());
    }

    #[test]
    fn test_kpi_name_lookup_is_exact() {
        assert_eq!(KpiName::from_key("energy"), Some(KpiName::Energy));
        assert_eq!(KpiName::from_key("WATER"), None);
        assert_eq!(KpiName::from_key("Water"), None);
        assert_eq!(KpiName::from_key("overall"), None);
        assert_eq!(KpiName::Emissions.to_string(), "Emissions");
        assert_eq!(KpiName::Emissions.key(), "emissions");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(KpiStatus::OnTrack.to_string(), "On Track");
        assert_eq!(KpiStatus::OverLimit.to_string(), "Over Limit");
    }
}
