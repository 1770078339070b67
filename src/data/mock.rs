//! Hard-coded sample data

use super::models::*;

fn kpi(
    name: KpiName,
    current: f64,
    unit: &str,
    status: KpiStatus,
    target: f64,
    trend_percent: f64,
) -> KpiRecord {
    KpiRecord {
        name,
        current,
        unit: unit.to_string(),
        status,
        target,
        trend_percent,
    }
}

fn trend(period: &str, energy: f64, water: f64, waste: f64, emissions: f64) -> TrendPoint {
    TrendPoint {
        period: period.to_string(),
        energy,
        water,
        waste,
        emissions,
    }
}

fn alert(
    id: u32,
    kind: AlertKind,
    title: &str,
    message: &str,
    severity: Severity,
    relative_time: &str,
) -> Alert {
    Alert {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        severity,
        relative_time: relative_time.to_string(),
    }
}

impl Dataset {
    /// The sample dataset shown by the dashboard.
    pub fn mock() -> Self {
        Self {
            kpis: vec![
                kpi(KpiName::Energy, 1500.0, "kWh", KpiStatus::OnTrack, 1200.0, 5.2),
                kpi(KpiName::Water, 12000.0, "L", KpiStatus::OnTrack, 11000.0, -2.1),
                kpi(KpiName::Waste, 300.0, "kg", KpiStatus::OverLimit, 250.0, 8.7),
                kpi(KpiName::Emissions, 150.0, "gCO2", KpiStatus::OnTrack, 140.0, -1.3),
            ],
            overall: OverallPerformance {
                score_percent: 85,
                status: KpiStatus::OnTrack,
            },
            trend: vec![
                trend("Jan", 1400.0, 11500.0, 280.0, 145.0),
                trend("Feb", 1350.0, 11200.0, 290.0, 148.0),
                trend("Mar", 1450.0, 11800.0, 310.0, 152.0),
                trend("Apr", 1500.0, 12000.0, 300.0, 150.0),
            ],
            departments: [
                ("Dyeing", 35.0),
                ("Weaving", 28.0),
                ("Finishing", 22.0),
                ("Quality Control", 15.0),
            ]
            .into_iter()
            .map(|(department, value)| DepartmentShare {
                department: department.to_string(),
                value,
            })
            .collect(),
            hotspots: [
                ("Line A", 850.0),
                ("Line B", 720.0),
                ("Line C", 680.0),
                ("Line D", 780.0),
                ("Line E", 920.0),
                ("Line F", 640.0),
            ]
            .into_iter()
            .map(|(location, usage)| HotspotUsage {
                location: location.to_string(),
                usage,
            })
            .collect(),
            alerts: vec![
                alert(
                    1,
                    AlertKind::Warning,
                    "High Energy Consumption",
                    "75% above limit",
                    Severity::High,
                    "2 hours ago",
                ),
                alert(
                    2,
                    AlertKind::Info,
                    "Maintenance Scheduled",
                    "Next week",
                    Severity::Low,
                    "1 day ago",
                ),
                alert(
                    3,
                    AlertKind::Warning,
                    "Policy Update",
                    "New Guidelines",
                    Severity::Medium,
                    "3 hours ago",
                ),
            ],
            radar: [
                ("Energy", 85.0),
                ("Water", 92.0),
                ("Waste", 70.0),
                ("Emissions", 88.0),
            ]
            .into_iter()
            .map(|(metric, current)| RadarPoint {
                metric: metric.to_string(),
                current,
                target: 100.0,
            })
            .collect(),
            cost_impact: CostImpact {
                estimated_savings: 2000,
                savings_delta: 500,
                initiatives_cost: 1500,
                cost_delta: -300,
            },
            goals: vec![
                GoalProgress {
                    label: "Monthly Target".to_string(),
                    percent: 85,
                },
                GoalProgress {
                    label: "Quarterly Target".to_string(),
                    percent: 72,
                },
            ],
        }
    }
}
