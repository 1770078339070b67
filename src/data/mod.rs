//! Static dashboard dataset
//!
//! Read-only records seeded once at startup and never mutated.

mod mock;
pub mod models;

pub use models::{
    Alert, AlertKind, CostImpact, Dataset, DepartmentShare, GoalProgress, HotspotUsage, KpiName,
    KpiRecord, KpiStatus, RadarPoint, Severity, TrendPoint,
};
