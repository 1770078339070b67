//! Icon glyphs
//!
//! Symbolic icon names mapped to terminal glyphs.

use crate::data::{AlertKind, KpiName};
use strum::{EnumIter, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Zap,
    Droplets,
    Trash,
    Wind,
    Bell,
    Filter,
    Refresh,
    Download,
    ArrowLeft,
    TrendingUp,
    TrendingDown,
    AlertTriangle,
    CheckCircle,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Zap => "⚡",
            Icon::Droplets => "💧",
            Icon::Trash => "🗑",
            Icon::Wind => "🌬",
            Icon::Bell => "🔔",
            Icon::Filter => "⛛",
            Icon::Refresh => "⟳",
            Icon::Download => "⤓",
            Icon::ArrowLeft => "←",
            Icon::TrendingUp => "▲",
            Icon::TrendingDown => "▼",
            Icon::AlertTriangle => "⚠",
            Icon::CheckCircle => "✔",
        }
    }

    pub fn for_kpi(kpi: KpiName) -> Self {
        match kpi {
            KpiName::Energy => Icon::Zap,
            KpiName::Water => Icon::Droplets,
            KpiName::Waste => Icon::Trash,
            KpiName::Emissions => Icon::Wind,
        }
    }

    pub fn for_alert(kind: AlertKind) -> Self {
        match kind {
            AlertKind::Warning => Icon::AlertTriangle,
            AlertKind::Info => Icon::CheckCircle,
        }
    }
}
