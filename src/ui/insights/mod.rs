//! Insights view
//!
//! Drill-down charts for the selected KPI

pub mod charts;
pub mod panels;
pub mod renderer;

pub use renderer::render_insights;
