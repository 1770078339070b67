//! Dashboard view
//!
//! Filter bar, KPI tile grid and alerts panel

pub mod filter_bar;
pub mod kpi_tiles;
pub mod renderer;

// Re-export main function for external use
pub use renderer::render_dashboard;
