// Module declarations
mod app;
mod components;
pub mod dashboard;
mod icons;
pub mod insights;
mod keymap;
pub mod splash;
mod utils;
// Re-exports for external use
pub use app::{App, UIConfig, run};
pub use icons::Icon;
pub use utils::{format_dollar_delta, format_time_of_day};
