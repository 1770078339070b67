//! Dashboard view state and the controller that mutates it

pub mod actions;
pub mod clock;
pub mod controller;
pub mod error;
pub mod state;

pub use actions::{Action, FilterField, FilterUpdate};
pub use controller::ViewController;
pub use error::FilterError;
pub use state::{FilterSelection, KpiSelection, View, ViewState};
