//! View controller
//!
//! Owns the view state and filter selection and applies actions to them.
//! All rendering reads from here; nothing else mutates either.

use super::actions::{Action, FilterUpdate};
use super::clock::{Clock, SystemClock};
use super::error::FilterError;
use super::state::{FilterSelection, KpiSelection, View, ViewState};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::data::Dataset;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use log::debug;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

pub struct ViewController {
    state: ViewState,
    filters: FilterSelection,
    dataset: Dataset,
    clock: Box<dyn Clock>,
    /// Most recent events, oldest first, capped at `MAX_ACTIVITY_LOGS`.
    activity_logs: VecDeque<Event>,
}

impl ViewController {
    pub fn new(dataset: Dataset, filters: FilterSelection) -> Self {
        Self::with_clock(dataset, filters, Box::new(SystemClock))
    }

    pub fn with_clock(dataset: Dataset, filters: FilterSelection, clock: Box<dyn Clock>) -> Self {
        let state = ViewState::new(clock.now());
        Self {
            state,
            filters,
            dataset,
            clock,
            activity_logs: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[cfg(test)]
    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    /// Newest event that passes the `RUST_LOG` threshold.
    pub fn latest_displayable_event(&self) -> Option<&Event> {
        self.activity_logs
            .iter()
            .rev()
            .find(|event| event.should_display())
    }

    /// Apply a single action.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatching {:?}", action);
        match action {
            Action::SelectKpi(kpi) => self.select_kpi(kpi),
            Action::NavigateToDashboard => self.navigate_to_dashboard(),
            Action::Refresh => self.refresh(),
            Action::ToggleAlertsPanel => self.toggle_alerts_panel(),
            Action::SetFilter(update) => self.set_filter(update),
            Action::Export => self.export(),
        }
    }

    /// Drill into `kpi`. Unrecognised identifiers are kept as opaque values.
    pub fn select_kpi(&mut self, kpi: impl Into<KpiSelection>) {
        let kpi = kpi.into();
        let msg = format!("Opened {} insights", kpi.label());
        self.state.selected_kpi = Some(kpi);
        self.state.current_view = View::Insights;
        self.record(Event::controller_with_level(
            msg,
            EventType::Navigation,
            LogLevel::Info,
        ));
    }

    /// Return to the tile grid. The previous selection is kept.
    pub fn navigate_to_dashboard(&mut self) {
        self.state.current_view = View::Dashboard;
        self.record(Event::controller_with_level(
            "Back to dashboard".to_string(),
            EventType::Navigation,
            LogLevel::Debug,
        ));
    }

    /// Stamp the refresh time. The dataset is static and stays as it is.
    pub fn refresh(&mut self) {
        let now = self.clock.now();
        self.state.last_refreshed_at = now.max(self.state.last_refreshed_at);
        let msg = format!(
            "Refreshed at {}",
            self.state.last_refreshed_at.format("%H:%M:%S")
        );
        self.record(Event::controller_with_level(
            msg,
            EventType::Refresh,
            LogLevel::Info,
        ));
    }

    pub fn toggle_alerts_panel(&mut self) {
        self.state.alerts_panel_visible = !self.state.alerts_panel_visible;
        let msg = if self.state.alerts_panel_visible {
            "Notifications opened"
        } else {
            "Notifications closed"
        };
        self.record(Event::controller_with_level(
            msg.to_string(),
            EventType::Notification,
            LogLevel::Debug,
        ));
    }

    /// Overwrite one filter field. Filters do not affect displayed data.
    pub fn set_filter(&mut self, update: FilterUpdate) {
        let msg = format!("Filter {} set to {}", update.field(), update.value());
        update.apply(&mut self.filters);
        self.record(Event::filters_with_level(
            msg,
            EventType::FilterChange,
            LogLevel::Info,
        ));
    }

    /// Parse and apply a raw field/value pair. State is unchanged on error.
    pub fn set_filter_from_input(&mut self, field: &str, value: &str) -> Result<(), FilterError> {
        match FilterUpdate::parse(field, value) {
            Ok(update) => {
                self.set_filter(update);
                Ok(())
            }
            Err(e) => {
                self.record(Event::filters_with_level(
                    e.to_string(),
                    EventType::Rejected,
                    LogLevel::Warn,
                ));
                Err(e)
            }
        }
    }

    fn export(&mut self) {
        self.record(Event::host_with_level(
            "Export is not available".to_string(),
            EventType::Notice,
            LogLevel::Warn,
        ));
    }

    fn record(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

impl Debug for ViewController {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("state", &self.state)
            .field("filters", &self.filters)
            .field("activity_logs", &self.activity_logs.len())
            .finish()
    }
}
