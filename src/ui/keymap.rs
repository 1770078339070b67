//! Key bindings
//!
//! Translates key presses into commands for the app loop

use crate::data::KpiName;
use crate::view::state::cycle;
use crate::view::{Action, FilterSelection, FilterUpdate, KpiSelection, View, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the app loop should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Dispatch(Action),
    FocusNext,
    FocusPrevious,
    /// Open insights for the focused tile.
    ActivateFocused,
    Ignore,
}

/// Tiles in grid order. The index doubles as the focus position.
pub fn tile_selection(index: usize) -> KpiSelection {
    match index {
        0 => KpiSelection::Metric(KpiName::Energy),
        1 => KpiSelection::Metric(KpiName::Water),
        2 => KpiSelection::Metric(KpiName::Waste),
        3 => KpiSelection::Metric(KpiName::Emissions),
        _ => KpiSelection::Overall,
    }
}

pub fn map_key(key: KeyEvent, state: &ViewState, filters: &FilterSelection) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    let on_dashboard = state.current_view == View::Dashboard;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            Command::Dispatch(Action::SelectKpi(tile_selection(index)))
        }
        KeyCode::Char('o') => Command::Dispatch(Action::SelectKpi(KpiSelection::Overall)),
        KeyCode::Char('r') => Command::Dispatch(Action::Refresh),
        KeyCode::Char('a') => Command::Dispatch(Action::ToggleAlertsPanel),
        KeyCode::Char('e') => Command::Dispatch(Action::Export),
        KeyCode::Char('t') => Command::Dispatch(Action::SetFilter(FilterUpdate::TimeRange(
            cycle(filters.time_range),
        ))),
        KeyCode::Char('u') => {
            Command::Dispatch(Action::SetFilter(FilterUpdate::Unit(cycle(filters.unit))))
        }
        KeyCode::Char('d') => Command::Dispatch(Action::SetFilter(FilterUpdate::Department(
            cycle(filters.department),
        ))),
        // Esc closes the notifications overlay first.
        KeyCode::Esc if state.alerts_panel_visible => {
            Command::Dispatch(Action::ToggleAlertsPanel)
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') if !on_dashboard => {
            Command::Dispatch(Action::NavigateToDashboard)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab if on_dashboard => Command::FocusNext,
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab if on_dashboard => Command::FocusPrevious,
        KeyCode::Enter if on_dashboard => Command::ActivateFocused,
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::state::{DepartmentFilter, TimeRange, UnitFilter};
    use chrono::Local;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dashboard() -> ViewState {
        ViewState::new(Local::now())
    }

    fn insights() -> ViewState {
        let mut state = dashboard();
        state.current_view = View::Insights;
        state
    }

    #[test]
    fn test_number_keys_select_tiles() {
        let filters = FilterSelection::default();
        assert_eq!(
            map_key(press(KeyCode::Char('3')), &dashboard(), &filters),
            Command::Dispatch(Action::SelectKpi(KpiSelection::Metric(KpiName::Waste)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('5')), &insights(), &filters),
            Command::Dispatch(Action::SelectKpi(KpiSelection::Overall))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('6')), &dashboard(), &filters),
            Command::Ignore
        );
    }

    #[test]
    fn test_quit_keys() {
        let filters = FilterSelection::default();
        assert_eq!(
            map_key(press(KeyCode::Char('q')), &insights(), &filters),
            Command::Quit
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &dashboard(),
                &filters
            ),
            Command::Quit
        );
    }

    #[test]
    fn test_back_only_from_insights() {
        let filters = FilterSelection::default();
        assert_eq!(
            map_key(press(KeyCode::Esc), &insights(), &filters),
            Command::Dispatch(Action::NavigateToDashboard)
        );
        assert_eq!(
            map_key(press(KeyCode::Esc), &dashboard(), &filters),
            Command::Ignore
        );
    }

    #[test]
    fn test_esc_closes_notifications_first() {
        let filters = FilterSelection::default();
        let mut state = insights();
        state.alerts_panel_visible = true;
        assert_eq!(
            map_key(press(KeyCode::Esc), &state, &filters),
            Command::Dispatch(Action::ToggleAlertsPanel)
        );
    }

    #[test]
    fn test_filter_keys_cycle_from_current_value() {
        let mut filters = FilterSelection::default();
        filters.time_range = TimeRange::Year;
        filters.unit = UnitFilter::Unit1;
        assert_eq!(
            map_key(press(KeyCode::Char('t')), &dashboard(), &filters),
            Command::Dispatch(Action::SetFilter(FilterUpdate::TimeRange(TimeRange::Today)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('u')), &dashboard(), &filters),
            Command::Dispatch(Action::SetFilter(FilterUpdate::Unit(UnitFilter::Unit2)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('d')), &dashboard(), &filters),
            Command::Dispatch(Action::SetFilter(FilterUpdate::Department(
                DepartmentFilter::Dyeing
            )))
        );
    }

    #[test]
    fn test_focus_keys_only_on_dashboard() {
        let filters = FilterSelection::default();
        assert_eq!(
            map_key(press(KeyCode::Right), &dashboard(), &filters),
            Command::FocusNext
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), &dashboard(), &filters),
            Command::ActivateFocused
        );
        assert_eq!(
            map_key(press(KeyCode::Right), &insights(), &filters),
            Command::Ignore
        );
    }
}
