//! Dashboard main renderer

use super::{filter_bar, kpi_tiles};
use crate::ui::components::alerts;
use crate::view::ViewController;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render_dashboard(f: &mut Frame, area: Rect, controller: &ViewController, focused: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    filter_bar::render_filter_bar(f, chunks[0], controller.filters());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(chunks[1]);

    kpi_tiles::render_kpi_grid(f, content_chunks[0], controller.dataset(), focused);
    alerts::render_alerts_panel(f, content_chunks[1], &controller.dataset().alerts);
}
