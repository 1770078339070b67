//! Insights main renderer

use super::{charts, panels};
use crate::ui::components::alerts;
use crate::ui::icons::Icon;
use crate::view::{KpiSelection, ViewController};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_insights(f: &mut Frame, area: Rect, controller: &ViewController) {
    // Insights is only reachable through a selection, but render something sane without one
    let kpi = controller
        .state()
        .selected_kpi
        .clone()
        .unwrap_or(KpiSelection::Overall);
    let dataset = controller.dataset();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);
    render_toolbar(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(26),
            Constraint::Percentage(18),
        ])
        .split(columns[0]);

    charts::render_trend_chart(f, left[0], &dataset.trend, &kpi);
    charts::render_department_chart(f, left[1], &dataset.departments, &kpi);
    charts::render_hotspot_chart(f, left[2], &dataset.hotspots);
    panels::render_cost_impact(f, left[3], &dataset.cost_impact);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(8)])
        .split(columns[1]);

    alerts::render_alerts_panel(f, right[0], &dataset.alerts);
    panels::render_goal_progress(f, right[1], &dataset.goals);
}

fn render_toolbar(f: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let back = Paragraph::new(Line::from(Span::styled(
        format!("{} [Esc] Back to Dashboard", Icon::ArrowLeft.glyph()),
        Style::default().fg(Color::LightBlue),
    )));
    f.render_widget(back, halves[0]);

    let actions = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} [R] Refresh", Icon::Refresh.glyph()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} [E] Export", Icon::Download.glyph()),
            Style::default().fg(Color::Green),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(actions, halves[1]);
}
