//! Insights text panels
//!
//! Cost impact figures and goal progress gauges

use crate::data::{CostImpact, GoalProgress};
use crate::ui::utils::format_dollar_delta;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

const GOAL_COLORS: [Color; 2] = [Color::Blue, Color::Yellow];

fn figure(title: &str, amount: i64, delta: i64, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("${}", amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_dollar_delta(delta),
            Style::default().fg(color),
        )),
    ])
}

pub fn render_cost_impact(f: &mut Frame, area: Rect, cost: &CostImpact) {
    let block = Block::default()
        .title("Cost Impact")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    f.render_widget(
        figure(
            "Estimated Savings",
            cost.estimated_savings,
            cost.savings_delta,
            Color::Green,
        ),
        halves[0],
    );
    f.render_widget(
        figure(
            "Cost of Initiatives",
            cost.initiatives_cost,
            cost.cost_delta,
            Color::Blue,
        ),
        halves[1],
    );
}

pub fn render_goal_progress(f: &mut Frame, area: Rect, goals: &[GoalProgress]) {
    let block = Block::default()
        .title("Goal Progress")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Label row followed by gauge row for each goal
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); goals.len() * 2])
        .split(inner);

    for (index, goal) in goals.iter().enumerate() {
        let color = GOAL_COLORS[index % GOAL_COLORS.len()];
        let label = Paragraph::new(Line::from(vec![
            Span::styled(goal.label.clone(), Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(
                format!("{}%", goal.percent),
                Style::default().fg(Color::White),
            ),
        ]));
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .percent(goal.percent.min(100))
            .label("");

        if let (Some(label_row), Some(gauge_row)) = (rows.get(index * 2), rows.get(index * 2 + 1)) {
            f.render_widget(label, *label_row);
            f.render_widget(gauge, *gauge_row);
        }
    }
}
