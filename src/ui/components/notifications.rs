//! Notifications overlay
//!
//! Popup listing every alert with its severity, drawn over the active view

use crate::ui::icons::Icon;
use crate::ui::utils::severity_color;
use crate::view::ViewController;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Rectangle of the given percentage size centred in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_notifications(f: &mut Frame, area: Rect, controller: &ViewController) {
    let popup = centered(area, 60, 50);

    let mut lines = Vec::new();
    for alert in &controller.dataset().alerts {
        let color = severity_color(alert.severity);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} [{}] ", Icon::for_alert(alert.kind).glyph(), alert.severity),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(alert.title.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(" - {} ({})", alert.message, alert.relative_time),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[A] or [Esc] to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!("{} NOTIFICATIONS", Icon::Bell.glyph()))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Rgb(24, 28, 34)))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
