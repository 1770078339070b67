//! Alerts panel component

use crate::data::Alert;
use crate::ui::icons::Icon;
use crate::ui::utils::severity_color;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the critical alerts list.
pub fn render_alerts_panel(f: &mut Frame, area: Rect, alerts: &[Alert]) {
    let mut lines = Vec::new();
    for alert in alerts {
        let icon = Icon::for_alert(alert.kind);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icon.glyph()),
                Style::default().fg(severity_color(alert.severity)),
            ),
            Span::styled(
                alert.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", alert.message),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", alert.relative_time),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    let block = Block::default()
        .title(format!("{} CRITICAL ALERTS", Icon::Bell.glyph()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
