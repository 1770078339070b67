//! Footer component
//!
//! Renders key hints, last refresh time and the latest activity

use crate::ui::utils::{format_compact_timestamp, format_time_of_day};
use crate::view::ViewController;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, controller: &ViewController) {
    let hints = "[Q] Quit | [1-5] Insights | [R] Refresh | [A] Alerts | [T/U/D] Filters | [E] Export";

    let mut status = vec![
        Span::styled("© 2025 Sustainability Inc.", Style::default().fg(Color::Gray)),
        Span::styled(
            "  |  Privacy Policy  |  Terms of Service",
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(
                "  |  Last refreshed: {}",
                format_time_of_day(&controller.state().last_refreshed_at)
            ),
            Style::default().fg(Color::LightBlue),
        ),
    ];
    if let Some(event) = controller.latest_displayable_event() {
        status.push(Span::styled(
            format!(
                "  |  {} {}: {}",
                format_compact_timestamp(&event.timestamp),
                event.source,
                event.msg
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            hints,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(status),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
