//! Header component
//!
//! Company name, view title and toolbar hints

use crate::ui::icons::Icon;
use crate::view::{View, ViewController};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header bar.
pub fn render_header(f: &mut Frame, area: Rect, controller: &ViewController) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let company = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Gray)),
        Span::styled(
            "My Company",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(company, chunks[0]);

    let title = match controller.state().current_view {
        View::Dashboard => "DASHBOARD",
        View::Insights => "INSIGHTS",
    };
    let title = Paragraph::new(title).alignment(Alignment::Center).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[1]);

    // High severity alerts light up the bell
    let bell_marker = if controller.dataset().has_high_severity_alert() {
        Span::styled("•", Style::default().fg(Color::Red))
    } else {
        Span::raw(" ")
    };
    let toolbar = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} [R] ", Icon::Refresh.glyph()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{} [A]", Icon::Bell.glyph()),
            Style::default().fg(Color::Gray),
        ),
        bell_marker,
        Span::styled(
            format!(" {} [E]", Icon::Download.glyph()),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(toolbar, chunks[2]);
}
