//! Filter bar component
//!
//! Shows the current selection. Filters are not applied to any data.

use crate::ui::icons::Icon;
use crate::view::FilterSelection;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn selector(key: &str, name: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}: ", name), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

pub fn render_filter_bar(f: &mut Frame, area: Rect, filters: &FilterSelection) {
    let mut spans = vec![Span::styled(
        format!("{} ", Icon::Filter.glyph()),
        Style::default().fg(Color::Gray),
    )];
    spans.extend(selector("T", "Time", filters.time_range.label().to_string()));
    spans.extend(selector("U", "Unit", filters.unit.label().to_string()));
    spans.extend(selector(
        "D",
        "Department",
        filters.department.label().to_string(),
    ));
    spans.push(Span::styled(
        format!("Machine: {}   Shift: {}", filters.machine, filters.shift),
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(bar, area);
}
