//! KPI tile components
//!
//! One tile per metric plus the overall performance tile

use crate::charts::{palette_color, radar_ratios};
use crate::data::{Dataset, KpiRecord};
use crate::ui::icons::Icon;
use crate::ui::utils::{status_color, trend_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

fn tile_block(title: String, focused: bool) -> Block<'static> {
    let (border_type, color) = if focused {
        (BorderType::Thick, Color::Yellow)
    } else {
        (BorderType::Rounded, Color::Cyan)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
}

/// Render the heading, the four metric tiles and the overall tile.
pub fn render_kpi_grid(f: &mut Frame, area: Rect, dataset: &Dataset, focused: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Min(7),
        ])
        .split(area);

    let heading = Paragraph::new("KEY PERFORMANCE INDICATORS").style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(heading, rows[0]);

    let tile_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);

    for (index, (record, chunk)) in dataset.kpis.iter().zip(tile_chunks.iter()).enumerate() {
        render_kpi_tile(f, *chunk, record, index + 1, focused == index);
    }

    let overall_index = dataset.kpis.len();
    render_overall_tile(f, rows[2], dataset, overall_index + 1, focused == overall_index);
}

/// Render a single metric tile.
pub fn render_kpi_tile(f: &mut Frame, area: Rect, record: &KpiRecord, key: usize, focused: bool) {
    let title = format!(
        " {} {} [{}] ",
        Icon::for_kpi(record.name).glyph(),
        record.name,
        key
    );

    let trend_icon = if record.trending_up() {
        Icon::TrendingUp
    } else {
        Icon::TrendingDown
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", record.status),
            Style::default()
                .fg(Color::Black)
                .bg(status_color(record.status))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", record.current),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(record.unit.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} {}%", trend_icon.glyph(), record.trend_percent.abs()),
                Style::default().fg(trend_color(record.trending_up())),
            ),
            Span::styled(" vs target", Style::default().fg(Color::Gray)),
        ]),
    ];

    // Stored status is shown as-is; flag it when the numbers say otherwise
    if record.status_disagrees() {
        lines.push(Line::from(Span::styled(
            format!("check: {}", record.derived_status()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let tile = Paragraph::new(lines).block(tile_block(title, focused));
    f.render_widget(tile, area);
}

/// Render the overall score with a gauge per radar metric.
pub fn render_overall_tile(
    f: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    key: usize,
    focused: bool,
) {
    let block = tile_block(
        format!(" {} Overall Performance [{}] ", Icon::TrendingUp.glyph(), key),
        focused,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Fill(1)])
        .split(inner);

    let overall = &dataset.overall;
    let score = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", overall.status),
            Style::default()
                .fg(Color::Black)
                .bg(status_color(overall.status))
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{}%", overall.score_percent),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    f.render_widget(score, columns[0]);

    let ratios = radar_ratios(&dataset.radar);
    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); ratios.len()])
        .split(columns[1]);

    for (index, ((metric, ratio), row)) in ratios.iter().zip(gauge_rows.iter()).enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette_color(index)))
            .ratio(*ratio)
            .label(format!("{} {:.0}%", metric, ratio * 100.0));
        f.render_widget(gauge, *row);
    }
}
