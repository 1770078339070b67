//! Insights chart components
//!
//! Trend line, department shares and hotspot bars

use crate::charts::{self as chart_data, Slice};
use crate::data::{DepartmentShare, HotspotUsage, TrendPoint};
use crate::view::KpiSelection;
use ratatui::Frame;
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset as ChartDataset,
    GraphType, Paragraph,
};

const TREND_COLOR: Color = Color::Rgb(59, 130, 246);
const HOTSPOT_COLOR: Color = Color::Rgb(245, 158, 11);

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Line chart of the selected metric across periods.
pub fn render_trend_chart(f: &mut Frame, area: Rect, trend: &[TrendPoint], kpi: &KpiSelection) {
    let block = panel(format!("{} Trend Analysis", kpi.label()));

    let Some(points) = chart_data::trend_series(trend, kpi) else {
        let placeholder = Paragraph::new(format!("No trend series for '{}'", kpi))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let [low, high] = chart_data::value_bounds(&points);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let x_labels: Vec<Span> = chart_data::period_labels(trend)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = [low, (low + high) / 2.0, high]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect();

    let series = ChartDataset::default()
        .name(kpi.label())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(TREND_COLOR))
        .data(&points);

    let chart = Chart::new(vec![series])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn slice_bar(slice: &Slice) -> Bar<'static> {
    Bar::default()
        .value(slice.value.max(0.0).round() as u64)
        .label(Line::from(slice.label.clone()))
        .text_value(format!("{:.0}%", slice.percent))
        .style(Style::default().fg(slice.color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(slice.color)
                .add_modifier(Modifier::BOLD),
        )
}

/// Horizontal bars, one per department, labelled with their share.
pub fn render_department_chart(
    f: &mut Frame,
    area: Rect,
    departments: &[DepartmentShare],
    kpi: &KpiSelection,
) {
    let bars: Vec<Bar> = chart_data::department_slices(departments)
        .iter()
        .map(slice_bar)
        .collect();

    let chart = BarChart::default()
        .block(panel(format!("{} by Department", kpi.label())))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// Vertical bars of usage per production line.
pub fn render_hotspot_chart(f: &mut Frame, area: Rect, hotspots: &[HotspotUsage]) {
    let bars: Vec<Bar> = chart_data::hotspot_bars(hotspots)
        .into_iter()
        .map(|(location, usage)| {
            Bar::default()
                .value(usage)
                .label(Line::from(location))
                .style(Style::default().fg(HOTSPOT_COLOR))
                .value_style(Style::default().fg(Color::Black).bg(HOTSPOT_COLOR))
        })
        .collect();

    // Spread the bars across the panel width
    let inner_width = area.width.saturating_sub(2);
    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 10);

    let chart = BarChart::default()
        .block(panel("Hotspot Identification".to_string()))
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
