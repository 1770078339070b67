//! Headless mode execution
//!
//! Prints the dashboard as plain text, optionally refreshing on an interval

use super::{
    SessionData,
    messages::{
        SessionMode, print_session_exit_success, print_session_shutdown, print_session_starting,
    },
};
use crate::charts;
use crate::ui::{Icon, format_dollar_delta, format_time_of_day};
use crate::view::{KpiSelection, View, ViewController};
use std::error::Error;
use std::fmt::Write;
use std::time::Duration;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Printing the current dashboard or insights view
/// 2. Refresh-and-reprint on an interval when `watch` is set
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
/// * `watch` - Reprint interval, `None` to print once
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(
    mut session: SessionData,
    watch: Option<Duration>,
) -> Result<(), Box<dyn Error>> {
    let Some(period) = watch else {
        print!("{}", render_summary(&session.controller)?);
        return Ok(());
    };

    print_session_starting(SessionMode::Watch(period));
    print!("{}", render_summary(&session.controller)?);

    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                session.controller.refresh();
                println!();
                print!("{}", render_summary(&session.controller)?);
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}

/// Text rendition of the active view.
pub fn render_summary(controller: &ViewController) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let state = controller.state();
    let filters = controller.filters();
    let dataset = controller.dataset();

    writeln!(out, "Sustainability Dashboard - My Company")?;
    writeln!(
        out,
        "Last refreshed: {}",
        format_time_of_day(&state.last_refreshed_at)
    )?;
    writeln!(
        out,
        "Filters: {} | {} | {} | machine {} | shift {}",
        filters.time_range.label(),
        filters.unit.label(),
        filters.department.label(),
        filters.machine,
        filters.shift
    )?;

    writeln!(out, "\nKEY PERFORMANCE INDICATORS")?;
    for record in &dataset.kpis {
        let arrow = if record.trending_up() {
            Icon::TrendingUp
        } else {
            Icon::TrendingDown
        };
        write!(
            out,
            "  {:<10} {:>14}  {:<11} {} {}% vs target",
            record.name.to_string(),
            format!("{} {}", record.current, record.unit),
            record.status.to_string(),
            arrow.glyph(),
            record.trend_percent.abs()
        )?;
        if record.status_disagrees() {
            write!(out, "  (check: {})", record.derived_status())?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "  {:<10} {:>14}  {}",
        "Overall",
        format!("{}%", dataset.overall.score_percent),
        dataset.overall.status
    )?;

    writeln!(out, "\nCRITICAL ALERTS")?;
    for alert in &dataset.alerts {
        writeln!(
            out,
            "  {} {} - {} ({})",
            Icon::for_alert(alert.kind).glyph(),
            alert.title,
            alert.message,
            alert.relative_time
        )?;
    }

    if state.current_view == View::Insights {
        let kpi = state
            .selected_kpi
            .clone()
            .unwrap_or(KpiSelection::Overall);
        render_insights_summary(&mut out, controller, &kpi)?;
    }
    Ok(out)
}

fn render_insights_summary(
    out: &mut String,
    controller: &ViewController,
    kpi: &KpiSelection,
) -> Result<(), std::fmt::Error> {
    let dataset = controller.dataset();

    writeln!(out, "\n{} Trend Analysis", kpi.label())?;
    if let Some(record) = kpi.metric().and_then(|name| dataset.kpi(name)) {
        writeln!(
            out,
            "  Current {} {} against a target of {}",
            record.current, record.unit, record.target
        )?;
    }
    match charts::trend_series(&dataset.trend, kpi) {
        Some(points) => {
            for (period, (_, value)) in charts::period_labels(&dataset.trend)
                .iter()
                .zip(points.iter())
            {
                writeln!(out, "  {:<6} {}", period, value)?;
            }
        }
        None => writeln!(out, "  No trend series for '{}'", kpi)?,
    }

    writeln!(out, "\n{} by Department", kpi.label())?;
    for slice in charts::department_slices(&dataset.departments) {
        writeln!(out, "  {}", slice.caption())?;
    }

    writeln!(out, "\nHotspot Identification")?;
    for (location, usage) in charts::hotspot_bars(&dataset.hotspots) {
        writeln!(out, "  {:<8} {}", location, usage)?;
    }

    let cost = &dataset.cost_impact;
    writeln!(out, "\nCost Impact")?;
    writeln!(
        out,
        "  Estimated Savings    ${} ({})",
        cost.estimated_savings,
        format_dollar_delta(cost.savings_delta)
    )?;
    writeln!(
        out,
        "  Cost of Initiatives  ${} ({})",
        cost.initiatives_cost,
        format_dollar_delta(cost.cost_delta)
    )?;

    writeln!(out, "\nGoal Progress")?;
    for goal in &dataset.goals {
        writeln!(out, "  {:<18} {}%", goal.label, goal.percent)?;
    }
    Ok(())
}
