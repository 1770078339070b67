//! Chart data preparation
//!
//! Turns dataset records into the flat series, bars and slices the ratatui
//! chart widgets draw. Nothing here depends on terminal state.

use crate::data::{DepartmentShare, HotspotUsage, RadarPoint, TrendPoint};
use crate::view::KpiSelection;
use ratatui::style::Color;

/// Slice colours, reused in order: green, amber, red, blue.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(34, 197, 94),
    Color::Rgb(245, 158, 11),
    Color::Rgb(239, 68, 68),
    Color::Rgb(59, 130, 246),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// `(period index, value)` points for the selected metric.
///
/// Returns `None` when the selection has no series of its own, such as
/// `overall` or an unrecognised identifier.
pub fn trend_series(trend: &[TrendPoint], kpi: &KpiSelection) -> Option<Vec<(f64, f64)>> {
    let metric = kpi.metric()?;
    Some(
        trend
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.value(metric)))
            .collect(),
    )
}

pub fn period_labels(trend: &[TrendPoint]) -> Vec<String> {
    trend.iter().map(|point| point.period.clone()).collect()
}

/// Y-axis bounds padded by 5% of the value range on either side.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let mut values = points.iter().map(|(_, y)| *y);
    let Some(first) = values.next() else {
        return [0.0, 1.0];
    };
    let (min, max) = values.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let range = max - min;
    // A flat series still needs a visible band around it
    let pad = if range.abs() < f64::EPSILON {
        (min.abs() * 0.05).max(1.0)
    } else {
        range * 0.05
    };
    [min - pad, max + pad]
}

/// One department's share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the sum of all values, 0-100.
    pub percent: f64,
    pub color: Color,
}

impl Slice {
    /// Label in the form `Dyeing 35%`.
    pub fn caption(&self) -> String {
        format!("{} {:.0}%", self.label, self.percent)
    }
}

/// Percentages are relative to the sum of the shares, which need not be 100.
pub fn department_slices(shares: &[DepartmentShare]) -> Vec<Slice> {
    let total: f64 = shares.iter().map(|share| share.value).sum();
    shares
        .iter()
        .enumerate()
        .map(|(i, share)| Slice {
            label: share.department.clone(),
            value: share.value,
            percent: if total > 0.0 {
                share.value / total * 100.0
            } else {
                0.0
            },
            color: palette_color(i),
        })
        .collect()
}

/// `(location, usage)` pairs rounded for the bar chart.
pub fn hotspot_bars(hotspots: &[HotspotUsage]) -> Vec<(String, u64)> {
    hotspots
        .iter()
        .map(|hotspot| (hotspot.location.clone(), hotspot.usage.max(0.0).round() as u64))
        .collect()
}

/// Each metric's current value as a fraction of its target, clamped to 0..=1.
pub fn radar_ratios(points: &[RadarPoint]) -> Vec<(String, f64)> {
    points
        .iter()
        .map(|point| {
            let ratio = if point.target > 0.0 {
                point.current / point.target
            } else {
                0.0
            };
            (point.metric.clone(), ratio.clamp(0.0, 1.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, KpiName};

    #[test]
    fn test_trend_series_for_metric() {
        let data = Dataset::mock();
        let series = trend_series(&data.trend, &KpiSelection::Metric(KpiName::Waste)).unwrap();
        assert_eq!(
            series,
            vec![(0.0, 280.0), (1.0, 290.0), (2.0, 310.0), (3.0, 300.0)]
        );
        assert_eq!(period_labels(&data.trend), vec!["Jan", "Feb", "Mar", "Apr"]);
    }

    #[test]
    // Overall and opaque selections have no trend series.
    fn test_trend_series_without_metric() {
        let data = Dataset::mock();
        assert!(trend_series(&data.trend, &KpiSelection::Overall).is_none());
        assert!(trend_series(&data.trend, &KpiSelection::from("noise")).is_none());
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
        let [lo, hi] = value_bounds(&[(0.0, 100.0), (1.0, 200.0)]);
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 205.0).abs() < 1e-9);
        let [lo, hi] = value_bounds(&[(0.0, 50.0)]);
        assert!(lo < 50.0 && hi > 50.0);
    }

    #[test]
    // Negative and sign-crossing series stay inside the axis.
    fn test_value_bounds_contain_negative_values() {
        let points = [(0.0, -2.1), (1.0, -1.3), (2.0, -4.0)];
        let [lo, hi] = value_bounds(&points);
        assert!(points.iter().all(|(_, y)| *y > lo && *y < hi));

        let crossing = [(0.0, -10.0), (1.0, 30.0)];
        let [lo, hi] = value_bounds(&crossing);
        assert!((lo + 12.0).abs() < 1e-9);
        assert!((hi - 32.0).abs() < 1e-9);

        let [lo, hi] = value_bounds(&[(0.0, -50.0)]);
        assert!(lo < -50.0 && hi > -50.0);
    }

    #[test]
    fn test_department_slices_relative_to_total() {
        let shares = vec![
            DepartmentShare {
                department: "Dyeing".to_string(),
                value: 30.0,
            },
            DepartmentShare {
                department: "Weaving".to_string(),
                value: 10.0,
            },
        ];
        let slices = department_slices(&shares);
        assert_eq!(slices[0].caption(), "Dyeing 75%");
        assert_eq!(slices[1].caption(), "Weaving 25%");
        assert_eq!(slices[1].color, PALETTE[1]);
    }

    #[test]
    fn test_department_slices_with_zero_total() {
        let shares = vec![DepartmentShare {
            department: "Idle".to_string(),
            value: 0.0,
        }];
        assert_eq!(department_slices(&shares)[0].percent, 0.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(4), PALETTE[0]);
        assert_eq!(palette_color(6), PALETTE[2]);
    }

    #[test]
    fn test_hotspot_bars_and_radar_ratios() {
        let data = Dataset::mock();
        let bars = hotspot_bars(&data.hotspots);
        assert_eq!(bars[4], ("Line E".to_string(), 920));

        let ratios = radar_ratios(&data.radar);
        assert_eq!(ratios[2], ("Waste".to_string(), 0.7));
    }
}
