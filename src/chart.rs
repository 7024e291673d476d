//! Chart data and SVG geometry for the spending-by-category charts.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::models::{CategoryTotals, DashboardSummary};

pub const PALETTE: [&str; 6] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Keeps the server's category order; colors follow position.
pub fn category_chart_data(totals: &CategoryTotals) -> Vec<ChartDatum> {
    totals
        .iter()
        .enumerate()
        .map(|(i, (name, value))| ChartDatum {
            name: name.to_string(),
            value,
            color: color_for(i),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartView {
    Empty,
    Data(Vec<ChartDatum>),
}

pub fn chart_view(summary: Option<&DashboardSummary>) -> ChartView {
    match summary {
        Some(summary) if !summary.spending_by_category.is_empty() => {
            ChartView::Data(category_chart_data(&summary.spending_by_category))
        }
        _ => ChartView::Empty,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub color: &'static str,
    pub percent: f64,
    pub path: String,
}

/// Slices of a pie centred on the origin, starting at twelve o'clock and
/// running clockwise. Non-positive values get no slice.
pub fn pie_slices(data: &[ChartDatum], radius: f64) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    data.iter()
        .filter(|d| d.value > 0.0)
        .map(|d| {
            let fraction = d.value / total;
            let sweep = fraction * TAU;
            let path = if fraction >= 1.0 - 1e-9 {
                // a single arc cannot close on itself
                format!(
                    "M 0 {top:.2} A {r:.2} {r:.2} 0 1 1 0 {bottom:.2} A {r:.2} {r:.2} 0 1 1 0 {top:.2} Z",
                    r = radius,
                    top = -radius,
                    bottom = radius,
                )
            } else {
                let (x0, y0) = polar(radius, angle);
                let (x1, y1) = polar(radius, angle + sweep);
                let large_arc = u8::from(sweep > PI);
                format!(
                    "M 0 0 L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
                    r = radius
                )
            };
            angle += sweep;
            PieSlice {
                name: d.name.clone(),
                color: d.color,
                percent: fraction * 100.0,
                path,
            }
        })
        .collect()
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub name: String,
    pub color: &'static str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars laid out left to right inside a `width` x `height` box, scaled so the
/// largest value fills the full height.
pub fn bar_layout(data: &[ChartDatum], width: f64, height: f64) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|d| d.value).fold(0.0, f64::max);
    let slot = width / data.len() as f64;
    let bar_width = slot * 0.6;

    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let bar_height = if max > 0.0 { d.value.max(0.0) / max * height } else { 0.0 };
            BarRect {
                name: d.name.clone(),
                color: d.color,
                value: d.value,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(entries: &[(&str, f64)]) -> CategoryTotals {
        entries.iter().map(|(n, v)| (n.to_string(), *v)).collect()
    }

    #[test]
    fn chart_data_keeps_insertion_order() {
        let data = category_chart_data(&totals(&[("Food", 120.5), ("Bills", 60.0)]));
        assert_eq!(
            data,
            vec![
                ChartDatum { name: "Food".into(), value: 120.5, color: PALETTE[0] },
                ChartDatum { name: "Bills".into(), value: 60.0, color: PALETTE[1] },
            ]
        );
    }

    #[test]
    fn colors_wrap_around_palette() {
        let entries: Vec<(String, f64)> = (0..8).map(|i| (format!("c{i}"), 1.0)).collect();
        let data = category_chart_data(&entries.into_iter().collect());
        assert_eq!(data[6].color, PALETTE[0]);
        assert_eq!(data[7].color, PALETTE[1]);
    }

    #[test]
    fn empty_summary_shows_empty_state() {
        let summary = DashboardSummary::default();
        assert_eq!(chart_view(Some(&summary)), ChartView::Empty);
        assert_eq!(chart_view(None), ChartView::Empty);

        let summary = DashboardSummary {
            spending_by_category: totals(&[("Food", 5.0)]),
            ..Default::default()
        };
        assert!(matches!(chart_view(Some(&summary)), ChartView::Data(d) if d.len() == 1));
    }

    #[test]
    fn single_category_is_a_full_circle() {
        let data = category_chart_data(&totals(&[("Food", 42.0)]));
        let slices = pie_slices(&data, 100.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].percent, 100.0);
        assert!(slices[0].path.starts_with("M 0 -100.00 A"));
    }

    #[test]
    fn slices_are_proportional_and_contiguous() {
        let data = category_chart_data(&totals(&[("Food", 75.0), ("Bills", 25.0)]));
        let slices = pie_slices(&data, 100.0);
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        // three quarters clockwise from twelve o'clock lands on nine o'clock
        assert!(slices[0]
            .path
            .starts_with("M 0 0 L 0.00 -100.00 A 100.00 100.00 0 1 1 -100.00 "));
        assert!(slices[1].path.starts_with("M 0 0 L -100.00 "));
        assert!(slices[1].path.ends_with(" -100.00 Z"));
    }

    #[test]
    fn zero_total_has_no_slices() {
        let data = category_chart_data(&totals(&[("Food", 0.0)]));
        assert!(pie_slices(&data, 50.0).is_empty());
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let data = category_chart_data(&totals(&[("Food", 200.0), ("Bills", 50.0)]));
        let bars = bar_layout(&data, 200.0, 100.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[0].y, 0.0);
        assert_eq!(bars[1].height, 25.0);
        assert_eq!(bars[1].y, 75.0);
        assert_eq!(bars[0].width, 60.0);
        assert_eq!(bars[1].x, 120.0);
    }
}
