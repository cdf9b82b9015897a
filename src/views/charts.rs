//! Chart geometry for server-side SVG charts
//!
//! The templates only draw what these functions compute: bar rectangles with
//! their axis ticks, and donut arc paths.

use serde::Serialize;
use std::f64::consts::PI;

/// Plot area margins of a bar chart, in SVG units
const PLOT_LEFT: f64 = 64.0;
const PLOT_TOP: f64 = 12.0;
const PLOT_BOTTOM_MARGIN: f64 = 28.0;

/// Fraction of each band left empty on either side of a bar
const BAND_GAP: f64 = 0.2;

/// A single rectangle of a bar chart
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub label: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal centre, for the axis label
    pub center_x: f64,
}

/// A horizontal grid line with its axis label
#[derive(Debug, Clone, Serialize)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

/// Everything needed to draw a bar chart
#[derive(Debug, Clone, Serialize)]
pub struct BarChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_bottom: f64,
    pub axis_max: f64,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

/// Round a raw tick step up to 1, 2, 2.5 or 5 times a power of ten
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);

    nice * magnitude
}

/// Lay out a bar chart of `points` inside a `width` × `height` box
///
/// The value axis starts at zero and ends at the first multiple of a nice
/// step that covers the largest value, split into `tick_count` intervals.
pub fn bar_chart(
    points: &[(&str, f64)],
    width: f64,
    height: f64,
    tick_count: usize,
    format_value: impl Fn(f64) -> String,
) -> BarChartLayout {
    let tick_count = tick_count.max(1);
    let max_value = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let step = nice_step(max_value / tick_count as f64);
    let axis_max = ((max_value / step).ceil() * step).max(step);

    let plot_right = width;
    let plot_bottom = height - PLOT_BOTTOM_MARGIN;
    let plot_height = plot_bottom - PLOT_TOP;
    let plot_width = plot_right - PLOT_LEFT;

    let ticks_needed = (axis_max / step).round() as usize;
    let ticks = (0..=ticks_needed)
        .map(|i| {
            let value = step * i as f64;
            Tick {
                y: plot_bottom - plot_height * (value / axis_max),
                label: format_value(value),
            }
        })
        .collect();

    let band = if points.is_empty() {
        0.0
    } else {
        plot_width / points.len() as f64
    };

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let bar_height = plot_height * (value.max(0.0) / axis_max);
            let x = PLOT_LEFT + band * i as f64 + band * BAND_GAP;
            let bar_width = band * (1.0 - 2.0 * BAND_GAP);
            Bar {
                label: (*label).to_string(),
                value_label: format_value(*value),
                x,
                y: plot_bottom - bar_height,
                width: bar_width,
                height: bar_height,
                center_x: x + bar_width / 2.0,
            }
        })
        .collect();

    BarChartLayout {
        width,
        height,
        plot_left: PLOT_LEFT,
        plot_right,
        plot_bottom,
        axis_max,
        bars,
        ticks,
    }
}

/// One ring segment of a donut chart
#[derive(Debug, Clone, Serialize)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    /// Share of the total, 0–100
    pub percent: f64,
    pub color: String,
    /// SVG path data of the ring segment
    pub path: String,
    /// Anchor for the segment's label, just outside the ring
    pub label_x: f64,
    pub label_y: f64,
}

/// Compute donut segments, clockwise from twelve o'clock
///
/// Segments with a zero value are skipped; an all-zero input yields no
/// segments.
pub fn donut(
    shares: &[(&str, f64, &str)],
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
) -> Vec<DonutSegment> {
    let total: f64 = shares.iter().map(|(_, v, _)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    let mut segments = Vec::new();
    for (label, value, color) in shares {
        let value = value.max(0.0);
        if value == 0.0 {
            continue;
        }

        // A single arc cannot close a full circle.
        let sweep = (value / total * 2.0 * PI).min(2.0 * PI - 1e-4);
        let end = start + sweep;
        let middle = start + sweep / 2.0;
        let label_radius = outer_radius + 18.0;

        segments.push(DonutSegment {
            label: (*label).to_string(),
            value,
            value_label: value.to_string(),
            percent: value * 100.0 / total,
            color: (*color).to_string(),
            path: ring_path(cx, cy, inner_radius, outer_radius, start, end),
            label_x: round2(cx + label_radius * middle.cos()),
            label_y: round2(cy + label_radius * middle.sin()),
        });

        start += value / total * 2.0 * PI;
    }

    segments
}

fn ring_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    let point = |r: f64, angle: f64| (round2(cx + r * angle.cos()), round2(cy + r * angle.sin()));

    let (ox1, oy1) = point(outer, start);
    let (ox2, oy2) = point(outer, end);
    let (ix2, iy2) = point(inner, end);
    let (ix1, iy1) = point(inner, start);

    format!(
        "M {ox1} {oy1} A {outer} {outer} 0 {large_arc} 1 {ox2} {oy2} \
         L {ix2} {iy2} A {inner} {inner} 0 {large_arc} 0 {ix1} {iy1} Z"
    )
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
