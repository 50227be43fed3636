//! SVG Rendering
//!
//! Draws a [`ChartSpec`] to an SVG file with plotters: two independently
//! scaled vertical axes over a shared time axis, one line series per
//! entry, and a legend box per axis in its requested corner.

use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use super::spec::{AxisSpec, ChartSpec, LegendCorner, Rgb};

/// Canvas size of a rendered chart in pixels.
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Vertical offset of the first legend row, below the caption.
const LEGEND_TOP: i32 = 70;

/// Height of one legend row.
const LEGEND_ROW: i32 = 20;

/// Length of the line sample drawn next to each legend entry.
const LEGEND_LINE: i32 = 18;

/// Rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The spec holds no drawable point on either axis
    #[error("chart '{0}' has no data points to draw")]
    EmptyChart(String),

    /// Error reported by the drawing backend
    #[error("failed to draw chart: {0}")]
    Backend(String),
}

fn backend_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Pads a value range by 5% so lines don't sit on the frame.
fn padded((min, max): (f64, f64)) -> (f64, f64) {
    let span = max - min;
    let margin = if span == 0.0 {
        if min == 0.0 {
            1.0
        } else {
            min.abs() * 0.05
        }
    } else {
        span * 0.05
    };
    (min - margin, max + margin)
}

/// Widens a degenerate single-sample time range.
fn padded_time(min: NaiveDateTime, max: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    if min == max {
        (min - Duration::seconds(30), max + Duration::seconds(30))
    } else {
        (min, max)
    }
}

/// Renders a chart specification to an SVG file.
///
/// # Errors
///
/// Returns [`RenderError::EmptyChart`] when the spec carries no points
/// at all, and [`RenderError::Backend`] for drawing failures.
pub fn render_svg(spec: &ChartSpec, path: &Path) -> Result<(), RenderError> {
    let (x_min, x_max) = spec
        .time_range()
        .ok_or_else(|| RenderError::EmptyChart(spec.title.clone()))?;
    let (x_min, x_max) = padded_time(x_min, x_max);

    let (y1_lo, y1_hi) = padded(spec.primary.value_range().unwrap_or((0.0, 1.0)));
    let (y2_lo, y2_hi) = padded(spec.secondary.value_range().unwrap_or((0.0, 1.0)));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(46)
        .y_label_area_size(56)
        .right_y_label_area_size(56)
        .build_cartesian_2d(RangedDateTime::from(x_min..x_max), y1_lo..y1_hi)
        .map_err(backend_err)?
        .set_secondary_coord(RangedDateTime::from(x_min..x_max), y2_lo..y2_hi);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.primary.label.as_str())
        .x_label_formatter(&|ts: &NaiveDateTime| ts.format("%H:%M").to_string())
        .draw()
        .map_err(backend_err)?;

    chart
        .configure_secondary_axes()
        .y_desc(spec.secondary.label.as_str())
        .draw()
        .map_err(backend_err)?;

    for series in &spec.primary.series {
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                rgb(series.color).stroke_width(2),
            ))
            .map_err(backend_err)?;
    }

    for series in &spec.secondary.series {
        chart
            .draw_secondary_series(LineSeries::new(
                series.points.iter().copied(),
                rgb(series.color).stroke_width(2),
            ))
            .map_err(backend_err)?;
    }

    draw_legend(&root, &spec.primary)?;
    draw_legend(&root, &spec.secondary)?;

    root.present().map_err(backend_err)?;
    debug!("Rendered '{}' to {}", spec.title, path.display());

    Ok(())
}

/// Draws one axis legend as line samples and labels in its corner.
///
/// Each axis keeps its own box, so the two axes never share a merged
/// legend.
fn draw_legend(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    axis: &AxisSpec,
) -> Result<(), RenderError> {
    let (width, _) = root.dim_in_pixel();

    let x = match axis.legend {
        LegendCorner::UpperLeft => 84,
        LegendCorner::UpperRight => width as i32 - 220,
    };

    for (index, series) in axis.series.iter().enumerate() {
        let y = LEGEND_TOP + index as i32 * LEGEND_ROW;

        root.draw(&PathElement::new(
            vec![(x, y), (x + LEGEND_LINE, y)],
            rgb(series.color).stroke_width(2),
        ))
        .map_err(backend_err)?;

        root.draw(&Text::new(
            series.name.clone(),
            (x + LEGEND_LINE + 6, y - 7),
            ("sans-serif", 14).into_font(),
        ))
        .map_err(backend_err)?;
    }

    Ok(())
}
