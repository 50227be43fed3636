//! Chart Specification
//!
//! Backend-free description of a dual-axis time-series chart. Builders
//! in [`crate::chart::usage`] produce these and [`crate::chart::render`]
//! draws them, so series and label selection stays testable without a
//! graphical environment.

use chrono::NaiveDateTime;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Tableau 10 palette entries used for the chart series.
pub mod palette {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb(31, 119, 180);
    pub const ORANGE: Rgb = Rgb(255, 127, 14);
    pub const GREEN: Rgb = Rgb(44, 160, 44);
    pub const RED: Rgb = Rgb(214, 39, 40);
    pub const PURPLE: Rgb = Rgb(148, 103, 189);
    pub const BROWN: Rgb = Rgb(140, 86, 75);
}

/// Where an axis draws its legend box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
}

/// One line series: a name, a color, and timestamped values.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<(NaiveDateTime, f64)>,
}

impl SeriesSpec {
    pub fn new(name: &str, color: Rgb, points: Vec<(NaiveDateTime, f64)>) -> Self {
        Self {
            name: name.to_string(),
            color,
            points,
        }
    }
}

/// A vertical axis: its label, legend corner, and the series scaled to it.
#[derive(Debug, Clone)]
pub struct AxisSpec {
    pub label: String,
    pub legend: LegendCorner,
    pub series: Vec<SeriesSpec>,
}

impl AxisSpec {
    /// Smallest and largest value across the axis series, if any point exists.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;

        for series in &self.series {
            for &(_, value) in &series.points {
                range = Some(match range {
                    Some((min, max)) => (min.min(value), max.max(value)),
                    None => (value, value),
                });
            }
        }

        range
    }
}

/// A complete dual-axis chart: two independently scaled vertical axes
/// sharing one horizontal time axis.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub primary: AxisSpec,
    pub secondary: AxisSpec,
}

impl ChartSpec {
    /// Earliest and latest timestamp across both axes, if any point exists.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut range: Option<(NaiveDateTime, NaiveDateTime)> = None;

        for axis in [&self.primary, &self.secondary] {
            for series in &axis.series {
                for &(time, _) in &series.points {
                    range = Some(match range {
                        Some((min, max)) => (min.min(time), max.max(time)),
                        None => (time, time),
                    });
                }
            }
        }

        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn axis(series: Vec<SeriesSpec>) -> AxisSpec {
        AxisSpec {
            label: "test".to_string(),
            legend: LegendCorner::UpperLeft,
            series,
        }
    }

    #[test]
    fn test_value_range_spans_all_series() {
        let spec = axis(vec![
            SeriesSpec::new(
                "a",
                palette::BLUE,
                vec![(ts("2024-01-01 00:00:00"), 100.0), (ts("2024-01-01 00:05:00"), 120.0)],
            ),
            SeriesSpec::new("b", palette::GREEN, vec![(ts("2024-01-01 00:00:00"), 80.0)]),
        ]);

        assert_eq!(spec.value_range(), Some((80.0, 120.0)));
    }

    #[test]
    fn test_value_range_empty_axis() {
        let spec = axis(vec![SeriesSpec::new("a", palette::BLUE, vec![])]);
        assert_eq!(spec.value_range(), None);
    }

    #[test]
    fn test_time_range_spans_both_axes() {
        let chart = ChartSpec {
            title: "t".to_string(),
            x_label: "Time".to_string(),
            primary: axis(vec![SeriesSpec::new(
                "a",
                palette::BLUE,
                vec![(ts("2024-01-01 00:05:00"), 1.0)],
            )]),
            secondary: axis(vec![SeriesSpec::new(
                "b",
                palette::RED,
                vec![(ts("2024-01-01 00:00:00"), 2.0)],
            )]),
        };

        assert_eq!(
            chart.time_range(),
            Some((ts("2024-01-01 00:00:00"), ts("2024-01-01 00:05:00")))
        );
    }
}
