//! Charting Module
//!
//! Builds, renders, and displays the usage charts.
//!
//! # Structure
//!
//! - [`spec`]: Backend-free chart descriptions (axes, series, legends)
//! - [`usage`]: CPU/memory and GPU chart builders
//! - [`render`]: SVG rendering with plotters
//! - [`display`]: Opening rendered charts in the platform viewer

pub mod display;
pub mod render;
pub mod spec;
pub mod usage;

pub use display::{show_svg, DisplayError};
pub use render::{render_svg, RenderError};
pub use spec::{AxisSpec, ChartSpec, LegendCorner, Rgb, SeriesSpec};
pub use usage::{cpu_memory_chart, gpu_chart};
