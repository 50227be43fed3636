//! JobPlot - Resource Usage Charting
//!
//! Loads a CSV export of periodic job resource-usage samples and renders
//! time-series charts: CPU and memory on one canvas, GPU utilization and
//! memory on a second when the export carries complete GPU columns.
//!
//! # Architecture
//!
//! The library is organized into two main modules:
//!
//! - [`table`]: CSV loading, cell typing, and column schema checks
//! - [`chart`]: Chart specifications, SVG rendering, and viewer display
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use jobplot::chart::{cpu_memory_chart, render_svg};
//! use jobplot::table::{load_usage_table, validate_columns};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the accounting export
//!     let table = load_usage_table("job_12345_resource_usage.csv")?;
//!     validate_columns(&table)?;
//!
//!     // Compute and render the CPU/memory chart
//!     let spec = cpu_memory_chart(&table)?;
//!     render_svg(&spec, Path::new("cpu_memory_usage.svg"))?;
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod table;

// Re-export commonly used types
pub use chart::{cpu_memory_chart, gpu_chart, render_svg, show_svg, ChartSpec};
pub use table::{load_usage_table, validate_columns, UsageTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "JobPlot";
