//! Usage Chart Builders
//!
//! Turns a loaded [`UsageTable`] into the chart specification for the
//! CPU/memory view and, when the export carries complete GPU columns,
//! the GPU view.

use log::{debug, info};

use crate::table::model::UsageTable;
use crate::table::schema::{
    self, SchemaError, COL_ALLOC_CPUS, COL_GPU_MEM_TOTAL, COL_GPU_MEM_USED, COL_GPU_UTIL,
    COL_MAX_RSS, COL_MAX_VMSIZE,
};

use super::spec::{palette, AxisSpec, ChartSpec, LegendCorner, SeriesSpec};

/// Extracts a required column as timestamped numeric points.
fn numeric_series(
    table: &UsageTable,
    name: &str,
) -> Result<Vec<(chrono::NaiveDateTime, f64)>, SchemaError> {
    table
        .numeric_points(name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
}

/// Builds the CPU and memory chart.
///
/// Resident set size and virtual memory size go on the primary axis in
/// megabytes; the allocated CPU count goes on the secondary axis. A
/// missing required column is a fatal schema error.
pub fn cpu_memory_chart(table: &UsageTable) -> Result<ChartSpec, SchemaError> {
    let rss = numeric_series(table, COL_MAX_RSS)?;
    let vmsize = numeric_series(table, COL_MAX_VMSIZE)?;
    let cpus = numeric_series(table, COL_ALLOC_CPUS)?;

    debug!("CPU/memory chart: {} samples", table.len());

    Ok(ChartSpec {
        title: "CPU and Memory Usage Over Time".to_string(),
        x_label: "Time".to_string(),
        primary: AxisSpec {
            label: "Memory Usage (MB)".to_string(),
            legend: LegendCorner::UpperLeft,
            series: vec![
                SeriesSpec::new(COL_MAX_RSS, palette::BLUE, rss),
                SeriesSpec::new(COL_MAX_VMSIZE, palette::GREEN, vmsize),
            ],
        },
        secondary: AxisSpec {
            label: "Allocated CPUs".to_string(),
            legend: LegendCorner::UpperRight,
            series: vec![SeriesSpec::new(COL_ALLOC_CPUS, palette::RED, cpus)],
        },
    })
}

/// Builds the GPU chart, or returns `None` on the skip path.
///
/// The chart is produced only when all three GPU columns exist and are
/// fully populated. The caller is responsible for emitting the
/// "No GPU data available." notice on the skip path; the builder only
/// decides availability.
pub fn gpu_chart(table: &UsageTable) -> Option<ChartSpec> {
    if !schema::gpu_available(table) {
        info!("Skipping GPU chart");
        return None;
    }

    // gpu_available guarantees the columns exist
    let utilization = table.numeric_points(COL_GPU_UTIL)?;
    let mem_used = table.numeric_points(COL_GPU_MEM_USED)?;
    let mem_total = table.numeric_points(COL_GPU_MEM_TOTAL)?;

    debug!("GPU chart: {} samples", table.len());

    Some(ChartSpec {
        title: "GPU Usage Over Time".to_string(),
        x_label: "Time".to_string(),
        primary: AxisSpec {
            label: "GPU Utilization (%)".to_string(),
            legend: LegendCorner::UpperLeft,
            series: vec![SeriesSpec::new("GPU Utilization", palette::ORANGE, utilization)],
        },
        secondary: AxisSpec {
            label: "GPU Memory Usage (MB)".to_string(),
            legend: LegendCorner::UpperRight,
            series: vec![
                SeriesSpec::new("GPU Memory Used", palette::PURPLE, mem_used),
                SeriesSpec::new("GPU Memory Total", palette::BROWN, mem_total),
            ],
        },
    })
}
