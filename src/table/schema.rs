//! Column Schema Checks
//!
//! Validation of the fixed export schema, run once after load, plus the
//! availability rule for the optional GPU columns.

use log::{debug, info};
use thiserror::Error;

use super::model::UsageTable;

/// Resident set size column, in megabytes.
pub const COL_MAX_RSS: &str = "MaxRSS_MB";

/// Virtual memory size column, in megabytes.
pub const COL_MAX_VMSIZE: &str = "MaxVMSize_MB";

/// Allocated CPU count column.
pub const COL_ALLOC_CPUS: &str = "AllocCPUs";

/// GPU utilization column, in percent.
pub const COL_GPU_UTIL: &str = "GPU_Utilization_%";

/// Used GPU memory column, in megabytes.
pub const COL_GPU_MEM_USED: &str = "GPU_Mem_Used_MB";

/// Total GPU memory column, in megabytes.
pub const COL_GPU_MEM_TOTAL: &str = "GPU_Mem_Total_MB";

/// Columns every usage export must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[COL_MAX_RSS, COL_MAX_VMSIZE, COL_ALLOC_CPUS];

/// Columns present only for jobs that ran on GPU nodes.
///
/// Treated as a unit: charting uses either all three or none.
pub const GPU_COLUMNS: &[&str] = &[COL_GPU_UTIL, COL_GPU_MEM_USED, COL_GPU_MEM_TOTAL];

/// Schema violations in a loaded table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A required column is absent from the export
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
}

/// Checks that all required CPU/memory columns exist.
///
/// Run once after load so a truncated export fails before any chart is
/// drawn rather than partway through rendering.
pub fn validate_columns(table: &UsageTable) -> Result<(), SchemaError> {
    for name in REQUIRED_COLUMNS {
        if !table.has_column(name) {
            return Err(SchemaError::MissingColumn((*name).to_string()));
        }
    }

    debug!(
        "Schema check passed: {} required columns present",
        REQUIRED_COLUMNS.len()
    );
    Ok(())
}

/// Returns true when the export carries usable GPU data.
///
/// All three GPU columns must exist and contain no missing value. A job
/// that never touched a GPU, or an export with sampling gaps in any GPU
/// column, takes the skip path instead of producing a chart.
pub fn gpu_available(table: &UsageTable) -> bool {
    for name in GPU_COLUMNS {
        if !table.is_complete(name) {
            info!("GPU column '{}' absent or incomplete", name);
            return false;
        }
    }
    true
}
