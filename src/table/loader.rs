//! CSV Loading
//!
//! Reads a resource usage export from disk into a [`UsageTable`]. The
//! `Timestamp` column is converted with a fixed pattern; every other
//! column is passed through with inferred typing.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};
use thiserror::Error;

use super::model::{UsageTable, Value};

/// Timestamp pattern used by the job accounting export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Name of the column holding sample times.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Errors raised while loading a usage export.
///
/// Every variant is fatal: a load either produces a complete table or
/// nothing. There is no row-skipping recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data
    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Header row has no timestamp column
    #[error("'{path}' has no '{column}' column", column = TIMESTAMP_COLUMN)]
    MissingTimestampColumn { path: String },

    /// A timestamp cell does not match the fixed pattern
    #[error("row {row}: timestamp '{value}' does not match YYYY-MM-DD HH:MM:SS")]
    Timestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Loads a usage export from a CSV file.
///
/// Row order is preserved from the file. Any timestamp cell that fails
/// to parse aborts the whole load.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Example
///
/// ```rust,no_run
/// use jobplot::table::load_usage_table;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let table = load_usage_table("job_12345_resource_usage.csv")?;
///     println!("loaded {} samples", table.len());
///     Ok(())
/// }
/// ```
pub fn load_usage_table<P: AsRef<Path>>(path: P) -> Result<UsageTable, LoadError> {
    let path = path.as_ref();
    let path_text = path.display().to_string();

    info!("Loading resource usage from: {}", path_text);

    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path_text.clone(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: path_text.clone(),
            source: e,
        })?
        .clone();

    debug!("Header row: {} columns", headers.len());

    let timestamp_index = headers
        .iter()
        .position(|h| h == TIMESTAMP_COLUMN)
        .ok_or_else(|| LoadError::MissingTimestampColumn {
            path: path_text.clone(),
        })?;

    let value_headers: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != timestamp_index)
        .map(|(_, header)| header.to_string())
        .collect();

    let mut table = UsageTable::new(value_headers);

    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| LoadError::Csv {
            path: path_text.clone(),
            source: e,
        })?;

        let raw_timestamp = record.get(timestamp_index).unwrap_or("");
        let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT).map_err(
            |e| LoadError::Timestamp {
                row: row_index + 1,
                value: raw_timestamp.to_string(),
                source: e,
            },
        )?;

        let cells = record
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != timestamp_index)
            .map(|(_, raw)| Value::infer(raw))
            .collect();

        table.push_row(timestamp, cells);
    }

    info!(
        "Loaded {} samples, {} value columns",
        table.len(),
        table.headers().len()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const WELL_FORMED: &str = "\
Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs
2024-01-01 00:00:00,100,200,4
2024-01-01 00:05:00,110,210,4
2024-01-01 00:10:00,120,220,4
";

    #[test]
    fn test_load_well_formed() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "usage.csv", WELL_FORMED);

        let table = load_usage_table(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.headers(),
            &["MaxRSS_MB", "MaxVMSize_MB", "AllocCPUs"]
        );
    }

    #[test]
    fn test_timestamps_round_trip() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "usage.csv", WELL_FORMED);

        let table = load_usage_table(&path).unwrap();
        let rendered: Vec<String> = table
            .timestamps()
            .iter()
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .collect();

        assert_eq!(
            rendered,
            &[
                "2024-01-01 00:00:00",
                "2024-01-01 00:05:00",
                "2024-01-01 00:10:00"
            ]
        );
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_usage_table("/nonexistent/usage.csv");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_bad_timestamp() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "bad.csv",
            "Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs\n13/01/2024,100,200,4\n",
        );

        let result = load_usage_table(&path);
        match result {
            Err(LoadError::Timestamp { row, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "13/01/2024");
            }
            other => panic!("expected timestamp error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_load_bad_timestamp_mid_file_is_fatal() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "bad.csv",
            "Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs\n\
             2024-01-01 00:00:00,100,200,4\n\
             not-a-time,110,210,4\n",
        );

        let result = load_usage_table(&path);
        assert!(matches!(result, Err(LoadError::Timestamp { row: 2, .. })));
    }

    #[test]
    fn test_load_missing_timestamp_column() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "no_ts.csv", "MaxRSS_MB,AllocCPUs\n100,4\n");

        let result = load_usage_table(&path);
        assert!(matches!(
            result,
            Err(LoadError::MissingTimestampColumn { .. })
        ));
    }

    #[test]
    fn test_load_uneven_record_is_fatal() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "uneven.csv",
            "Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs\n2024-01-01 00:00:00,100\n",
        );

        let result = load_usage_table(&path);
        assert!(matches!(result, Err(LoadError::Csv { .. })));
    }

    #[test]
    fn test_load_gpu_columns_with_gaps() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "gpu.csv",
            "Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs,GPU_Utilization_%\n\
             2024-01-01 00:00:00,100,200,4,85\n\
             2024-01-01 00:05:00,110,210,4,\n",
        );

        let table = load_usage_table(&path).unwrap();
        assert!(table.has_column("GPU_Utilization_%"));
        assert!(!table.is_complete("GPU_Utilization_%"));
    }

    #[test]
    fn test_error_message_names_pattern() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "bad.csv",
            "Timestamp,MaxRSS_MB,MaxVMSize_MB,AllocCPUs\n13/01/2024,100,200,4\n",
        );

        let message = load_usage_table(&path).unwrap_err().to_string();
        assert!(message.contains("13/01/2024"));
        assert!(message.contains("YYYY-MM-DD HH:MM:SS"));
    }
}
