//! Usage Table Data Model
//!
//! Core data structures representing a loaded table of per-sample
//! resource usage values. The table is built once by the loader and
//! read-only afterwards.

use chrono::NaiveDateTime;

/// A single cell value with its typing inferred from the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Cell parsed as a finite number
    Number(f64),
    /// Cell kept as raw text
    Text(String),
    /// Empty cell or a conventional NA marker
    Missing,
}

impl Value {
    /// Infers a value from raw CSV cell text.
    ///
    /// Empty cells and the NA markers found in job accounting exports
    /// (`NA`, `NaN`) become [`Value::Missing`]. Text that parses as a
    /// finite float becomes [`Value::Number`]; anything else stays text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "NA" || trimmed == "NaN" {
            return Value::Missing;
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_nan() => Value::Missing,
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    /// Returns the numeric content, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true for [`Value::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// An ordered table of resource usage samples.
///
/// Row order is preserved exactly as read from the source file and is
/// interpreted as chronological. Sample times live in their own column;
/// every other column is stored as inferred [`Value`] cells under its
/// header name.
///
/// # Example
///
/// ```
/// use jobplot::table::{UsageTable, Value};
/// use chrono::NaiveDateTime;
///
/// let mut table = UsageTable::new(vec!["MaxRSS_MB".to_string()]);
/// let ts = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// table.push_row(ts, vec![Value::Number(100.0)]);
///
/// assert_eq!(table.len(), 1);
/// assert!(table.has_column("MaxRSS_MB"));
/// ```
#[derive(Debug, Clone)]
pub struct UsageTable {
    headers: Vec<String>,
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<Vec<Value>>,
}

impl UsageTable {
    /// Creates an empty table with the given value-column headers.
    ///
    /// The timestamp column is implicit and not part of `headers`.
    pub fn new(headers: Vec<String>) -> Self {
        let columns = headers.iter().map(|_| Vec::new()).collect();
        Self {
            headers,
            timestamps: Vec::new(),
            columns,
        }
    }

    /// Appends one sample row.
    ///
    /// `cells` must hold one value per header, in header order.
    pub fn push_row(&mut self, timestamp: NaiveDateTime, cells: Vec<Value>) {
        debug_assert_eq!(cells.len(), self.headers.len());

        self.timestamps.push(timestamp);
        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.push(cell);
        }
    }

    /// Number of sample rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns true when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Value-column headers in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Sample times in source order.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Returns true when a value column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Returns the cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|index| self.columns[index].as_slice())
    }

    /// Returns true when the column exists and has no missing cell.
    pub fn is_complete(&self, name: &str) -> bool {
        match self.column(name) {
            Some(cells) => !cells.iter().any(Value::is_missing),
            None => false,
        }
    }

    /// Pairs each row's timestamp with the column's numeric value.
    ///
    /// Rows whose cell is missing or non-numeric are skipped. Returns
    /// `None` when the column does not exist.
    pub fn numeric_points(&self, name: &str) -> Option<Vec<(NaiveDateTime, f64)>> {
        let cells = self.column(name)?;

        Some(
            self.timestamps
                .iter()
                .zip(cells)
                .filter_map(|(ts, cell)| cell.as_number().map(|n| (*ts, n)))
                .collect(),
        )
    }
}
