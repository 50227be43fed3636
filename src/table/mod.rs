//! Usage Table Module
//!
//! Provides loading, cell typing, and schema validation for job
//! resource usage CSV exports.
//!
//! # Structure
//!
//! - [`model`]: Core data structures (Value, UsageTable)
//! - [`loader`]: CSV reading and timestamp parsing
//! - [`schema`]: Required-column checks and GPU availability

pub mod loader;
pub mod model;
pub mod schema;

pub use loader::{load_usage_table, LoadError, TIMESTAMP_COLUMN, TIMESTAMP_FORMAT};
pub use model::{UsageTable, Value};
pub use schema::{gpu_available, validate_columns, SchemaError, GPU_COLUMNS, REQUIRED_COLUMNS};
