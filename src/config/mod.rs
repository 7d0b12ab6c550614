//! Run configuration loading for the fixture generator.
//!
//! A generation run is described by a small YAML profile: the country code
//! and output directory for the produced files, the employee row count, the
//! target payroll year/month, per-table reference file paths, and an
//! optional RNG seed for reproducible runs.
//!
//! # Example
//!
//! ```no_run
//! use hr_fixtures::config::RunConfig;
//!
//! let config = RunConfig::load("./run.yaml").unwrap();
//! println!("generating {} employees", config.employee_rows);
//! ```

mod loader;
mod types;

pub use types::{RunConfig, TableSources};
