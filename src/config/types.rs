//! Run configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML run profile.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{GeneratorError, GeneratorResult};

fn default_period_count() -> usize {
    crate::synth::DEFAULT_PERIOD_COUNT
}

/// Reference file paths, one per generated table that samples reference data.
///
/// The paths may all point at the same file as long as it carries the columns
/// each table reads. The disability fact needs no reference data of its own;
/// it only takes foreign keys from the employee dimension.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSources {
    /// Reference file for the employee dimension (source ids, cost centers,
    /// localizations, termination reasons).
    pub employees: PathBuf,
    /// Reference file for the contract dimension (pay groups).
    pub contracts: PathBuf,
    /// Reference file for the payroll fact (wage components, pay groups).
    pub payroll: PathBuf,
    /// Reference file for the absence fact (absence codes).
    pub absences: PathBuf,
}

/// A generation run profile.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Country code encoded into output file names.
    pub country_code: String,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Number of employee dimension rows to generate.
    pub employee_rows: usize,
    /// Year the payroll periods and leave facts target.
    pub target_year: i32,
    /// Month the payroll periods and leave facts target (1-12).
    pub target_month: u32,
    /// Number of candidate payroll periods to seed; defaults to six.
    #[serde(default = "default_period_count")]
    pub payroll_periods: usize,
    /// Optional RNG seed; when unset the run draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Per-table reference file paths.
    pub sources: TableSources,
}

impl RunConfig {
    /// Validates the profile values that the generators assume.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ConfigInvalid`] naming the offending field.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.country_code.trim().is_empty() {
            return Err(GeneratorError::ConfigInvalid {
                field: "country_code".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.employee_rows == 0 {
            return Err(GeneratorError::ConfigInvalid {
                field: "employee_rows".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(1..=9999).contains(&self.target_year) {
            return Err(GeneratorError::ConfigInvalid {
                field: "target_year".to_string(),
                message: "must be between 1 and 9999".to_string(),
            });
        }
        if !(1..=12).contains(&self.target_month) {
            return Err(GeneratorError::ConfigInvalid {
                field: "target_month".to_string(),
                message: "must be between 1 and 12".to_string(),
            });
        }
        if self.payroll_periods == 0 {
            return Err(GeneratorError::ConfigInvalid {
                field: "payroll_periods".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
