//! Run profile loading from YAML.

use std::fs;
use std::path::Path;

use crate::error::{GeneratorError, GeneratorResult};

use super::types::RunConfig;

impl RunConfig {
    /// Loads and validates a run profile from the given YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ConfigNotFound`] if the file cannot be read,
    /// [`GeneratorError::ConfigParse`] for invalid YAML, and
    /// [`GeneratorError::ConfigInvalid`] for out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| GeneratorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RunConfig =
            serde_yaml::from_str(&content).map_err(|e| GeneratorError::ConfigParse {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_profile(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_profile() {
        let file = write_profile(
            "country_code: PL\n\
             output_dir: ./out\n\
             employee_rows: 25\n\
             target_year: 2025\n\
             target_month: 11\n\
             payroll_periods: 6\n\
             seed: 42\n\
             sources:\n\
             \x20 employees: ./ref/payroll.csv\n\
             \x20 contracts: ./ref/payroll.csv\n\
             \x20 payroll: ./ref/payroll.csv\n\
             \x20 absences: ./ref/absence.csv\n",
        );

        let config = RunConfig::load(file.path()).unwrap();
        assert_eq!(config.country_code, "PL");
        assert_eq!(config.employee_rows, 25);
        assert_eq!(config.target_year, 2025);
        assert_eq!(config.target_month, 11);
        assert_eq!(config.payroll_periods, 6);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_period_count_defaults_to_six_and_seed_to_none() {
        let file = write_profile(
            "country_code: DE\n\
             output_dir: ./out\n\
             employee_rows: 10\n\
             target_year: 2026\n\
             target_month: 2\n\
             sources:\n\
             \x20 employees: ./ref.csv\n\
             \x20 contracts: ./ref.csv\n\
             \x20 payroll: ./ref.csv\n\
             \x20 absences: ./ref.csv\n",
        );

        let config = RunConfig::load(file.path()).unwrap();
        assert_eq!(config.payroll_periods, 6);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let result = RunConfig::load("/nonexistent/run.yaml");
        assert!(matches!(result, Err(GeneratorError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let file = write_profile("country_code: [unterminated\n");
        let result = RunConfig::load(file.path());
        assert!(matches!(result, Err(GeneratorError::ConfigParse { .. })));
    }

    #[test]
    fn test_out_of_range_month_rejected_at_load() {
        let file = write_profile(
            "country_code: PL\n\
             output_dir: ./out\n\
             employee_rows: 10\n\
             target_year: 2025\n\
             target_month: 0\n\
             sources:\n\
             \x20 employees: ./ref.csv\n\
             \x20 contracts: ./ref.csv\n\
             \x20 payroll: ./ref.csv\n\
             \x20 absences: ./ref.csv\n",
        );
        let result = RunConfig::load(file.path());
        assert!(matches!(result, Err(GeneratorError::ConfigInvalid { .. })));
    }
}
