//! Semicolon-delimited output writing.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{GeneratorError, GeneratorResult};
use crate::models::date_stamp;

/// A row type that can be written to a semicolon-delimited output table.
///
/// This trait is the seam between the in-memory models and the writer: each
/// table declares its identifier, its column names, and how one row renders
/// into output fields.
pub trait DelimitedRecord {
    /// Fixed table identifier encoded into the output file name.
    const TABLE_ID: &'static str;

    /// Output column names, in order. The schema is stable across runs
    /// regardless of seed.
    const HEADERS: &'static [&'static str];

    /// Renders this row into one output field per header.
    fn to_record(&self) -> Vec<String>;
}

/// Builds the output file name for a table: country code, table identifier,
/// and generation date.
///
/// # Examples
///
/// ```
/// use hr_fixtures::pipeline::output_file_name;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
/// assert_eq!(
///     output_file_name("PL", "DimEmployee", date),
///     "PL_DimEmployee_20251129.csv"
/// );
/// ```
pub fn output_file_name(country_code: &str, table_id: &str, generated_on: NaiveDate) -> String {
    format!("{country_code}_{table_id}_{}.csv", date_stamp(generated_on))
}

/// Writes a generated table as a semicolon-delimited file with a header row.
///
/// # Errors
///
/// Returns [`GeneratorError::OutputWrite`] if the file cannot be created or
/// any record fails to serialize.
pub fn write_table<T: DelimitedRecord>(path: &Path, rows: &[T]) -> GeneratorResult<()> {
    let output_err = |e: csv::Error| GeneratorError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(output_err)?;

    writer.write_record(T::HEADERS).map_err(output_err)?;
    for row in rows {
        writer.write_record(row.to_record()).map_err(output_err)?;
    }

    writer.flush().map_err(|e| GeneratorError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct TestRow {
        code: String,
        value: i64,
    }

    impl DelimitedRecord for TestRow {
        const TABLE_ID: &'static str = "TestTable";
        const HEADERS: &'static [&'static str] = &["Code", "Value"];

        fn to_record(&self) -> Vec<String> {
            vec![self.code.clone(), self.value.to_string()]
        }
    }

    #[test]
    fn test_output_file_name_pattern() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(
            output_file_name("DE", "FactAbsence", date),
            "DE_FactAbsence_20260305.csv"
        );
    }

    #[test]
    fn test_write_table_uses_semicolons_and_header_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![
            TestRow {
                code: "A".to_string(),
                value: 1,
            },
            TestRow {
                code: "B".to_string(),
                value: 2,
            },
        ];
        write_table(&path, &rows).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Code;Value\nA;1\nB;2\n");
    }

    #[test]
    fn test_write_empty_table_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_table::<TestRow>(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Code;Value\n");
    }

    #[test]
    fn test_unwritable_path_is_output_error() {
        let result = write_table::<TestRow>(Path::new("/nonexistent/dir/out.csv"), &[]);
        assert!(matches!(result, Err(GeneratorError::OutputWrite { .. })));
    }
}
