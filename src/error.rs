//! Error types for the fixture generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during a generation run. Every
//! failure is fatal and aborts the run: silently substituting fallback values
//! would compromise the fidelity of the synthetic data.

use thiserror::Error;

/// The main error type for the fixture generator.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_fixtures::error::GeneratorError;
///
/// let error = GeneratorError::ReferenceNotFound {
///     path: "/missing/file.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Reference file not found: /missing/file.csv");
/// ```
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Reference file was not found at the specified path.
    #[error("Reference file not found: {path}")]
    ReferenceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Reference file could not be parsed as semicolon-delimited data.
    #[error("Failed to parse reference file '{path}': {message}")]
    ReferenceParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A requested column does not exist in the reference file.
    #[error("Column '{column}' not found in reference file '{path}'")]
    ColumnNotFound {
        /// The column name that was requested.
        column: String,
        /// The reference file that was searched.
        path: String,
    },

    /// A reference column holds no usable values to sample from.
    #[error("Column '{column}' in reference file '{path}' has no values to sample")]
    EmptyColumn {
        /// The column with the empty value pool.
        column: String,
        /// The reference file that was searched.
        path: String,
    },

    /// A reference cell could not be interpreted as a number.
    #[error("Value '{value}' in column '{column}' is not numeric")]
    InvalidNumeric {
        /// The column being aggregated.
        column: String,
        /// The offending cell value.
        value: String,
    },

    /// Run configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Run configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Run configuration contained an invalid value.
    #[error("Invalid configuration field '{field}': {message}")]
    ConfigInvalid {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A fact or contract table was requested before the employee dimension
    /// it takes foreign keys from was generated.
    #[error("Table '{table}' requires the employee dimension to be generated first")]
    MissingDependency {
        /// The table that was requested out of order.
        table: String,
    },

    /// A year/month pair does not describe a real calendar month.
    #[error("Invalid payroll period start: year {year}, month {month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A serialized amount could not be decoded.
    #[error("Invalid amount value: '{value}'")]
    InvalidAmount {
        /// The string that failed to decode.
        value: String,
    },

    /// An output file could not be written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The output path being written.
        path: String,
        /// A description of the I/O error.
        message: String,
    },
}

/// A type alias for Results that return GeneratorError.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
