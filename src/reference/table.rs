//! Reference table loading and value sampling.

use std::collections::BTreeSet;
use std::path::Path;

use rand::Rng;

use crate::error::{GeneratorError, GeneratorResult};

/// A small semicolon-delimited reference dataset loaded into memory.
///
/// The table is read eagerly at construction; every generation run re-reads
/// its reference file from disk and rebuilds state from scratch.
///
/// # Example
///
/// ```no_run
/// use hr_fixtures::reference::ReferenceTable;
///
/// let reference = ReferenceTable::load("./data/FactEmployeePayroll.csv")?;
/// let max_id = reference.max_numeric("EmployeeId")?;
/// println!("highest existing employee id: {max_id}");
/// # Ok::<(), hr_fixtures::error::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    path: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReferenceTable {
    /// Loads a semicolon-delimited reference file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ReferenceNotFound`] if the file does not
    /// exist and [`GeneratorError::ReferenceParse`] if any record is
    /// malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(GeneratorError::ReferenceNotFound { path: path_str });
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_path(path)
            .map_err(|e| GeneratorError::ReferenceParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let headers = reader
            .headers()
            .map_err(|e| GeneratorError::ReferenceParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| GeneratorError::ReferenceParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            path: path_str,
            headers,
            rows,
        })
    }

    /// Returns the path this table was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the column names from the header row, in file order.
    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, column: &str) -> GeneratorResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| GeneratorError::ColumnNotFound {
                column: column.to_string(),
                path: self.path.clone(),
            })
    }

    /// Returns the maximum numeric value of the named column.
    ///
    /// Empty cells are skipped; any other non-numeric cell is a data error.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ColumnNotFound`] for an unknown column,
    /// [`GeneratorError::InvalidNumeric`] for an unparseable cell, and
    /// [`GeneratorError::EmptyColumn`] if no numeric value exists at all.
    pub fn max_numeric(&self, column: &str) -> GeneratorResult<i64> {
        let index = self.column_index(column)?;

        let mut max: Option<i64> = None;
        for row in &self.rows {
            let cell = row.get(index).map(String::as_str).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let value: i64 = cell.parse().map_err(|_| GeneratorError::InvalidNumeric {
                column: column.to_string(),
                value: cell.to_string(),
            })?;
            max = Some(max.map_or(value, |m| m.max(value)));
        }

        max.ok_or_else(|| GeneratorError::EmptyColumn {
            column: column.to_string(),
            path: self.path.clone(),
        })
    }

    /// Returns the distinct non-empty values of the named column, sorted.
    ///
    /// The sorted order keeps sampling deterministic under a fixed RNG seed
    /// regardless of row order in the source file.
    pub fn distinct_values(&self, column: &str) -> GeneratorResult<Vec<String>> {
        let index = self.column_index(column)?;

        let distinct: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .collect();

        if distinct.is_empty() {
            return Err(GeneratorError::EmptyColumn {
                column: column.to_string(),
                path: self.path.clone(),
            });
        }

        Ok(distinct.into_iter().map(str::to_string).collect())
    }

    /// Builds a restartable sampler over the distinct values of a column.
    ///
    /// # Errors
    ///
    /// Fails like [`ReferenceTable::distinct_values`]: an absent column or an
    /// empty value pool is an error, never an empty synthetic column.
    pub fn sampler(&self, column: &str) -> GeneratorResult<ColumnSampler> {
        Ok(ColumnSampler {
            values: self.distinct_values(column)?,
        })
    }

    /// Draws `count` independent uniform samples from the distinct values of
    /// the named column.
    pub fn sample_column<R: Rng>(
        &self,
        column: &str,
        count: usize,
        rng: &mut R,
    ) -> GeneratorResult<Vec<String>> {
        Ok(self.sampler(column)?.take(rng, count))
    }
}

/// A restartable uniform sampler over a non-empty distinct value pool.
///
/// Each draw is independent and uniform over the distinct set, not weighted
/// by how often a value appears in the source file.
#[derive(Debug, Clone)]
pub struct ColumnSampler {
    values: Vec<String>,
}

impl ColumnSampler {
    /// Draws one value.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &str {
        // The pool is non-empty by construction.
        &self.values[rng.gen_range(0..self.values.len())]
    }

    /// Draws `count` independent values.
    pub fn take<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.draw(rng).to_string()).collect()
    }

    /// Returns the underlying distinct value pool, sorted.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
