//! Reference data loading and sampling.
//!
//! Synthetic rows stay realistic by sampling a handful of real values (codes,
//! id ranges) from small semicolon-delimited reference files. This module
//! loads those files and exposes column extraction, numeric aggregation, and
//! uniform sampling over distinct column values.

pub mod columns;
mod table;

pub use table::{ColumnSampler, ReferenceTable};
