//! Synthetic HR/Payroll Fixture Generator
//!
//! This crate synthesizes plausible fake HR/payroll datasets (employee master
//! data, employment contracts, payroll transactions, absence and disability
//! records) and writes them as semicolon-delimited files for use as test
//! fixtures in a downstream data pipeline. Generated rows are internally
//! consistent: foreign keys reference the generated employee dimension, leave
//! ranges never overlap per employee, and working-hour totals are derived from
//! the generated date ranges.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod pipeline;
pub mod reference;
pub mod synth;
