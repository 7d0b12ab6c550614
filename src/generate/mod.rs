//! Primitive random generators.
//!
//! This module contains the low-level building blocks the record synthesizers
//! compose: fixed-precision random decimals, half-unit hour quantities,
//! uniform calendar dates over a day range, and the deterministic monthly
//! payroll-period sequence. Every generator takes the run's RNG explicitly so
//! seeded runs are reproducible end to end.

mod dates;
mod decimal;
mod periods;

pub use dates::{last_day_of_month, month_bounds, random_date_between, random_dates};
pub use decimal::{random_decimal, random_half_unit};
pub use periods::payroll_periods;
