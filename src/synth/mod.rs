//! Record synthesizers for the generated tables.
//!
//! Each synthesizer is a pure function of (RNG, row count, reference data,
//! prior-stage tables) to a new table, composing the primitives from
//! [`crate::generate`] while enforcing table-specific constraints:
//! monotonic id extension and supervisor self-consistency for the employee
//! dimension, distinct payout periods for the payroll fact, and
//! non-overlapping leave ranges for the absence and disability facts.

mod absence;
mod contracts;
mod disability;
mod employees;
mod payroll;

pub use absence::synthesize_absences;
pub use contracts::synthesize_contracts;
pub use disability::synthesize_disabilities;
pub use employees::synthesize_employees;
pub use payroll::{DEFAULT_PERIOD_COUNT, synthesize_payroll};
