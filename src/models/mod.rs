//! Core data models for the fixture generator.
//!
//! This module contains the in-memory row types for the generated dimension
//! and fact tables. Every entity is created fresh per generation run, held
//! only in memory, and discarded after being written to its output file.

mod absence;
mod contract;
mod employee;
mod pay_period;
mod payroll;

pub(crate) use pay_period::date_stamp;

pub use absence::{AbsenceFactRow, DisabilityFactRow, LeaveRange, working_days};
pub use contract::{EmployeeContract, open_ended_end};
pub use employee::{Employee, Position};
pub use pay_period::PayrollPeriod;
pub use payroll::PayrollFactRow;
