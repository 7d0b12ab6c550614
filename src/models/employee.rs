//! Employee dimension model and related types.
//!
//! This module defines the [`Employee`] row type for the generated employee
//! dimension and the [`Position`] enum with its position-to-level mapping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job position in the generated organization.
///
/// Positions carry a fixed level mapping used for the `Level` column of the
/// employee dimension. Any employee chosen as somebody's supervisor is
/// promoted to [`Position::Manager`], overwriting the randomly assigned
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Entry-level assistant.
    Assistant,
    /// Regular specialist.
    Specialist,
    /// Senior specialist.
    SeniorSpecialist,
    /// Team lead without people-management responsibility.
    TeamLead,
    /// People manager; assigned to every employee that supervises others.
    Manager,
}

impl Position {
    /// The positions eligible for random assignment during synthesis.
    pub const ASSIGNABLE: [Position; 5] = [
        Position::Assistant,
        Position::Specialist,
        Position::SeniorSpecialist,
        Position::TeamLead,
        Position::Manager,
    ];

    /// Returns the organizational level for this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_fixtures::models::Position;
    ///
    /// assert_eq!(Position::Assistant.level(), 1);
    /// assert_eq!(Position::Manager.level(), 5);
    /// ```
    pub fn level(&self) -> u8 {
        match self {
            Position::Assistant => 1,
            Position::Specialist => 2,
            Position::SeniorSpecialist => 3,
            Position::TeamLead => 4,
            Position::Manager => 5,
        }
    }

    /// Returns the display title used in the output file.
    pub fn title(&self) -> &'static str {
        match self {
            Position::Assistant => "Assistant",
            Position::Specialist => "Specialist",
            Position::SeniorSpecialist => "Senior Specialist",
            Position::TeamLead => "Team Lead",
            Position::Manager => "Manager",
        }
    }
}

/// A row of the generated employee dimension.
///
/// Employee ids are a monotonic extension of the id space found in the
/// reference file: every generated id is strictly greater than the maximum
/// existing id. The supervisor link is self-referential and always points at
/// an employee in the same generated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique source identifier, strictly greater than the reference maximum.
    pub id: i64,
    /// Given name, drawn from a fixed pool.
    pub first_name: String,
    /// Family name, drawn from a fixed pool.
    pub last_name: String,
    /// Derived "First Last" display name.
    pub full_name: String,
    /// Derived lowercase username-style work email.
    pub work_email: String,
    /// National id stand-in, drawn from the ISO country-code universe.
    pub national_id: String,
    /// Date of birth, from a fixed historical range.
    pub birth_date: NaiveDate,
    /// Hire date, from a fixed historical range.
    pub hire_date: NaiveDate,
    /// Termination date, present for roughly a quarter of employees.
    pub termination_date: Option<NaiveDate>,
    /// Termination reason code sampled from reference data; present exactly
    /// when `termination_date` is.
    pub termination_reason: Option<String>,
    /// Assigned position; overwritten with `Manager` for chosen supervisors.
    pub position: Position,
    /// Cost center sampled from reference data.
    pub cost_center: String,
    /// Localization sampled from reference data.
    pub localization: String,
    /// Department, drawn from a fixed pool.
    pub department: String,
    /// Id of the supervising employee within the same batch.
    pub supervisor_id: i64,
}

impl Employee {
    /// Returns the organizational level derived from the current position.
    pub fn level(&self) -> u8 {
        self.position.level()
    }

    /// Returns true if the employee has a termination date.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_fixtures::models::{Employee, Position};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: 1001,
    ///     first_name: "Anna".to_string(),
    ///     last_name: "Kowalski".to_string(),
    ///     full_name: "Anna Kowalski".to_string(),
    ///     work_email: "anna.kowalski@example.com".to_string(),
    ///     national_id: "PL".to_string(),
    ///     birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
    ///     hire_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
    ///     termination_date: None,
    ///     termination_reason: None,
    ///     position: Position::Specialist,
    ///     cost_center: "CC100".to_string(),
    ///     localization: "Warsaw".to_string(),
    ///     department: "Finance".to_string(),
    ///     supervisor_id: 1002,
    /// };
    /// assert!(!employee.is_terminated());
    /// ```
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}
