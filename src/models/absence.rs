//! Absence and disability fact models.
//!
//! Both fact tables carry per-employee leave ranges that must not overlap
//! within a single generated batch. [`LeaveRange`] holds the closed-interval
//! overlap test the synthesizers use to reject conflicting candidates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed `[start, end]` calendar date range for a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRange {
    /// First day of leave (inclusive).
    pub start: NaiveDate,
    /// Last day of leave (inclusive).
    pub end: NaiveDate,
}

impl LeaveRange {
    /// Returns true if this range shares at least one day with `other`.
    ///
    /// Both endpoints are inclusive, so ranges that merely touch count as
    /// overlapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_fixtures::models::LeaveRange;
    /// use chrono::NaiveDate;
    ///
    /// let first = LeaveRange {
    ///     start: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2025, 11, 7).unwrap(),
    /// };
    /// let touching = LeaveRange {
    ///     start: NaiveDate::from_ymd_opt(2025, 11, 7).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
    /// };
    /// let disjoint = LeaveRange {
    ///     start: NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
    /// };
    /// assert!(first.overlaps(&touching));
    /// assert!(!first.overlaps(&disjoint));
    /// ```
    pub fn overlaps(&self, other: &LeaveRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns the inclusive number of calendar days covered by this range.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Derives working days from a calendar duration, approximating a 5-day
/// work week: full weeks contribute 5 days each, the remainder contributes
/// day-for-day, capped at the calendar duration.
///
/// # Examples
///
/// ```
/// use hr_fixtures::models::working_days;
///
/// assert_eq!(working_days(3), 3);   // within one week
/// assert_eq!(working_days(7), 5);   // one full week
/// assert_eq!(working_days(10), 8);  // one week plus three days
/// ```
pub fn working_days(duration: i64) -> i64 {
    (duration / 7 * 5 + duration % 7).min(duration)
}

/// A row of the generated absence fact table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceFactRow {
    /// The employee this absence belongs to.
    pub employee_id: i64,
    /// Absence code sampled from reference data.
    pub absence_code: String,
    /// The absence date range.
    pub range: LeaveRange,
    /// Derived working days within the range.
    pub working_days: i64,
    /// Derived working hours, eight per working day.
    pub working_hours: i64,
}

/// A row of the generated disability fact table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabilityFactRow {
    /// The employee this record belongs to.
    pub employee_id: i64,
    /// The disability date range.
    pub range: LeaveRange,
}
