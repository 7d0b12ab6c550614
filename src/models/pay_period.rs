//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type describing one monthly
//! payout window: first day, last calendar day, payroll date, and the YYYYMM
//! period number the downstream consumer keys periods by.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One monthly payroll period.
///
/// Dates are held as [`NaiveDate`] in memory; the output files serialize them
/// as YYYYMMDD integer stamps via the `*_stamp` accessors.
///
/// # Example
///
/// ```
/// use hr_fixtures::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     start: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
///     number: 202511,
/// };
/// assert_eq!(period.start_stamp(), 20251101);
/// assert_eq!(period.end_stamp(), 20251130);
/// assert_eq!(period.pay_date_stamp(), 20251129);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last calendar day of the period.
    pub end: NaiveDate,
    /// Payroll date, the last calendar day minus one day.
    pub pay_date: NaiveDate,
    /// Period number formatted as YYYYMM.
    pub number: u32,
}

impl PayrollPeriod {
    /// Returns the period start as a YYYYMMDD stamp.
    pub fn start_stamp(&self) -> u32 {
        date_stamp(self.start)
    }

    /// Returns the period end as a YYYYMMDD stamp.
    pub fn end_stamp(&self) -> u32 {
        date_stamp(self.end)
    }

    /// Returns the payroll date as a YYYYMMDD stamp.
    pub fn pay_date_stamp(&self) -> u32 {
        date_stamp(self.pay_date)
    }
}

/// Formats a date as a YYYYMMDD integer stamp.
pub(crate) fn date_stamp(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_stamp_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(date_stamp(date), 20260105);
    }

    #[test]
    fn test_period_stamps() {
        let period = PayrollPeriod {
            start: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
            pay_date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
            number: 202511,
        };
        assert_eq!(period.start_stamp(), 20251101);
        assert_eq!(period.end_stamp(), 20251130);
        assert_eq!(period.pay_date_stamp(), 20251129);
        assert_eq!(period.number, 202511);
    }
}
