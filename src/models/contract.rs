//! Employment contract model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the sentinel end date used for open-ended contracts.
///
/// Open-ended contracts carry a "far future" end date rather than a null,
/// matching what the downstream consumer expects.
///
/// # Examples
///
/// ```
/// use hr_fixtures::models::open_ended_end;
/// use chrono::Datelike;
///
/// assert_eq!(open_ended_end().year(), 9999);
/// ```
pub fn open_ended_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap()
}

/// A row of the generated contract dimension.
///
/// Contracts are one-to-one with generated employees: each employee in the
/// batch gets exactly one contract with a sequential contract id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContract {
    /// Sequential contract identifier, starting at 1 per batch.
    pub id: i64,
    /// The employee this contract belongs to.
    pub employee_id: i64,
    /// Contract salary.
    pub salary: Decimal,
    /// Pay group code sampled from reference data.
    pub pay_group: String,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Contract end date; open-ended contracts use [`open_ended_end`].
    pub end_date: NaiveDate,
}

impl EmployeeContract {
    /// Returns true if the contract carries the open-ended sentinel end date.
    pub fn is_open_ended(&self) -> bool {
        self.end_date == open_ended_end()
    }
}
