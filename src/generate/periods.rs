//! Deterministic payroll-period sequence generator.

use chrono::Duration;

use crate::error::{GeneratorError, GeneratorResult};
use crate::models::PayrollPeriod;

/// Produces `count` consecutive monthly payroll periods starting at the given
/// year and month.
///
/// Each period covers a full calendar month: the start is the first day, the
/// end is the last calendar day (leap-years included), the payroll date is
/// the end minus one day, and the period number is YYYYMM. The sequence
/// advances one calendar month per period with 12 to 1 year rollover. No
/// randomness is involved.
///
/// # Examples
///
/// ```
/// use hr_fixtures::generate::payroll_periods;
///
/// let periods = payroll_periods(2025, 11, 3)?;
/// assert_eq!(periods[0].number, 202511);
/// assert_eq!(periods[2].number, 202601); // year rollover
/// # Ok::<(), hr_fixtures::error::GeneratorError>(())
/// ```
pub fn payroll_periods(
    start_year: i32,
    start_month: u32,
    count: usize,
) -> GeneratorResult<Vec<PayrollPeriod>> {
    // The YYYYMM period number only makes sense for positive years.
    if start_year < 1 {
        return Err(GeneratorError::InvalidPeriod {
            year: start_year,
            month: start_month,
        });
    }

    let mut periods = Vec::with_capacity(count);
    let (mut year, mut month) = (start_year, start_month);

    for _ in 0..count {
        let (start, end) = super::month_bounds(year, month)?;
        periods.push(PayrollPeriod {
            start,
            end,
            pay_date: end - Duration::days(1),
            number: year as u32 * 100 + month,
        });

        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }

    Ok(periods)
}
