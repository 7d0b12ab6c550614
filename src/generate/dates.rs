//! Random date generators and calendar helpers.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::error::{GeneratorError, GeneratorResult};

/// Draws one calendar date uniformly from the inclusive `[start, end]` range.
///
/// `start` must not be after `end`.
pub fn random_date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    debug_assert!(start <= end);
    let span = (end - start).num_days();
    start + Duration::days(rng.gen_range(0..=span))
}

/// Draws `count` independent dates uniformly from the inclusive range.
pub fn random_dates<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
    count: usize,
) -> Vec<NaiveDate> {
    (0..count)
        .map(|_| random_date_between(rng, start, end))
        .collect()
}

/// Returns the last calendar day of the given month, leap-years included.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidPeriod`] if the year/month pair does not
/// describe a real calendar month.
pub fn last_day_of_month(year: i32, month: u32) -> GeneratorResult<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or(GeneratorError::InvalidPeriod { year, month })
}

/// Returns the first and last day of the given month.
pub fn month_bounds(year: i32, month: u32) -> GeneratorResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(GeneratorError::InvalidPeriod { year, month })?;
    let end = last_day_of_month(year, month)?;
    Ok((start, end))
}
