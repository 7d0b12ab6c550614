//! Disability fact synthesizer.

use chrono::Duration;
use rand::Rng;

use crate::error::GeneratorResult;
use crate::generate::{month_bounds, random_date_between};
use crate::models::{DisabilityFactRow, Employee, LeaveRange};

/// Maximum disability duration in calendar days.
const MAX_DISABILITY_DAYS: i64 = 60;

/// Per-employee row count draw, weighted toward a single record.
const ROW_COUNT_WEIGHTS: [usize; 4] = [0, 1, 1, 2];

/// Synthesizes disability fact rows for every employee in the batch.
///
/// Same shape as the absence synthesizer but with durations up to 60 days
/// and no code or derived working-hour columns. Candidates whose range
/// overlaps an already-accepted range for the same employee are dropped, not
/// retried.
pub fn synthesize_disabilities<R: Rng>(
    rng: &mut R,
    employees: &[Employee],
    target_year: i32,
    target_month: u32,
) -> GeneratorResult<Vec<DisabilityFactRow>> {
    let (month_start, month_end) = month_bounds(target_year, target_month)?;

    let mut rows = Vec::new();
    for employee in employees {
        let nominal = ROW_COUNT_WEIGHTS[rng.gen_range(0..ROW_COUNT_WEIGHTS.len())];

        let mut accepted: Vec<LeaveRange> = Vec::new();
        for _ in 0..nominal {
            let start = random_date_between(rng, month_start, month_end);
            let duration = rng.gen_range(1..=MAX_DISABILITY_DAYS);
            let range = LeaveRange {
                start,
                end: start + Duration::days(duration - 1),
            };

            if accepted.iter().any(|existing| existing.overlaps(&range)) {
                continue;
            }
            accepted.push(range);

            rows.push(DisabilityFactRow {
                employee_id: employee.id,
                range,
            });
        }
    }

    Ok(rows)
}
