//! Payroll fact synthesizer.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GeneratorResult;
use crate::generate::{payroll_periods, random_decimal, random_half_unit};
use crate::models::{Employee, PayrollFactRow};
use crate::reference::{ReferenceTable, columns};

/// Number of candidate payroll periods seeded per run; every observed call
/// site uses six.
pub const DEFAULT_PERIOD_COUNT: usize = 6;

/// Probability that a payout flips to the negative representation.
const NEGATIVE_PROBABILITY: f64 = 0.10;

/// Per-employee row count draw, weighted toward a single payout.
const ROW_COUNT_WEIGHTS: [usize; 10] = [1, 1, 1, 1, 1, 1, 2, 2, 2, 3];

/// Synthesizes payroll fact rows for every employee in the batch.
///
/// Each employee gets one to three rows (weighted toward one), and each row
/// is assigned a distinct payroll period drawn without replacement from the
/// `period_count` candidate periods starting at the given year and month.
/// With fewer than three candidates the draw is capped at `period_count`
/// rows per employee, since periods never repeat within one employee.
/// Roughly a tenth of the rows carry a negative amount, which the writer
/// later serializes with the trailing-sign convention.
///
/// # Errors
///
/// Fails if the year/month pair is invalid or the reference file lacks the
/// wage component or pay group columns.
pub fn synthesize_payroll<R: Rng>(
    rng: &mut R,
    employees: &[Employee],
    reference: &ReferenceTable,
    start_year: i32,
    start_month: u32,
    period_count: usize,
) -> GeneratorResult<Vec<PayrollFactRow>> {
    let periods = payroll_periods(start_year, start_month, period_count)?;
    let wage_components = reference.sampler(columns::payroll::WAGE_COMPONENT)?;
    let pay_groups = reference.sampler(columns::payroll::PAY_GROUP)?;

    let mut rows = Vec::with_capacity(employees.len());
    for employee in employees {
        let row_count = ROW_COUNT_WEIGHTS[rng.gen_range(0..ROW_COUNT_WEIGHTS.len())];

        for period in periods.choose_multiple(rng, row_count) {
            let mut amount = random_decimal(rng, 4, 2);
            if rng.gen_bool(NEGATIVE_PROBABILITY) {
                amount = -amount;
            }

            rows.push(PayrollFactRow {
                employee_id: employee.id,
                period: *period,
                wage_component: wage_components.draw(rng).to_string(),
                pay_group: pay_groups.draw(rng).to_string(),
                hours: random_half_unit(rng, 40, 184),
                amount,
            });
        }
    }

    Ok(rows)
}
