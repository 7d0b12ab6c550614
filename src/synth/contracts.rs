//! Contract dimension synthesizer.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::error::GeneratorResult;
use crate::generate::{random_date_between, random_decimal};
use crate::models::{Employee, EmployeeContract, open_ended_end};
use crate::reference::{ReferenceTable, columns};

/// Probability that a contract is open-ended rather than fixed-term.
const OPEN_ENDED_PROBABILITY: f64 = 0.5;

/// Maximum fixed-term contract duration, five years in days.
const MAX_TERM_DAYS: i64 = 5 * 365;

/// Synthesizes one contract per employee.
///
/// Contract ids are sequential starting at 1. Start dates fall in a wide
/// historical range; roughly half of the contracts are open-ended and carry
/// the far-future sentinel end date, the rest run for a random term of up to
/// five years. Salary comes from the decimal generator and pay group from
/// reference data.
///
/// # Errors
///
/// Fails if the reference file lacks the pay group column or its value pool
/// is empty.
pub fn synthesize_contracts<R: Rng>(
    rng: &mut R,
    employees: &[Employee],
    reference: &ReferenceTable,
) -> GeneratorResult<Vec<EmployeeContract>> {
    let pay_groups = reference.sampler(columns::contract::PAY_GROUP)?;

    let start_range = (
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    );

    let mut contracts = Vec::with_capacity(employees.len());
    for (index, employee) in employees.iter().enumerate() {
        let start_date = random_date_between(rng, start_range.0, start_range.1);
        let end_date = if rng.gen_bool(OPEN_ENDED_PROBABILITY) {
            open_ended_end()
        } else {
            start_date + Duration::days(rng.gen_range(1..=MAX_TERM_DAYS))
        };

        contracts.push(EmployeeContract {
            id: index as i64 + 1,
            employee_id: employee.id,
            salary: random_decimal(rng, 4, 2),
            pay_group: pay_groups.draw(rng).to_string(),
            start_date,
            end_date,
        });
    }

    Ok(contracts)
}
