//! Absence fact synthesizer.

use chrono::Duration;
use rand::Rng;

use crate::error::GeneratorResult;
use crate::generate::{month_bounds, random_date_between};
use crate::models::{AbsenceFactRow, Employee, LeaveRange, working_days};
use crate::reference::{ReferenceTable, columns};

/// Maximum absence duration in calendar days.
const MAX_ABSENCE_DAYS: i64 = 30;

/// Per-employee row count draw, weighted toward a single absence.
const ROW_COUNT_WEIGHTS: [usize; 4] = [0, 1, 1, 2];

/// Synthesizes absence fact rows for every employee in the batch.
///
/// Each employee nominally gets zero to two absences (weighted toward one),
/// starting on a random day of the target month and running 1-30 calendar
/// days. A candidate whose range overlaps any already-accepted range for the
/// same employee is dropped rather than retried, so the realized count can
/// undershoot the nominal draw. Working days approximate a 5-day week and
/// working hours are eight per working day.
///
/// # Errors
///
/// Fails if the year/month pair is invalid or the reference file lacks the
/// absence code column.
pub fn synthesize_absences<R: Rng>(
    rng: &mut R,
    employees: &[Employee],
    reference: &ReferenceTable,
    target_year: i32,
    target_month: u32,
) -> GeneratorResult<Vec<AbsenceFactRow>> {
    let (month_start, month_end) = month_bounds(target_year, target_month)?;
    let absence_codes = reference.sampler(columns::absence::ABSENCE_CODE)?;

    let mut rows = Vec::new();
    for employee in employees {
        let nominal = ROW_COUNT_WEIGHTS[rng.gen_range(0..ROW_COUNT_WEIGHTS.len())];

        let mut accepted: Vec<LeaveRange> = Vec::new();
        for _ in 0..nominal {
            let start = random_date_between(rng, month_start, month_end);
            let duration = rng.gen_range(1..=MAX_ABSENCE_DAYS);
            let range = LeaveRange {
                start,
                end: start + Duration::days(duration - 1),
            };

            // Conflicting candidates are dropped, not retried.
            if accepted.iter().any(|existing| existing.overlaps(&range)) {
                continue;
            }
            accepted.push(range);

            let days = working_days(range.duration_days());
            rows.push(AbsenceFactRow {
                employee_id: employee.id,
                absence_code: absence_codes.draw(rng).to_string(),
                range,
                working_days: days,
                working_hours: days * 8,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize_employees;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reference_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"EmployeeId;CostCenterId;Localization;TerminationReasonCode;AbsenceCode\n\
              700;CC100;Warsaw;RESIGNATION;SICK\n\
              710;CC200;Berlin;REDUNDANCY;VACATION\n\
              705;CC100;Lisbon;RETIREMENT;PARENTAL\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    fn synthesize(count: usize, seed: u64) -> Vec<AbsenceFactRow> {
        let file = reference_file();
        let reference = ReferenceTable::load(file.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let employees = synthesize_employees(&mut rng, count, &reference).unwrap();
        synthesize_absences(&mut rng, &employees, &reference, 2025, 11).unwrap()
    }

    #[test]
    fn test_no_overlapping_ranges_per_employee() {
        let rows = synthesize(300, 1);

        let mut per_employee: HashMap<i64, Vec<LeaveRange>> = HashMap::new();
        for row in &rows {
            per_employee.entry(row.employee_id).or_default().push(row.range);
        }

        for ranges in per_employee.values() {
            for (i, first) in ranges.iter().enumerate() {
                for second in &ranges[i + 1..] {
                    assert!(!first.overlaps(second), "{first:?} overlaps {second:?}");
                }
            }
        }
    }

    #[test]
    fn test_at_most_two_rows_per_employee() {
        let rows = synthesize(300, 2);
        let mut per_employee: HashMap<i64, usize> = HashMap::new();
        for row in &rows {
            *per_employee.entry(row.employee_id).or_default() += 1;
        }
        for count in per_employee.values() {
            assert!(*count <= 2);
        }
    }

    #[test]
    fn test_ranges_start_in_target_month_with_bounded_duration() {
        let rows = synthesize(200, 3);
        let month_start = chrono::NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let month_end = chrono::NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();

        for row in &rows {
            assert!(row.range.start >= month_start && row.range.start <= month_end);
            assert!((1..=MAX_ABSENCE_DAYS).contains(&row.range.duration_days()));
        }
    }

    #[test]
    fn test_working_totals_are_derived_from_duration() {
        let rows = synthesize(200, 4);
        for row in &rows {
            let duration = row.range.duration_days();
            assert_eq!(row.working_days, working_days(duration));
            assert_eq!(row.working_hours, row.working_days * 8);
            assert!(row.working_days <= duration);
        }
    }

    #[test]
    fn test_absence_codes_come_from_reference_pool() {
        let rows = synthesize(100, 5);
        for row in &rows {
            assert!(["SICK", "VACATION", "PARENTAL"].contains(&row.absence_code.as_str()));
        }
    }
}
