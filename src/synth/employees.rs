//! Employee dimension synthesizer.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::GeneratorResult;
use crate::generate::random_date_between;
use crate::models::{Employee, Position};
use crate::reference::{ReferenceTable, columns};

/// Probability that an employee gets a termination date and reason.
const TERMINATION_PROBABILITY: f64 = 0.25;

/// Domain used for derived work emails.
const WORK_EMAIL_DOMAIN: &str = "example.com";

const FIRST_NAMES: [&str; 20] = [
    "Anna", "Marek", "Ewa", "Piotr", "Katarzyna", "Tomasz", "Maria", "Jan", "Agnieszka", "Pawel",
    "Laura", "David", "Sofia", "Henrik", "Elena", "Lucas", "Ingrid", "Mateo", "Claire", "Jonas",
];

const LAST_NAMES: [&str; 20] = [
    "Kowalski", "Nowak", "Wisniewski", "Zielinski", "Szymanski", "Schmidt", "Muller", "Weber",
    "Fischer", "Wagner", "Jensen", "Nielsen", "Larsen", "Moreau", "Rossi", "Ferrari", "Silva",
    "Santos", "Novak", "Horvat",
];

const DEPARTMENTS: [&str; 6] = [
    "Operations",
    "Finance",
    "Engineering",
    "Human Resources",
    "Sales",
    "Customer Care",
];

/// ISO 3166-1 alpha-2 codes; the source system repurposes these as a
/// national-id stand-in.
const ISO_COUNTRY_CODES: [&str; 40] = [
    "AT", "AU", "BE", "BG", "BR", "CA", "CH", "CN", "CZ", "DE", "DK", "EE", "ES", "FI", "FR",
    "GB", "GR", "HR", "HU", "IE", "IN", "IT", "JP", "LT", "LU", "LV", "MX", "NL", "NO", "NZ",
    "PL", "PT", "RO", "SE", "SI", "SK", "TR", "UA", "US", "ZA",
];

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Synthesizes `count` employee dimension rows.
///
/// Ids monotonically extend the id space found in the reference file: the
/// first generated id is the reference maximum plus one, so every produced id
/// is unique and strictly greater than any existing id. Supervision is
/// resolved as a post-pass: each row picks a random employee of the same
/// batch as its supervisor, and every employee that appears as a supervisor
/// is promoted to Manager, overwriting its randomly assigned position.
///
/// # Errors
///
/// Fails if the reference file lacks the source id, cost center,
/// localization, or termination reason columns, or if any of their value
/// pools is empty.
pub fn synthesize_employees<R: Rng>(
    rng: &mut R,
    count: usize,
    reference: &ReferenceTable,
) -> GeneratorResult<Vec<Employee>> {
    let base_id = reference.max_numeric(columns::employee::SOURCE_ID)?;
    let cost_centers = reference.sampler(columns::employee::COST_CENTER)?;
    let localizations = reference.sampler(columns::employee::LOCALIZATION)?;
    let termination_reasons = reference.sampler(columns::employee::TERMINATION_REASON)?;

    let birth_range = (ymd(1960, 1, 1), ymd(1999, 12, 31));
    let hire_range = (ymd(2010, 1, 1), ymd(2024, 12, 31));
    let termination_end = ymd(2025, 12, 31);

    let mut employees = Vec::with_capacity(count);
    for offset in 0..count {
        let first_name = pick(rng, &FIRST_NAMES);
        let last_name = pick(rng, &LAST_NAMES);
        let hire_date = random_date_between(rng, hire_range.0, hire_range.1);

        let (termination_date, termination_reason) = if rng.gen_bool(TERMINATION_PROBABILITY) {
            (
                Some(random_date_between(rng, hire_date, termination_end)),
                Some(termination_reasons.draw(rng).to_string()),
            )
        } else {
            (None, None)
        };

        employees.push(Employee {
            id: base_id + offset as i64 + 1,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            full_name: format!("{first_name} {last_name}"),
            work_email: format!(
                "{}.{}@{WORK_EMAIL_DOMAIN}",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            national_id: pick(rng, &ISO_COUNTRY_CODES).to_string(),
            birth_date: random_date_between(rng, birth_range.0, birth_range.1),
            hire_date,
            termination_date,
            termination_reason,
            position: Position::ASSIGNABLE[rng.gen_range(0..Position::ASSIGNABLE.len())],
            cost_center: cost_centers.draw(rng).to_string(),
            localization: localizations.draw(rng).to_string(),
            department: pick(rng, &DEPARTMENTS).to_string(),
            supervisor_id: 0,
        });
    }

    // Supervisor post-pass over the finished batch. Supervision is a flat
    // reference, not a hierarchy, so no cycle handling is needed.
    let mut chosen_as_supervisor = vec![false; count];
    for index in 0..count {
        let supervisor_index = rng.gen_range(0..count);
        let supervisor_id = employees[supervisor_index].id;
        employees[index].supervisor_id = supervisor_id;
        chosen_as_supervisor[supervisor_index] = true;
    }
    for (employee, chosen) in employees.iter_mut().zip(&chosen_as_supervisor) {
        if *chosen {
            employee.position = Position::Manager;
        }
    }

    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn employee_reference() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"EmployeeId;CostCenterId;Localization;TerminationReasonCode\n\
              101;CC100;Warsaw;RESIGNATION\n\
              205;CC200;Berlin;REDUNDANCY\n\
              150;CC100;Lisbon;RETIREMENT\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    fn synthesize(count: usize, seed: u64) -> Vec<Employee> {
        let file = employee_reference();
        let reference = ReferenceTable::load(file.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        synthesize_employees(&mut rng, count, &reference).unwrap()
    }

    #[test]
    fn test_ids_are_unique_and_extend_reference_maximum() {
        let employees = synthesize(50, 1);
        assert_eq!(employees.len(), 50);

        let ids: HashSet<i64> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(ids.iter().all(|id| *id > 205));
        assert!(ids.contains(&206));
        assert!(ids.contains(&255));
    }

    #[test]
    fn test_supervisors_exist_in_batch_and_are_managers() {
        let employees = synthesize(40, 2);
        let ids: HashSet<i64> = employees.iter().map(|e| e.id).collect();

        for employee in &employees {
            assert!(ids.contains(&employee.supervisor_id));
        }

        let supervisor_ids: HashSet<i64> = employees.iter().map(|e| e.supervisor_id).collect();
        for employee in &employees {
            if supervisor_ids.contains(&employee.id) {
                assert_eq!(employee.position, Position::Manager);
            }
        }
    }

    #[test]
    fn test_termination_fields_come_in_pairs() {
        let employees = synthesize(100, 3);
        for employee in &employees {
            assert_eq!(
                employee.termination_date.is_some(),
                employee.termination_reason.is_some()
            );
            if let Some(termination) = employee.termination_date {
                assert!(termination >= employee.hire_date);
            }
        }
    }

    #[test]
    fn test_termination_rate_is_roughly_a_quarter() {
        let employees = synthesize(400, 4);
        let terminated = employees.iter().filter(|e| e.is_terminated()).count();
        assert!(
            (40..=180).contains(&terminated),
            "terminated {terminated} of 400"
        );
    }

    #[test]
    fn test_derived_name_and_email() {
        let employees = synthesize(20, 5);
        for employee in &employees {
            assert_eq!(
                employee.full_name,
                format!("{} {}", employee.first_name, employee.last_name)
            );
            let expected = format!(
                "{}.{}@example.com",
                employee.first_name.to_lowercase(),
                employee.last_name.to_lowercase()
            );
            assert_eq!(employee.work_email, expected);
            assert_eq!(employee.work_email, employee.work_email.to_lowercase());
        }
    }

    #[test]
    fn test_reference_values_drawn_from_pools() {
        let employees = synthesize(60, 6);
        for employee in &employees {
            assert!(["CC100", "CC200"].contains(&employee.cost_center.as_str()));
            assert!(["Warsaw", "Berlin", "Lisbon"].contains(&employee.localization.as_str()));
            assert_eq!(employee.national_id.len(), 2);
        }
    }

    #[test]
    fn test_same_seed_reproduces_batch() {
        assert_eq!(synthesize(30, 7), synthesize(30, 7));
    }

    #[test]
    fn test_missing_reference_column_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"EmployeeId;CostCenterId\n1;CC100\n").unwrap();
        file.flush().unwrap();

        let reference = ReferenceTable::load(file.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = synthesize_employees(&mut rng, 5, &reference);
        assert!(matches!(
            result,
            Err(GeneratorError::ColumnNotFound { .. })
        ));
    }
}
