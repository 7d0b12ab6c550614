//! Output record renderings for the generated tables.
//!
//! Dates serialize as YYYYMMDD integer stamps and amounts use the
//! trailing-sign convention, matching the downstream consumer byte-for-byte.

use crate::models::{
    AbsenceFactRow, DisabilityFactRow, Employee, EmployeeContract, PayrollFactRow, date_stamp,
};

use super::amount::encode_trailing_sign;
use super::writer::DelimitedRecord;

impl DelimitedRecord for Employee {
    const TABLE_ID: &'static str = "DimEmployee";
    const HEADERS: &'static [&'static str] = &[
        "EmployeeId",
        "FirstName",
        "LastName",
        "FullName",
        "WorkEmail",
        "NationalId",
        "BirthDate",
        "HireDate",
        "TerminationDate",
        "TerminationReasonCode",
        "Position",
        "Level",
        "CostCenterId",
        "Localization",
        "Department",
        "SupervisorId",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.full_name.clone(),
            self.work_email.clone(),
            self.national_id.clone(),
            date_stamp(self.birth_date).to_string(),
            date_stamp(self.hire_date).to_string(),
            self.termination_date
                .map(|d| date_stamp(d).to_string())
                .unwrap_or_default(),
            self.termination_reason.clone().unwrap_or_default(),
            self.position.title().to_string(),
            self.level().to_string(),
            self.cost_center.clone(),
            self.localization.clone(),
            self.department.clone(),
            self.supervisor_id.to_string(),
        ]
    }
}

impl DelimitedRecord for EmployeeContract {
    const TABLE_ID: &'static str = "DimEmployeeContract";
    const HEADERS: &'static [&'static str] = &[
        "ContractId",
        "EmployeeId",
        "Salary",
        "PayGroupCode",
        "ContractStartDate",
        "ContractEndDate",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.to_string(),
            self.salary.to_string(),
            self.pay_group.clone(),
            date_stamp(self.start_date).to_string(),
            date_stamp(self.end_date).to_string(),
        ]
    }
}

impl DelimitedRecord for PayrollFactRow {
    const TABLE_ID: &'static str = "FactEmployeePayroll";
    const HEADERS: &'static [&'static str] = &[
        "EmployeeId",
        "PeriodStartDate",
        "PeriodEndDate",
        "PayrollDate",
        "PayrollNumber",
        "WageComponentCode",
        "PayGroupCode",
        "Hours",
        "Amount",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.period.start_stamp().to_string(),
            self.period.end_stamp().to_string(),
            self.period.pay_date_stamp().to_string(),
            self.period.number.to_string(),
            self.wage_component.clone(),
            self.pay_group.clone(),
            self.hours.to_string(),
            encode_trailing_sign(self.amount),
        ]
    }
}

impl DelimitedRecord for AbsenceFactRow {
    const TABLE_ID: &'static str = "FactAbsence";
    const HEADERS: &'static [&'static str] = &[
        "EmployeeId",
        "AbsenceCode",
        "StartDate",
        "EndDate",
        "WorkingDays",
        "WorkingHours",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.absence_code.clone(),
            date_stamp(self.range.start).to_string(),
            date_stamp(self.range.end).to_string(),
            self.working_days.to_string(),
            self.working_hours.to_string(),
        ]
    }
}

impl DelimitedRecord for DisabilityFactRow {
    const TABLE_ID: &'static str = "FactDisability";
    const HEADERS: &'static [&'static str] = &["EmployeeId", "StartDate", "EndDate"];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            date_stamp(self.range.start).to_string(),
            date_stamp(self.range.end).to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveRange, PayrollPeriod, Position, open_ended_end};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_employee_record_matches_headers() {
        let employee = Employee {
            id: 1001,
            first_name: "Anna".to_string(),
            last_name: "Kowalski".to_string(),
            full_name: "Anna Kowalski".to_string(),
            work_email: "anna.kowalski@example.com".to_string(),
            national_id: "PL".to_string(),
            birth_date: date(1985, 3, 15),
            hire_date: date(2019, 6, 1),
            termination_date: None,
            termination_reason: None,
            position: Position::Manager,
            cost_center: "CC100".to_string(),
            localization: "Warsaw".to_string(),
            department: "Finance".to_string(),
            supervisor_id: 1002,
        };

        let record = employee.to_record();
        assert_eq!(record.len(), Employee::HEADERS.len());
        assert_eq!(record[0], "1001");
        assert_eq!(record[6], "19850315");
        assert_eq!(record[8], ""); // no termination date
        assert_eq!(record[10], "Manager");
        assert_eq!(record[11], "5");
    }

    #[test]
    fn test_contract_record_renders_open_ended_sentinel() {
        let contract = EmployeeContract {
            id: 3,
            employee_id: 1001,
            salary: Decimal::new(523050, 2),
            pay_group: "MONTHLY".to_string(),
            start_date: date(2018, 4, 1),
            end_date: open_ended_end(),
        };

        let record = contract.to_record();
        assert_eq!(record.len(), EmployeeContract::HEADERS.len());
        assert_eq!(record[2], "5230.50");
        assert_eq!(record[4], "20180401");
        assert_eq!(record[5], "99991231");
    }

    #[test]
    fn test_payroll_record_uses_trailing_sign() {
        let row = PayrollFactRow {
            employee_id: 1001,
            period: PayrollPeriod {
                start: date(2025, 11, 1),
                end: date(2025, 11, 30),
                pay_date: date(2025, 11, 29),
                number: 202511,
            },
            wage_component: "BASE".to_string(),
            pay_group: "MONTHLY".to_string(),
            hours: Decimal::new(1605, 1),
            amount: Decimal::new(-123456, 2),
        };

        let record = row.to_record();
        assert_eq!(record.len(), PayrollFactRow::HEADERS.len());
        assert_eq!(record[1], "20251101");
        assert_eq!(record[4], "202511");
        assert_eq!(record[7], "160.5");
        assert_eq!(record[8], "1234.56-");
    }

    #[test]
    fn test_absence_and_disability_records() {
        let range = LeaveRange {
            start: date(2025, 11, 3),
            end: date(2025, 11, 12),
        };

        let absence = AbsenceFactRow {
            employee_id: 1001,
            absence_code: "SICK".to_string(),
            range,
            working_days: 8,
            working_hours: 64,
        };
        let record = absence.to_record();
        assert_eq!(record.len(), AbsenceFactRow::HEADERS.len());
        assert_eq!(record[2], "20251103");
        assert_eq!(record[4], "8");
        assert_eq!(record[5], "64");

        let disability = DisabilityFactRow {
            employee_id: 1001,
            range,
        };
        let record = disability.to_record();
        assert_eq!(record, ["1001", "20251103", "20251112"]);
    }
}
