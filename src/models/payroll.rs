//! Payroll fact model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollPeriod;

/// A row of the generated payroll fact table.
///
/// Amounts are held signed in memory; the writer serializes negatives with a
/// trailing `-` marker, a quirk of the downstream format that is preserved
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollFactRow {
    /// The employee this payout belongs to.
    pub employee_id: i64,
    /// The payout period.
    pub period: PayrollPeriod,
    /// Wage component code sampled from reference data.
    pub wage_component: String,
    /// Pay group code sampled from reference data.
    pub pay_group: String,
    /// Paid hours for the period, in half-hour resolution.
    pub hours: Decimal,
    /// Payout amount; roughly a tenth of rows carry a negative value.
    pub amount: Decimal,
}
