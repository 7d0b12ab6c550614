//! Reference column names, centralized per target table.
//!
//! The source system spelled some of these inconsistently across call sites
//! ("CostCenterId" vs "CostCenterID"), which silently produced empty samples
//! when a lookup missed. Keeping one constant per table closes that hole.

/// Columns read while generating the employee dimension.
pub mod employee {
    /// Source id column whose maximum seeds the new id range.
    pub const SOURCE_ID: &str = "EmployeeId";
    /// Cost center pool.
    pub const COST_CENTER: &str = "CostCenterId";
    /// Localization pool.
    pub const LOCALIZATION: &str = "Localization";
    /// Termination reason code pool.
    pub const TERMINATION_REASON: &str = "TerminationReasonCode";
}

/// Columns read while generating the contract dimension.
pub mod contract {
    /// Pay group code pool.
    pub const PAY_GROUP: &str = "PayGroupCode";
}

/// Columns read while generating the payroll fact table.
pub mod payroll {
    /// Wage component code pool.
    pub const WAGE_COMPONENT: &str = "WageComponentCode";
    /// Pay group code pool.
    pub const PAY_GROUP: &str = "PayGroupCode";
}

/// Columns read while generating the absence fact table.
pub mod absence {
    /// Absence code pool.
    pub const ABSENCE_CODE: &str = "AbsenceCode";
}
