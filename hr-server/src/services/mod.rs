//! Service layer - the HR components
//!
//! # Services
//!
//! - [`ShiftCatalog`] - shift CRUD and time rules
//! - [`EmployeeDirectory`] - employee CRUD, validation, credentials
//! - [`AttendanceLedger`] - attendance CRUD and the no-overlap rule
//! - [`EarningsService`] - hour and wage tallies over a date window

pub mod attendance_ledger;
pub mod earnings;
pub mod employee_directory;
pub mod shift_catalog;

pub use attendance_ledger::AttendanceLedger;
pub use earnings::EarningsService;
pub use employee_directory::EmployeeDirectory;
pub use shift_catalog::ShiftCatalog;

use crate::utils::{AppError, AppResult};
use shared::models::{FieldFilter, FilterField};

/// Resolve a `?key=value` pair against a closed filter table
pub(crate) fn parse_filter<F: FilterField>(key: &str, value: &str) -> AppResult<FieldFilter<F>> {
    FieldFilter::parse(key, value).map_err(|e| AppError::validation(e.to_string()))
}
