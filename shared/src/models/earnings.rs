//! Earnings view (derived, never stored)

use super::attendance::AttendanceDetail;
use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Body of `POST /earnings/all`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsRequest {
    #[serde(default, deserialize_with = "serde_helpers::lenient_string::deserialize")]
    pub start_date: String,
    #[serde(default, deserialize_with = "serde_helpers::lenient_string::deserialize")]
    pub end_date: String,
}

/// Body of `POST /earnings/single`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEarningsRequest {
    #[serde(rename = "empID", deserialize_with = "serde_helpers::int::deserialize")]
    pub emp_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::lenient_string::deserialize")]
    pub start_date: String,
    #[serde(default, deserialize_with = "serde_helpers::lenient_string::deserialize")]
    pub end_date: String,
}

/// Hours and wages by {regular, holiday} x {outstanding, paid}
///
/// Only checked-in rows count towards the tallies; `attendances_list` holds
/// every row inside the date window, checked in or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsView {
    pub regular_hours_outstanding: f64,
    pub holiday_hours_outstanding: f64,
    pub regular_hours_paid: f64,
    pub holiday_hours_paid: f64,
    pub total_hours_outstanding: f64,
    pub total_hours_paid: f64,
    pub regular_wages_owing: f64,
    pub holiday_wages_owing: f64,
    pub regular_wages_paid: f64,
    pub holiday_wages_paid: f64,
    pub attendances_list: Vec<AttendanceDetail>,
}
