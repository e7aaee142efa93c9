//! Shift Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduled work interval on one date
///
/// Times are stored as `HH:MM`; the interval is half-open and never crosses
/// midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(rename = "shiftID")]
    pub shift_id: i64,
    pub shift_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub is_holiday: bool,
}

/// Create shift payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCreate {
    #[serde(deserialize_with = "serde_helpers::date::deserialize")]
    pub shift_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_holiday: bool,
}

/// Update shift payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftUpdate {
    #[serde(rename = "shiftID", deserialize_with = "serde_helpers::int::deserialize")]
    pub shift_id: i64,
    #[serde(deserialize_with = "serde_helpers::date::deserialize")]
    pub shift_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_holiday: bool,
}
