//! Closed filter-key tables for `GET /employees`, `/shift`, `/attendance`
//!
//! A query string names one field and one value. The field must be one of
//! the keys below (matched case-insensitively) and maps to a fixed column,
//! so no client-supplied text ever becomes part of a SQL identifier.

use super::serde_helpers::parse_date;
use crate::schedule::ShiftTime;
use chrono::NaiveDate;
use thiserror::Error;

/// How a filter value is parsed and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Compared lower-cased
    Text,
    Integer,
    /// `true`/`false`/`1`/`0`
    Boolean,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    Time,
}

/// Parsed filter value, ready to bind
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Date(NaiveDate),
    Time(ShiftTime),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),
    #[error("Invalid value '{value}' for filter field {field}.")]
    InvalidValue { field: &'static str, value: String },
}

impl ValueKind {
    pub fn parse(&self, raw: &str) -> Option<FilterValue> {
        let raw = raw.trim();
        match self {
            ValueKind::Text => Some(FilterValue::Text(raw.to_lowercase())),
            ValueKind::Integer => raw.parse().ok().map(FilterValue::Integer),
            ValueKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(FilterValue::Boolean(true)),
                "false" | "0" => Some(FilterValue::Boolean(false)),
                _ => None,
            },
            ValueKind::Date => parse_date(raw).map(FilterValue::Date),
            ValueKind::Time => ShiftTime::parse(raw).map(FilterValue::Time),
        }
    }
}

/// A permitted filter key of one resource
pub trait FilterField: Sized + Copy + 'static {
    const ALL: &'static [Self];

    /// Key as it appears in JSON and query strings
    fn key(&self) -> &'static str;

    /// Backing column
    fn column(&self) -> &'static str;

    fn kind(&self) -> ValueKind;

    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }
}

/// One `field = value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter<F> {
    pub field: F,
    pub value: FilterValue,
}

impl<F: FilterField> FieldFilter<F> {
    pub fn parse(key: &str, raw: &str) -> Result<Self, FilterError> {
        let field = F::from_key(key).ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        let value = field
            .kind()
            .parse(raw)
            .ok_or_else(|| FilterError::InvalidValue {
                field: field.key(),
                value: raw.to_string(),
            })?;
        Ok(Self { field, value })
    }
}

macro_rules! filter_fields {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($key:literal, $column:literal, $kind:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl FilterField for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn column(&self) -> &'static str {
                match self {
                    $(Self::$variant => $column),+
                }
            }

            fn kind(&self) -> ValueKind {
                match self {
                    $(Self::$variant => ValueKind::$kind),+
                }
            }
        }
    };
}

filter_fields! {
    /// Filterable employee fields
    EmployeeField {
        EmployeeId => ("employeeID", "employee_id", Integer),
        GivenName => ("givenName", "given_name", Text),
        Surname => ("surname", "surname", Text),
        Email => ("email", "email", Text),
        AddrCity => ("addrCity", "addr_city", Text),
        AddrProv => ("addrProv", "addr_prov", Text),
        AddrPostal => ("addrPostal", "addr_postal", Text),
        IsManager => ("isManager", "is_manager", Boolean),
        EmpManagerId => ("empManagerID", "emp_manager_id", Integer),
        Status => ("status", "status", Text),
        Department => ("department", "department", Integer),
    }
}

filter_fields! {
    /// Filterable shift fields
    ShiftField {
        ShiftId => ("shiftID", "shift_id", Integer),
        ShiftDate => ("shiftDate", "shift_date", Date),
        StartTime => ("startTime", "start_time", Time),
        EndTime => ("endTime", "end_time", Time),
        IsHoliday => ("isHoliday", "is_holiday", Boolean),
    }
}

filter_fields! {
    /// Filterable attendance fields
    AttendanceField {
        AttendanceId => ("attendanceID", "attendance_id", Integer),
        ShiftId => ("shiftID", "shift_id", Integer),
        EmpId => ("empID", "emp_id", Integer),
        CheckedIn => ("checkedIn", "checked_in", Boolean),
        IsPaid => ("isPaid", "is_paid", Boolean),
    }
}
