//! Attendance Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee assigned to one shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    #[serde(rename = "attendanceID")]
    pub attendance_id: i64,
    #[serde(rename = "shiftID")]
    pub shift_id: i64,
    #[serde(rename = "empID")]
    pub emp_id: i64,
    #[serde(rename = "checkedIn")]
    pub checked_in: bool,
    #[serde(rename = "isPaid")]
    pub is_paid: bool,
}

/// Shift columns attached to a joined attendance row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    #[serde(rename = "shiftID")]
    pub shift_id: i64,
    pub shift_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub is_holiday: bool,
}

/// Employee columns attached to a joined attendance row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    #[serde(rename = "employeeID")]
    pub employee_id: i64,
    pub given_name: String,
    pub surname: String,
    pub pay_rate: f64,
}

/// Attendance joined to its shift and employee
///
/// Either side is `null` when the referenced row has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDetail {
    #[serde(flatten)]
    pub attendance: Attendance,
    #[serde(rename = "Shift")]
    pub shift: Option<ShiftSummary>,
    #[serde(rename = "Employee")]
    pub employee: Option<EmployeeSummary>,
}

/// Create attendance payload
///
/// `isPaid` is not accepted here; new records always start unpaid.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCreate {
    /// Ignored; ids are assigned by the store
    #[serde(
        rename = "attendanceID",
        default,
        deserialize_with = "serde_helpers::option_int::deserialize"
    )]
    pub attendance_id: Option<i64>,
    #[serde(rename = "shiftID", deserialize_with = "serde_helpers::int::deserialize")]
    pub shift_id: i64,
    #[serde(rename = "empID", deserialize_with = "serde_helpers::int::deserialize")]
    pub emp_id: i64,
    #[serde(rename = "checkedIn", default)]
    pub checked_in: Option<bool>,
}

/// Update attendance payload; `isPaid` is left untouched
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceUpdate {
    #[serde(rename = "attendanceID", deserialize_with = "serde_helpers::int::deserialize")]
    pub attendance_id: i64,
    #[serde(rename = "shiftID", deserialize_with = "serde_helpers::int::deserialize")]
    pub shift_id: i64,
    #[serde(rename = "empID", deserialize_with = "serde_helpers::int::deserialize")]
    pub emp_id: i64,
    #[serde(rename = "checkedIn", default)]
    pub checked_in: Option<bool>,
}

/// Check-in toggle payload
///
/// `checkedIn` is kept raw so a non-boolean value is reported with the
/// dedicated message instead of a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    #[serde(rename = "attendanceID", deserialize_with = "serde_helpers::int::deserialize")]
    pub attendance_id: i64,
    #[serde(rename = "checkedIn", default)]
    pub checked_in: serde_json::Value,
}

/// Paid toggle payload
#[derive(Debug, Clone, Deserialize)]
pub struct PayRequest {
    #[serde(rename = "attendanceID", deserialize_with = "serde_helpers::int::deserialize")]
    pub attendance_id: i64,
    #[serde(rename = "isPaid", default)]
    pub is_paid: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendance() -> Attendance {
        Attendance {
            attendance_id: 1,
            shift_id: 2,
            emp_id: 3,
            checked_in: true,
            is_paid: false,
        }
    }

    #[test]
    fn test_detail_nests_shift_and_employee() {
        let detail = AttendanceDetail {
            attendance: attendance(),
            shift: Some(ShiftSummary {
                shift_id: 2,
                shift_date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
                start_time: "10:00".into(),
                end_time: "14:30".into(),
                is_holiday: false,
            }),
            employee: None,
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["attendanceID"], 1);
        assert_eq!(json["checkedIn"], true);
        assert_eq!(json["Shift"]["shiftDate"], "2025-01-25");
        assert_eq!(json["Shift"]["endTime"], "14:30");
        assert!(json["Employee"].is_null());
    }

    #[test]
    fn test_create_defaults() {
        let create: AttendanceCreate =
            serde_json::from_str(r#"{"shiftID": "2", "empID": 3}"#).unwrap();
        assert_eq!(create.shift_id, 2);
        assert_eq!(create.emp_id, 3);
        assert_eq!(create.checked_in, None);
        assert_eq!(create.attendance_id, None);
    }

    #[test]
    fn test_check_in_keeps_raw_value() {
        let req: CheckInRequest =
            serde_json::from_str(r#"{"attendanceID": "4", "checkedIn": "yes"}"#).unwrap();
        assert_eq!(req.attendance_id, 4);
        assert_eq!(req.checked_in, serde_json::json!("yes"));

        let req: PayRequest = serde_json::from_str(r#"{"attendanceID": 4}"#).unwrap();
        assert!(req.is_paid.is_null());
    }
}
