//! Unified error codes for the HR backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 8xxx: Workforce errors (employees, shifts, attendance)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// No session cookie, or the session is unknown
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is inactive
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Manager role required
    ManagerRequired = 2003,

    // ==================== 8xxx: Workforce ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Email already used by another employee
    EmployeeEmailExists = 8002,
    /// Shift not found
    ShiftNotFound = 8101,
    /// Shift start/end time invalid
    InvalidShiftTime = 8102,
    /// Attendance record not found
    AttendanceNotFound = 8201,
    /// Attendance would overlap another shift of the same employee
    ShiftOverlap = 8202,
    /// No attendance records at all
    NoAttendances = 8203,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "Please log in first.",
            ErrorCode::InvalidCredentials => "Invalid email or password.",
            ErrorCode::SessionExpired => "Session expired, please log in again.",
            ErrorCode::AccountDisabled => "Account is inactive.",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied.",
            ErrorCode::ManagerRequired => "Manager access required.",

            // Workforce
            ErrorCode::EmployeeNotFound => "Employee not found.",
            ErrorCode::EmployeeEmailExists => "Email is already in use.",
            ErrorCode::ShiftNotFound => "Shift not found.",
            ErrorCode::InvalidShiftTime => "Invalid shift time.",
            ErrorCode::AttendanceNotFound => "Attendance not found.",
            ErrorCode::ShiftOverlap => "overlapping shift times.",
            ErrorCode::NoAttendances => "No attendances were found.",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1005 => Ok(ErrorCode::SessionExpired),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::ManagerRequired),

            // Workforce
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),
            8101 => Ok(ErrorCode::ShiftNotFound),
            8102 => Ok(ErrorCode::InvalidShiftTime),
            8201 => Ok(ErrorCode::AttendanceNotFound),
            8202 => Ok(ErrorCode::ShiftOverlap),
            8203 => Ok(ErrorCode::NoAttendances),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::ManagerRequired.code(), 2003);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::ShiftOverlap.code(), 8202);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::ShiftOverlap.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1002), Ok(ErrorCode::InvalidCredentials));
        assert_eq!(ErrorCode::try_from(8101), Ok(ErrorCode::ShiftNotFound));
        assert_eq!(ErrorCode::try_from(8203), Ok(ErrorCode::NoAttendances));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::AttendanceNotFound).unwrap();
        assert_eq!(json, "8201");

        let code: ErrorCode = serde_json::from_str("8202").unwrap();
        assert_eq!(code, ErrorCode::ShiftOverlap);

        let result: Result<ErrorCode, _> = serde_json::from_str("7001");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::EmployeeNotFound), "8001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found.");
        assert_eq!(ErrorCode::ShiftNotFound.message(), "Shift not found.");
        assert_eq!(ErrorCode::ShiftOverlap.message(), "overlapping shift times.");
        assert_eq!(
            ErrorCode::NoAttendances.message(),
            "No attendances were found."
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
