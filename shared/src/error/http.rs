//! HTTP status mapping for error codes

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// Domain rejections (validation, missing records, overlap) are all
    /// reported as 400 so the UI can show the `msg` verbatim.
    pub fn http_status(&self) -> StatusCode {
        if self.is_success() {
            return StatusCode::OK;
        }
        match self.category() {
            ErrorCategory::Auth => StatusCode::UNAUTHORIZED,
            ErrorCategory::Permission => StatusCode::FORBIDDEN,
            ErrorCategory::System => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCategory::General | ErrorCategory::Workforce => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_domain_errors_are_bad_request() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::EmployeeNotFound,
            ErrorCode::EmployeeEmailExists,
            ErrorCode::ShiftNotFound,
            ErrorCode::InvalidShiftTime,
            ErrorCode::AttendanceNotFound,
            ErrorCode::ShiftOverlap,
            ErrorCode::NoAttendances,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST, "{code:?}");
        }
    }

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::AccountDisabled.http_status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_forbidden_status() {
        assert_eq!(
            ErrorCode::PermissionDenied.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::ManagerRequired.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
