//! Attendance Ledger
//!
//! Keeps attendance rows consistent with employees and shifts and enforces
//! the no-overlap rule: one employee never holds two attendances whose
//! shifts fall on the same date with intersecting `[start, end)` times.
//!
//! Add and update run existence check, overlap check and write inside one
//! `BEGIN IMMEDIATE` transaction. The write lock is taken before the overlap
//! read, so two writers can never both pass the check, and writers for
//! different employees queue on the busy timeout instead of failing.

use super::parse_filter;
use crate::db::repository::{RepoError, attendance, employee, shift};
use crate::utils::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use shared::models::{
    Attendance, AttendanceCreate, AttendanceDetail, AttendanceField, AttendanceUpdate,
};
use shared::schedule::{ShiftSpan, ShiftTime};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

/// Build a span from stored `HH:MM` strings without re-applying the
/// quarter-hour rule
fn stored_span(start: &str, end: &str) -> Option<ShiftSpan> {
    Some(ShiftSpan {
        start: ShiftTime::parse(start)?,
        end: ShiftTime::parse(end)?,
    })
}

/// First attendance in `existing` whose shift is on `date` and overlaps
/// `span`, ignoring the row with id `exclude`
///
/// Rows with a missing shift never conflict.
pub fn find_overlap<'a>(
    date: NaiveDate,
    span: &ShiftSpan,
    existing: &'a [AttendanceDetail],
    exclude: Option<i64>,
) -> Option<&'a AttendanceDetail> {
    existing
        .iter()
        .filter(|row| Some(row.attendance.attendance_id) != exclude)
        .find(|row| {
            row.shift.as_ref().is_some_and(|s| {
                s.shift_date == date
                    && stored_span(&s.start_time, &s.end_time).is_some_and(|other| span.overlaps(&other))
            })
        })
}

/// Which write is being checked, for the rejection message
#[derive(Debug, Clone, Copy)]
enum WriteKind {
    Create,
    Update,
}

impl WriteKind {
    fn verb(self) -> &'static str {
        match self {
            WriteKind::Create => "create",
            WriteKind::Update => "update",
        }
    }
}

fn attendance_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::AttendanceNotFound,
        format!("Attendance #{id} not found."),
    )
}

fn require_bool(value: &serde_json::Value, message: &str) -> AppResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| AppError::validation(message.to_string()))
}

#[derive(Debug, Clone)]
pub struct AttendanceLedger {
    pool: SqlitePool,
}

impl AttendanceLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Transaction holding the database write lock from its first statement
    async fn begin_write(&self) -> AppResult<Transaction<'static, Sqlite>> {
        Ok(self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(RepoError::from)?)
    }

    /// Employee exists, then shift exists, then no same-date overlap
    async fn check_assignment(
        conn: &mut SqliteConnection,
        emp_id: i64,
        shift_id: i64,
        exclude: Option<i64>,
        write: WriteKind,
    ) -> AppResult<()> {
        if !employee::exists(&mut *conn, emp_id).await? {
            tracing::warn!(emp_id, shift_id, "Attendance rejected: employee not found");
            return Err(AppError::new(ErrorCode::EmployeeNotFound));
        }
        let Some(target) = shift::find_by_id(&mut *conn, shift_id).await? else {
            tracing::warn!(emp_id, shift_id, "Attendance rejected: shift not found");
            return Err(AppError::new(ErrorCode::ShiftNotFound));
        };
        let span = stored_span(&target.start_time, &target.end_time).ok_or_else(|| {
            AppError::internal(format!(
                "Shift #{shift_id} has unreadable times {}-{}",
                target.start_time, target.end_time
            ))
        })?;

        let existing = attendance::find_expanded_for_employee(&mut *conn, emp_id).await?;
        if let Some(conflict) = find_overlap(target.shift_date, &span, &existing, exclude) {
            tracing::warn!(
                emp_id,
                shift_id,
                conflicting_attendance = conflict.attendance.attendance_id,
                date = %target.shift_date,
                "Attendance rejected: overlapping shift"
            );
            return Err(AppError::with_message(
                ErrorCode::ShiftOverlap,
                format!("Failed to {} attendance: overlapping shift times.", write.verb()),
            ));
        }
        Ok(())
    }

    /// Assign an employee to a shift
    ///
    /// `checkedIn` defaults to false; `isPaid` always starts false.
    pub async fn add(&self, data: AttendanceCreate) -> AppResult<Attendance> {
        let checked_in = data.checked_in.unwrap_or(false);

        let mut tx = self.begin_write().await?;
        Self::check_assignment(&mut tx, data.emp_id, data.shift_id, None, WriteKind::Create).await?;
        let attendance_id =
            attendance::insert(&mut *tx, data.shift_id, data.emp_id, checked_in).await?;
        tx.commit().await.map_err(RepoError::from)?;

        tracing::info!(
            attendance_id,
            emp_id = data.emp_id,
            shift_id = data.shift_id,
            "Attendance created"
        );
        Ok(Attendance {
            attendance_id,
            shift_id: data.shift_id,
            emp_id: data.emp_id,
            checked_in,
            is_paid: false,
        })
    }

    /// Reassign an attendance row; `isPaid` is left alone
    ///
    /// The row must exist; it is excluded from its own overlap check.
    pub async fn update(&self, data: AttendanceUpdate) -> AppResult<()> {
        let mut tx = self.begin_write().await?;
        if attendance::find_by_id(&mut *tx, data.attendance_id).await?.is_none() {
            return Err(attendance_not_found(data.attendance_id));
        }
        Self::check_assignment(
            &mut tx,
            data.emp_id,
            data.shift_id,
            Some(data.attendance_id),
            WriteKind::Update,
        )
        .await?;
        attendance::update_assignment(
            &mut *tx,
            data.attendance_id,
            data.shift_id,
            data.emp_id,
            data.checked_in,
        )
        .await?;
        tx.commit().await.map_err(RepoError::from)?;

        tracing::info!(
            attendance_id = data.attendance_id,
            emp_id = data.emp_id,
            shift_id = data.shift_id,
            "Attendance updated"
        );
        Ok(())
    }

    /// Set `checkedIn`; the value must be a JSON boolean
    pub async fn check_in_out(
        &self,
        attendance_id: i64,
        checked_in: &serde_json::Value,
    ) -> AppResult<String> {
        let checked_in = require_bool(checked_in, "Checked In status must be boolean.")?;
        if attendance::set_checked_in(&self.pool, attendance_id, checked_in).await? == 0 {
            return Err(attendance_not_found(attendance_id));
        }
        tracing::info!(attendance_id, checked_in, "Check in status updated");
        Ok(format!("Check in status updated to {checked_in}."))
    }

    /// Set `isPaid`; the value must be a JSON boolean
    pub async fn toggle_paid(&self, attendance_id: i64, is_paid: &serde_json::Value) -> AppResult<String> {
        let is_paid = require_bool(is_paid, "Payment status must be boolean.")?;
        if attendance::set_paid(&self.pool, attendance_id, is_paid).await? == 0 {
            return Err(attendance_not_found(attendance_id));
        }
        tracing::info!(attendance_id, is_paid, "Paid status updated");
        Ok(format!("Paid status updated to {is_paid}."))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Attendance> {
        attendance::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| attendance_not_found(id))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Attendance>> {
        Ok(attendance::find_all(&self.pool).await?)
    }

    pub async fn get_by_field(&self, key: &str, value: &str) -> AppResult<Vec<Attendance>> {
        let filter = parse_filter::<AttendanceField>(key, value)?;
        Ok(attendance::find_by_field(&self.pool, &filter).await?)
    }

    /// Every row joined to its shift and employee
    pub async fn get_all_expanded(&self) -> AppResult<Vec<AttendanceDetail>> {
        Ok(attendance::find_all_expanded(&self.pool).await?)
    }

    /// One employee's rows joined to their shifts
    pub async fn get_for_employee(&self, emp_id: i64) -> AppResult<Vec<AttendanceDetail>> {
        Ok(attendance::find_expanded_for_employee(&self.pool, emp_id).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        if attendance::delete(&self.pool, id).await? == 0 {
            return Err(attendance_not_found(id));
        }
        tracing::info!(attendance_id = id, "Attendance deleted");
        Ok(format!("Attendance #{id} deleted."))
    }
}
