//! Attendance Repository
//!
//! Joined reads use LEFT JOINs: an attendance row whose shift or employee
//! has been deleted is still returned, with that side set to `None`.

use super::{RepoResult, bind_filter, filter_clause};
use chrono::NaiveDate;
use shared::models::{
    Attendance, AttendanceDetail, AttendanceField, EmployeeSummary, FieldFilter, FilterField,
    ShiftSummary,
};
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "attendance_id, shift_id, emp_id, checked_in, is_paid";

const DETAIL_SELECT: &str = "SELECT a.attendance_id, a.shift_id, a.emp_id, a.checked_in, a.is_paid, \
    s.shift_id AS s_shift_id, s.shift_date AS s_shift_date, s.start_time AS s_start_time, \
    s.end_time AS s_end_time, s.is_holiday AS s_is_holiday, \
    e.employee_id AS e_employee_id, e.given_name AS e_given_name, e.surname AS e_surname, \
    e.pay_rate AS e_pay_rate \
    FROM attendance a \
    LEFT JOIN shift s ON s.shift_id = a.shift_id \
    LEFT JOIN employee e ON e.employee_id = a.emp_id";

/// Flat row of [`DETAIL_SELECT`]
#[derive(Debug, sqlx::FromRow)]
struct DetailRow {
    attendance_id: i64,
    shift_id: i64,
    emp_id: i64,
    checked_in: bool,
    is_paid: bool,
    s_shift_id: Option<i64>,
    s_shift_date: Option<NaiveDate>,
    s_start_time: Option<String>,
    s_end_time: Option<String>,
    s_is_holiday: Option<bool>,
    e_employee_id: Option<i64>,
    e_given_name: Option<String>,
    e_surname: Option<String>,
    e_pay_rate: Option<f64>,
}

impl From<DetailRow> for AttendanceDetail {
    fn from(row: DetailRow) -> Self {
        let shift = match (row.s_shift_id, row.s_shift_date, row.s_start_time, row.s_end_time) {
            (Some(shift_id), Some(shift_date), Some(start_time), Some(end_time)) => {
                Some(ShiftSummary {
                    shift_id,
                    shift_date,
                    start_time,
                    end_time,
                    is_holiday: row.s_is_holiday.unwrap_or(false),
                })
            }
            _ => None,
        };
        let employee = row.e_employee_id.map(|employee_id| EmployeeSummary {
            employee_id,
            given_name: row.e_given_name.unwrap_or_default(),
            surname: row.e_surname.unwrap_or_default(),
            pay_rate: row.e_pay_rate.unwrap_or(0.0),
        });

        AttendanceDetail {
            attendance: Attendance {
                attendance_id: row.attendance_id,
                shift_id: row.shift_id,
                emp_id: row.emp_id,
                checked_in: row.checked_in,
                is_paid: row.is_paid,
            },
            shift,
            employee,
        }
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Attendance>> {
    let sql = format!("SELECT {COLUMNS} FROM attendance ORDER BY attendance_id");
    let rows = sqlx::query_as::<_, Attendance>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_field(
    pool: &SqlitePool,
    filter: &FieldFilter<AttendanceField>,
) -> RepoResult<Vec<Attendance>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM attendance WHERE {} ORDER BY attendance_id",
        filter_clause(filter.field.column(), &filter.value)
    );
    let query = sqlx::query_as::<_, Attendance>(&sql);
    let rows = bind_filter(query, &filter.value).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Attendance>> {
    let sql = format!("SELECT {COLUMNS} FROM attendance WHERE attendance_id = ?");
    let row = sqlx::query_as::<_, Attendance>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Every attendance row joined to its shift and employee
pub async fn find_all_expanded(pool: &SqlitePool) -> RepoResult<Vec<AttendanceDetail>> {
    let sql = format!("{DETAIL_SELECT} ORDER BY a.attendance_id");
    let rows = sqlx::query_as::<_, DetailRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(AttendanceDetail::from).collect())
}

/// One employee's attendance rows joined to their shifts
pub async fn find_expanded_for_employee<'e>(
    executor: impl SqliteExecutor<'e>,
    emp_id: i64,
) -> RepoResult<Vec<AttendanceDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE a.emp_id = ? ORDER BY a.attendance_id");
    let rows = sqlx::query_as::<_, DetailRow>(&sql)
        .bind(emp_id)
        .fetch_all(executor)
        .await?;
    Ok(rows.into_iter().map(AttendanceDetail::from).collect())
}

/// Insert a new, unpaid attendance row and return its id
pub async fn insert<'e>(
    executor: impl SqliteExecutor<'e>,
    shift_id: i64,
    emp_id: i64,
    checked_in: bool,
) -> RepoResult<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO attendance (shift_id, emp_id, checked_in, is_paid) VALUES (?1, ?2, ?3, 0) RETURNING attendance_id",
    )
    .bind(shift_id)
    .bind(emp_id)
    .bind(checked_in)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Reassign shift/employee; `checked_in = None` keeps the stored flag.
/// Returns the number of rows touched.
pub async fn update_assignment<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    shift_id: i64,
    emp_id: i64,
    checked_in: Option<bool>,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE attendance SET shift_id = ?1, emp_id = ?2, checked_in = COALESCE(?3, checked_in) WHERE attendance_id = ?4",
    )
    .bind(shift_id)
    .bind(emp_id)
    .bind(checked_in)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected())
}

pub async fn set_checked_in(pool: &SqlitePool, id: i64, checked_in: bool) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE attendance SET checked_in = ? WHERE attendance_id = ?")
        .bind(checked_in)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn set_paid(pool: &SqlitePool, id: i64, is_paid: bool) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE attendance SET is_paid = ? WHERE attendance_id = ?")
        .bind(is_paid)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM attendance WHERE attendance_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
