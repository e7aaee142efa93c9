//! Shift Repository

use super::{RepoError, RepoResult, bind_filter, filter_clause};
use chrono::NaiveDate;
use shared::models::{FieldFilter, FilterField, Shift, ShiftField};
use shared::schedule::ShiftSpan;
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "shift_id, shift_date, start_time, end_time, is_holiday";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Shift>> {
    let sql = format!("SELECT {COLUMNS} FROM shift ORDER BY shift_date, start_time, shift_id");
    let shifts = sqlx::query_as::<_, Shift>(&sql).fetch_all(pool).await?;
    Ok(shifts)
}

pub async fn find_by_field(
    pool: &SqlitePool,
    filter: &FieldFilter<ShiftField>,
) -> RepoResult<Vec<Shift>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM shift WHERE {} ORDER BY shift_date, start_time, shift_id",
        filter_clause(filter.field.column(), &filter.value)
    );
    let query = sqlx::query_as::<_, Shift>(&sql);
    let shifts = bind_filter(query, &filter.value).fetch_all(pool).await?;
    Ok(shifts)
}

pub async fn find_by_id<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> RepoResult<Option<Shift>> {
    let sql = format!("SELECT {COLUMNS} FROM shift WHERE shift_id = ?");
    let shift = sqlx::query_as::<_, Shift>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(shift)
}

/// Insert a shift whose span has already been validated
pub async fn create(
    pool: &SqlitePool,
    shift_date: NaiveDate,
    span: ShiftSpan,
    is_holiday: bool,
) -> RepoResult<Shift> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO shift (shift_date, start_time, end_time, is_holiday) VALUES (?1, ?2, ?3, ?4) RETURNING shift_id",
    )
    .bind(shift_date)
    .bind(span.start.to_string())
    .bind(span.end.to_string())
    .bind(is_holiday)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shift".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    shift_date: NaiveDate,
    span: ShiftSpan,
    is_holiday: bool,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE shift SET shift_date = ?1, start_time = ?2, end_time = ?3, is_holiday = ?4 WHERE shift_id = ?5",
    )
    .bind(shift_date)
    .bind(span.start.to_string())
    .bind(span.end.to_string())
    .bind(is_holiday)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Shift with ID #{id} does not exist."
        )));
    }
    Ok(())
}

/// Delete one shift; attendance rows referencing it are left alone
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM shift WHERE shift_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Shift with ID #{id} does not exist."
        )));
    }
    Ok(())
}
