//! Shift Catalog - shift CRUD behind the quarter-hour time rules

use super::parse_filter;
use crate::db::repository::{RepoError, shift};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Shift, ShiftCreate, ShiftField, ShiftUpdate};
use shared::schedule::validate_shift_span;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct ShiftCatalog {
    pool: SqlitePool,
}

impl ShiftCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate the span, then persist; nothing is written on failure
    pub async fn add(&self, data: ShiftCreate) -> AppResult<Shift> {
        let span = validate_shift_span(&data.start_time, &data.end_time).map_err(|e| {
            tracing::warn!(date = %data.shift_date, start = %data.start_time, end = %data.end_time, reason = %e, "Shift rejected");
            AppError::with_message(
                ErrorCode::InvalidShiftTime,
                format!("Failed to create shift due to: {e}"),
            )
        })?;

        let created = shift::create(&self.pool, data.shift_date, span, data.is_holiday)
            .await
            .map_err(|e| AppError::database(format!("Failed to create shift due to: {e}")))?;

        tracing::info!(shift_id = created.shift_id, date = %created.shift_date, "Shift created");
        Ok(created)
    }

    /// Replace a shift's date, times and holiday flag
    ///
    /// Attendance rows already pointing at the shift are not re-checked
    /// for overlap.
    pub async fn update(&self, data: ShiftUpdate) -> AppResult<()> {
        let span = validate_shift_span(&data.start_time, &data.end_time).map_err(|e| {
            tracing::warn!(shift_id = data.shift_id, reason = %e, "Shift update rejected");
            AppError::with_message(
                ErrorCode::InvalidShiftTime,
                format!("Failed to update shift due to: {e}"),
            )
        })?;

        shift::update(&self.pool, data.shift_id, data.shift_date, span, data.is_holiday)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(msg) => {
                    tracing::warn!(shift_id = data.shift_id, "Shift update on missing shift");
                    AppError::with_message(
                        ErrorCode::ShiftNotFound,
                        format!("Failed to update shift due to: {msg}"),
                    )
                }
                other => AppError::from(other),
            })?;

        tracing::info!(shift_id = data.shift_id, "Shift updated");
        Ok(())
    }

    pub async fn get_all(&self) -> AppResult<Vec<Shift>> {
        Ok(shift::find_all(&self.pool).await?)
    }

    /// Case-insensitive key and text-value match
    pub async fn get_by_field(&self, key: &str, value: &str) -> AppResult<Vec<Shift>> {
        let filter = parse_filter::<ShiftField>(key, value)?;
        Ok(shift::find_by_field(&self.pool, &filter).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        shift::delete(&self.pool, id).await.map_err(|e| match e {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::ShiftNotFound, msg),
            other => AppError::from(other),
        })?;
        tracing::info!(shift_id = id, "Shift deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::memory_pool;
    use chrono::NaiveDate;

    fn create(start: &str, end: &str) -> ShiftCreate {
        ShiftCreate {
            shift_date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            start_time: start.into(),
            end_time: end.into(),
            is_holiday: false,
        }
    }

    #[tokio::test]
    async fn test_add_normalizes_times() {
        let catalog = ShiftCatalog::new(memory_pool().await);
        let shift = catalog.add(create("9:00", "10:15")).await.unwrap();
        assert_eq!(shift.start_time, "09:00");
        assert_eq!(shift.end_time, "10:15");
    }

    #[tokio::test]
    async fn test_add_reports_first_failing_check() {
        let catalog = ShiftCatalog::new(memory_pool().await);

        let err = catalog.add(create("09:05", "10:00")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidShiftTime);
        assert_eq!(
            err.message,
            "Failed to create shift due to: Start time not within 24 hours of a day or minutes not in 15 minutes interval."
        );

        let err = catalog.add(create("09:00", "24:00")).await.unwrap_err();
        assert!(err.message.contains("End time not within 24 hours"));

        let err = catalog.add(create("10:00", "09:00")).await.unwrap_err();
        assert_eq!(
            err.message,
            "Failed to create shift due to: End time must be after start time."
        );

        assert!(catalog.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_shift() {
        let catalog = ShiftCatalog::new(memory_pool().await);
        let err = catalog
            .update(ShiftUpdate {
                shift_id: 0,
                shift_date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
                start_time: "09:00".into(),
                end_time: "10:00".into(),
                is_holiday: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ShiftNotFound);
        assert_eq!(
            err.message,
            "Failed to update shift due to: Shift with ID #0 does not exist."
        );
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let catalog = ShiftCatalog::new(memory_pool().await);
        let err = catalog
            .update(ShiftUpdate {
                shift_id: 0,
                shift_date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
                start_time: "10:00".into(),
                end_time: "10:00".into(),
                is_holiday: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidShiftTime);
    }

    #[tokio::test]
    async fn test_filter_and_delete() {
        let catalog = ShiftCatalog::new(memory_pool().await);
        let shift = catalog.add(create("09:00", "17:00")).await.unwrap();
        catalog.add(create("18:00", "20:00")).await.unwrap();

        let found = catalog.get_by_field("STARTTIME", "9:00").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].shift_id, shift.shift_id);

        let err = catalog.get_by_field("salary", "1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        catalog.delete(shift.shift_id).await.unwrap();
        let err = catalog.delete(shift.shift_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ShiftNotFound);
    }
}
