//! Earnings Aggregator
//!
//! Reduces joined attendance rows inside a date window to hour and wage
//! tallies by {regular, holiday} x {outstanding, paid}.
//!
//! Hours are `end - start` on the same day; shifts crossing midnight are
//! not representable. All arithmetic runs on `Decimal`, output is `f64`
//! rounded to 2 decimal places.

use crate::db::repository::{attendance, employee};
use crate::utils::{AppError, AppResult, ErrorCode};
use rust_decimal::prelude::*;
use shared::models::serde_helpers::parse_date;
use shared::models::{AttendanceDetail, DateRange, EarningsView};
use shared::schedule::ShiftTime;
use sqlx::SqlitePool;

const DECIMAL_PLACES: u32 = 2;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite pay rate in earnings calculation, defaulting to zero");
        Decimal::ZERO
    })
}

fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `(endHour - startHour) + (endMinute - startMinute) / 60`
fn hours_worked(start: &str, end: &str) -> Option<Decimal> {
    let start = ShiftTime::parse(start)?;
    let end = ShiftTime::parse(end)?;
    let hours = Decimal::from(i32::from(end.hour()) - i32::from(start.hour()));
    let minutes = Decimal::from(i32::from(end.minute()) - i32::from(start.minute()));
    Some(hours + minutes / Decimal::from(60))
}

#[derive(Default)]
struct Buckets {
    regular_hours_outstanding: Decimal,
    holiday_hours_outstanding: Decimal,
    regular_hours_paid: Decimal,
    holiday_hours_paid: Decimal,
    regular_wages_owing: Decimal,
    holiday_wages_owing: Decimal,
    regular_wages_paid: Decimal,
    holiday_wages_paid: Decimal,
}

/// Parse an inclusive `YYYY-MM-DD` window
pub fn parse_range(start: &str, end: &str) -> AppResult<DateRange> {
    let parse = |field: &str, value: &str| {
        parse_date(value).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid {field} '{value}', expected YYYY-MM-DD."
            ))
        })
    };
    Ok(DateRange::new(parse("startDate", start)?, parse("endDate", end)?))
}

/// Pure reduction over pre-joined rows
///
/// Rows outside `range` (or without a shift) are dropped. Of the rest,
/// only checked-in rows add to the tallies, but all of them are returned in
/// `attendances_list`. A row whose employee is gone adds hours but no wages.
pub fn aggregate(rows: &[AttendanceDetail], range: DateRange) -> EarningsView {
    let in_range: Vec<AttendanceDetail> = rows
        .iter()
        .filter(|row| row.shift.as_ref().is_some_and(|s| range.contains(s.shift_date)))
        .cloned()
        .collect();

    let mut b = Buckets::default();
    for row in in_range.iter().filter(|r| r.attendance.checked_in) {
        let Some(shift) = row.shift.as_ref() else {
            continue;
        };
        let Some(hours) = hours_worked(&shift.start_time, &shift.end_time) else {
            tracing::warn!(shift_id = shift.shift_id, "Skipping shift with unreadable times");
            continue;
        };
        let rate = row
            .employee
            .as_ref()
            .map(|e| to_decimal(e.pay_rate))
            .unwrap_or(Decimal::ZERO);
        let wages = hours * rate;

        match (row.attendance.is_paid, shift.is_holiday) {
            (false, false) => {
                b.regular_hours_outstanding += hours;
                b.regular_wages_owing += wages;
            }
            (false, true) => {
                b.holiday_hours_outstanding += hours;
                b.holiday_wages_owing += wages;
            }
            (true, false) => {
                b.regular_hours_paid += hours;
                b.regular_wages_paid += wages;
            }
            (true, true) => {
                b.holiday_hours_paid += hours;
                b.holiday_wages_paid += wages;
            }
        }
    }

    EarningsView {
        regular_hours_outstanding: to_f64(b.regular_hours_outstanding),
        holiday_hours_outstanding: to_f64(b.holiday_hours_outstanding),
        regular_hours_paid: to_f64(b.regular_hours_paid),
        holiday_hours_paid: to_f64(b.holiday_hours_paid),
        total_hours_outstanding: to_f64(b.regular_hours_outstanding + b.holiday_hours_outstanding),
        total_hours_paid: to_f64(b.regular_hours_paid + b.holiday_hours_paid),
        regular_wages_owing: to_f64(b.regular_wages_owing),
        holiday_wages_owing: to_f64(b.holiday_wages_owing),
        regular_wages_paid: to_f64(b.regular_wages_paid),
        holiday_wages_paid: to_f64(b.holiday_wages_paid),
        attendances_list: in_range,
    }
}

#[derive(Debug, Clone)]
pub struct EarningsService {
    pool: SqlitePool,
}

impl EarningsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Aggregate over every attendance row
    ///
    /// An empty ledger is an error; an empty window is not.
    pub async fn summary_total(&self, range: DateRange) -> AppResult<EarningsView> {
        let rows = attendance::find_all_expanded(&self.pool).await?;
        if rows.is_empty() {
            return Err(AppError::new(ErrorCode::NoAttendances));
        }
        let view = aggregate(&rows, range);
        tracing::info!(
            start = %range.start,
            end = %range.end,
            rows = view.attendances_list.len(),
            "Earnings summary computed"
        );
        Ok(view)
    }

    /// Aggregate over one employee's rows
    pub async fn payment_details_for_employee(
        &self,
        emp_id: i64,
        range: DateRange,
    ) -> AppResult<EarningsView> {
        if !employee::exists(&self.pool, emp_id).await? {
            return Err(AppError::new(ErrorCode::EmployeeNotFound));
        }
        let rows = attendance::find_expanded_for_employee(&self.pool, emp_id).await?;
        let view = aggregate(&rows, range);
        tracing::info!(
            emp_id,
            start = %range.start,
            end = %range.end,
            rows = view.attendances_list.len(),
            "Employee earnings computed"
        );
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::memory_pool;
    use shared::models::{Attendance, EmployeeSummary, ShiftSummary};

    fn row(
        id: i64,
        date: &str,
        (start, end): (&str, &str),
        checked_in: bool,
        is_paid: bool,
        is_holiday: bool,
        pay_rate: Option<f64>,
    ) -> AttendanceDetail {
        AttendanceDetail {
            attendance: Attendance {
                attendance_id: id,
                shift_id: id,
                emp_id: 1,
                checked_in,
                is_paid,
            },
            shift: Some(ShiftSummary {
                shift_id: id,
                shift_date: date.parse().unwrap(),
                start_time: start.into(),
                end_time: end.into(),
                is_holiday,
            }),
            employee: pay_rate.map(|pay_rate| EmployeeSummary {
                employee_id: 1,
                given_name: "Ada".into(),
                surname: "Lovelace".into(),
                pay_rate,
            }),
        }
    }

    fn january() -> DateRange {
        parse_range("2025-01-01", "2025-01-31").unwrap()
    }

    #[test]
    fn test_single_regular_outstanding_row() {
        let rows = [row(1, "2025-01-25", ("10:00", "14:30"), true, false, false, Some(20.0))];
        let view = aggregate(&rows, january());

        assert_eq!(view.regular_hours_outstanding, 4.5);
        assert_eq!(view.regular_wages_owing, 90.0);
        assert_eq!(view.total_hours_outstanding, 4.5);
        assert_eq!(view.holiday_hours_outstanding, 0.0);
        assert_eq!(view.regular_hours_paid, 0.0);
        assert_eq!(view.holiday_hours_paid, 0.0);
        assert_eq!(view.total_hours_paid, 0.0);
        assert_eq!(view.holiday_wages_owing, 0.0);
        assert_eq!(view.regular_wages_paid, 0.0);
        assert_eq!(view.holiday_wages_paid, 0.0);
        assert_eq!(view.attendances_list.len(), 1);
    }

    #[test]
    fn test_buckets() {
        let rows = [
            row(1, "2025-01-02", ("09:00", "17:00"), true, false, false, Some(20.0)),
            row(2, "2025-01-03", ("09:00", "11:15"), true, false, true, Some(20.0)),
            row(3, "2025-01-04", ("09:00", "10:00"), true, true, false, Some(20.0)),
            row(4, "2025-01-05", ("09:45", "12:00"), true, true, true, Some(20.0)),
        ];
        let view = aggregate(&rows, january());

        assert_eq!(view.regular_hours_outstanding, 8.0);
        assert_eq!(view.holiday_hours_outstanding, 2.25);
        assert_eq!(view.regular_hours_paid, 1.0);
        assert_eq!(view.holiday_hours_paid, 2.25);
        assert_eq!(view.total_hours_outstanding, 10.25);
        assert_eq!(view.total_hours_paid, 3.25);
        assert_eq!(view.regular_wages_owing, 160.0);
        assert_eq!(view.holiday_wages_owing, 45.0);
        assert_eq!(view.regular_wages_paid, 20.0);
        assert_eq!(view.holiday_wages_paid, 45.0);
    }

    #[test]
    fn test_unchecked_rows_listed_but_not_counted() {
        let rows = [row(1, "2025-01-25", ("10:00", "14:30"), false, false, false, Some(20.0))];
        let view = aggregate(&rows, january());
        assert_eq!(view.total_hours_outstanding, 0.0);
        assert_eq!(view.regular_wages_owing, 0.0);
        assert_eq!(view.attendances_list.len(), 1);
    }

    #[test]
    fn test_window_is_inclusive() {
        let rows = [
            row(1, "2024-12-31", ("10:00", "11:00"), true, false, false, Some(20.0)),
            row(2, "2025-01-01", ("10:00", "11:00"), true, false, false, Some(20.0)),
            row(3, "2025-01-31", ("10:00", "11:00"), true, false, false, Some(20.0)),
            row(4, "2025-02-01", ("10:00", "11:00"), true, false, false, Some(20.0)),
        ];
        let view = aggregate(&rows, january());
        let ids: Vec<i64> = view
            .attendances_list
            .iter()
            .map(|r| r.attendance.attendance_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(view.total_hours_outstanding, 2.0);
    }

    #[test]
    fn test_dangling_references() {
        let mut no_shift = row(1, "2025-01-25", ("10:00", "11:00"), true, false, false, Some(20.0));
        no_shift.shift = None;
        let no_employee = row(2, "2025-01-25", ("10:00", "12:00"), true, false, false, None);

        let view = aggregate(&[no_shift, no_employee], january());
        assert_eq!(view.attendances_list.len(), 1);
        assert_eq!(view.regular_hours_outstanding, 2.0);
        assert_eq!(view.regular_wages_owing, 0.0);
    }

    #[test]
    fn test_aggregate_is_pure() {
        let rows = [
            row(1, "2025-01-02", ("09:00", "17:00"), true, false, false, Some(17.35)),
            row(2, "2025-01-03", ("09:15", "11:45"), true, true, true, Some(17.35)),
        ];
        assert_eq!(aggregate(&rows, january()), aggregate(&rows, january()));
    }

    #[test]
    fn test_wage_rounding() {
        // 2.25h x 17.35 = 39.0375
        let rows = [row(1, "2025-01-02", ("09:00", "11:15"), true, false, false, Some(17.35))];
        assert_eq!(aggregate(&rows, january()).regular_wages_owing, 39.04);
    }

    #[test]
    fn test_parse_range() {
        let range = parse_range("2025-01-01", "2025-01-31").unwrap();
        assert!(range.contains("2025-01-15".parse().unwrap()));

        let err = parse_range("01/01/2025", "2025-01-31").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Invalid startDate '01/01/2025', expected YYYY-MM-DD.");
        assert!(parse_range("2025-01-01", "").is_err());
    }

    #[tokio::test]
    async fn test_summary_total_requires_attendances() {
        let service = EarningsService::new(memory_pool().await);
        let err = service.summary_total(january()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoAttendances);
        assert_eq!(err.message, "No attendances were found.");
    }

    #[tokio::test]
    async fn test_empty_window_is_not_an_error() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO shift (shift_date, start_time, end_time) VALUES ('2025-03-01', '09:00', '10:00')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO attendance (shift_id, emp_id, checked_in) VALUES (1, 1, 1)")
            .execute(&pool)
            .await
            .unwrap();

        let view = EarningsService::new(pool).summary_total(january()).await.unwrap();
        assert_eq!(view, EarningsView::default());
    }

    #[tokio::test]
    async fn test_employee_must_exist() {
        let service = EarningsService::new(memory_pool().await);
        let err = service
            .payment_details_for_employee(42, january())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee not found.");
    }
}
