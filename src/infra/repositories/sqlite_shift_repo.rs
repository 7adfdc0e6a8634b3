use crate::domain::{
    models::shift::{NewShift, Shift, ShiftEntry},
    ports::ShiftRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteShiftRepo {
    pool: SqlitePool,
}

impl SqliteShiftRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftRepository for SqliteShiftRepo {
    async fn create(&self, shift: &NewShift) -> Result<Shift, AppError> {
        sqlx::query_as::<_, Shift>(
            r#"INSERT INTO shifts (user_id, start_date, start_time, end_time, break_time)
               VALUES (?, ?, ?, ?, ?)
               RETURNING id, user_id, start_date, start_time, end_time, break_time"#
        )
            .bind(shift.user_id)
            .bind(shift.start_date)
            .bind(shift.start_time)
            .bind(shift.end_time)
            .bind(shift.break_time)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user_in_range(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<Vec<Shift>, AppError> {
        sqlx::query_as::<_, Shift>(
            "SELECT id, user_id, start_date, start_time, end_time, break_time FROM shifts
             WHERE user_id = ? AND start_date >= ? AND start_date < ?
             ORDER BY start_date ASC"
        )
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Shift>, AppError> {
        sqlx::query_as::<_, Shift>(
            "SELECT id, user_id, start_date, start_time, end_time, break_time FROM shifts
             WHERE start_date >= ? AND start_date < ?"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ShiftEntry>, AppError> {
        sqlx::query_as::<_, ShiftEntry>(
            "SELECT s.id, s.user_id, s.start_date, s.start_time, s.end_time, s.break_time, u.name AS user_name
             FROM shifts s JOIN users u ON u.id = s.user_id
             WHERE s.start_date = ?"
        )
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
