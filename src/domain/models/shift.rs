use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Shift {
    pub id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_time: f64,
}

impl Shift {
    /// Net hours on the shift's own date. An end before the start is not
    /// treated as overnight and yields a negative span.
    pub fn worked_hours(&self) -> f64 {
        let span = self.end_time.signed_duration_since(self.start_time);
        span.num_seconds() as f64 / 3600.0 - self.break_time
    }
}

#[derive(Debug, Clone)]
pub struct NewShift {
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_time: f64,
}

/// A shift joined with its owner's display name.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ShiftEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub shift: Shift,
    pub user_name: String,
}
