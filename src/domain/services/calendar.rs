use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use crate::error::AppError;

/// Brings a month one step back into 1..=12, carrying into the year.
/// Only a single step is taken, so month 0 and month -5 both land on
/// December of the previous year.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    if month < 1 {
        (year.saturating_sub(1), 12)
    } else if month > 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month as u32)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year.saturating_add(1), 1) } else { (year, month + 1) }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year.saturating_sub(1), 12) } else { (year, month - 1) }
}

fn first_of(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("Invalid month: {}-{}", year, month)))
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, AppError> {
    let (next_year, next) = next_month(year, month);
    let days = first_of(next_year, next)?.signed_duration_since(first_of(year, month)?).num_days();
    Ok(days as u32)
}

/// Half-open `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRange {
    pub year: i32,
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    pub fn resolve(year: i32, month: i32) -> Result<Self, AppError> {
        let (year, month) = normalize_month(year, month);
        let start = first_of(year, month)?;
        let (end_year, end_month) = next_month(year, month);
        let end = first_of(end_year, end_month)?;

        Ok(Self { year, month, start, end })
    }

    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub date: NaiveDate,
}

impl DayView {
    /// Resolves a navigated day. The month is normalised first, then a day
    /// past the end of the month rolls to the 1st of the next month and a day
    /// below 1 rolls to the last day of the previous month. An explicit date
    /// wins over everything else.
    pub fn resolve(year: i32, month: i32, day: i32, explicit: Option<NaiveDate>) -> Result<Self, AppError> {
        if let Some(date) = explicit {
            return Ok(Self::from_date(date));
        }

        let (year, month) = normalize_month(year, month);
        let days = days_in_month(year, month)? as i32;

        let (year, month, day) = if day > days {
            let (year, month) = next_month(year, month);
            (year, month, 1)
        } else if day < 1 {
            let (year, month) = previous_month(year, month);
            (year, month, days_in_month(year, month)?)
        } else {
            (year, month, day as u32)
        };

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::Validation(format!("Invalid date: {}-{}-{}", year, month, day)))?;

        Ok(Self { year, month, day, date })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month(), day: date.day(), date }
    }
}
