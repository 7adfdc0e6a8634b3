use std::collections::BTreeMap;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::shift::NewShift;
use crate::error::AppError;

/// Field name -> messages, shown next to the offending input.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

pub const REQUIRED: &str = "この項目は必須です";
pub const NOT_AN_INTEGER: &str = "整数を入力してください";
pub const CODE_TAKEN: &str = "その従業員コードは既に使用されています";

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.entry(field).or_default().push(REQUIRED.to_string());
        return false;
    }
    true
}

#[derive(Debug, Deserialize, Default)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

impl MonthQuery {
    /// Missing values fall back to `today`. The month may still be out of
    /// range; the calendar normalises it.
    pub fn or_today(&self, today: NaiveDate) -> (i32, i32) {
        (
            self.year.unwrap_or(today.year()),
            self.month.unwrap_or(today.month() as i32),
        )
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DayQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub start_date: Option<String>,
}

impl DayQuery {
    pub fn or_today(&self, today: NaiveDate) -> (i32, i32, i32) {
        (
            self.year.unwrap_or(today.year()),
            self.month.unwrap_or(today.month() as i32),
            self.day.unwrap_or(today.day() as i32),
        )
    }

    /// The date picker submits an empty string when cleared.
    pub fn explicit_date(&self) -> Result<Option<NaiveDate>, AppError> {
        match self.start_date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_date(raw).map(Some),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct LoginForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "code", &self.code);
        require(&mut errors, "password", &self.password);
        errors
    }

    pub fn for_redisplay(&self) -> Self {
        Self { code: self.code.clone(), password: String::new() }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct SignUpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub password: String,
}

impl SignUpForm {
    /// Checks everything that does not need the store. Code uniqueness is
    /// checked by the handler.
    pub fn validate(&self) -> (FieldErrors, Option<i64>) {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "code", &self.code);
        require(&mut errors, "password", &self.password);

        let mut age = None;
        if require(&mut errors, "age", &self.age) {
            match self.age.trim().parse::<i64>() {
                Ok(value) => age = Some(value),
                Err(_) => errors.entry("age").or_default().push(NOT_AN_INTEGER.to_string()),
            }
        }

        (errors, age)
    }

    pub fn for_redisplay(&self) -> Self {
        Self { password: String::new(), ..self.clone() }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AddShiftForm {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub break_time: String,
}

impl AddShiftForm {
    /// No ordering, overlap or break-length checks; only the formats.
    pub fn parse(&self, user_id: i64) -> Result<NewShift, AppError> {
        // inf and NaN parse as f64 but are not hours
        let break_time = self.break_time.trim().parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::Validation("Invalid break time".into()))?;

        Ok(NewShift {
            user_id,
            start_date: parse_date(&self.start_date)?,
            start_time: parse_time(&self.start_time)?,
            end_time: parse_time(&self.end_time)?,
            break_time,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))
}

// <input type="time"> sends HH:MM, or HH:MM:SS when a step is set.
fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time format".into()))
}
