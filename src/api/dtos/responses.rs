use serde::Serialize;
use crate::domain::models::{
    shift::{Shift, ShiftEntry},
    user::{SkillLevel, Station, User},
};

#[derive(Debug, Serialize)]
pub struct ShiftView {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_time: f64,
    pub hours: f64,
    pub user_name: Option<String>,
}

impl From<&Shift> for ShiftView {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id,
            date: shift.start_date.format("%Y-%m-%d").to_string(),
            start_time: shift.start_time.format("%H:%M").to_string(),
            end_time: shift.end_time.format("%H:%M").to_string(),
            break_time: shift.break_time,
            hours: shift.worked_hours(),
            user_name: None,
        }
    }
}

impl From<&ShiftEntry> for ShiftView {
    fn from(entry: &ShiftEntry) -> Self {
        Self {
            user_name: Some(entry.user_name.clone()),
            ..Self::from(&entry.shift)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillView {
    pub station: &'static str,
    pub field: &'static str,
    pub rating: i64,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct MemberView {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub age: Option<i64>,
    pub is_admin: bool,
    pub skills: Vec<SkillView>,
}

impl From<&User> for MemberView {
    fn from(user: &User) -> Self {
        let ratings = user.skills();
        let skills = Station::ALL
            .iter()
            .map(|station| {
                let rating = station.rating(&ratings);
                SkillView {
                    station: station.label(),
                    field: station.field(),
                    rating,
                    label: SkillLevel::from_rating(rating)
                        .map(|level| level.label().to_string())
                        .unwrap_or_else(|| rating.to_string()),
                }
            })
            .collect();

        Self {
            id: user.id,
            name: user.name.clone(),
            code: user.code.clone(),
            age: user.age,
            is_admin: user.is_admin(),
            skills,
        }
    }
}

/// Choices offered by the skill form.
#[derive(Debug, Serialize)]
pub struct SkillOption {
    pub rating: i64,
    pub label: &'static str,
}

pub fn skill_options() -> Vec<SkillOption> {
    SkillLevel::ALL
        .iter()
        .map(|level| SkillOption { rating: level.rating(), label: level.label() })
        .collect()
}
