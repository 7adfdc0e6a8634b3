use crate::domain::models::{
    shift::{NewShift, Shift, ShiftEntry},
    user::{NewUser, SkillRatings, User},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<User>, AppError>;
    async fn list_by_age(&self) -> Result<Vec<User>, AppError>;
    async fn set_administrator(&self, id: i64) -> Result<(), AppError>;
    async fn update_skills(&self, id: i64, skills: &SkillRatings) -> Result<User, AppError>;
    /// Removes the user's shifts, then the user, in one transaction.
    /// Returns the number of shifts removed.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}

/// Date ranges are half-open: `start <= start_date < end`.
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    async fn create(&self, shift: &NewShift) -> Result<Shift, AppError>;
    async fn list_by_user_in_range(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<Vec<Shift>, AppError>;
    async fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Shift>, AppError>;
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ShiftEntry>, AppError>;
}
