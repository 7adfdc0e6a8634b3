use crate::domain::{
    models::user::{NewUser, SkillRatings, User, ADMIN_FLAG},
    ports::UserRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

const USER_COLUMNS: &str = "id, name, code, password_hash, age, counter, grill, checkout, prep, administrator, created_at";

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, code, password_hash, age, created_at) VALUES (?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
            .bind(&user.name)
            .bind(&user.code)
            .bind(&user.password_hash)
            .bind(user.age)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE code = ?"))
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_age(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY age ASC, id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_administrator(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET administrator = ? WHERE id = ?")
            .bind(ADMIN_FLAG)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".into()));
        }
        Ok(())
    }

    async fn update_skills(&self, id: i64, skills: &SkillRatings) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET counter = ?, grill = ?, checkout = ?, prep = ? WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
            .bind(skills.counter)
            .bind(skills.grill)
            .bind(skills.checkout)
            .bind(skills.prep)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // shifts.user_id has no ON DELETE CASCADE, so dependents go first
        let shifts = sqlx::query("DELETE FROM shifts WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let users = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("SQLite User Deletion Failed: {:?}", e);
                AppError::Database(e)
            })?;

        if users.rows_affected() == 0 {
            // dropping tx rolls back
            return Err(AppError::NotFound("User not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(shifts.rows_affected())
    }
}
