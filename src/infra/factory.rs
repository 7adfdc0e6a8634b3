use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_shift_repo::SqliteShiftRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    build_state(config, pool)
}

/// Wires repositories, sessions and templates around an already migrated pool.
pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        shift_repo: Arc::new(SqliteShiftRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(config)),
        templates: Arc::new(load_templates()),
    }
}

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("sign_up.html", include_str!("../templates/sign_up.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("add_shift.html", include_str!("../templates/add_shift.html")),
        ("view_shift.html", include_str!("../templates/view_shift.html")),
        ("view_user.html", include_str!("../templates/view_user.html")),
        ("shift_balance.html", include_str!("../templates/shift_balance.html")),
        ("skill_maintenance.html", include_str!("../templates/skill_maintenance.html")),
        ("skill_update.html", include_str!("../templates/skill_update.html")),
    ])
    .expect("Failed to load page templates");
    tera
}

pub async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
