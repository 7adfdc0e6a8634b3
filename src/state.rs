use std::sync::Arc;
use crate::domain::ports::{ShiftRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub shift_repo: Arc<dyn ShiftRepository>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}
