use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form,
};
use crate::api::dtos::responses::{skill_options, MemberView};
use crate::api::extractors::auth::AuthUser;
use crate::api::flash::Flash;
use crate::api::views::{page_context, redirect_with, render};
use crate::domain::models::user::{SkillRatings, Station};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

fn station_labels() -> Vec<&'static str> {
    Station::ALL.iter().map(|s| s.label()).collect()
}

pub async fn skill_maintenance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let members = state.user_repo.list_by_age().await?;
    let views: Vec<MemberView> = members.iter().map(MemberView::from).collect();

    let mut context = page_context(&user);
    context.insert("stations", &station_labels());
    context.insert("users", &views);
    render(&state, &cookies, "skill_maintenance.html", context)
}

pub async fn skill_update_page(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.user_repo.find_by_id(user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let mut context = page_context(&user);
    context.insert("target", &MemberView::from(&target));
    context.insert("options", &skill_options());
    render(&state, &cookies, "skill_update.html", context)
}

/// Overwrites all four ratings with whatever integers were submitted.
pub async fn skill_update(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Path(user_id): Path<i64>,
    Form(skills): Form<SkillRatings>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.user_repo.update_skills(user_id, &skills).await?;

    info!("User {} updated skills of user {}: {:?}", user.id, updated.id, skills);

    Ok(redirect_with(&cookies, Flash::SkillsUpdated, "/skill_maintenance"))
}
