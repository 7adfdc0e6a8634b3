use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use crate::api::dtos::responses::MemberView;
use crate::api::extractors::auth::AuthUser;
use crate::api::flash::Flash;
use crate::api::views::{page_context, redirect_with, render};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::{error, info};

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let members = state.user_repo.list_by_age().await?;
    let views: Vec<MemberView> = members.iter().map(MemberView::from).collect();

    let mut context = page_context(&user);
    context.insert("users", &views);
    render(&state, &cookies, "view_user.html", context)
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    AuthUser(admin): AuthUser,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    match state.user_repo.delete(user_id).await {
        Ok(removed_shifts) => {
            info!("User {} deleted user {} and {} shifts", admin.id, user_id, removed_shifts);
            Ok(Redirect::to("/member"))
        },
        Err(e) => {
            error!("Failed to delete user {}: {:?}", user_id, e);
            Err(e)
        }
    }
}

pub async fn promote_member(
    State(state): State<Arc<AppState>>,
    AuthUser(admin): AuthUser,
    cookies: Cookies,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.user_repo.find_by_id(user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if target.is_admin() {
        return Ok(redirect_with(&cookies, Flash::AlreadyAdmin, "/member"));
    }

    state.user_repo.set_administrator(target.id).await?;
    info!("User {} promoted user {} to administrator", admin.id, target.id);

    Ok(redirect_with(&cookies, Flash::PromotedToAdmin, "/member"))
}
