use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Form,
};
use crate::api::dtos::requests::{AddShiftForm, DayQuery, MonthQuery};
use crate::api::dtos::responses::ShiftView;
use crate::api::extractors::auth::AuthUser;
use crate::api::flash::Flash;
use crate::api::views::{page_context, redirect_with, render};
use crate::domain::services::calendar::{DayView, MonthRange};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Local;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

pub async fn index(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (year, month) = query.or_today(Local::now().date_naive());
    let range = MonthRange::resolve(year, month)?;

    let shifts = state.shift_repo.list_by_user_in_range(user.id, range.start, range.end).await?;
    let total_hours: f64 = shifts.iter().map(|s| s.worked_hours()).sum();
    let views: Vec<ShiftView> = shifts.iter().map(ShiftView::from).collect();

    let mut context = page_context(&user);
    context.insert("year", &range.year);
    context.insert("month", &range.month);
    context.insert("shifts", &views);
    context.insert("total_hours", &total_hours);
    render(&state, &cookies, "home.html", context)
}

pub async fn add_shift_page(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (year, month) = query.or_today(Local::now().date_naive());
    let range = MonthRange::resolve(year, month)?;

    let mut context = page_context(&user);
    context.insert("year", &range.year);
    context.insert("month", &range.month);
    context.insert("default_date", &range.start.format("%Y-%m-%d").to_string());
    render(&state, &cookies, "add_shift.html", context)
}

pub async fn add_shift(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Form(form): Form<AddShiftForm>,
) -> Result<impl IntoResponse, AppError> {
    let new_shift = form.parse(user.id)?;
    let created = state.shift_repo.create(&new_shift).await?;

    info!("User {} added shift {} on {}", user.id, created.id, created.start_date);

    Ok(redirect_with(&cookies, Flash::ShiftAdded, "/index"))
}

pub async fn view_shift(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Query(query): Query<DayQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (year, month, day) = query.or_today(Local::now().date_naive());
    let view = DayView::resolve(year, month, day, query.explicit_date()?)?;

    let entries = state.shift_repo.list_by_date(view.date).await?;
    let shifts: Vec<ShiftView> = entries.iter().map(ShiftView::from).collect();

    let mut context = page_context(&user);
    context.insert("year", &view.year);
    context.insert("month", &view.month);
    context.insert("day", &view.day);
    context.insert("date", &view.date.format("%Y-%m-%d").to_string());
    context.insert("shifts", &shifts);
    render(&state, &cookies, "view_shift.html", context)
}
