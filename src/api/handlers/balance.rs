use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use crate::api::dtos::requests::MonthQuery;
use crate::api::extractors::auth::AuthUser;
use crate::api::views::{page_context, render};
use crate::domain::services::balance::{rank_by_hours, total_hours_by_user};
use crate::domain::services::calendar::MonthRange;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Local;
use std::collections::HashMap;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

pub async fn shift_balance(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (year, month) = query.or_today(Local::now().date_naive());
    let range = MonthRange::resolve(year, month)?;

    let shifts = state.shift_repo.list_in_range(range.start, range.end).await?;
    let totals = total_hours_by_user(&shifts);

    let names: HashMap<i64, String> = state.user_repo.list_by_age().await?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect();
    let ranking = rank_by_hours(totals, &names);

    debug!("Ranked {} users from {} shifts for {}-{:02}", ranking.len(), shifts.len(), range.year, range.month);

    let mut context = page_context(&user);
    context.insert("year", &range.year);
    context.insert("month", &range.month);
    context.insert("ranking", &ranking);
    render(&state, &cookies, "shift_balance.html", context)
}
