use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::dtos::requests::{FieldErrors, LoginForm, SignUpForm, CODE_TAKEN};
use crate::api::extractors::auth::AuthUser;
use crate::api::flash::Flash;
use crate::api::views::{redirect_with, render, render_with};
use crate::domain::models::user::NewUser;
use crate::domain::services::auth_service::{hash_password, verify_password, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tera::Context;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;
use tracing::{info, warn};

fn form_context<T: serde::Serialize>(form: &T, errors: &FieldErrors) -> Context {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("errors", errors);
    context
}

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    render(&state, &cookies, "login.html", form_context(&LoginForm::default(), &FieldErrors::new()))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let errors = form.validate();
    if !errors.is_empty() {
        let context = form_context(&form.for_redisplay(), &errors);
        return Ok(render(&state, &cookies, "login.html", context)?.into_response());
    }

    // Unknown code and wrong password fail identically.
    if let Some(user) = state.user_repo.find_by_code(&form.code).await?
        && verify_password(&form.password, &user.password_hash)
    {
        let token = state.auth_service.issue_session(&user)?;
        set_session_cookie(&cookies, &token, &state);

        info!("User logged in: {}", user.id);
        return Ok(Redirect::to("/index").into_response());
    }

    warn!("Failed login attempt");
    let context = form_context(&form.for_redisplay(), &errors);
    Ok(render_with(&state, &cookies, "login.html", context, &[Flash::LoginFailed])?.into_response())
}

pub async fn logout(
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out: {}", user.id);

    Ok(redirect_with(&cookies, Flash::LoggedOut, "/"))
}

pub async fn register_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    render(&state, &cookies, "sign_up.html", form_context(&SignUpForm::default(), &FieldErrors::new()))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<SignUpForm>,
) -> Result<Response, AppError> {
    let (mut errors, age) = form.validate();

    if !form.code.trim().is_empty() && state.user_repo.find_by_code(&form.code).await?.is_some() {
        errors.entry("code").or_default().push(CODE_TAKEN.to_string());
    }

    if !errors.is_empty() {
        let context = form_context(&form.for_redisplay(), &errors);
        return Ok(render(&state, &cookies, "sign_up.html", context)?.into_response());
    }

    let password_hash = hash_password(&form.password)?;
    let created = state.user_repo.create(&NewUser {
        name: form.name,
        code: form.code,
        password_hash,
        age,
    }).await?;

    info!("Registered user: {}", created.id);

    Ok(redirect_with(&cookies, Flash::Registered, "/").into_response())
}

fn set_session_cookie(cookies: &Cookies, token: &str, state: &AppState) {
    let mut session = Cookie::new(SESSION_COOKIE, token.to_string());
    session.set_http_only(true);
    session.set_secure(state.config.cookie_secure);
    session.set_same_site(SameSite::Strict);
    session.set_path("/");
    session.set_max_age(Duration::seconds(state.auth_service.session_ttl().num_seconds()));
    cookies.add(session);
}
