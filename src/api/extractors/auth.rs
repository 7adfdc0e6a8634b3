use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use crate::api::flash::{self, Flash};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::SESSION_COOKIE;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tracing::{debug, Span};

/// The logged-in user, re-read from the store on every request.
///
/// Rejection sends the browser back to the login page with a notice.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .cloned()
            .ok_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user_id = cookies.get(SESSION_COOKIE)
            .and_then(|cookie| app_state.auth_service.verify_session(cookie.value()));

        let Some(user_id) = user_id else {
            return Err(login_required(&cookies));
        };

        let user = app_state.user_repo.find_by_id(user_id).await
            .map_err(IntoResponse::into_response)?;

        let Some(user) = user else {
            debug!("Session refers to missing user {}", user_id);
            return Err(login_required(&cookies));
        };

        Span::current().record("user_id", user.id);

        Ok(AuthUser(user))
    }
}

fn login_required(cookies: &Cookies) -> Response {
    if cookies.get(SESSION_COOKIE).is_some() {
        cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());
    }
    flash::push(cookies, Flash::LoginRequired);
    Redirect::to("/").into_response()
}
