use axum::response::{Html, Redirect};
use tera::Context;
use tower_cookies::Cookies;
use crate::api::flash::{self, Flash};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

/// Context for pages behind the login gate.
pub fn page_context(user: &User) -> Context {
    let mut context = Context::new();
    context.insert("current_user", user);
    context
}

pub fn render(state: &AppState, cookies: &Cookies, template: &str, context: Context) -> Result<Html<String>, AppError> {
    render_with(state, cookies, template, context, &[])
}

/// Renders a page, showing queued notices followed by `immediate` ones.
pub fn render_with(
    state: &AppState,
    cookies: &Cookies,
    template: &str,
    mut context: Context,
    immediate: &[Flash],
) -> Result<Html<String>, AppError> {
    let mut flashes = flash::take(cookies);
    flashes.extend_from_slice(immediate);

    let messages: Vec<&str> = flashes.iter().map(Flash::message).collect();
    context.insert("messages", &messages);

    Ok(Html(state.templates.render(template, &context)?))
}

pub fn redirect_with(cookies: &Cookies, notice: Flash, to: &str) -> Redirect {
    flash::push(cookies, notice);
    Redirect::to(to)
}
