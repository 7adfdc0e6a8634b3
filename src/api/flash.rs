//! One-shot notices carried across a redirect.
//!
//! The `flash` cookie holds a comma separated list of message codes; the
//! localized text is resolved when the next page renders, and the cookie is
//! cleared at that point.

use tower_cookies::{Cookie, Cookies};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    LoginRequired,
    LoginFailed,
    LoggedOut,
    Registered,
    ShiftAdded,
    AlreadyAdmin,
    PromotedToAdmin,
    SkillsUpdated,
}

impl Flash {
    const ALL: [Flash; 8] = [
        Flash::LoginRequired,
        Flash::LoginFailed,
        Flash::LoggedOut,
        Flash::Registered,
        Flash::ShiftAdded,
        Flash::AlreadyAdmin,
        Flash::PromotedToAdmin,
        Flash::SkillsUpdated,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Flash::LoginRequired => "login_required",
            Flash::LoginFailed => "login_failed",
            Flash::LoggedOut => "logged_out",
            Flash::Registered => "registered",
            Flash::ShiftAdded => "shift_added",
            Flash::AlreadyAdmin => "already_admin",
            Flash::PromotedToAdmin => "promoted_admin",
            Flash::SkillsUpdated => "skills_updated",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Flash::LoginRequired => "このページにアクセスするには、ログインが必要です。",
            Flash::LoginFailed => "認証不備です",
            Flash::LoggedOut => "ログアウトしました",
            Flash::Registered => "ユーザー登録しました",
            Flash::ShiftAdded => "シフトを登録しました",
            Flash::AlreadyAdmin => "指定されたユーザーは管理者です",
            Flash::PromotedToAdmin => "指定したユーザーを管理者にしました",
            Flash::SkillsUpdated => "変更しました",
        }
    }
}

fn parse(raw: &str) -> Vec<Flash> {
    raw.split(',').filter_map(Flash::from_code).collect()
}

/// Queues a notice for the next rendered page.
pub fn push(cookies: &Cookies, flash: Flash) {
    let mut codes: Vec<String> = cookies
        .get(FLASH_COOKIE)
        .map(|c| c.value().split(',').filter(|s| !s.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();
    codes.push(flash.code().to_string());

    let mut cookie = Cookie::new(FLASH_COOKIE, codes.join(","));
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Drains queued notices.
pub fn take(cookies: &Cookies) -> Vec<Flash> {
    match cookies.get(FLASH_COOKIE) {
        Some(cookie) => {
            let flashes = parse(cookie.value());
            cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").into());
            flashes
        }
        None => Vec::new(),
    }
}
