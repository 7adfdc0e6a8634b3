use shift_scheduler::{
    api::router::create_router,
    config::Config,
    infra::factory::{build_state, run_migrations},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_migrations(&pool).await;

        let config = Config {
            database_url: db_url,
            port: 0,
            secret_key: "test-secret".to_string(),
            session_ttl_hours: 12,
            cookie_secure: false,
        };

        let state = Arc::new(build_state(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session={}", token));
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session={}", token));
        }
        self.router.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }

    pub async fn register(&self, name: &str, age: i64, code: &str, password: &str) {
        let response = self.post_form(
            "/register",
            &format!("name={}&age={}&code={}&password={}", name, age, code, password),
            None,
        ).await;

        if response.status() != StatusCode::SEE_OTHER {
            panic!("Registration failed in test helper: status {}", response.status());
        }
    }

    /// Logs in and returns the raw session token.
    pub async fn login(&self, code: &str, password: &str) -> String {
        let response = self.post_form("/", &format!("code={}&password={}", code, password), None).await;

        if response.status() != StatusCode::SEE_OTHER {
            panic!("Login failed in test helper: status {}", response.status());
        }

        cookie_value(&response, "session").expect("No session cookie returned")
    }

    pub async fn register_and_login(&self, name: &str, age: i64, code: &str) -> String {
        self.register(name, age, code, "secret-pw").await;
        self.login(code, "secret-pw").await
    }

    pub async fn user_id(&self, code: &str) -> i64 {
        self.state.user_repo.find_by_code(code).await.unwrap()
            .expect("User not found")
            .id
    }

    pub async fn add_shift(&self, session: &str, date: &str, start: &str, end: &str, break_time: f64) {
        let response = self.post_form(
            "/add_shift",
            &format!("start_date={}&start_time={}&end_time={}&break_time={}", date, start, end, break_time),
            Some(session),
        ).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "add_shift failed");
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub fn set_cookies(response: &Response) -> Vec<String> {
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|h| h.to_str().unwrap().to_string())
        .collect()
}

/// Value of a non-empty cookie set by the response.
#[allow(dead_code)]
pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    set_cookies(response).into_iter()
        .filter_map(|c| {
            let pair = c.split(';').next()?.trim().to_string();
            pair.strip_prefix(&prefix).map(str::to_string)
        })
        .find(|value| !value.is_empty())
}

#[allow(dead_code)]
pub fn location(response: &Response) -> String {
    response.headers()
        .get(header::LOCATION)
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
