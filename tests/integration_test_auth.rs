mod common;

use axum::http::StatusCode;
use common::{body_text, cookie_value, location, set_cookies, TestApp};

#[tokio::test]
async fn test_register_login_and_open_home() {
    let app = TestApp::new().await;

    let response = app.post_form("/register", "name=tanaka&age=30&code=E001&password=pw123", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(cookie_value(&response, "flash").as_deref(), Some("registered"));

    let user = app.state.user_repo.find_by_code("E001").await.unwrap().unwrap();
    assert_eq!(user.name, "tanaka");
    assert_eq!(user.age, Some(30));
    assert_eq!(user.administrator, "0");
    assert_eq!((user.counter, user.grill, user.checkout, user.prep), (0, 0, 0, 0));
    assert_ne!(user.password_hash, "pw123");
    assert!(user.password_hash.starts_with("$argon2"));

    let response = app.post_form("/", "code=E001&password=pw123", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/index");
    let session = cookie_value(&response, "session").expect("session cookie");
    assert!(set_cookies(&response).iter().any(|c| c.starts_with("session=") && c.contains("HttpOnly")));

    let response = app.get("/index", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("tanaka"));
}

#[tokio::test]
async fn test_login_failure_is_generic() {
    let app = TestApp::new().await;
    app.register("suzuki", 25, "E100", "right").await;

    for body in ["code=E100&password=wrong", "code=NOPE&password=right"] {
        let response = app.post_form("/", body, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(cookie_value(&response, "session").is_none());

        let text = body_text(response).await;
        assert!(text.contains("認証不備です"), "missing generic failure for {body}");
    }
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new().await;

    let response = app.post_form("/", "code=E100&password=", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("この項目は必須です"));
    assert!(!text.contains("認証不備です"));
    assert!(text.contains("value=\"E100\""));
}

#[tokio::test]
async fn test_duplicate_code_is_rejected() {
    let app = TestApp::new().await;
    app.register("sato", 40, "E200", "pw").await;

    let response = app.post_form("/register", "name=kato&age=22&code=E200&password=pw2", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("その従業員コードは既に使用されています"));
    // prior input is kept, the password is not echoed back
    assert!(text.contains("value=\"kato\""));
    assert!(!text.contains("pw2"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE code = 'E200'")
        .fetch_one(&app.pool).await.unwrap();
    assert_eq!(count, 1);

    let kato: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name = 'kato'")
        .fetch_one(&app.pool).await.unwrap();
    assert_eq!(kato, 0);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = TestApp::new().await;
    app.register("sato", 40, "E200", "pw").await;

    let response = app.post_form("/register", "name=sato&age=22&code=E201&password=pw", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_registration_validates_age() {
    let app = TestApp::new().await;

    let response = app.post_form("/register", "name=ito&age=abc&code=E300&password=pw", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("整数を入力してください"));
    assert!(app.state.user_repo.find_by_code("E300").await.unwrap().is_none());
}

#[tokio::test]
async fn test_protected_routes_redirect_to_login() {
    let app = TestApp::new().await;

    for uri in [
        "/index",
        "/add_shift",
        "/view_shift",
        "/member",
        "/shift_balance",
        "/skill_maintenance",
        "/skill_update/1",
        "/update/1",
        "/logout",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri} was not gated");
        assert_eq!(location(&response), "/");
        assert_eq!(cookie_value(&response, "flash").as_deref(), Some("login_required"));
    }

    let response = app.post_form("/delete/1", "", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.get_with_cookie("/", "flash=login_required").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("このページにアクセスするには、ログインが必要です。"));
}

#[tokio::test]
async fn test_tampered_session_is_rejected() {
    let app = TestApp::new().await;
    let session = app.register_and_login("mori", 33, "E400").await;

    let response = app.get("/index", Some(&format!("{}x", session))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = app.get("/index", Some("not-a-token")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = TestApp::new().await;
    let session = app.register_and_login("yamada", 28, "E500").await;

    let response = app.get("/logout", Some(&session)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(cookie_value(&response, "flash").as_deref(), Some("logged_out"));
    assert!(set_cookies(&response).iter().any(|c| c.starts_with("session=;") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn test_flash_is_shown_once() {
    let app = TestApp::new().await;

    let response = app.get_with_cookie("/", "flash=registered").await;
    assert!(set_cookies(&response).iter().any(|c| c.starts_with("flash=;")));
    assert!(body_text(response).await.contains("ユーザー登録しました"));

    let response = app.get("/", None).await;
    assert!(!body_text(response).await.contains("ユーザー登録しました"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("ok"));
}
