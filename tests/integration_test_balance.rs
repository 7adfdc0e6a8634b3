mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_text, TestApp};
use shift_scheduler::domain::services::{balance::total_hours_by_user, calendar::MonthRange};

#[tokio::test]
async fn test_balance_sums_net_hours_per_user() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", 30, "A001").await;
    let alice_id = app.user_id("A001").await;

    app.add_shift(&alice, "2024-05-02", "09:00", "17:00", 1.0).await;
    app.add_shift(&alice, "2024-05-09", "10:00", "14:00", 0.0).await;
    // outside the month
    app.add_shift(&alice, "2024-06-01", "09:00", "17:00", 0.0).await;

    let range = MonthRange::resolve(2024, 5).unwrap();
    let shifts = app.state.shift_repo.list_in_range(range.start, range.end).await.unwrap();
    let totals = total_hours_by_user(&shifts);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get(&alice_id), Some(&11.0));
}

#[tokio::test]
async fn test_balance_page_ranks_highest_first() {
    let app = TestApp::new().await;
    let bob = app.register_and_login("bob", 25, "B001").await;
    let alice = app.register_and_login("alice", 30, "A001").await;
    let carol = app.register_and_login("carol", 41, "C001").await;

    app.add_shift(&bob, "2024-05-03", "09:00", "14:00", 0.0).await;
    app.add_shift(&alice, "2024-05-02", "09:00", "17:00", 1.0).await;
    app.add_shift(&alice, "2024-05-31", "10:00", "14:00", 0.0).await;
    app.add_shift(&carol, "2024-04-30", "09:00", "21:00", 0.0).await;

    let response = app.get("/shift_balance?year=2024&month=5", Some(&bob)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;

    let alice_pos = text.find("alice: 11").expect("alice missing from ranking");
    let bob_pos = text.find("bob: 5").expect("bob missing from ranking");
    assert!(alice_pos < bob_pos);
    assert!(!text.contains("carol:"));
}

#[tokio::test]
async fn test_balance_month_wraps() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", 30, "A001").await;
    app.add_shift(&alice, "2023-12-31", "09:00", "12:00", 0.0).await;

    let text = body_text(app.get("/shift_balance?year=2024&month=0", Some(&alice)).await).await;
    assert!(text.contains("2023年12月"));
    assert!(text.contains("alice: 3"));

    let range = MonthRange::resolve(2024, 0).unwrap();
    assert_eq!(range.start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
}

#[tokio::test]
async fn test_balance_empty_month() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", 30, "A001").await;

    let text = body_text(app.get("/shift_balance?year=2030&month=2", Some(&alice)).await).await;
    assert!(text.contains("この月のシフトはありません。"));
}
