mod common;

use axum::http::{StatusCode, header};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_short_link(&pool, "abc123", "https://example.com/target").await;
    let server = common::create_test_server(pool.clone());

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/target"
    );
}

#[sqlx::test]
async fn test_redirect_increments_clicks(pool: SqlitePool) {
    common::create_test_short_link(&pool, "count", "https://example.com").await;
    let server = common::create_test_server(pool.clone());

    server.get("/count").await.assert_status(StatusCode::FOUND);
    assert_eq!(common::get_click_count(&pool, "count").await, 1);

    server.get("/count").await.assert_status(StatusCode::FOUND);
    assert_eq!(common::get_click_count(&pool, "count").await, 2);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    common::create_test_short_link(&pool, "exists", "https://example.com").await;
    let server = common::create_test_server(pool.clone());

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(common::get_click_count(&pool, "exists").await, 0);
}

#[sqlx::test]
async fn test_stats_page_tracks_redirects(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    server
        .post("/shorten")
        .form(&json!({ "original_url": "https://example.com", "custom_alias": "flow" }))
        .await
        .assert_status_ok();

    let before = server.get("/stats/flow").await;
    before.assert_status_ok();
    assert!(before.text().contains("<dd id=\"click-count\">0</dd>"));

    let redirect = server.get("/flow").await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header(header::LOCATION), "https://example.com");

    let after = server.get("/stats/flow").await;
    assert!(after.text().contains("<dd id=\"click-count\">1</dd>"));

    // Viewing stats does not count as a click
    assert_eq!(common::get_click_count(&pool, "flow").await, 1);
}

#[sqlx::test]
async fn test_stats_page_not_found(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    server.get("/stats/nothing").await.assert_status_not_found();
}
