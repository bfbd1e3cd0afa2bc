#![allow(dead_code)]

use axum_test::TestServer;
use linkboard::config::ShortenerSettings;
use linkboard::routes::router;
use linkboard::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn create_test_short_link(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO short_links (original_url, short_alias) VALUES (?, ?) RETURNING id")
        .bind(url)
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_click_count(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM short_links WHERE short_alias = ?")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_short_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_category(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_categories(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, category_id: i64, label: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (category_id, label, url) VALUES (?, ?, ?) RETURNING id")
        .bind(category_id)
        .bind(label)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), &ShortenerSettings::default())
}

pub fn create_test_state_with(pool: SqlitePool, settings: ShortenerSettings) -> AppState {
    AppState::new(Arc::new(pool), &settings)
}

/// Full application router, as served in production minus path normalization.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
