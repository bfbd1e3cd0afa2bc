mod common;

use axum::http::header;
use calamine::{Data, Reader, Xlsx};
use sqlx::SqlitePool;
use std::io::Cursor;

#[sqlx::test]
async fn test_export_links(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Work Stuff").await;
    common::create_test_link(&pool, id, "Docs", "https://docs.rs").await;
    common::create_test_link(&pool, id, "Crates", "https://crates.io").await;
    let server = common::create_test_server(pool);

    let response = server.get(&format!("/api/export_links/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let disposition = response.header(header::CONTENT_DISPOSITION);
    let disposition = disposition.to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("filename=\"Work_Stuff_links.xlsx\""));

    let mut workbook = Xlsx::new(Cursor::new(response.as_bytes().to_vec())).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Work Stuff".to_string()]);

    let range = workbook.worksheet_range("Work Stuff").unwrap();
    let cells: Vec<Vec<String>> = range
        .rows()
        .map(|row| row[..2].iter().map(Data::to_string).collect())
        .collect();

    assert_eq!(
        cells,
        vec![
            vec!["Label", "URL"],
            vec!["Docs", "https://docs.rs"],
            vec!["Crates", "https://crates.io"],
        ]
    );
}

#[sqlx::test]
async fn test_export_empty_category(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Empty").await;
    let server = common::create_test_server(pool);

    let response = server.get(&format!("/api/export_links/{id}")).await;

    response.assert_status_ok();
    assert!(response.as_bytes().starts_with(b"PK"));
}

#[sqlx::test]
async fn test_export_unknown_category(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/export_links/999").await;

    response.assert_status_not_found();
    response.assert_json(&serde_json::json!({ "error": "Category not found" }));
}
