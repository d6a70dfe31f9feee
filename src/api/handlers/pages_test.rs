//! Route-level tests for the static pages.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{AppState, create_router};
use crate::db::{Database, SqliteDatabase};

/// Create a test app backed by an in-memory database.
async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.init_schema().await.expect("Schema creation should succeed");
    create_router(AppState::new(db))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn every_page_returns_well_formed_html() {
    let app = test_app().await;

    for path in ["/", "/about", "/resume", "/projects", "/contact", "/thankyou", "/add"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("text/html"),
            "GET {} content type was {}",
            path,
            content_type
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("<!DOCTYPE html>"), "GET {}", path);
        assert!(body.contains("</html>"), "GET {}", path);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unmapped_paths_return_404() {
    let app = test_app().await;

    for path in ["/nope", "/projects/1", "/add/extra", "/favicon.ico"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", path);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn thankyou_accepts_arbitrary_query_parameters() {
    let app = test_app().await;

    let response = get(app, "/thankyou?name=Ada&message=hello%20there&x=1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn stylesheet_is_served_with_css_content_type() {
    let app = test_app().await;

    let response = get(app, "/static/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_static_asset_is_404() {
    let app = test_app().await;

    let response = get(app, "/static/no-such-file.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
