use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_page_urls_honor_the_base_path() {
    // Arrange
    let test_app = common::create_prefixed_test_app(StatusCode::OK, "/contact-us").await;

    // Act
    let response = test_app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/contact-us/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    // Both the form target and the stylesheet link carry the prefix
    assert!(body_str.contains(r#"action="/contact-us/contact""#));
    assert!(body_str.contains(r#"href="/contact-us/static/app.css""#));
}

#[tokio::test]
async fn test_static_assets_are_served_under_the_base_path() {
    // Arrange
    let test_app = common::create_prefixed_test_app(StatusCode::OK, "/contact-us").await;

    // Act
    let response = test_app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/contact-us/static/app.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css")
    );
}

#[tokio::test]
async fn test_submission_round_trips_under_the_base_path() {
    // Arrange
    let test_app = common::create_prefixed_test_app(StatusCode::OK, "/contact-us").await;

    // Act
    let response = test_app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact-us/contact")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Jane&email=jane@x.com&subject=Hi&message=Hello",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    assert!(body_str.contains("banner-success"));
    assert_eq!(test_app.relay.requests.lock().await.len(), 1);
}

#[tokio::test]
async fn test_unprefixed_paths_are_not_served() {
    // Arrange
    let test_app = common::create_prefixed_test_app(StatusCode::OK, "/contact-us").await;

    // Act: the route exists only under the prefix
    let response = test_app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
