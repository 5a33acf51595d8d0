use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

mod helpers;

#[tokio::test]
async fn test_root_serves_index_html() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.child("index.html"), "<h1>Portfolio</h1>")?;
    let app = helpers::create_test_app(helpers::SpyNotifier::default(), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await?.to_bytes();
    assert_eq!(&body[..], b"<h1>Portfolio</h1>");

    Ok(())
}

#[tokio::test]
async fn test_assets_are_served_from_static_dir() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.child("script.js"), "console.log('hi');")?;
    let app = helpers::create_test_app(helpers::SpyNotifier::default(), dir.path());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/script.js").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/missing.css").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::create_test_app(helpers::SpyNotifier::default(), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    let (status, body) = helpers::read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "ok"}));

    Ok(())
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::create_test_app(helpers::SpyNotifier::default(), dir.path());

    let mut request =
        helpers::post_json(r#"{"name":"A","email":"a@b.com","subject":"S","message":"M"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse()?);

    let response = app.oneshot(request).await?;

    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );

    Ok(())
}
