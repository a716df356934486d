use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use goalplan_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn build_test_router() -> Router {
    let config = Config::from_env().unwrap();
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn asset_crud_and_summary() {
    let app = build_test_router().await;

    let (status, fund) = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        Some(json!({ "name": "Index fund", "assetClass": "equity", "currentValue": 1500.25, "expectedReturnRate": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(fund["expectedReturnRate"], 0.12);

    send(
        &app,
        Method::POST,
        "/api/v1/assets",
        Some(json!({ "name": "Savings", "assetClass": "cash", "currentValue": 1000.25 })),
    )
    .await;

    let (status, summary) = send(&app, Method::GET, "/api/v1/assets/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["assetCount"], 2);
    assert_eq!(summary["totalValue"], 2500.5);
    assert_eq!(summary["byClass"]["equity"], 1500.25);

    let id = fund["id"].as_i64().unwrap();
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/assets/{id}"),
        Some(json!({ "currentValue": 1750.75 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["currentValue"], 1750.75);
    assert_eq!(updated["name"], "Index fund");
    assert_eq!(updated["expectedReturnRate"], 0.12);

    let (status, cleared) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/assets/{id}"),
        Some(json!({ "expectedReturnRate": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["expectedReturnRate"].is_null());
    assert_eq!(cleared["currentValue"], 1750.75);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, Method::GET, "/api/v1/assets", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_asset_is_rejected() {
    let app = build_test_router().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        Some(json!({ "name": "", "currentValue": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}
