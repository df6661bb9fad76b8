use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use assistant_cell::router::assistant_routes;
use assistant_cell::{AssistantService, Responder};

fn app() -> Router {
    assistant_routes(Arc::new(AssistantService::new(
        Arc::new(Responder::ayurveda()),
        Duration::from_millis(1500),
    )))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_reply_endpoint() {
    let app = app();
    let response = send(&app, Method::POST, "/reply", Some(json!({ "message": "Benefits of Panchakarma" }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["topic"], "panchakarma");
    assert_eq!(json["reply"]["suggestions"][2], "Post-Panchakarma care");
}

#[tokio::test]
async fn test_reply_endpoint_rejects_blank() {
    let response = send(&app(), Method::POST, "/reply", Some(json!({ "message": " " }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_conversation_lifecycle() {
    let app = app();

    let response = send(&app, Method::POST, "/conversations", None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["quick_suggestions"].as_array().unwrap().len(), 6);
    let id = json["conversation"]["id"].as_str().unwrap().to_string();

    let uri = format!("/conversations/{}/messages", id);
    let response = send(&app, Method::POST, &uri, Some(json!({ "content": "Tell me about Vata" }))).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(json_body(response).await["typing"], true);

    let response = send(&app, Method::POST, &uri, Some(json!({ "content": "Again" }))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, Method::DELETE, &format!("/conversations/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &format!("/conversations/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
