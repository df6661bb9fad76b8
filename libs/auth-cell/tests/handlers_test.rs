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

use auth_cell::handlers::AuthState;
use auth_cell::router::auth_routes;
use auth_cell::{FieldValidator, SimulatedRegistrationDesk};
use shared_utils::session::SessionStore;
use shared_utils::test_utils::{json_body, TestUser};

fn app(sessions: Arc<SessionStore>) -> Router {
    auth_routes(Arc::new(AuthState {
        sessions,
        validator: Arc::new(FieldValidator::new().unwrap()),
        desk: Arc::new(SimulatedRegistrationDesk::new(Duration::ZERO)),
    }))
}

async fn call(app: &Router, method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_login_opens_session() {
    let sessions = Arc::new(SessionStore::new());
    let app = app(sessions.clone());

    let response = call(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "email": "dr.rajesh@ayursutra.com", "user_type": "doctor" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["user"]["fullName"], "Dr. Rajesh Kumar");
    assert_eq!(json["user"]["userType"], "doctor");
    assert_eq!(json["initials"], "DR");
    assert_eq!(json["storage_key"], "currentUser");
    assert_eq!(sessions.active_sessions().await, 1);
}

#[tokio::test]
async fn test_session_reports_signed_in_user() {
    let sessions = Arc::new(SessionStore::new());
    let auth = TestUser::sign_in(&sessions, TestUser::patient()).await;
    let app = app(sessions);

    let json = json_body(call(&app, Method::GET, "/session", Some(&auth), None).await).await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["user"]["email"], "priya.sharma@email.com");
    assert_eq!(json["display_name"], "Priya Sharma");

    let json = json_body(call(&app, Method::GET, "/session", None, None).await).await;
    assert_eq!(json["authenticated"], false);
    assert_eq!(json["user"], Value::Null);
}

#[tokio::test]
async fn test_logout_tears_down_session() {
    let sessions = Arc::new(SessionStore::new());
    let auth = TestUser::sign_in(&sessions, TestUser::doctor()).await;
    let app = app(sessions.clone());

    let response = call(&app, Method::POST, "/logout", Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(sessions.active_sessions().await, 0);

    // An already closed token still logs out cleanly
    let response = call(&app, Method::POST, "/logout", Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = call(&app, Method::POST, "/logout", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = call(&app, Method::POST, "/logout", Some("Basic dXNlcg=="), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_restore_from_persisted_record() {
    let app = app(Arc::new(SessionStore::new()));
    let record = TestUser::patient().to_persisted();

    let json = json_body(
        call(&app, Method::POST, "/session/restore", None, Some(json!({ "record": record }))).await,
    )
    .await;
    assert_eq!(json["authenticated"], true);
    assert!(json["token"].is_string());
}

#[tokio::test]
async fn test_restore_ignores_malformed_record() {
    let app = app(Arc::new(SessionStore::new()));

    for record in ["{not json", r#"{"email":"","username":"x","fullName":"x","userType":"patient"}"#, r#"{"email":"a@b.c"}"#] {
        let response = call(&app, Method::POST, "/session/restore", None, Some(json!({ "record": record }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["authenticated"], false);
    }
}

#[tokio::test]
async fn test_patient_registration_signs_in() {
    let sessions = Arc::new(SessionStore::new());
    let app = app(sessions.clone());

    let response = call(
        &app,
        Method::POST,
        "/register/patient",
        None,
        Some(json!({
            "first_name": "Meera",
            "last_name": "Iyer",
            "email": "meera.iyer@mail.com",
            "phone": "+91 98765 43210"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["user"]["fullName"], "Meera Iyer");
    assert_eq!(sessions.active_sessions().await, 1);
}

#[tokio::test]
async fn test_doctor_registration_pending_review() {
    let app = app(Arc::new(SessionStore::new()));

    let response = call(
        &app,
        Method::POST,
        "/register/doctor",
        None,
        Some(json!({
            "first_name": "Anil",
            "last_name": "Deshmukh",
            "email": "dr.anil@clinic.in",
            "phone": "020-2553-1234",
            "license_number": "MH/AY-20931",
            "specialization": "panchakarma",
            "qualification": "BAMS",
            "experience": "20+",
            "clinic_address": "12 FC Road, Pune",
            "bio": "Panchakarma specialist."
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let json = json_body(response).await;
    assert_eq!(json["status"], "pending_review");
    assert!(json["message"].as_str().unwrap().contains("2-3 business days"));
}

#[tokio::test]
async fn test_invalid_registration_lists_fields() {
    let app = app(Arc::new(SessionStore::new()));

    let response = call(
        &app,
        Method::POST,
        "/register/patient",
        None,
        Some(json!({
            "first_name": "",
            "last_name": "Iyer",
            "email": "not-an-email",
            "phone": "+91 98765 43210"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert_eq!(json["fields"][0]["field"], "first_name");
    assert_eq!(json["fields"][1]["field"], "email");
}
