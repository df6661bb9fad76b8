use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::handlers::BookingState;
use appointment_cell::router::booking_routes;
use appointment_cell::{BookingSessions, ClinicBookingDesk};
use assistant_cell::router::assistant_routes;
use assistant_cell::{AssistantService, Responder};
use auth_cell::handlers::AuthState;
use auth_cell::router::auth_routes;
use auth_cell::{FieldValidator, SimulatedRegistrationDesk};
use dashboard_cell::router::{doctor_portal_routes, patient_portal_routes, report_routes};
use doctor_cell::handlers::DoctorState;
use doctor_cell::router::doctor_routes;
use doctor_cell::{AvailabilityService, AvailabilityTable, PractitionerDirectory};
use messaging_cell::router::messaging_routes;
use messaging_cell::MessagingService;
use shared_config::AppConfig;
use shared_utils::idle::IdleLimits;
use shared_utils::session::SessionStore;
use therapy_cell::router::therapy_routes;
use therapy_cell::TherapyCatalog;

/// Everything the routers share. Built once at startup.
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub limits: IdleLimits,
    pub sessions: Arc<SessionStore>,
    pub catalog: Arc<TherapyCatalog>,
    pub directory: Arc<PractitionerDirectory>,
    pub availability: Arc<AvailabilityService>,
    pub assistant: Arc<AssistantService>,
    pub messaging: Arc<MessagingService>,
    pub validator: Arc<FieldValidator>,
}

impl AppServices {
    pub fn build(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let limits = IdleLimits::from_config(&config);
        Ok(Self {
            sessions: Arc::new(SessionStore::with_limits(limits)),
            catalog: Arc::new(TherapyCatalog::clinic_default()),
            directory: Arc::new(PractitionerDirectory::clinic_default()),
            availability: Arc::new(AvailabilityService::new(AvailabilityTable::clinic_default())),
            assistant: Arc::new(AssistantService::with_limits(
                Arc::new(Responder::ayurveda()),
                config.assistant_typing_delay(),
                limits,
            )),
            messaging: Arc::new(MessagingService::new()),
            validator: Arc::new(FieldValidator::new()?),
            limits,
            config,
        })
    }
}

pub fn create_router(services: AppServices) -> Router {
    let auth = Arc::new(AuthState {
        sessions: services.sessions.clone(),
        validator: services.validator.clone(),
        desk: Arc::new(SimulatedRegistrationDesk::new(
            services.config.registration_delay(),
        )),
    });

    let doctors = Arc::new(DoctorState {
        config: services.config.clone(),
        directory: services.directory.clone(),
        availability: services.availability.clone(),
    });

    let booking = Arc::new(BookingState {
        config: services.config.clone(),
        catalog: services.catalog.clone(),
        directory: services.directory.clone(),
        availability: services.availability.clone(),
        sessions: Arc::new(BookingSessions::with_limits(services.limits)),
        submitter: Arc::new(ClinicBookingDesk::new(services.availability.clone())),
    });

    Router::new()
        .route("/", get(|| async { "AyurSutra API is running!" }))
        .nest("/auth", auth_routes(auth))
        .nest("/therapies", therapy_routes(services.catalog.clone()))
        .nest("/doctors", doctor_routes(doctors))
        .nest("/booking", booking_routes(booking))
        .nest("/assistant", assistant_routes(services.assistant.clone()))
        .nest("/messages", messaging_routes(services.messaging.clone(), services.sessions.clone()))
        .nest("/patient", patient_portal_routes(services.sessions.clone()))
        .nest(
            "/doctor",
            doctor_portal_routes(services.sessions.clone(), services.config.clone()),
        )
        .nest("/reports", report_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use shared_utils::test_utils::{json_body, TestConfig};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppServices::build(TestConfig::default().to_arc()).unwrap())
    }

    async fn call(app: &Router, method: Method, uri: &str, auth: Option<&str>, body: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn liveness() {
        let response = call(&app(), Method::GET, "/", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn every_cell_is_mounted() {
        let app = app();
        for uri in [
            "/therapies",
            "/doctors",
            "/doctors/2/availability?date=2024-12-28",
            "/patient/dashboard",
            "/doctor/dashboard",
            "/doctor/patients",
            "/doctor/schedule",
            "/reports",
            "/auth/session",
        ] {
            let response = call(&app, Method::GET, uri, None, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn login_then_read_messages() {
        let app = app();

        let response = call(&app, Method::GET, "/messages/conversations", None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let login = json_body(
            call(
                &app,
                Method::POST,
                "/auth/login",
                None,
                Some(r#"{"email":"priya.sharma@email.com","user_type":"patient"}"#),
            )
            .await,
        )
        .await;
        let auth = format!("Bearer {}", login["token"].as_str().unwrap());

        let json = json_body(call(&app, Method::GET, "/messages/conversations", Some(&auth), None).await).await;
        assert_eq!(json["conversations"][0]["participant_name"], "Dr. Rajesh Kumar");

        let json = json_body(call(&app, Method::GET, "/patient/dashboard", Some(&auth), None).await).await;
        assert_eq!(json["profile"]["name"], "Priya Sharma");
    }

    #[tokio::test]
    async fn booking_reservations_show_in_doctor_availability() {
        let app = app();

        let session = json_body(call(&app, Method::POST, "/booking/sessions", None, None).await).await;
        let base = format!("/booking/sessions/{}", session["session_id"].as_str().unwrap());

        for (method, path, body) in [
            (Method::PUT, "therapy", Some(r#"{"therapy_id":2}"#)),
            (Method::POST, "next", None),
            (Method::PUT, "practitioner", Some(r#"{"practitioner_id":2}"#)),
            (Method::POST, "next", None),
            (Method::PUT, "date", Some(r#"{"day":28}"#)),
            (Method::PUT, "time", Some(r#"{"time":"11:00"}"#)),
            (Method::POST, "next", None),
            (Method::POST, "confirm", None),
        ] {
            let response = call(&app, method, &format!("{}/{}", base, path), None, body).await;
            assert!(response.status().is_success(), "{}", path);
        }

        let json = json_body(
            call(&app, Method::GET, "/doctors/2/availability?date=2024-12-28", None, None).await,
        )
        .await;
        assert_eq!(
            json["availability"]["slots"],
            serde_json::json!(["09:30", "15:00", "16:30"])
        );
    }
}
