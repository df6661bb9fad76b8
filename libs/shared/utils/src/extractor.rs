use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};

use shared_models::auth::UserRecord;
use shared_models::error::AppError;

use crate::session::SessionStore;

/// The caller's identity, `None` when nobody is signed in.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<UserRecord>);

/// The bearer token the session middleware found on the request.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}

// Resolves the bearer token (if any) and attaches the identity.
pub async fn session_middleware(
    State(sessions): State<Arc<SessionStore>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers());

    let user = match &token {
        Some(token) => sessions.get(token).await,
        None => None,
    };

    if let Some(token) = token {
        request.extensions_mut().insert(SessionToken(token));
    }
    request.extensions_mut().insert(CurrentUser(user));

    next.run(request).await
}

// Middleware for routes that need a signed-in user
pub async fn require_session(
    State(sessions): State<Arc<SessionStore>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let user = sessions
        .get(&token)
        .await
        .ok_or_else(|| AppError::Auth("Session not found".to_string()))?;

    request.extensions_mut().insert(SessionToken(token));
    request.extensions_mut().insert(CurrentUser(Some(user)));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))
    }
}

impl CurrentUser {
    pub fn require(self) -> Result<UserRecord, AppError> {
        self.0
            .ok_or_else(|| AppError::Auth("User not found in request extensions".to_string()))
    }
}
