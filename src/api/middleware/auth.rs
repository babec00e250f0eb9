//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using JWT bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry
/// 3. Record the administrator email on the current request span
/// 4. Store the decoded [`crate::application::services::Claims`] in request extensions
/// 5. Continue to next middleware/handler
///
/// Role checks happen afterwards in the
/// [`Authorized`](crate::api::authorization::Authorized) extractor.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token signature is wrong or the token has expired
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.auth_service.authenticate(&token)?;
    tracing::Span::current().record("administrator", claims.email.as_str());
    parts.extensions.insert(claims);

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
