//! Role-based authorization.
//!
//! Handlers declare the roles they accept through the type of their first
//! extractor:
//!
//! ```rust,ignore
//! pub async fn delete_vehicle_handler(
//!     _auth: Authorized<AdminOnly>,
//!     Path(id): Path<i64>,
//!     State(state): State<AppState>,
//! ) -> Result<StatusCode, AppError> { ... }
//! ```
//!
//! The extractor reads the [`Claims`] stored by
//! [`crate::api::middleware::auth::layer`] and rejects with 401 if there are
//! none, or 403 if no role in the `roles` claim satisfies the policy.

use std::marker::PhantomData;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::application::services::Claims;
use crate::domain::entities::Role;
use crate::error::AppError;

/// A set of roles permitted to call a route.
pub trait Policy: Send + Sync + 'static {
    /// Human-readable description used in 403 responses.
    const DESCRIPTION: &'static str;

    fn allows(role: Role) -> bool;
}

/// Only administrators with [`Role::Admin`].
pub struct AdminOnly;

impl Policy for AdminOnly {
    const DESCRIPTION: &'static str = "admin";

    fn allows(role: Role) -> bool {
        match role {
            Role::Admin => true,
            Role::Editor => false,
        }
    }
}

/// [`Role::Admin`] or [`Role::Editor`].
pub struct AdminOrEditor;

impl Policy for AdminOrEditor {
    const DESCRIPTION: &'static str = "admin, editor";

    fn allows(role: Role) -> bool {
        match role {
            Role::Admin | Role::Editor => true,
        }
    }
}

/// Any authenticated administrator.
pub struct AnyRole;

impl Policy for AnyRole {
    const DESCRIPTION: &'static str = "any";

    fn allows(_role: Role) -> bool {
        true
    }
}

/// Extractor proving the caller is authenticated and satisfies policy `P`.
pub struct Authorized<P: Policy> {
    pub claims: Claims,
    _policy: PhantomData<P>,
}

impl<P: Policy> Authorized<P> {
    fn check(claims: Claims) -> Result<Self, AppError> {
        if !claims.roles.iter().any(|role| P::allows(*role)) {
            tracing::warn!(email = %claims.email, required = P::DESCRIPTION, "Access denied");
            return Err(AppError::forbidden(
                "Forbidden",
                json!({ "required_roles": P::DESCRIPTION }),
            ));
        }

        Ok(Self {
            claims,
            _policy: PhantomData,
        })
    }
}

impl<S, P> FromRequestParts<S> for Authorized<P>
where
    S: Send + Sync,
    P: Policy,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

        Self::check(claims)
    }
}
