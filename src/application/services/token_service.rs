//! JWT issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Administrator, Role};
use crate::error::AppError;

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by every issued token.
///
/// `roles` duplicates `role` and is the claim authorization decisions read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    pub roles: Vec<Role>,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Signs and verifies HS256 bearer tokens with a shared secret.
///
/// Only signature and expiry are checked; issuer and audience are not part of
/// the issued tokens and are not validated.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for `administrator`, valid for [`TOKEN_TTL_HOURS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, administrator: &Administrator) -> Result<String, AppError> {
        self.issue_at(administrator, Utc::now())
    }

    fn issue_at(
        &self,
        administrator: &Administrator,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            email: administrator.email.clone(),
            role: administrator.role,
            roles: vec![administrator.role],
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, "Failed to sign token");
                AppError::internal("Failed to issue token", json!({}))
            },
        )
    }

    /// Verifies signature and expiry and returns the embedded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, tampered or expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": format!("Invalid token: {e}") }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Administrator {
        Administrator::new(
            2,
            "editor@teste.com".to_string(),
            "123456".to_string(),
            Role::Editor,
        )
    }

    #[test]
    fn test_issue_then_verify_returns_claims() {
        let service = TokenService::new("test-secret");

        let token = service.issue(&editor()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.email, "editor@teste.com");
        assert_eq!(claims.role, Role::Editor);
        assert_eq!(claims.roles, vec![Role::Editor]);
    }

    #[test]
    fn test_token_expires_after_24_hours() {
        let service = TokenService::new("test-secret");

        let token = service.issue(&editor()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret");
        let two_days_ago = Utc::now() - Duration::hours(48);

        let token = service.issue_at(&editor(), two_days_ago).unwrap();
        let result = service.verify(&token);

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue(&editor()).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new("test-secret");

        assert!(matches!(
            service.verify("not-a-jwt"),
            Err(AppError::Unauthorized { .. })
        ));
    }
}
