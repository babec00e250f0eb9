//! Authentication service: credential login and bearer token validation.

use std::sync::Arc;

use crate::application::services::token_service::{Claims, TokenService};
use crate::domain::entities::Administrator;
use crate::domain::repositories::AdministratorRepository;
use crate::error::AppError;
use serde_json::json;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub administrator: Administrator,
    pub token: String,
}

/// Service for authenticating administrators.
///
/// Credentials are matched by exact email and password equality against the
/// repository. Issued tokens are self-contained; verifying one does not touch
/// the database.
pub struct AuthService {
    repository: Arc<dyn AdministratorRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - administrator repository used for credential lookup
    /// - `tokens` - issuer/verifier sharing the server signing secret
    pub fn new(repository: Arc<dyn AdministratorRepository>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no administrator matches both
    /// email and password.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(administrator) = self.repository.find_by_credentials(email, password).await?
        else {
            tracing::warn!(email, "Login failed: invalid credentials");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid email or password"}),
            ));
        };

        let token = self.tokens.issue(&administrator)?;
        tracing::info!(email, role = %administrator.role, "Administrator logged in");

        Ok(LoginOutcome {
            administrator,
            token,
        })
    }

    /// Validates a raw bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, has a bad
    /// signature, or has expired.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::MockAdministratorRepository;

    fn test_tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-signing-secret"))
    }

    fn admin() -> Administrator {
        Administrator::new(
            1,
            "adm@teste.com".to_string(),
            "123456".to_string(),
            Role::Admin,
        )
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo
            .expect_find_by_credentials()
            .withf(|email, password| email == "adm@teste.com" && password == "123456")
            .times(1)
            .returning(|_, _| Ok(Some(admin())));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let outcome = service.login("adm@teste.com", "123456").await.unwrap();

        assert_eq!(outcome.administrator.email, "adm@teste.com");
        assert!(!outcome.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_token_carries_identity() {
        let mut mock_repo = MockAdministratorRepository::new();
        mock_repo
            .expect_find_by_credentials()
            .returning(|_, _| Ok(Some(admin())));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let outcome = service.login("adm@teste.com", "123456").await.unwrap();
        let claims = service.authenticate(&outcome.token).unwrap();

        assert_eq!(claims.email, "adm@teste.com");
        assert_eq!(claims.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo
            .expect_find_by_credentials()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.login("adm@teste.com", "wrong").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_propagates_database_error() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo
            .expect_find_by_credentials()
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.login("adm@teste.com", "123456").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_authenticate_rejects_garbage() {
        let service = AuthService::new(Arc::new(MockAdministratorRepository::new()), test_tokens());

        let result = service.authenticate("garbage");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }
}
