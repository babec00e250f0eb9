//! Repository trait for administrator accounts.

use crate::domain::entities::{Administrator, NewAdministrator, Page};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for administrators.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdministratorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_administrator.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdministratorRepository: Send + Sync {
    /// Creates a new administrator and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_administrator: NewAdministrator)
    -> Result<Administrator, AppError>;

    /// Finds an administrator by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AppError>;

    /// Finds the administrator whose email and password both match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Administrator>, AppError>;

    /// Lists administrators ordered by id.
    ///
    /// `None` returns every record; `Some(page)` returns at most
    /// [`crate::domain::entities::PAGE_SIZE`] records starting at the page offset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: Option<Page>) -> Result<Vec<Administrator>, AppError>;
}
