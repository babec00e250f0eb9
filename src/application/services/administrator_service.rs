//! Administrator management service.

use crate::domain::entities::{Administrator, NewAdministrator, Page};
use crate::domain::repositories::AdministratorRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for listing, fetching and creating administrators.
pub struct AdministratorService {
    repository: Arc<dyn AdministratorRepository>,
}

impl AdministratorService {
    /// Creates a new administrator service.
    pub fn new(repository: Arc<dyn AdministratorRepository>) -> Self {
        Self { repository }
    }

    /// Lists administrators, one page at a time or all at once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_administrators(
        &self,
        page: Option<Page>,
    ) -> Result<Vec<Administrator>, AppError> {
        self.repository.list(page).await
    }

    /// Retrieves an administrator by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the administrator does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_administrator(&self, id: i64) -> Result<Administrator, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Administrator not found", json!({"id": id})))
    }

    /// Creates an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_administrator(
        &self,
        new_administrator: NewAdministrator,
    ) -> Result<Administrator, AppError> {
        let created = self.repository.create(new_administrator).await?;
        tracing::info!(id = created.id, role = %created.role, "Administrator created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::MockAdministratorRepository;

    fn create_test_administrator(id: i64, email: &str, role: Role) -> Administrator {
        Administrator::new(id, email.to_string(), "123456".to_string(), role)
    }

    #[tokio::test]
    async fn test_get_administrator_success() {
        let mut mock_repo = MockAdministratorRepository::new();

        let administrator = create_test_administrator(1, "adm@teste.com", Role::Admin);
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(move |_| Ok(Some(administrator.clone())));

        let service = AdministratorService::new(Arc::new(mock_repo));

        let result = service.get_administrator(1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().email, "adm@teste.com");
    }

    #[tokio::test]
    async fn test_get_administrator_not_found() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AdministratorService::new(Arc::new(mock_repo));

        let result = service.get_administrator(999).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_administrators_forwards_page() {
        let mut mock_repo = MockAdministratorRepository::new();

        let administrators = vec![
            create_test_administrator(11, "a11@teste.com", Role::Admin),
            create_test_administrator(12, "e12@teste.com", Role::Editor),
        ];

        mock_repo
            .expect_list()
            .withf(|page| *page == Page::new(2))
            .times(1)
            .returning(move |_| Ok(administrators.clone()));

        let service = AdministratorService::new(Arc::new(mock_repo));

        let list = service.list_administrators(Page::new(2)).await.unwrap();

        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_create_administrator() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo
            .expect_create()
            .withf(|new| new.email == "novo@teste.com" && new.role == Role::Editor)
            .times(1)
            .returning(|new| Ok(Administrator::new(3, new.email, new.password, new.role)));

        let service = AdministratorService::new(Arc::new(mock_repo));

        let created = service
            .create_administrator(NewAdministrator {
                email: "novo@teste.com".to_string(),
                password: "secret".to_string(),
                role: Role::Editor,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.role, Role::Editor);
    }

    #[tokio::test]
    async fn test_create_administrator_duplicate_email() {
        let mut mock_repo = MockAdministratorRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({"constraint": "administrators_email_key"}),
            ))
        });

        let service = AdministratorService::new(Arc::new(mock_repo));

        let result = service
            .create_administrator(NewAdministrator {
                email: "adm@teste.com".to_string(),
                password: "123456".to_string(),
                role: Role::Admin,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }
}
