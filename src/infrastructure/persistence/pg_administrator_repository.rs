//! PostgreSQL implementation of administrator repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Administrator, NewAdministrator, Page, Role};
use crate::domain::repositories::AdministratorRepository;
use crate::error::AppError;

/// PostgreSQL repository for administrator accounts.
pub struct PgAdministratorRepository {
    pool: Arc<PgPool>,
}

impl PgAdministratorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AdministratorRow {
    id: i64,
    email: String,
    password: String,
    role: String,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = AppError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(|e| {
            AppError::internal(
                "Stored administrator has an invalid role",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Administrator::new(row.id, row.email, row.password, role))
    }
}

#[async_trait]
impl AdministratorRepository for PgAdministratorRepository {
    async fn create(
        &self,
        new_administrator: NewAdministrator,
    ) -> Result<Administrator, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            INSERT INTO administrators (email, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, role
            "#,
        )
        .bind(&new_administrator.email)
        .bind(&new_administrator.password)
        .bind(new_administrator.role.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, role
            FROM administrators
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Administrator::try_from).transpose()
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, role
            FROM administrators
            WHERE email = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Administrator::try_from).transpose()
    }

    async fn list(&self, page: Option<Page>) -> Result<Vec<Administrator>, AppError> {
        // LIMIT NULL / OFFSET NULL mean "no limit" / "no offset" in PostgreSQL.
        let rows = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, role
            FROM administrators
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.map(|p| p.limit()))
        .bind(page.map(|p| p.offset()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Administrator::try_from).collect()
    }
}
