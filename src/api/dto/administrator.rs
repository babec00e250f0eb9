//! DTOs for administrator endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Administrator, Role};

/// Request body for `POST /administrators/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub email: String,
    pub role: Role,
    /// Bearer token, valid for 24 hours.
    pub token: String,
}

/// Request body for `POST /administrators`.
///
/// Absent string fields deserialize as empty so they are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdministratorRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The email field must not be empty"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "The password field must not be empty"))]
    pub password: String,

    #[serde(default)]
    #[validate(required(message = "The role field must not be empty"))]
    pub role: Option<Role>,
}

impl AdministratorRequest {
    /// Field names in the order validation messages are reported.
    pub const FIELDS: [&'static str; 3] = ["email", "password", "role"];
}

/// Public view of an administrator. Never exposes the password.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdministratorView {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl From<Administrator> for AdministratorView {
    fn from(administrator: Administrator) -> Self {
        Self {
            id: administrator.id,
            email: administrator.email,
            role: administrator.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: AdministratorRequest = serde_json::from_str("{}").unwrap();

        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
        assert!(request.role.is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"email": "a@b.c", "password": "x", "role": "root"}"#;
        assert!(serde_json::from_str::<AdministratorRequest>(json).is_err());
    }

    #[test]
    fn test_view_omits_password() {
        let view = AdministratorView::from(Administrator::new(
            1,
            "adm@teste.com".to_string(),
            "123456".to_string(),
            Role::Admin,
        ));

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "adm@teste.com");
        assert_eq!(json["role"], "admin");
        assert!(json.get("password").is_none());
    }
}
