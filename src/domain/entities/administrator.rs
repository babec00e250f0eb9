//! Administrator entity: an identity that can log in and manage the API.

use super::Role;

/// A persisted administrator account.
///
/// The password is stored and compared as provided; see `DESIGN.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Administrator {
    pub fn new(id: i64, email: String, password: String, role: Role) -> Self {
        Self {
            id,
            email,
            password,
            role,
        }
    }
}

/// Input data for creating a new administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdministrator {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_creation() {
        let administrator = Administrator::new(
            1,
            "teste@teste.com".to_string(),
            "teste".to_string(),
            Role::Admin,
        );

        assert_eq!(administrator.id, 1);
        assert_eq!(administrator.email, "teste@teste.com");
        assert_eq!(administrator.password, "teste");
        assert_eq!(administrator.role, Role::Admin);
    }
}
