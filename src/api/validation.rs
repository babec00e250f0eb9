//! Request validation producing human-readable message lists.
//!
//! Field rules are declared on the DTOs with `validator` attributes. The
//! functions here run them and flatten the result into an ordered
//! [`ValidationMessages`] list (declared field order, not hash order), so a
//! client always sees messages in the same sequence.

use serde_json::json;
use validator::Validate;

use crate::api::dto::{AdministratorRequest, VehicleRequest};
use crate::domain::entities::NewAdministrator;
use crate::error::AppError;

/// Ordered list of validation failures; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMessages {
    messages: Vec<String>,
}

impl ValidationMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(())` when empty, otherwise a 400 carrying every message.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            return Ok(());
        }

        Err(self.into_error())
    }

    fn into_error(self) -> AppError {
        AppError::bad_request("Validation failed", json!({ "messages": self.messages }))
    }
}

/// Email and password must be non-empty; a role must be present.
pub fn validate_administrator(request: &AdministratorRequest) -> ValidationMessages {
    collect(request.validate(), &AdministratorRequest::FIELDS)
}

/// Validates `request` and converts it into a [`NewAdministrator`].
///
/// A missing role is one of the reported messages, so the role is only
/// taken out of the request once every rule has passed.
pub fn new_administrator(request: AdministratorRequest) -> Result<NewAdministrator, AppError> {
    let messages = validate_administrator(&request);

    let AdministratorRequest {
        email,
        password,
        role,
    } = request;

    match role {
        Some(role) if messages.is_empty() => Ok(NewAdministrator {
            email,
            password,
            role,
        }),
        _ => Err(messages.into_error()),
    }
}

/// Name and brand must be non-empty; year must be 1900 or later.
pub fn validate_vehicle(request: &VehicleRequest) -> ValidationMessages {
    collect(request.validate(), &VehicleRequest::FIELDS)
}

fn collect(
    result: Result<(), validator::ValidationErrors>,
    fields: &[&'static str],
) -> ValidationMessages {
    let mut messages = ValidationMessages::new();

    let Err(errors) = result else {
        return messages;
    };

    let by_field = errors.field_errors();
    for field in fields {
        let Some(field_errors) = by_field.get(*field) else {
            continue;
        };

        for error in field_errors.iter() {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("The {field} field is invalid")),
            }
        }
    }

    messages
}
