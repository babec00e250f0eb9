#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use fleet_api::domain::entities::{Administrator, NewAdministrator, NewVehicle, Page, Role, Vehicle};
use fleet_api::domain::repositories::{AdministratorRepository, VehicleRepository};
use fleet_api::error::AppError;
use fleet_api::routes::app_router;
use fleet_api::state::AppState;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const JWT_SECRET: &str = "test-jwt-secret";

pub const ADMIN_EMAIL: &str = "adm@teste.com";
pub const EDITOR_EMAIL: &str = "editor@teste.com";
pub const PASSWORD: &str = "123456";

fn paginate<T: Clone>(items: &[T], page: Option<Page>) -> Vec<T> {
    match page {
        None => items.to_vec(),
        Some(page) => items
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect(),
    }
}

/// Administrator store backed by a `Vec`, seeded with one admin and one editor.
#[derive(Default)]
pub struct InMemoryAdministratorRepository {
    rows: Mutex<Vec<Administrator>>,
}

impl InMemoryAdministratorRepository {
    pub fn seeded() -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            rows.push(Administrator::new(
                1,
                ADMIN_EMAIL.to_string(),
                PASSWORD.to_string(),
                Role::Admin,
            ));
            rows.push(Administrator::new(
                2,
                EDITOR_EMAIL.to_string(),
                PASSWORD.to_string(),
                Role::Editor,
            ));
        }
        repo
    }
}

#[async_trait]
impl AdministratorRepository for InMemoryAdministratorRepository {
    async fn create(&self, new: NewAdministrator) -> Result<Administrator, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|a| a.email == new.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "administrators_email_key" }),
            ));
        }

        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let administrator = Administrator::new(id, new.email, new.password, new.role);
        rows.push(administrator.clone());

        Ok(administrator)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Administrator>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Administrator>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email && a.password == password)
            .cloned())
    }

    async fn list(&self, page: Option<Page>) -> Result<Vec<Administrator>, AppError> {
        Ok(paginate(&self.rows.lock().unwrap(), page))
    }
}

/// Vehicle store backed by a `Vec`.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    rows: Mutex<Vec<Vehicle>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn create(&self, new: NewVehicle) -> Result<Vehicle, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let vehicle = Vehicle::new(*next_id, new.name, new.brand, new.year);
        self.rows.lock().unwrap().push(vehicle.clone());

        Ok(vehicle)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn list(&self, page: Option<Page>) -> Result<Vec<Vehicle>, AppError> {
        Ok(paginate(&self.rows.lock().unwrap(), page))
    }

    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let slot = rows
            .iter_mut()
            .find(|v| v.id == vehicle.id)
            .ok_or_else(|| AppError::not_found("Vehicle not found", json!({ "id": vehicle.id })))?;
        *slot = vehicle.clone();

        Ok(vehicle)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();

        let before = rows.len();
        rows.retain(|v| v.id != id);
        if rows.len() == before {
            return Err(AppError::not_found("Vehicle not found", json!({ "id": id })));
        }

        Ok(())
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryAdministratorRepository::seeded()),
        Arc::new(InMemoryVehicleRepository::default()),
        JWT_SECRET,
    )
}

/// Full application router over in-memory repositories.
pub fn make_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/administrators/login")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status(StatusCode::OK);
    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn admin_token(server: &TestServer) -> String {
    login(server, ADMIN_EMAIL, PASSWORD).await
}

pub async fn editor_token(server: &TestServer) -> String {
    login(server, EDITOR_EMAIL, PASSWORD).await
}

pub async fn create_vehicle(server: &TestServer, token: &str, name: &str, year: i32) -> i64 {
    let response = server
        .post("/vehicles")
        .add_header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "name": name, "brand": "VW", "year": year }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
