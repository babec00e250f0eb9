use std::sync::Arc;

use crate::application::services::{
    AdministratorService, AuthService, TokenService, VehicleService,
};
use crate::domain::repositories::{AdministratorRepository, VehicleRepository};

/// Services shared by every handler.
///
/// Cloned per request; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub administrator_service: Arc<AdministratorService>,
    pub vehicle_service: Arc<VehicleService>,
}

impl AppState {
    /// Wires the services over the given repositories.
    ///
    /// `jwt_secret` signs and verifies every bearer token.
    pub fn new(
        administrators: Arc<dyn AdministratorRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        jwt_secret: &str,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(jwt_secret));

        Self {
            auth_service: Arc::new(AuthService::new(administrators.clone(), tokens)),
            administrator_service: Arc::new(AdministratorService::new(administrators)),
            vehicle_service: Arc::new(VehicleService::new(vehicles)),
        }
    }
}
