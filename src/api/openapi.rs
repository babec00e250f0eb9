//! OpenAPI document served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet API",
        description = "Administrator and vehicle registry with token-based access control."
    ),
    paths(
        crate::api::handlers::home::home_handler,
        crate::api::handlers::administrators::login_handler,
        crate::api::handlers::administrators::administrator_list_handler,
        crate::api::handlers::administrators::get_administrator_handler,
        crate::api::handlers::administrators::create_administrator_handler,
        crate::api::handlers::vehicles::create_vehicle_handler,
        crate::api::handlers::vehicles::vehicle_list_handler,
        crate::api::handlers::vehicles::get_vehicle_handler,
        crate::api::handlers::vehicles::update_vehicle_handler,
        crate::api::handlers::vehicles::delete_vehicle_handler,
    ),
    components(schemas(
        crate::api::dto::HomeResponse,
        crate::api::dto::LoginRequest,
        crate::api::dto::LoginResponse,
        crate::api::dto::AdministratorRequest,
        crate::api::dto::AdministratorView,
        crate::api::dto::VehicleRequest,
        crate::api::dto::VehicleResponse,
        crate::domain::entities::Role,
        crate::error::ErrorBody,
        crate::error::ErrorInfo,
    )),
    tags(
        (name = "home", description = "Landing document"),
        (name = "administrators", description = "Login and administrator management"),
        (name = "vehicles", description = "Vehicle registry"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds the JWT bearer security scheme referenced by protected routes.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Token returned by POST /administrators/login, valid for 24 hours.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
