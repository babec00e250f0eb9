//! DTO for the root endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Landing document pointing clients at the interactive documentation.
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub documentation: String,
}
