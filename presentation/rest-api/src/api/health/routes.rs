use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::health::use_cases::check::CheckHealthUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status, always "healthy" while the process serves requests
    pub status: String,
    /// Whether the Gemini client finished initialization
    pub gemini_configured: bool,
    /// Whether GEMINI_API_KEY was supplied
    pub api_key_set: bool,
}

/// Health API for monitoring and infrastructure checks
///
/// Reports configuration status without side effects. Served under both
/// `/health` and `/api/health`.
pub struct Api {
    check_use_case: Arc<dyn CheckHealthUseCase>,
}

impl Api {
    pub fn new(check_use_case: Arc<dyn CheckHealthUseCase>) -> Self {
        Self { check_use_case }
    }

    fn report(&self) -> Json<HealthCheckResponse> {
        let status = self.check_use_case.execute();
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            gemini_configured: status.generator_configured,
            api_key_set: status.credential_present,
        })
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current configuration status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `gemini_configured`: whether advice requests can reach Gemini
    /// - `api_key_set`: whether a credential was provided at startup
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        self.report()
    }

    /// Health check endpoint (API prefix)
    #[oai(path = "/api/health", method = "get", tag = "ApiTags::Health")]
    async fn api_health_check(&self) -> Json<HealthCheckResponse> {
        self.report()
    }
}
