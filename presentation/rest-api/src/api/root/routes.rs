use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct RootResponse {
    pub message: String,
}

/// Static liveness endpoint.
pub struct RootApi;

#[OpenApi]
impl RootApi {
    /// Liveness message
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<RootResponse> {
        Json(RootResponse {
            message: "MediAid API is running".to_string(),
        })
    }
}
