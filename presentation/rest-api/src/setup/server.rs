use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(
        server: ServerConfig,
        cors: Cors,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        let addr = server.bind_address();
        let app = Self::build_app(container, cors, format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn build_app(
        container: DependencyContainer,
        cors: Cors,
        server_url: String,
    ) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.root_api, container.health_api, container.advice_api),
            "MediAid API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::advice::errors::GenerationError;
    use business::domain::advice::services::{GeneratorHandle, TextGeneratorService};

    use super::*;
    use crate::config::cors_config::init_cors;

    const DISCLAIMER: &str = "\n\n⚠️ This is for informational purposes only. Always consult a healthcare professional for proper diagnosis and treatment.";

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGeneratorService for FixedGenerator {
        async fn generate(&self, _text: &str) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGeneratorService for FailingGenerator {
        async fn generate(&self, _text: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Network("connection reset".to_string()))
        }
    }

    fn client_with(generator: GeneratorHandle, api_key_set: bool) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::with_generator(generator, api_key_set);
        TestClient::new(Server::build_app(
            container,
            init_cors(),
            "http://127.0.0.1:8000".to_string(),
        ))
    }

    fn configured(output: &'static str) -> TestClient<impl Endpoint> {
        client_with(
            GeneratorHandle::Configured(Arc::new(FixedGenerator(output))),
            true,
        )
    }

    #[tokio::test]
    async fn should_return_text_with_disclaimer_when_prompt_is_answered() {
        // Arrange
        let cli = configured("Artemether-lumefantrine is first-line treatment.");

        // Act
        let resp = cli
            .post("/api/ai")
            .body_json(&json!({ "prompt": "What should I take for malaria?" }))
            .send()
            .await;

        // Assert
        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "text": format!("Artemether-lumefantrine is first-line treatment.{}", DISCLAIMER)
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_raw_text_when_output_ends_with_warning_glyph() {
        let cli = configured("Seek urgent care ⚠️");

        let resp = cli
            .post("/api/ai")
            .body_json(&json!({ "prompt": "chest pain" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "text": "Seek urgent care ⚠️" })).await;
    }

    #[tokio::test]
    async fn should_ignore_context_when_present() {
        let cli = configured("Rest.");

        let resp = cli
            .post("/api/ai")
            .body_json(&json!({ "prompt": "tired", "context": { "age": 30, "city": "Lagos" } }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "text": format!("Rest.{}", DISCLAIMER) }))
            .await;
    }

    #[tokio::test]
    async fn should_return_bad_request_when_prompt_is_blank() {
        let cli = configured("unused");

        for prompt in ["", "   "] {
            let resp = cli
                .post("/api/ai")
                .body_json(&json!({ "prompt": prompt }))
                .send()
                .await;

            resp.assert_status(StatusCode::BAD_REQUEST);
            resp.assert_json(json!({ "detail": "Prompt is required" }))
                .await;
        }
    }

    #[tokio::test]
    async fn should_reject_body_without_prompt() {
        let cli = configured("unused");

        let resp = cli
            .post("/api/ai")
            .body_json(&json!({ "context": {} }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_inline_error_with_ok_status_when_generation_fails() {
        let cli = client_with(GeneratorHandle::Configured(Arc::new(FailingGenerator)), true);

        let resp = cli
            .post("/api/ai")
            .body_json(&json!({ "prompt": "headache" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "error": "Sorry, I'm having trouble connecting to my AI service. Please try again later."
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_internal_error_when_generator_is_unconfigured() {
        let cli = client_with(GeneratorHandle::Unconfigured, false);

        for prompt in ["What should I take for malaria?", "   "] {
            let resp = cli
                .post("/api/ai")
                .body_json(&json!({ "prompt": prompt }))
                .send()
                .await;

            resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            resp.assert_json(json!({ "detail": "Gemini API not configured properly." }))
                .await;
        }
    }

    #[tokio::test]
    async fn should_report_configuration_on_both_health_paths() {
        let cli = configured("unused");

        for path in ["/health", "/api/health"] {
            let resp = cli.get(path).send().await;

            resp.assert_status_is_ok();
            resp.assert_json(json!({
                "status": "healthy",
                "gemini_configured": true,
                "api_key_set": true
            }))
            .await;
        }
    }

    #[tokio::test]
    async fn should_report_unconfigured_health_when_key_is_missing() {
        let cli = client_with(GeneratorHandle::Unconfigured, false);

        let resp = cli.get("/api/health").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "status": "healthy",
            "gemini_configured": false,
            "api_key_set": false
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_liveness_message_on_root() {
        let cli = configured("unused");

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "message": "MediAid API is running" }))
            .await;
    }

    #[tokio::test]
    async fn should_allow_cross_origin_requests() {
        let cli = configured("unused");

        let resp = cli
            .get("/health")
            .header("Origin", "https://mediaid.example")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", "https://mediaid.example");
    }

    #[tokio::test]
    async fn should_accept_any_header_and_credentials_when_preflighting_ask() {
        // Arrange
        let cli = configured("unused");

        // Act
        let resp = cli
            .options("/api/ai")
            .header("Origin", "https://foo.example")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type,x-custom")
            .send()
            .await;

        // Assert
        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", "https://foo.example");
        resp.assert_header("access-control-allow-credentials", "true");
        let header = |name: &str| {
            resp.0
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_ascii_lowercase()
        };
        assert!(header("access-control-allow-methods").contains("post"));
        assert!(header("access-control-allow-headers").contains("x-custom"));
    }

    #[tokio::test]
    async fn should_serve_openapi_document_with_ask_route() {
        let cli = configured("unused");

        let resp = cli.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let body = resp.0.into_body().into_string().await.unwrap();
        let document: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(document["paths"].get("/api/ai").is_some());
        assert!(document["paths"].get("/api/health").is_some());
    }

    #[tokio::test]
    async fn should_serve_swagger_ui() {
        let cli = configured("unused");

        let resp = cli.get("/docs").send().await;

        resp.assert_status_is_ok();
    }
}
