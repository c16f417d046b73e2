use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use business::domain::advice::errors::GenerationError;
use business::domain::advice::services::TextGeneratorService;

use crate::client::GeminiClient;

/// Stand-in message when an error response body cannot be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

pub struct TextGeneratorGemini {
    client: GeminiClient,
}

impl TextGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request(text: &str) -> GenerateContentRequest<'_> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text }],
            }],
        }
    }

    fn map_status(status: StatusCode, body: String) -> GenerationError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => GenerationError::QuotaExceeded,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Unauthorized,
            _ => GenerationError::Api {
                status: status.as_u16(),
                message: body,
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(GenerationError::Blocked(reason));
        }

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            GenerationError::MalformedResponse("response has no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(match candidate.finish_reason.as_deref() {
                Some("SAFETY") => GenerationError::Blocked("SAFETY".to_string()),
                _ => GenerationError::MalformedResponse("candidate has no text".to_string()),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorGemini {
    async fn generate(&self, text: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .query(&[("key", self.client.api_key.as_str())])
            .json(&Self::build_request(text))
            .send()
            .await
            // without_url keeps the credential out of the message
            .map_err(|e| GenerationError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            return Err(Self::map_status(status, body));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.without_url().to_string()))?;

        Self::extract_text(data)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
