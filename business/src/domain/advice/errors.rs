/// Advice errors surfaced to the caller as an HTTP error status.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AdviceError {
    #[error("advice.prompt_empty")]
    PromptEmpty,
    #[error("advice.not_configured")]
    NotConfigured,
}

/// Failures of a single call to the text generation backend.
///
/// These never reach the caller as an error status: the ask use case
/// downgrades them to an inline apology.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("credential rejected")]
    Unauthorized,
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("response blocked: {0}")]
    Blocked(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
