use std::sync::Arc;

use async_trait::async_trait;

use super::errors::GenerationError;

/// Service port for the remote text generation backend.
///
/// One call, one attempt. Implementations must not retry.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(&self, text: &str) -> Result<String, GenerationError>;
}

/// Process-wide handle to the text generator.
///
/// Built once at startup. A handle that starts `Unconfigured` stays that way
/// for the lifetime of the process.
#[derive(Clone)]
pub enum GeneratorHandle {
    Configured(Arc<dyn TextGeneratorService>),
    Unconfigured,
}

impl GeneratorHandle {
    pub fn is_configured(&self) -> bool {
        matches!(self, GeneratorHandle::Configured(_))
    }

    pub fn service(&self) -> Option<&Arc<dyn TextGeneratorService>> {
        match self {
            GeneratorHandle::Configured(service) => Some(service),
            GeneratorHandle::Unconfigured => None,
        }
    }
}

impl std::fmt::Debug for GeneratorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorHandle::Configured(_) => write!(f, "Configured"),
            GeneratorHandle::Unconfigured => write!(f, "Unconfigured"),
        }
    }
}
