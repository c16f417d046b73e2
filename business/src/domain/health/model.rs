/// Configuration status reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    /// Whether the text generator reached the configured state.
    pub generator_configured: bool,
    /// Whether a credential was supplied at startup.
    pub credential_present: bool,
}
