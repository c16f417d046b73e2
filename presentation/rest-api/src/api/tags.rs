use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness and configuration status
    Health,
    /// Health advice generation
    Advice,
}
