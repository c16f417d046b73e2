use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// Configuration:
/// - Origins: all (no allow-list, the request origin is echoed back)
/// - Methods: GET, HEAD, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: all (no allow-list, requested headers are echoed back)
/// - Credentials: Enabled
pub fn init_cors() -> Cors {
    Cors::new()
        .allow_methods(vec!["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allow_credentials(true)
}
