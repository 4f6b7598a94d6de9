use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer. Hardening the policy is out of scope for now.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
