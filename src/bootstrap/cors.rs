use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::bootstrap::config::Config;

/// Single allowed origin, echoed only to requests that carry it. Fixed method
/// and header allow-lists, no credentials.
/// Preflight `OPTIONS` requests are answered for every path.
pub fn build_cors(cfg: &Config) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(&cfg.cors_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(false))
}
