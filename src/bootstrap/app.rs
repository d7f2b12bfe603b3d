use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use axum::middleware;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::cors::build_cors;
use crate::presentation::http::error::{ErrorPolicy, not_found, translate_errors};
use crate::presentation::http::{contacts, health, openapi};

/// Assembles the full HTTP application: contact router under `/api/contact`,
/// liveness and API description under `/api`, a JSON 404 for everything else.
/// Trailing slashes are trimmed before routing, so `/api/contact/` and
/// `/api/contact` are the same route.
pub fn build_app(ctx: AppContext) -> anyhow::Result<NormalizePath<Router>> {
    let cors = build_cors(&ctx.cfg)?;
    let policy = ErrorPolicy {
        expose_detail: ctx.cfg.expose_error_detail(),
    };

    let app = Router::new()
        .nest("/api/contact", contacts::routes(ctx.clone()))
        .nest("/api", health::routes())
        .nest("/api", openapi::routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(policy, translate_errors))
        .layer(cors)
        .layer(DefaultBodyLimit::max(ctx.cfg.body_limit_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );
    Ok(NormalizePath::trim_trailing_slash(app))
}
