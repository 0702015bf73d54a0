//! Route composition

use crate::config::ServerConfig;
use axum::{
    Router,
    http::{self, Method, header},
    response::Html,
    routing::get,
};
use codec::codec_router;
use kernel::error::app_error::AppError;
use passgen::passgen_router;
use platform::html::{NAV, escape, page};
use scanner::scanner_router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// GET /
async fn dashboard() -> Html<String> {
    let links: String = NAV
        .iter()
        .skip(1)
        .map(|(href, label)| format!(r#"<li><a href="{href}">{}</a></li>"#, escape(label)))
        .collect();
    Html(page("Toolbox", &format!("<ul class=\"tools\">{links}</ul>")))
}

async fn not_found() -> AppError {
    AppError::not_found("No route for this path")
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}

/// Merge the feature routers and attach the shared layers
pub fn build_app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .merge(passgen_router(config.passgen.clone()))
        .merge(codec_router())
        .merge(scanner_router(config.scanner.clone()))
        .nest_service("/passgen/static", ServeDir::new(&config.static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}
