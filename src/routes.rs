use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::Method,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::Database;
use crate::handlers;

/// Build the full HTTP router around a connected store handle
pub fn app(db: Database, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health))
        .merge(college_routes())
        .merge(research_paper_routes())
        .merge(admission_routes())
        // Shared store handle for every handler
        .layer(Extension(db))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer());

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

fn college_routes() -> Router {
    use handlers::colleges;

    Router::new()
        // Collection-level operations
        .route(
            "/colleges",
            get(colleges::colleges_get).post(colleges::colleges_post),
        )
        .route("/colleges/search/:name", get(colleges::colleges_search))
        // Single-college operations
        .route(
            "/colleges/:id",
            get(colleges::college_get)
                .put(colleges::college_put)
                .delete(colleges::college_delete),
        )
}

fn research_paper_routes() -> Router {
    Router::new().route("/research-papers", get(handlers::research_papers::get))
}

fn admission_routes() -> Router {
    use axum::routing::post;

    Router::new().route("/admissions", post(handlers::admissions::post))
}
