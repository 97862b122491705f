use axum::Router;
use axum::middleware;
use axum::routing::{any, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentRenderer, PageFetcher, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, scrape_handler};
use crate::presentation::state::AppState;

pub const SCRAPE_ROUTE: &str = "/api/scrape";

pub fn create_router<F, X, R>(state: AppState<F, X, R>) -> Router
where
    F: PageFetcher + 'static,
    X: TextExtractor + 'static,
    R: DocumentRenderer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(SCRAPE_ROUTE, any(scrape_handler::<F, X, R>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
