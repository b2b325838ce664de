use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{companies, health, technologies};
use crate::api::state::AppState;

/// Builds the application router with middleware and shared state
///
/// List routes answer both with and without the trailing slash.
pub fn build_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Company routes
        .route("/companies", get(companies::list_companies))
        .route("/companies/", get(companies::list_companies))
        .route("/companies/:company_id", get(companies::get_company))
        .route(
            "/companies/:company_id/financials",
            get(companies::get_company_financials),
        )
        .route(
            "/companies/:company_id/technologies",
            get(companies::get_company_technologies),
        )
        // Technology routes
        .route("/technologies", get(technologies::list_technologies))
        .route("/technologies/", get(technologies::list_technologies))
        .route("/technologies/:technology_id", get(technologies::get_technology))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
