use crate::handlers::{laudo, status};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/laudos", post(laudo::issue_laudo).get(laudo::list_laudos))
        .route("/laudos/{number}", get(laudo::get_laudo))
        .route("/status", get(status::get_status))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
