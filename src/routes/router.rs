use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::cache::PageSource;
use crate::handlers::{AppState, status_page};

pub fn create_router<S: PageSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(status_page::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
