pub mod clip;
pub mod download;
pub mod health;
pub mod page;

use axum::{Router, http::{Method, header}};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

/// Build all routes for the API
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(page::routes())
        .merge(health::routes())
        .merge(api_routes())
}

/// JSON routes, callable cross-origin.
fn api_routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(clip::routes())
        .merge(download::routes())
        .layer(cors)
}
