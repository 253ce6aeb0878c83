//! v1 API endpoints

pub mod base58;
pub mod ids;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/namespaces", get(ids::list_namespaces))
        .route("/ids", post(ids::generate_ids))
        .route("/ids/{id}", get(ids::inspect_id))
        .route("/base58/encode", post(base58::encode))
        .route("/base58/decode", post(base58::decode))
}
