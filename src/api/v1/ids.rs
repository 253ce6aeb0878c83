//! Identifier endpoint handlers

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, GenerateIdsRequest, GenerateIdsResponse, InspectIdResponse, Json,
    NamespacesResponse,
};
use crate::domain::id::Namespace;

/// POST /v1/ids
pub async fn generate_ids(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdsRequest>,
) -> Result<Json<GenerateIdsResponse>, ApiError> {
    let namespace: Namespace = request.namespace.parse()?;

    debug!(
        namespace = %namespace,
        count = request.count,
        byte_length = ?request.byte_length,
        "Generating identifiers"
    );

    let generated = state
        .id_service
        .generate(namespace, request.byte_length, request.count)?;

    Ok(Json(generated.into()))
}

/// GET /v1/ids/{id}
pub async fn inspect_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InspectIdResponse>, ApiError> {
    let parsed = state
        .id_service
        .inspect(&id)
        .map_err(|e| ApiError::from(e).with_param("id"))?;

    Ok(Json(parsed.into()))
}

/// GET /v1/namespaces
pub async fn list_namespaces(State(state): State<AppState>) -> Json<NamespacesResponse> {
    Json(NamespacesResponse {
        data: state.id_service.namespaces(),
    })
}
