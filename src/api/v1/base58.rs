//! Base58 codec endpoints

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse, Json,
};

/// POST /v1/base58/encode
pub async fn encode(
    State(state): State<AppState>,
    Json(request): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let bytes = hex::decode(&request.hex).map_err(|e| {
        ApiError::bad_request(format!("Invalid hex input: {}", e))
            .with_param("hex")
            .with_code("invalid_hex")
    })?;

    let encoded = state
        .id_service
        .encode(&bytes)
        .map_err(|e| ApiError::from(e).with_param("hex"))?;

    Ok(Json(EncodeResponse { encoded }))
}

/// POST /v1/base58/decode
pub async fn decode(
    State(state): State<AppState>,
    Json(request): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>, ApiError> {
    let bytes = state
        .id_service
        .decode(&request.encoded)
        .map_err(|e| ApiError::from(e).with_param("encoded"))?;

    Ok(Json(DecodeResponse {
        hex: hex::encode(&bytes),
        byte_length: bytes.len(),
    }))
}
