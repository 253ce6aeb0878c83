//! API request/response types

mod error;
mod ids;
mod json;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use ids::{
    DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse, GenerateIdsRequest,
    GenerateIdsResponse, InspectIdResponse, NamespacesResponse,
};
pub use json::Json;
