//! Request and response bodies for the identifier endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{Namespace, ParsedIdentifier, RegistryEntry};
use crate::infrastructure::id::GeneratedIds;

/// POST /v1/ids
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateIdsRequest {
    /// Namespace name; parsed by the handler so unknown names map to `unknown_namespace`
    pub namespace: String,
    #[serde(default)]
    pub byte_length: Option<usize>,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateIdsResponse {
    pub namespace: Namespace,
    pub prefix: String,
    pub byte_length: usize,
    pub ids: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl From<GeneratedIds> for GenerateIdsResponse {
    fn from(generated: GeneratedIds) -> Self {
        Self {
            namespace: generated.namespace,
            prefix: generated.prefix,
            byte_length: generated.byte_length,
            ids: generated.ids.into_iter().map(String::from).collect(),
            generated_at: Utc::now(),
        }
    }
}

/// GET /v1/ids/{id}
#[derive(Debug, Clone, Serialize)]
pub struct InspectIdResponse {
    pub id: String,
    pub namespace: Namespace,
    pub prefix: String,
    pub suffix: String,
    pub byte_length: usize,
    pub bytes_hex: String,
}

impl From<ParsedIdentifier> for InspectIdResponse {
    fn from(parsed: ParsedIdentifier) -> Self {
        let identifier = &parsed.identifier;

        Self {
            id: identifier.to_string(),
            namespace: identifier.namespace(),
            prefix: identifier.prefix().to_string(),
            suffix: identifier.suffix().to_string(),
            byte_length: parsed.bytes.len(),
            bytes_hex: hex::encode(&parsed.bytes),
        }
    }
}

/// GET /v1/namespaces
#[derive(Debug, Clone, Serialize)]
pub struct NamespacesResponse {
    pub data: Vec<RegistryEntry>,
}

/// POST /v1/base58/encode
#[derive(Debug, Clone, Deserialize)]
pub struct EncodeRequest {
    pub hex: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EncodeResponse {
    pub encoded: String,
}

/// POST /v1/base58/decode
#[derive(Debug, Clone, Deserialize)]
pub struct DecodeRequest {
    pub encoded: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeResponse {
    pub hex: String,
    pub byte_length: usize,
}
