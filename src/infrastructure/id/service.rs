//! Identifier service
//!
//! Wraps the generator for the HTTP and CLI surfaces, adding logging and
//! metrics around each operation.

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::id::{
    random_bytes, IdError, Identifier, Namespace, ParsedIdentifier, RegistryEntry,
};

use super::base58;
use super::generator::IdGenerator;

/// Result of a batch generation
#[derive(Debug, Clone)]
pub struct GeneratedIds {
    pub namespace: Namespace,
    pub prefix: String,
    pub byte_length: usize,
    pub ids: Vec<Identifier>,
}

/// Identifier service shared by the API and CLI
#[derive(Debug, Clone)]
pub struct IdService {
    generator: IdGenerator,
}

impl IdService {
    pub fn new(generator: IdGenerator) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &IdGenerator {
        &self.generator
    }

    /// Generate `count` identifiers for a namespace
    pub fn generate(
        &self,
        namespace: Namespace,
        byte_length: Option<usize>,
        count: usize,
    ) -> Result<GeneratedIds, IdError> {
        let byte_length = byte_length.unwrap_or(self.generator.default_byte_length());

        match self.generator.new_ids(namespace, Some(byte_length), count) {
            Ok(ids) => {
                counter!("ids_generated_total", "namespace" => namespace.as_str())
                    .increment(ids.len() as u64);
                debug!(namespace = %namespace, count = ids.len(), byte_length, "Generated identifiers");

                Ok(GeneratedIds {
                    namespace,
                    prefix: self.generator.registry().prefix(namespace).to_string(),
                    byte_length,
                    ids,
                })
            }
            Err(e) => {
                record_error(namespace.as_str(), &e);
                Err(e)
            }
        }
    }

    /// Parse an identifier and recover its random bytes
    pub fn inspect(&self, id: &str) -> Result<ParsedIdentifier, IdError> {
        let parsed = self.generator.parse(id)?;
        debug!(namespace = %parsed.identifier.namespace(), "Inspected identifier");
        Ok(parsed)
    }

    /// Encode at most `max_codec_bytes` bytes as base58
    pub fn encode(&self, bytes: &[u8]) -> Result<String, IdError> {
        let max = self.generator.max_codec_bytes();
        if bytes.len() > max {
            debug!(length = bytes.len(), max, "Rejected oversized encode input");
            return Err(IdError::InvalidByteLength {
                length: bytes.len(),
                max,
            });
        }

        Ok(base58::encode(bytes))
    }

    /// Decode text no longer than the encoding of `max_codec_bytes` bytes
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, IdError> {
        let max = base58::max_encoded_length(self.generator.max_codec_bytes());
        let length = text.chars().count();
        if length > max {
            debug!(length, max, "Rejected oversized decode input");
            return Err(IdError::InvalidByteLength { length, max });
        }

        base58::decode(text)
    }

    /// Registered namespaces and their prefixes
    pub fn namespaces(&self) -> Vec<RegistryEntry> {
        self.generator.registry().entries()
    }

    /// Draw a single byte to confirm the entropy source is working
    pub fn check_entropy(&self) -> Result<(), IdError> {
        random_bytes(self.generator.entropy(), 1).map(|_| ()).inspect_err(|e| {
            record_error("none", e);
        })
    }
}

fn record_error(namespace: &str, error: &IdError) {
    if matches!(error, IdError::EntropyUnavailable(_)) {
        warn!(namespace, error = %error, "Entropy source failure");
    } else {
        debug!(namespace, error = %error, "Identifier generation rejected");
    }

    counter!(
        "id_generation_errors_total",
        "namespace" => namespace.to_string(),
        "kind" => error.kind()
    )
    .increment(1);
}
