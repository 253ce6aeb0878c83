//! Identifier infrastructure implementations
//!
//! This module provides the base58 codec, the OS entropy source, the
//! namespaced identifier generator and the service used by the outer layers.

pub mod base58;
mod entropy;
mod generator;
mod service;

pub use entropy::OsEntropy;
pub use generator::{
    new_id, IdGenerator, DEFAULT_BYTE_LENGTH, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_BYTE_LENGTH,
    DEFAULT_MAX_CODEC_BYTES,
};
pub use service::{GeneratedIds, IdService};
