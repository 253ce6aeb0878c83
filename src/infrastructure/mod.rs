//! Infrastructure layer - Codec, entropy, generation and observability

pub mod id;
pub mod logging;
pub mod observability;
