//! Identifier domain
//!
//! Namespaces, the prefix registry, identifier value types and the entropy
//! source seam used by the generator.

mod entropy;
mod error;
mod identifier;
mod namespace;
mod registry;
mod validation;

#[cfg(test)]
pub use entropy::MockEntropySource;
pub use entropy::{random_bytes, EntropySource};
pub use error::IdError;
pub use identifier::{Identifier, ParsedIdentifier};
pub use namespace::Namespace;
pub use registry::{PrefixRegistry, RegistryEntry};
pub use validation::{
    validate_batch_size, validate_byte_length, validate_prefix, MAX_PREFIX_LENGTH, SEPARATOR,
};
