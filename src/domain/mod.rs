//! Domain layer - Core identifier types and traits

pub mod id;

pub use id::{EntropySource, IdError, Identifier, Namespace, PrefixRegistry};
