//! Namespaced identifier generation
//!
//! Resolves the namespace prefix, draws random bytes and joins the prefix
//! with their base58 encoding.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::id::{
    random_bytes, validate_batch_size, validate_byte_length, EntropySource, IdError, Identifier,
    Namespace, ParsedIdentifier, PrefixRegistry, SEPARATOR,
};

use super::base58;
use super::entropy::OsEntropy;

/// Default number of random bytes per identifier
pub const DEFAULT_BYTE_LENGTH: usize = 16;

/// Upper bound on random bytes per identifier
pub const DEFAULT_MAX_BYTE_LENGTH: usize = 64;

/// Upper bound on identifiers per batch
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Upper bound on bytes accepted by the standalone base58 codec operations
pub const DEFAULT_MAX_CODEC_BYTES: usize = 1024;

static DEFAULT_REGISTRY: Lazy<Arc<PrefixRegistry>> =
    Lazy::new(|| Arc::new(PrefixRegistry::default()));

/// Generator for prefixed identifiers
#[derive(Clone)]
pub struct IdGenerator {
    registry: Arc<PrefixRegistry>,
    entropy: Arc<dyn EntropySource>,
    default_byte_length: usize,
    max_byte_length: usize,
    max_batch_size: usize,
    max_codec_bytes: usize,
}

impl IdGenerator {
    /// Create a generator over a registry, drawing from the OS CSPRNG
    pub fn new(registry: Arc<PrefixRegistry>) -> Self {
        Self {
            registry,
            entropy: Arc::new(OsEntropy::new()),
            default_byte_length: DEFAULT_BYTE_LENGTH,
            max_byte_length: DEFAULT_MAX_BYTE_LENGTH,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_codec_bytes: DEFAULT_MAX_CODEC_BYTES,
        }
    }

    /// Use a different entropy source
    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }

    /// Set the byte length used by `new_id`
    pub fn with_default_byte_length(mut self, length: usize) -> Self {
        self.default_byte_length = length;
        self
    }

    /// Set the largest accepted byte length
    pub fn with_max_byte_length(mut self, max: usize) -> Self {
        self.max_byte_length = max;
        self
    }

    /// Set the largest accepted batch
    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = max;
        self
    }

    /// Set the largest input for standalone encode/decode
    pub fn with_max_codec_bytes(mut self, max: usize) -> Self {
        self.max_codec_bytes = max;
        self
    }

    pub fn registry(&self) -> &PrefixRegistry {
        &self.registry
    }

    pub fn entropy(&self) -> &dyn EntropySource {
        self.entropy.as_ref()
    }

    pub fn default_byte_length(&self) -> usize {
        self.default_byte_length
    }

    pub fn max_byte_length(&self) -> usize {
        self.max_byte_length
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    pub fn max_codec_bytes(&self) -> usize {
        self.max_codec_bytes
    }

    /// Generate an identifier with the default byte length
    pub fn new_id(&self, namespace: Namespace) -> Result<Identifier, IdError> {
        self.new_id_with_length(namespace, self.default_byte_length)
    }

    /// Generate an identifier from `byte_length` random bytes
    pub fn new_id_with_length(
        &self,
        namespace: Namespace,
        byte_length: usize,
    ) -> Result<Identifier, IdError> {
        validate_byte_length(byte_length, self.max_byte_length)?;

        let bytes = random_bytes(self.entropy.as_ref(), byte_length)?;
        let suffix = base58::encode(&bytes);

        Ok(Identifier::from_parts(
            namespace,
            self.registry.prefix(namespace),
            &suffix,
        ))
    }

    /// Generate `count` identifiers. Fails as a whole on the first error.
    pub fn new_ids(
        &self,
        namespace: Namespace,
        byte_length: Option<usize>,
        count: usize,
    ) -> Result<Vec<Identifier>, IdError> {
        validate_batch_size(count, self.max_batch_size)?;

        let byte_length = byte_length.unwrap_or(self.default_byte_length);

        (0..count)
            .map(|_| self.new_id_with_length(namespace, byte_length))
            .collect()
    }

    /// Parse an identifier issued under this generator's registry
    pub fn parse(&self, text: &str) -> Result<ParsedIdentifier, IdError> {
        let (prefix, suffix) = text
            .split_once(SEPARATOR)
            .ok_or_else(|| IdError::malformed(format!("'{}' has no '{}' separator", text, SEPARATOR)))?;

        let namespace = self.registry.namespace_for_prefix(prefix)?;

        if suffix.is_empty() {
            return Err(IdError::malformed(format!("'{}' has an empty suffix", text)));
        }

        let bytes = base58::decode(suffix)?;

        Ok(ParsedIdentifier {
            identifier: Identifier::from_parts(namespace, prefix, suffix),
            bytes,
        })
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY.clone())
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("registry", &self.registry)
            .field("default_byte_length", &self.default_byte_length)
            .field("max_byte_length", &self.max_byte_length)
            .field("max_batch_size", &self.max_batch_size)
            .field("max_codec_bytes", &self.max_codec_bytes)
            .finish_non_exhaustive()
    }
}

/// Generate an identifier with the default registry and OS entropy
pub fn new_id(namespace: Namespace, byte_length: usize) -> Result<String, IdError> {
    IdGenerator::default()
        .new_id_with_length(namespace, byte_length)
        .map(Identifier::into_string)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU8, Ordering};

    use regex::Regex;

    use super::*;
    use crate::domain::id::MockEntropySource;

    /// Fills every buffer with an incrementing byte value
    struct CountingEntropy(AtomicU8);

    impl EntropySource for CountingEntropy {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), IdError> {
            let value = self.0.fetch_add(1, Ordering::SeqCst);
            dest.fill(value);
            Ok(())
        }
    }

    fn failing_entropy() -> Arc<dyn EntropySource> {
        let mut source = MockEntropySource::new();
        source
            .expect_fill_bytes()
            .returning(|_| Err(IdError::entropy_unavailable("device not ready")));
        Arc::new(source)
    }

    #[test]
    fn test_workspace_id_shape() {
        let id = new_id(Namespace::Workspace, 8).unwrap();
        let pattern = Regex::new(r"^ws_[1-9A-HJ-NP-Za-km-z]+$").unwrap();
        assert!(pattern.is_match(&id), "unexpected id {}", id);
    }

    #[test]
    fn test_prefix_for_every_namespace() {
        let generator = IdGenerator::default();

        for namespace in Namespace::ALL {
            let id = generator.new_id(namespace).unwrap();
            let expected = format!("{}_", namespace.default_prefix());
            assert!(id.as_str().starts_with(&expected));
            assert_eq!(id.namespace(), namespace);
        }
    }

    #[test]
    fn test_custom_registry() {
        let registry =
            PrefixRegistry::with_overrides([(Namespace::Request, "rq".to_string())]).unwrap();
        let generator = IdGenerator::new(Arc::new(registry));

        let id = generator.new_id(Namespace::Request).unwrap();
        assert!(id.as_str().starts_with("rq_"));
    }

    #[test]
    fn test_default_byte_length_used() {
        let generator = IdGenerator::default().with_default_byte_length(8);
        let id = generator.new_id(Namespace::Key).unwrap();
        let parsed = generator.parse(id.as_str()).unwrap();
        assert_eq!(parsed.byte_length(), 8);

        let parsed = IdGenerator::default()
            .parse(IdGenerator::default().new_id(Namespace::Key).unwrap().as_str())
            .unwrap();
        assert_eq!(parsed.byte_length(), DEFAULT_BYTE_LENGTH);
    }

    #[test]
    fn test_deterministic_with_injected_entropy() {
        let generator =
            IdGenerator::default().with_entropy(Arc::new(CountingEntropy(AtomicU8::new(0))));

        let first = generator.new_id_with_length(Namespace::Api, 2).unwrap();
        let second = generator.new_id_with_length(Namespace::Api, 2).unwrap();

        assert_eq!(first.as_str(), "api_11");
        assert_eq!(second.as_str(), format!("api_{}", base58::encode(&[1, 1])));
    }

    #[test]
    fn test_no_collisions() {
        let generator = IdGenerator::default();
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let id = generator.new_id_with_length(Namespace::Request, 8).unwrap();
            assert!(seen.insert(id.into_string()));
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let registry =
            PrefixRegistry::with_overrides([(Namespace::Key, "k".to_string())]).unwrap();
        let generator = Arc::new(IdGenerator::new(Arc::new(registry)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..500)
                        .map(|_| generator.new_id(Namespace::Key).unwrap().into_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(id.starts_with("k_"), "unexpected id {}", id);
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }

    #[test]
    fn test_rejects_invalid_byte_length() {
        let generator = IdGenerator::default().with_max_byte_length(32);

        assert_eq!(
            generator.new_id_with_length(Namespace::Key, 0),
            Err(IdError::InvalidByteLength { length: 0, max: 32 })
        );
        assert_eq!(
            generator.new_id_with_length(Namespace::Key, 33),
            Err(IdError::InvalidByteLength { length: 33, max: 32 })
        );
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let generator = IdGenerator::default().with_entropy(failing_entropy());

        assert_eq!(
            generator.new_id(Namespace::Workspace),
            Err(IdError::EntropyUnavailable("device not ready".to_string()))
        );
    }

    #[test]
    fn test_batch_generation() {
        let generator = IdGenerator::default();
        let ids = generator.new_ids(Namespace::Policy, Some(12), 5).unwrap();

        assert_eq!(ids.len(), 5);
        assert!(ids.iter().all(|id| id.prefix() == "pol"));

        let unique: HashSet<_> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let generator = IdGenerator::default().with_entropy(failing_entropy());
        assert!(matches!(
            generator.new_ids(Namespace::Key, None, 3),
            Err(IdError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_batch_size_limits() {
        let generator = IdGenerator::default().with_max_batch_size(10);
        assert_eq!(
            generator.new_ids(Namespace::Key, None, 0),
            Err(IdError::InvalidBatchSize { count: 0, max: 10 })
        );
        assert_eq!(
            generator.new_ids(Namespace::Key, None, 11),
            Err(IdError::InvalidBatchSize { count: 11, max: 10 })
        );
    }

    #[test]
    fn test_parse_round_trip() {
        let generator =
            IdGenerator::default().with_entropy(Arc::new(CountingEntropy(AtomicU8::new(0))));
        let id = generator.new_id_with_length(Namespace::KeyAuth, 4).unwrap();

        let parsed = generator.parse(id.as_str()).unwrap();
        assert_eq!(parsed.identifier, id);
        assert_eq!(parsed.bytes, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_errors() {
        let generator = IdGenerator::default();

        assert!(matches!(
            generator.parse("nounderscore"),
            Err(IdError::MalformedIdentifier(_))
        ));
        assert!(matches!(
            generator.parse("ws_"),
            Err(IdError::MalformedIdentifier(_))
        ));
        assert_eq!(
            generator.parse("tenant_abc"),
            Err(IdError::UnknownPrefix("tenant".to_string()))
        );
        assert_eq!(
            generator.parse("ws_ab0"),
            Err(IdError::InvalidCharacter {
                character: '0',
                index: 2
            })
        );
    }
}
