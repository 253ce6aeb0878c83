//! Operating system entropy source

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::id::{EntropySource, IdError};

/// Entropy drawn from the operating system CSPRNG.
///
/// Failures surface as `EntropyUnavailable`; there is no fallback generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), IdError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| IdError::entropy_unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::random_bytes;

    #[test]
    fn test_fills_requested_length() {
        let bytes = random_bytes(&OsEntropy::new(), 32).unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_successive_draws_differ() {
        let source = OsEntropy::new();
        let a = random_bytes(&source, 16).unwrap();
        let b = random_bytes(&source, 16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_across_threads() {
        let source = std::sync::Arc::new(OsEntropy::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = source.clone();
                std::thread::spawn(move || random_bytes(source.as_ref(), 16).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 16);
        }
    }
}
