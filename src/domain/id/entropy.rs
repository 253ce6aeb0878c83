//! Entropy source trait

use super::error::IdError;

#[cfg(test)]
use mockall::automock;

/// Source of unpredictable bytes for identifier material.
///
/// Implementations must draw from a cryptographic generator and report
/// `IdError::EntropyUnavailable` instead of degrading to weaker randomness.
#[cfg_attr(test, automock)]
pub trait EntropySource: Send + Sync {
    /// Fill `dest` completely with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), IdError>;
}

/// Draw `length` bytes from a source
pub fn random_bytes(source: &dyn EntropySource, length: usize) -> Result<Vec<u8>, IdError> {
    let mut bytes = vec![0u8; length];
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}
