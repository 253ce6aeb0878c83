//! Identifier validation utilities

use super::error::IdError;

/// Maximum length of a namespace prefix
pub const MAX_PREFIX_LENGTH: usize = 32;

/// Separator between prefix and encoded suffix
pub const SEPARATOR: char = '_';

/// Validate a namespace prefix
///
/// Rules:
/// - Cannot be empty
/// - Maximum 32 characters
/// - ASCII alphanumeric only (the separator cannot appear in a prefix)
pub fn validate_prefix(prefix: &str) -> Result<(), IdError> {
    if prefix.is_empty() {
        return Err(IdError::invalid_prefix(prefix, "prefix cannot be empty"));
    }

    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(IdError::invalid_prefix(
            prefix,
            format!("prefix exceeds {} characters", MAX_PREFIX_LENGTH),
        ));
    }

    if let Some(c) = prefix.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(IdError::invalid_prefix(
            prefix,
            format!("character '{}' is not allowed, use ASCII letters and digits", c),
        ));
    }

    Ok(())
}

/// Validate a requested number of random bytes
pub fn validate_byte_length(length: usize, max: usize) -> Result<(), IdError> {
    if length == 0 || length > max {
        return Err(IdError::InvalidByteLength { length, max });
    }

    Ok(())
}

/// Validate a requested batch size
pub fn validate_batch_size(count: usize, max: usize) -> Result<(), IdError> {
    if count == 0 || count > max {
        return Err(IdError::InvalidBatchSize { count, max });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes() {
        assert!(validate_prefix("ws").is_ok());
        assert!(validate_prefix("keyAuth").is_ok());
        assert!(validate_prefix("v2").is_ok());
        assert!(validate_prefix(&"a".repeat(MAX_PREFIX_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty_prefix() {
        assert!(matches!(
            validate_prefix(""),
            Err(IdError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_prefix_with_separator() {
        let err = validate_prefix("key_auth").unwrap_err();
        assert!(err.to_string().contains("'_'"));
    }

    #[test]
    fn test_prefix_too_long() {
        assert!(validate_prefix(&"a".repeat(MAX_PREFIX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_byte_length_bounds() {
        assert!(validate_byte_length(1, 64).is_ok());
        assert!(validate_byte_length(64, 64).is_ok());
        assert_eq!(
            validate_byte_length(0, 64),
            Err(IdError::InvalidByteLength { length: 0, max: 64 })
        );
        assert_eq!(
            validate_byte_length(65, 64),
            Err(IdError::InvalidByteLength { length: 65, max: 64 })
        );
    }

    #[test]
    fn test_batch_size_bounds() {
        assert!(validate_batch_size(1, 100).is_ok());
        assert_eq!(
            validate_batch_size(0, 100),
            Err(IdError::InvalidBatchSize { count: 0, max: 100 })
        );
        assert!(validate_batch_size(101, 100).is_err());
    }
}
