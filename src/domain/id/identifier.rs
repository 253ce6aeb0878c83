//! Prefixed identifier value types

use std::fmt;

use serde::Serialize;

use super::namespace::Namespace;
use super::validation::SEPARATOR;

/// A prefixed identifier: `<prefix>_<base58 suffix>`.
///
/// Identifiers are opaque to callers. Their length depends on the numeric
/// value of the random bytes, so never assume a fixed width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Identifier {
    namespace: Namespace,
    value: String,
    prefix_len: usize,
}

impl Identifier {
    /// Assemble an identifier from an already resolved prefix and encoded suffix
    pub(crate) fn from_parts(namespace: Namespace, prefix: &str, suffix: &str) -> Self {
        let mut value = String::with_capacity(prefix.len() + 1 + suffix.len());
        value.push_str(prefix);
        value.push(SEPARATOR);
        value.push_str(suffix);

        Self {
            namespace,
            value,
            prefix_len: prefix.len(),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn prefix(&self) -> &str {
        &self.value[..self.prefix_len]
    }

    /// The base58 portion after the separator
    pub fn suffix(&self) -> &str {
        &self.value[self.prefix_len + SEPARATOR.len_utf8()..]
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.value
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// An identifier parsed back into its namespace and raw random bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    pub identifier: Identifier,
    pub bytes: Vec<u8>,
}

impl ParsedIdentifier {
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let id = Identifier::from_parts(Namespace::Workspace, "ws", "4Vq9xT");

        assert_eq!(id.as_str(), "ws_4Vq9xT");
        assert_eq!(id.prefix(), "ws");
        assert_eq!(id.suffix(), "4Vq9xT");
        assert_eq!(id.namespace(), Namespace::Workspace);
        assert_eq!(id.to_string(), "ws_4Vq9xT");
    }

    #[test]
    fn test_serializes_as_string() {
        let id = Identifier::from_parts(Namespace::Request, "req", "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"req_abc\"");
    }

    #[test]
    fn test_into_string() {
        let id = Identifier::from_parts(Namespace::KeyAuth, "keyAuth", "Zz1");
        let s: String = id.into();
        assert_eq!(s, "keyAuth_Zz1");
    }
}
