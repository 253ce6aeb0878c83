//! Namespace to prefix registry

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::error::IdError;
use super::namespace::Namespace;
use super::validation::validate_prefix;

/// Registry entry as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub namespace: Namespace,
    pub prefix: String,
}

/// Immutable mapping from every namespace to its identifier prefix.
///
/// Every namespace has exactly one prefix and every prefix belongs to exactly
/// one namespace, so identifiers can be resolved back to their namespace.
/// Build it once and share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRegistry {
    prefixes: BTreeMap<Namespace, String>,
    namespaces: HashMap<String, Namespace>,
}

impl PrefixRegistry {
    /// Build a registry from the default prefixes with the given overrides
    pub fn with_overrides(
        overrides: impl IntoIterator<Item = (Namespace, String)>,
    ) -> Result<Self, IdError> {
        let mut prefixes: BTreeMap<Namespace, String> = Namespace::ALL
            .iter()
            .map(|ns| (*ns, ns.default_prefix().to_string()))
            .collect();

        for (namespace, prefix) in overrides {
            prefixes.insert(namespace, prefix);
        }

        Self::from_prefixes(prefixes)
    }

    fn from_prefixes(prefixes: BTreeMap<Namespace, String>) -> Result<Self, IdError> {
        let mut namespaces = HashMap::with_capacity(prefixes.len());

        for (namespace, prefix) in &prefixes {
            validate_prefix(prefix)?;

            if namespaces.insert(prefix.clone(), *namespace).is_some() {
                return Err(IdError::DuplicatePrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(Self {
            prefixes,
            namespaces,
        })
    }

    /// Prefix assigned to a namespace
    pub fn prefix(&self, namespace: Namespace) -> &str {
        // Construction fills every namespace
        self.prefixes
            .get(&namespace)
            .map(String::as_str)
            .unwrap_or_else(|| namespace.default_prefix())
    }

    /// Resolve a prefix back to its namespace
    pub fn namespace_for_prefix(&self, prefix: &str) -> Result<Namespace, IdError> {
        self.namespaces
            .get(prefix)
            .copied()
            .ok_or_else(|| IdError::UnknownPrefix(prefix.to_string()))
    }

    /// All entries, in namespace order
    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.prefixes
            .iter()
            .map(|(namespace, prefix)| RegistryEntry {
                namespace: *namespace,
                prefix: prefix.clone(),
            })
            .collect()
    }
}

impl Default for PrefixRegistry {
    fn default() -> Self {
        let prefixes = Namespace::ALL
            .iter()
            .map(|ns| (*ns, ns.default_prefix().to_string()))
            .collect();
        let namespaces = Namespace::ALL
            .iter()
            .map(|ns| (ns.default_prefix().to_string(), *ns))
            .collect();

        Self {
            prefixes,
            namespaces,
        }
    }
}
