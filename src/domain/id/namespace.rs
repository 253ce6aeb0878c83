//! Entity namespaces

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IdError;

/// Logical category of entity. Determines the prefix of its identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum Namespace {
    Workspace,
    Api,
    RootKey,
    Key,
    KeyAuth,
    Request,
    Policy,
}

impl Namespace {
    /// All namespaces, in registry order
    pub const ALL: [Namespace; 7] = [
        Self::Workspace,
        Self::Api,
        Self::RootKey,
        Self::Key,
        Self::KeyAuth,
        Self::Request,
        Self::Policy,
    ];

    /// Canonical name used in config files, the CLI and the HTTP API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Api => "api",
            Self::RootKey => "rootKey",
            Self::Key => "key",
            Self::KeyAuth => "keyAuth",
            Self::Request => "request",
            Self::Policy => "policy",
        }
    }

    /// Prefix used when the registry carries no override
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Self::Workspace => "ws",
            Self::Api => "api",
            Self::RootKey => "unkey",
            Self::Key => "key",
            Self::KeyAuth => "keyAuth",
            Self::Request => "req",
            Self::Policy => "pol",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = IdError;

    /// Case-insensitive; `_` and `-` are ignored so `root_key` and `rootkey`
    /// both resolve to `rootKey`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "workspace" => Ok(Self::Workspace),
            "api" => Ok(Self::Api),
            "rootkey" => Ok(Self::RootKey),
            "key" => Ok(Self::Key),
            "keyauth" => Ok(Self::KeyAuth),
            "request" => Ok(Self::Request),
            "policy" => Ok(Self::Policy),
            _ => Err(IdError::unknown_namespace(s)),
        }
    }
}

impl TryFrom<String> for Namespace {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
