//! PMP identifier generator
//!
//! Collision-resistant prefixed identifiers (`ws_4Vq9xT...`) for platform
//! entities:
//! - Base58 codec over the Bitcoin alphabet
//! - OS-backed entropy source with no weak fallback
//! - Closed namespace set with an injectable prefix registry
//! - HTTP API and CLI for callers outside the process
//!
//! ```no_run
//! use pmp_idgen::{new_id, Namespace};
//!
//! let id = new_id(Namespace::Workspace, 16)?;
//! assert!(id.starts_with("ws_"));
//! # Ok::<(), pmp_idgen::IdError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;
pub use domain::id::{
    EntropySource, IdError, Identifier, Namespace, ParsedIdentifier, PrefixRegistry,
};
pub use infrastructure::id::{base58, new_id, IdGenerator, IdService, OsEntropy};

use tracing::info;

use api::state::AppState;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let generator = config
        .ids
        .build_generator()
        .map_err(|e| anyhow::anyhow!("Invalid identifier configuration: {}", e))?;

    info!(
        namespaces = generator.registry().entries().len(),
        default_byte_length = generator.default_byte_length(),
        max_byte_length = generator.max_byte_length(),
        "Identifier generator ready"
    );

    Ok(AppState::new(IdService::new(generator)))
}
