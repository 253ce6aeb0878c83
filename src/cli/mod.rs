//! CLI module for the identifier generator
//!
//! Provides subcommands for running the HTTP API and for one-shot
//! identifier operations from a shell.

pub mod ids;
pub mod serve;

use clap::{Parser, Subcommand};

/// Prefixed base58 identifiers for platform entities
#[derive(Parser)]
#[command(name = "pmp-idgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the identifier HTTP API
    Serve(serve::ServeArgs),

    /// Generate identifiers for a namespace
    Generate(ids::GenerateArgs),

    /// Encode hex bytes as base58
    Encode(ids::EncodeArgs),

    /// Decode base58 text into hex bytes
    Decode(ids::DecodeArgs),

    /// Show the namespace and random bytes behind an identifier
    Inspect(ids::InspectArgs),

    /// List namespaces and their prefixes
    Namespaces,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::Namespace;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["pmp-idgen", "generate", "keyAuth", "-b", "8", "-n", "2"])
            .unwrap();

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.namespace, Namespace::KeyAuth);
                assert_eq!(args.bytes, Some(8));
                assert_eq!(args.count, 2);
                assert!(!args.json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_parse_unknown_namespace() {
        assert!(Cli::try_parse_from(["pmp-idgen", "generate", "tenant"]).is_err());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["pmp-idgen", "serve", "--port", "9090"]).unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(9090));
                assert_eq!(args.host, None);
            }
            _ => panic!("expected serve command"),
        }
    }
}
