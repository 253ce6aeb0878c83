//! One-shot identifier commands: generate, encode, decode, inspect, namespaces

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::id::Namespace;
use crate::infrastructure::id::IdService;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Namespace to generate for (workspace, api, rootKey, key, keyAuth, request, policy)
    pub namespace: Namespace,

    /// Random bytes per identifier (defaults to ids.default_byte_length)
    #[arg(long, short = 'b')]
    pub bytes: Option<usize>,

    /// Number of identifiers to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Print a JSON document instead of one identifier per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Hex-encoded bytes
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Base58 text
    pub encoded: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Identifier such as ws_4Vq9xT...
    pub id: String,
}

fn load_service() -> anyhow::Result<IdService> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    let generator = config
        .ids
        .build_generator()
        .context("invalid [ids] configuration")?;

    Ok(IdService::new(generator))
}

pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    println!("{}", render_generate(&load_service()?, &args)?);
    Ok(())
}

pub fn encode(args: EncodeArgs) -> anyhow::Result<()> {
    println!("{}", render_encode(&load_service()?, &args.hex)?);
    Ok(())
}

pub fn decode(args: DecodeArgs) -> anyhow::Result<()> {
    println!("{}", render_decode(&load_service()?, &args.encoded)?);
    Ok(())
}

pub fn inspect(args: InspectArgs) -> anyhow::Result<()> {
    println!("{}", render_inspect(&load_service()?, &args.id)?);
    Ok(())
}

pub fn namespaces() -> anyhow::Result<()> {
    println!("{}", render_namespaces(&load_service()?));
    Ok(())
}

fn render_generate(service: &IdService, args: &GenerateArgs) -> anyhow::Result<String> {
    let generated = service.generate(args.namespace, args.bytes, args.count)?;

    if args.json {
        let ids: Vec<&str> = generated.ids.iter().map(|id| id.as_str()).collect();
        let document = serde_json::json!({
            "namespace": generated.namespace,
            "prefix": generated.prefix,
            "byte_length": generated.byte_length,
            "ids": ids,
        });
        return Ok(serde_json::to_string_pretty(&document)?);
    }

    Ok(generated
        .ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_encode(service: &IdService, hex_input: &str) -> anyhow::Result<String> {
    let bytes = hex::decode(hex_input).context("input is not valid hex")?;
    Ok(service.encode(&bytes)?)
}

fn render_decode(service: &IdService, encoded: &str) -> anyhow::Result<String> {
    Ok(hex::encode(service.decode(encoded)?))
}

fn render_inspect(service: &IdService, id: &str) -> anyhow::Result<String> {
    let parsed = service.inspect(id)?;
    let identifier = &parsed.identifier;

    Ok(format!(
        "namespace:   {}\nprefix:      {}\nsuffix:      {}\nbyte_length: {}\nbytes:       {}",
        identifier.namespace(),
        identifier.prefix(),
        identifier.suffix(),
        parsed.byte_length(),
        hex::encode(&parsed.bytes),
    ))
}

fn render_namespaces(service: &IdService) -> String {
    service
        .namespaces()
        .iter()
        .map(|entry| format!("{:<10} {}", entry.namespace.as_str(), entry.prefix))
        .collect::<Vec<_>>()
        .join("\n")
}
