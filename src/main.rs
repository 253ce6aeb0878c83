use clap::Parser;
use pmp_idgen::cli::{self, Cli, Command};
use pmp_idgen::infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.command, Command::Serve(_)) {
        logging::init_cli_logging();
    }

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Generate(args) => cli::ids::generate(args),
        Command::Encode(args) => cli::ids::encode(args),
        Command::Decode(args) => cli::ids::decode(args),
        Command::Inspect(args) => cli::ids::inspect(args),
        Command::Namespaces => cli::ids::namespaces(),
    }
}
