use anyhow::Result;
use clap::Parser;

mod cli;
mod client;
mod config;
mod report;
mod router;
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = config::load_environment();

    let cli = Cli::parse();
    config::init_tracing(cli.verbose);
    if let Some(path) = env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    cli.run().await
}
