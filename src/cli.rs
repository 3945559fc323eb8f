use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::client::ChainClient;
use crate::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use commands::{journey, products, serve};

#[derive(Parser)]
#[command(name = "chaintrack")]
#[command(about = "Track products through their supply chain journey")]
#[command(version)]
pub struct Cli {
    /// Base URL of the ledger API
    #[arg(long, global = true, env = "CHAINTRACK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CHAINTRACK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the products recorded on the ledger
    Products {
        /// Only show products whose id contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show KPIs, timeline and environmental readings for one product
    Journey {
        /// Product id as listed by `products`
        product_id: String,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve the compiled dashboard bundle
    Serve {
        /// Directory containing the built frontend (index.html and wasm)
        #[arg(short, long, env = "CHAINTRACK_DIST", default_value = "workspace/frontend/dist")]
        dist: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
}

impl Cli {
    fn client(&self) -> Result<ChainClient> {
        let config = ClientConfig::new(self.api_url.clone(), self.timeout_secs);
        Ok(ChainClient::new(&config)?)
    }

    pub async fn run(self) -> Result<()> {
        match &self.command {
            Commands::Products { search } => {
                let client = self.client()?;
                let output = products(&client, search.as_deref()).await?;
                print!("{}", output);
            }
            Commands::Journey { product_id, json } => {
                let client = self.client()?;
                let output = journey(&client, product_id, *json).await?;
                println!("{}", output.trim_end());
            }
            Commands::Serve { dist, bind_address } => {
                serve(dist, bind_address).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_journey() {
        let cli = Cli::try_parse_from([
            "chaintrack",
            "--api-url",
            "http://ledger:9000",
            "journey",
            "p-1",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://ledger:9000");
        match cli.command {
            Commands::Journey { product_id, json } => {
                assert_eq!(product_id, "p-1");
                assert!(json);
            }
            _ => panic!("expected journey command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["chaintrack", "products", "-s", "3f", "--timeout-secs", "3"]).unwrap();
        assert_eq!(cli.timeout_secs, 3);
        assert!(matches!(cli.command, Commands::Products { search: Some(ref s) } if s == "3f"));
    }
}
