use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use foliobot::{config, gateway};

#[derive(Parser)]
#[command(name = "foliobot")]
#[command(about = "Chat, contact and profile API for a portfolio site")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address (overrides config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Completion provider API key (overrides config)
        #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Show resolved configuration
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = config::load()?;

    match cli.command {
        Commands::Serve {
            port,
            bind,
            api_key,
        } => {
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(bind) = bind {
                config.gateway.bind = bind;
            }
            if api_key.is_some() {
                config.provider.api_key = api_key;
            }
            gateway::run(config).await
        }
        Commands::Status => {
            println!("foliobot v{}", env!("CARGO_PKG_VERSION"));
            println!("listen: {}:{}", config.gateway.bind, config.gateway.port);
            println!(
                "provider: {} ({})",
                config.provider.endpoint, config.provider.model
            );
            println!(
                "api key: {}",
                if config.provider.api_key.is_some() {
                    "set"
                } else {
                    "missing"
                }
            );
            println!(
                "memory: {} messages, {}s",
                config.memory.max_messages, config.memory.max_age_secs
            );
            Ok(())
        }
    }
}
