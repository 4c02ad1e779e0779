use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mysticalbeach - Private consultation inquiries
#[derive(Parser)]
#[command(name = "mysticalbeach")]
#[command(about = "Inquiry intake and delivery for Mystical Beach", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the event types offered by the reservation form
    EventTypes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mysticalbeach::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mysticalbeach::observability::init_observability(
        "mysticalbeach",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::EventTypes => {
            cli::event_types();
            Ok(())
        }
    }
}
