use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trustedvote_config::{load_json, Config};

#[derive(Parser)]
#[command(name = "config-check")]
#[command(about = "Inspect and validate trustedvote configuration files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a config file
    Check { path: PathBuf },
    /// Print the effective configuration (defaults merged) as JSON
    Show { path: PathBuf },
    /// Print the built-in defaults as JSON
    Defaults,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trustedvote_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => match load_json(&path) {
            Ok(config) => {
                let server = &config.network.server;
                println!("{}: ok", path.display());
                println!("  interfaces: {}", server.interfaces.join(", "));
                println!("  port: {}", server.port);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        Commands::Show { path } => match load_json(&path) {
            Ok(config) => println!("{}", serde_json::to_string_pretty(&config)?),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&Config::default())?);
        }
    }

    Ok(())
}
