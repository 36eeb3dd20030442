//! XnodeOS site CLI - marketing page and mini-app metadata server.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "xnodeos-site")]
#[command(about = "Marketing site and mini-app metadata server for XnodeOS")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default site.toml and public directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Serve the marketing page
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7777")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Print the mini-app manifest built from the configuration
    Manifest {
        /// Print the full metadata descriptor instead
        #[arg(long)]
        descriptor: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Serve {
            port,
            host,
            no_open,
        } => {
            commands::serve::run(&cli.config, port, host, !no_open).await?;
        }
        Commands::Manifest { descriptor } => {
            commands::manifest::run(&cli.config, descriptor)?;
        }
    }

    Ok(())
}
