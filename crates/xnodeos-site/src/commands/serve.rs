//! Site serve command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use xnodeos_server::{ServerConfig, SiteServer};

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, host: String, open: bool) -> Result<()> {
    let (site, server) = load_config(config_path)?;

    tracing::info!("Serving {} ({})", site.title, site.canonical_url);

    let config = ServerConfig {
        host,
        port,
        public_dir: PathBuf::from(server.public_dir),
        open,
    };

    SiteServer::new(config, site).start().await?;

    Ok(())
}
