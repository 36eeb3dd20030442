//! Initialize site configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Static files (icon.png and friends) are served from here
    let public_dir = Path::new("public");
    if !public_dir.exists() {
        fs::create_dir_all(public_dir).context("Failed to create public directory")?;
        tracing::info!("Created public/");
    }

    tracing::info!("Run 'xnodeos-site serve' to start the server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# XnodeOS site configuration

[site]
# Page title, also used as the mini-app name
title = "XnodeOS"

# Page description, also used for link previews
description = "Secure, no-code deployment on a NixOS-based operating system."

# Absolute URL of the deployed site, no trailing slash
canonical_url = "https://xnodeos.example"

[server]
# Directory served for static files (put icon.png here)
public_dir = "public"
"#;
