//! Manifest inspection command.

use std::path::Path;

use anyhow::{Context, Result};
use xnodeos_metadata::{build_metadata, MINIAPP_DISCOVERY_KEY};

use crate::config::load_config;

/// Run the manifest command.
///
/// Prints the embedded mini-app manifest JSON, or the full metadata
/// descriptor when requested.
pub fn run(config_path: &Path, descriptor: bool) -> Result<()> {
    let (site, _) = load_config(config_path)?;

    let metadata = build_metadata(&site);

    if descriptor {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        let manifest = metadata
            .custom_attributes
            .get(MINIAPP_DISCOVERY_KEY)
            .context("descriptor is missing the manifest attribute")?;
        println!("{}", manifest);
    }

    Ok(())
}
