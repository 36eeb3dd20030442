//! Site configuration loading and validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use xnodeos_metadata::SiteConfig;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub site: SiteSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
        }
    }
}

fn default_public_dir() -> String {
    "public".to_string()
}

/// Load and validate site.toml.
///
/// The canonical URL invariant is enforced here, before any metadata is
/// built: it must be an absolute http(s) URL and is normalized to carry no
/// trailing slash.
pub fn load_config(path: &Path) -> Result<(SiteConfig, ServerSection)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let site = validate_site(file.site)?;

    tracing::info!("Loaded config from {}", path.display());

    Ok((site, file.server))
}

fn validate_site(section: SiteSection) -> Result<SiteConfig> {
    let canonical_url = section.canonical_url.trim_end_matches('/').to_string();

    if canonical_url.is_empty() {
        anyhow::bail!("canonical_url must not be empty");
    }

    if !canonical_url.starts_with("http://") && !canonical_url.starts_with("https://") {
        anyhow::bail!(
            "canonical_url must be an absolute http(s) URL, got: {}",
            section.canonical_url
        );
    }

    Ok(SiteConfig {
        title: section.title,
        description: section.description,
        canonical_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(url: &str) -> SiteSection {
        SiteSection {
            title: "XnodeOS".to_string(),
            description: "Secure, no-code deployment.".to_string(),
            canonical_url: url.to_string(),
        }
    }

    #[test]
    fn accepts_absolute_url() {
        let site = validate_site(section("https://xnodeos.example")).unwrap();

        assert_eq!(site.canonical_url, "https://xnodeos.example");
    }

    #[test]
    fn trims_trailing_slash() {
        let site = validate_site(section("https://xnodeos.example/")).unwrap();

        assert_eq!(site.canonical_url, "https://xnodeos.example");
    }

    #[test]
    fn rejects_relative_url() {
        assert!(validate_site(section("/somewhere")).is_err());
        assert!(validate_site(section("xnodeos.example")).is_err());
    }

    #[test]
    fn rejects_empty_url() {
        assert!(validate_site(section("")).is_err());
    }

    #[test]
    fn loads_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");

        fs::write(
            &path,
            r#"
[site]
title = "XnodeOS"
description = "Secure, no-code deployment."
canonical_url = "https://xnodeos.example/"
"#,
        )
        .unwrap();

        let (site, server) = load_config(&path).unwrap();

        assert_eq!(site.title, "XnodeOS");
        assert_eq!(site.canonical_url, "https://xnodeos.example");
        assert_eq!(server.public_dir, "public");
    }

    #[test]
    fn fails_on_missing_file() {
        let temp = tempfile::tempdir().unwrap();

        assert!(load_config(&temp.path().join("site.toml")).is_err());
    }
}
