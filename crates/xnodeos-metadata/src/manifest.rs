//! Mini-app launch manifest.
//!
//! The manifest travels as a JSON string inside a page attribute, so it is
//! modeled as typed structs and serialized with serde rather than assembled
//! from text.

use serde::{Deserialize, Serialize};

/// Attribute name under which launcher surfaces discover the manifest.
pub const MINIAPP_DISCOVERY_KEY: &str = "fc:miniapp";

/// Manifest schema version understood by current launcher surfaces.
pub const MANIFEST_VERSION: &str = "next";

/// Action triggered when the launcher button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAction {
    /// Action discriminator, always `launch_miniapp`.
    #[serde(rename = "type")]
    pub action_type: String,

    /// App name shown by the launcher.
    pub name: String,

    /// URL opened inside the mini-app frame.
    pub url: String,

    /// Image shown while the app loads.
    pub splash_image_url: String,

    /// App icon.
    pub icon_url: String,

    /// Hex color behind the splash image.
    pub splash_background_color: String,

    /// App description shown in launcher listings.
    pub description: String,

    /// Launcher store category.
    pub primary_category: String,

    /// Free-form discovery tags, may be empty.
    pub tags: Vec<String>,
}

/// Primary button rendered by the launcher surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchButton {
    pub title: String,
    pub action: LaunchAction,
}

/// Manifest telling a hosting launcher how to present and launch the page
/// as an embedded application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchManifest {
    pub version: String,
    pub image_url: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image_url: String,
    pub button: LaunchButton,
}

impl LaunchManifest {
    /// Serialize to the JSON text carried in the page attribute.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("manifest is always JSON-encodable")
    }
}
