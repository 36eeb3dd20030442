//! Request-time metadata builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manifest::{
    LaunchAction, LaunchButton, LaunchManifest, MANIFEST_VERSION, MINIAPP_DISCOVERY_KEY,
};

/// Path of the preview/launcher icon, relative to the canonical URL.
const ICON_PATH: &str = "/icon.png";

/// Social-preview image dimensions expected by link-preview crawlers.
const PREVIEW_WIDTH: u32 = 1200;
const PREVIEW_HEIGHT: u32 = 630;

const PREVIEW_ALT: &str = "XnodeOS logo";
const BUTTON_TITLE: &str = "Launch Mini App";
const ACTION_TYPE: &str = "launch_miniapp";
const SPLASH_BACKGROUND: &str = "#000000";
const PRIMARY_CATEGORY: &str = "utility";

/// Site configuration, loaded once at startup and treated as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Page title, also used as the mini-app name.
    pub title: String,

    /// Page description, also used for link previews.
    pub description: String,

    /// Absolute, scheme-qualified URL of the deployed site, no trailing
    /// slash. Every derived asset URL is built from this value.
    pub canonical_url: String,
}

/// A social-preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Open Graph preview emitted by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialPreview {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Exactly one image today; a sequence so more can be added.
    pub images: Vec<ImageDescriptor>,
}

/// Everything the rendering layer needs to emit the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataDescriptor {
    pub title: String,
    pub description: String,
    pub social_preview: SocialPreview,

    /// Attribute-name to attribute-value entries the rendering layer emits
    /// verbatim. Carries the serialized launch manifest under
    /// [`MINIAPP_DISCOVERY_KEY`].
    pub custom_attributes: BTreeMap<String, String>,
}

/// Build the metadata descriptor for a page request.
///
/// Pure and stateless. Callers invoke it on every request rather than
/// caching the result, since the configuration may be refreshed between
/// invocations.
pub fn build_metadata(config: &SiteConfig) -> MetadataDescriptor {
    let icon_url = format!("{}{}", config.canonical_url, ICON_PATH);

    let manifest = LaunchManifest {
        version: MANIFEST_VERSION.to_string(),
        image_url: icon_url.clone(),
        og_title: config.title.clone(),
        og_description: config.description.clone(),
        og_image_url: icon_url.clone(),
        button: LaunchButton {
            title: BUTTON_TITLE.to_string(),
            action: LaunchAction {
                action_type: ACTION_TYPE.to_string(),
                name: config.title.clone(),
                url: config.canonical_url.clone(),
                splash_image_url: icon_url.clone(),
                icon_url: icon_url.clone(),
                splash_background_color: SPLASH_BACKGROUND.to_string(),
                description: config.description.clone(),
                primary_category: PRIMARY_CATEGORY.to_string(),
                tags: Vec::new(),
            },
        },
    };

    let mut custom_attributes = BTreeMap::new();
    custom_attributes.insert(MINIAPP_DISCOVERY_KEY.to_string(), manifest.to_json());

    MetadataDescriptor {
        title: config.title.clone(),
        description: config.description.clone(),
        social_preview: SocialPreview {
            title: config.title.clone(),
            description: config.description.clone(),
            canonical_url: config.canonical_url.clone(),
            images: vec![ImageDescriptor {
                url: icon_url,
                width: PREVIEW_WIDTH,
                height: PREVIEW_HEIGHT,
                alt: PREVIEW_ALT.to_string(),
            }],
        },
        custom_attributes,
    }
}
