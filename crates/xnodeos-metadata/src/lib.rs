//! Page metadata and mini-app manifest model for the XnodeOS site.
//!
//! Builds the metadata descriptor consumed by the rendering layer: standard
//! head metadata, an Open Graph social preview, and a JSON launch manifest
//! embedded as a page attribute for mini-app launcher surfaces.

pub mod builder;
pub mod manifest;

pub use builder::{
    build_metadata, ImageDescriptor, MetadataDescriptor, SiteConfig, SocialPreview,
};
pub use manifest::{LaunchAction, LaunchButton, LaunchManifest, MINIAPP_DISCOVERY_KEY};
