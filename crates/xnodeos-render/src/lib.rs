//! Rendering layer for the XnodeOS marketing site.
//!
//! Turns a metadata descriptor into head tags and renders the static page
//! body around them.

pub mod assets;
pub mod templates;

pub use assets::AssetPipeline;
pub use templates::{PageContext, TemplateEngine};
