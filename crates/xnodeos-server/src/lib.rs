//! HTTP server for the XnodeOS marketing site.
//!
//! Serves the marketing page, rebuilding its metadata descriptor on every
//! request, plus the generated stylesheet and static files.

pub mod server;

pub use server::{ServerConfig, ServerError, SiteServer};
