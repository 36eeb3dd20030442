//! Site server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use xnodeos_metadata::{build_metadata, SiteConfig};
use xnodeos_render::{AssetPipeline, PageContext, TemplateEngine};

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served for paths without a route (icon.png lives here)
    pub public_dir: PathBuf,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7777,
            public_dir: PathBuf::from("public"),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}: {1}")]
    AddrError(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared server state.
struct ServerState {
    site: SiteConfig,
    templates: TemplateEngine,
    css: String,
}

/// Marketing site server.
pub struct SiteServer {
    config: ServerConfig,
    site: SiteConfig,
}

impl SiteServer {
    /// Create a new site server.
    pub fn new(config: ServerConfig, site: SiteConfig) -> Self {
        Self { config, site }
    }

    /// Start the server.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::AddrError(raw_addr, e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = AssetPipeline::minify_css(&css).unwrap_or(css);

        let state = Arc::new(ServerState {
            site: self.site,
            templates: TemplateEngine::new(),
            css,
        });

        let app = Router::new()
            .route("/", get(home_handler))
            .route("/assets/main.css", get(css_handler))
            .fallback_service(ServeDir::new(&self.config.public_dir))
            .with_state(state);

        tracing::info!("Serving site at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handler for the marketing page.
///
/// The metadata descriptor is rebuilt on every request and the response is
/// marked non-cacheable; nothing descriptor-derived is held in server state.
async fn home_handler(State(state): State<Arc<ServerState>>) -> Response {
    let descriptor = build_metadata(&state.site);
    let ctx = PageContext::from_descriptor(&descriptor);

    match state.templates.render_home(&ctx) {
        Ok(html) => ([(header::CACHE_CONTROL, "no-store")], Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "page render failed").into_response()
        }
    }
}

/// Handler for the generated stylesheet.
async fn css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.css.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<ServerState> {
        Arc::new(ServerState {
            site: SiteConfig {
                title: "XnodeOS".to_string(),
                description: "Secure, no-code deployment on a NixOS-based operating system."
                    .to_string(),
                canonical_url: "https://xnodeos.example".to_string(),
            },
            templates: TemplateEngine::new(),
            css: AssetPipeline::generate_css(),
        })
    }

    #[test]
    fn creates_server_with_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 7777);
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[tokio::test]
    async fn serves_page_uncached() {
        let response = home_handler(State(state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("fc:miniapp"));
        assert!(html.contains("<h1>XnodeOS</h1>"));
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let response = css_handler(State(state())).await.into_response();

        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("text/css; charset=utf-8")
        );
    }
}
