//! Template engine for rendering the marketing page.

use minijinja::{context, Environment};

use xnodeos_metadata::MetadataDescriptor;

/// An Open Graph preview image as emitted into the page head.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OgImage {
    /// Image URL
    pub url: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Alt text
    pub alt: String,
}

/// A page-level attribute emitted verbatim as a meta entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CustomAttribute {
    /// Attribute name
    pub name: String,
    /// Attribute value
    pub content: String,
}

/// Context for rendering the page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page title
    pub title: String,
    /// Page description
    pub description: String,
    /// Canonical page URL
    pub canonical_url: String,
    /// Open Graph preview images
    pub og_images: Vec<OgImage>,
    /// Custom meta entries (carries the mini-app manifest)
    pub custom_attributes: Vec<CustomAttribute>,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl PageContext {
    /// Build a template context from a metadata descriptor.
    pub fn from_descriptor(descriptor: &MetadataDescriptor) -> Self {
        Self {
            title: descriptor.title.clone(),
            description: descriptor.description.clone(),
            canonical_url: descriptor.social_preview.canonical_url.clone(),
            og_images: descriptor
                .social_preview
                .images
                .iter()
                .map(|image| OgImage {
                    url: image.url.clone(),
                    width: image.width,
                    height: image.height,
                    alt: image.alt.clone(),
                })
                .collect(),
            custom_attributes: descriptor
                .custom_attributes
                .iter()
                .map(|(name, content)| CustomAttribute {
                    name: name.clone(),
                    content: content.clone(),
                })
                .collect(),
            styles: vec!["/assets/main.css".to_string()],
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("home.html".to_string(), HOME_TEMPLATE.to_string())
            .expect("Failed to add home template");

        Self { env }
    }

    /// Render the marketing page.
    ///
    /// Attribute values go through minijinja's standard HTML escaping only;
    /// the manifest JSON is not re-encoded.
    pub fn render_home(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;

        tmpl.render(context! {
            title => &ctx.title,
            description => &ctx.description,
            canonical_url => &ctx.canonical_url,
            og_images => &ctx.og_images,
            custom_attributes => &ctx.custom_attributes,
            styles => &ctx.styles,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <meta name="description" content="{{ description }}">
  <link rel="canonical" href="{{ canonical_url }}">
  <meta property="og:title" content="{{ title }}">
  <meta property="og:description" content="{{ description }}">
  <meta property="og:url" content="{{ canonical_url }}">
  {% for image in og_images %}<meta property="og:image" content="{{ image.url }}">
  <meta property="og:image:width" content="{{ image.width }}">
  <meta property="og:image:height" content="{{ image.height }}">
  <meta property="og:image:alt" content="{{ image.alt }}">
  {% endfor %}{% for attr in custom_attributes %}<meta name="{{ attr.name }}" content="{{ attr.content }}">
  {% endfor %}{% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}</head>
<body>
  {% block content %}{% endblock %}
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<main class="page">
  <section class="hero">
    <div class="hero-copy">
      <h1>{{ title }}</h1>
      <p class="tagline">{{ description }}</p>
      <a href="#get-started" class="button">Get Started</a>
    </div>
    <div class="hero-art">
      <img src="https://images.unsplash.com/photo-1581093588401-5c1b1b3b5b5e?auto=format&fit=crop&w=800&q=80" alt="XnodeOS dashboard">
    </div>
  </section>

  <section class="features">
    <h2>Key Features</h2>
    <div class="feature-grid">
      <div class="card">
        <img src="https://images.unsplash.com/photo-1517430816045-df4b7b5b5b5b?auto=format&fit=crop&w=400&q=80" alt="No-code interface">
        <h3>No-Code Deployment</h3>
        <p>Deploy applications with a single click, no scripting required.</p>
      </div>
      <div class="card">
        <img src="https://images.unsplash.com/photo-1521791136065-7879d3366b23?auto=format&fit=crop&w=400&q=80" alt="Security lock">
        <h3>Built-in Security</h3>
        <p>Hardened by default with SELinux, AppArmor, and hardened kernel modules.</p>
      </div>
      <div class="card">
        <img src="https://images.unsplash.com/photo-1517430816045-5b5b5b5b5b5b?auto=format&fit=crop&w=400&q=80" alt="NixOS package manager">
        <h3>NixOS Powered</h3>
        <p>Declarative configuration, reproducible builds, and atomic upgrades.</p>
      </div>
    </div>
  </section>

  <section class="security">
    <div class="security-art">
      <img src="https://images.unsplash.com/photo-1581093588401-5c1b1b3b5b5e?auto=format&fit=crop&w=800&q=80" alt="Security dashboard">
    </div>
    <div class="security-copy">
      <h2>Maximum Security</h2>
      <p>XnodeOS integrates industry-leading security practices out of the box. From secure boot to mandatory access control, every layer is hardened to protect your data.</p>
    </div>
  </section>

  <section class="deploy">
    <h2>Deploy with a Click</h2>
    <img src="https://images.unsplash.com/photo-1517430816045-5b5b5b5b5b5b?auto=format&fit=crop&w=800&q=80" alt="Deployment screen">
  </section>

  <section id="get-started" class="cta">
    <h2>Ready to try {{ title }}?</h2>
    <a href="#" class="button">Download Now</a>
  </section>
</main>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use xnodeos_metadata::{build_metadata, SiteConfig};

    fn descriptor() -> xnodeos_metadata::MetadataDescriptor {
        build_metadata(&SiteConfig {
            title: "XnodeOS".to_string(),
            description: "Secure, no-code deployment on a NixOS-based operating system."
                .to_string(),
            canonical_url: "https://xnodeos.example".to_string(),
        })
    }

    /// Reverse minijinja's HTML attribute escaping.
    fn unescape_attribute(value: &str) -> String {
        value
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&#x2f;", "/")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    #[test]
    fn renders_head_metadata() {
        let engine = TemplateEngine::new();
        let ctx = PageContext::from_descriptor(&descriptor());

        let html = engine.render_home(&ctx).unwrap();

        assert!(html.contains("<title>XnodeOS</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://xnodeos.example">"#));
        assert!(html.contains(r#"<meta property="og:title" content="XnodeOS">"#));
        assert!(html
            .contains(r#"<meta property="og:image" content="https://xnodeos.example/icon.png">"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(html.contains(r#"<meta property="og:image:height" content="630">"#));
        assert!(html.contains(r#"<meta property="og:image:alt" content="XnodeOS logo">"#));
    }

    #[test]
    fn embeds_manifest_attribute() {
        let engine = TemplateEngine::new();
        let ctx = PageContext::from_descriptor(&descriptor());

        let html = engine.render_home(&ctx).unwrap();

        let marker = r#"<meta name="fc:miniapp" content=""#;
        let start = html.find(marker).expect("manifest meta present") + marker.len();
        let end = html[start..].find('"').unwrap() + start;

        let manifest: serde_json::Value =
            serde_json::from_str(&unescape_attribute(&html[start..end])).unwrap();

        assert_eq!(manifest["version"], "next");
        assert_eq!(manifest["button"]["title"], "Launch Mini App");
        assert_eq!(
            manifest["button"]["action"]["url"],
            "https://xnodeos.example"
        );
    }

    #[test]
    fn renders_marketing_sections() {
        let engine = TemplateEngine::new();
        let ctx = PageContext::from_descriptor(&descriptor());

        let html = engine.render_home(&ctx).unwrap();

        assert!(html.contains("<h1>XnodeOS</h1>"));
        assert!(html.contains("Key Features"));
        assert!(html.contains("No-Code Deployment"));
        assert!(html.contains("Maximum Security"));
        assert!(html.contains("Ready to try XnodeOS?"));
    }

    #[test]
    fn links_generated_stylesheet() {
        let engine = TemplateEngine::new();
        let ctx = PageContext::from_descriptor(&descriptor());

        let html = engine.render_home(&ctx).unwrap();

        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/main.css">"#));
    }
}
