//! Asset pipeline for the site stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* XnodeOS marketing site theme */

:root {
  --bg-top: #111827;
  --bg-mid: #1f2937;
  --fg: #ffffff;
  --fg-muted: #d1d5db;
  --card: #1f2937;
  --accent-from: #6366f1;
  --accent-to: #9333ea;
  --content-max-width: 1100px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: linear-gradient(to bottom, var(--bg-top), var(--bg-mid), var(--bg-top));
  color: var(--fg);
  line-height: 1.6;
}

.page {
  display: flex;
  flex-direction: column;
  gap: 3rem;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1rem;
  min-height: 100vh;
}

/* Hero */
.hero {
  display: flex;
  flex-direction: column-reverse;
  align-items: center;
  gap: 2rem;
}

.hero-copy h1 {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  margin-bottom: 1.5rem;
}

.hero-copy .tagline {
  font-size: 1.25rem;
  color: var(--fg-muted);
  margin-bottom: 1.5rem;
}

.hero-art img,
.security-art img,
.deploy img {
  border-radius: 0.75rem;
  box-shadow: 0 25px 50px -12px rgb(0 0 0 / 0.5);
  width: 100%;
  max-width: 28rem;
}

/* Buttons */
.button {
  display: inline-block;
  padding: 0.75rem 2rem;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--accent-from), var(--accent-to));
  color: var(--fg);
  font-weight: 600;
  text-decoration: none;
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.3);
  transition: transform 0.3s ease-in-out, box-shadow 0.3s ease-in-out;
}

.button:hover {
  transform: translateY(-0.25rem);
  box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.4);
}

/* Features */
.features h2,
.deploy h2,
.cta h2 {
  font-size: 1.875rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 2rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.card {
  background: var(--card);
  border-radius: 0.75rem;
  padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.3);
}

.card img {
  width: 100%;
  height: 8rem;
  object-fit: cover;
  border-radius: 0.375rem;
  margin-bottom: 1rem;
}

.card h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card p {
  color: var(--fg-muted);
}

/* Security */
.security {
  display: flex;
  flex-direction: column-reverse;
  align-items: center;
  gap: 2rem;
}

.security-copy h2 {
  font-size: 1.875rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.security-copy p {
  font-size: 1.125rem;
  color: var(--fg-muted);
}

/* Deploy */
.deploy {
  text-align: center;
}

.deploy img {
  max-width: 42rem;
}

/* Call to action */
.cta {
  text-align: center;
}

.cta h2 {
  margin-bottom: 1rem;
}

@media (min-width: 1024px) {
  .hero,
  .security {
    flex-direction: row;
    gap: 4rem;
  }

  .hero-copy,
  .hero-art,
  .security-copy,
  .security-art {
    flex: 1;
  }

  .hero-copy h1 {
    font-size: 3.75rem;
  }

  .feature-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}
"#;
