//! Site configuration.
//!
//! The studio runs entirely in the browser, so configuration is constructed
//! in code rather than loaded from a file; the struct stays serializable for
//! embedding in exports or future host pages.

use serde::{Deserialize, Serialize};

/// Site-wide settings used when composing derived URLs and boilerplate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title used in fixed page chrome.
    pub title: String,

    /// Base URL for the site (e.g. "https://example.com"), no trailing slash.
    pub base_url: String,

    /// URL section under which listing pages live (e.g. "bolsas").
    #[serde(default = "default_listing_section")]
    pub listing_section: String,

    /// Site-relative directory holding flag assets.
    #[serde(default = "default_flag_dir")]
    pub flag_dir: String,
}

fn default_listing_section() -> String {
    "bolsas".to_string()
}

fn default_flag_dir() -> String {
    "/flags".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Bolseiro".to_string(),
            base_url: "https://bolseiro.org".to_string(),
            listing_section: default_listing_section(),
            flag_dir: default_flag_dir(),
        }
    }
}

impl SiteConfig {
    /// Canonical URL of the listing page for a slug.
    pub fn listing_url(&self, slug: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let section = self.listing_section.trim_matches('/');
        format!("{base}/{section}/{slug}.html")
    }

    /// Site-relative flag asset path for a country code.
    pub fn flag_url(&self, country_code: &str) -> String {
        let dir = self.flag_dir.trim_end_matches('/');
        format!("{dir}/{country_code}.svg")
    }

    /// Absolute form of a possibly site-relative URL.
    ///
    /// Values that already carry a scheme pass through unchanged.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = url.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.listing_url("chevening"),
            "https://bolseiro.org/bolsas/chevening.html"
        );
    }

    #[test]
    fn test_listing_url_custom_base() {
        let config = SiteConfig {
            base_url: "https://example.org/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.listing_url("my-scholarship"),
            "https://example.org/bolsas/my-scholarship.html"
        );
    }

    #[test]
    fn test_flag_url() {
        let config = SiteConfig::default();
        assert_eq!(config.flag_url("gb"), "/flags/gb.svg");
    }

    #[test]
    fn test_absolute_url_relative() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("/images/og.webp"),
            "https://bolseiro.org/images/og.webp"
        );
        assert_eq!(
            config.absolute_url("images/og.webp"),
            "https://bolseiro.org/images/og.webp"
        );
    }

    #[test]
    fn test_absolute_url_passthrough() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("https://cdn.example.com/og.webp"),
            "https://cdn.example.com/og.webp"
        );
        assert_eq!(
            config.absolute_url("http://cdn.example.com/og.webp"),
            "http://cdn.example.com/og.webp"
        );
    }
}
