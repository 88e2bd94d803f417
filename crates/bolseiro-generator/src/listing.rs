//! Listing metadata export.
//!
//! The catalog that indexes published pages consumes the listing record
//! alone, as pretty-printed JSON with a fixed field layout. The export
//! filename for the full document derives from the slug.

use bolseiro_core::Listing;

/// Filename stem used when the slug is empty.
pub const DEFAULT_EXPORT_STEM: &str = "bolsa";

/// Serialize the listing record for the external catalog.
///
/// Field names are part of the interchange contract; they match the model's
/// serde layout (`id`, `slug`, `title`, `title_en`, … `created_at`).
pub fn listing_json(listing: &Listing) -> serde_json::Result<String> {
    serde_json::to_string_pretty(listing)
}

/// Derive the download filename for an exported document.
pub fn export_filename(slug: &str) -> String {
    if slug.is_empty() {
        format!("{DEFAULT_EXPORT_STEM}.html")
    } else {
        format!("{slug}.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_from_slug() {
        assert_eq!(export_filename("chevening-2026"), "chevening-2026.html");
    }

    #[test]
    fn test_export_filename_empty_slug_falls_back() {
        assert_eq!(export_filename(""), "bolsa.html");
    }

    #[test]
    fn test_listing_json_layout() {
        let mut listing = Listing::default();
        listing.id = "bolsa-01".to_string();
        listing.slug = "chevening".to_string();
        listing.country_code = "gb".to_string();
        listing.featured = true;

        let json = listing_json(&listing).unwrap();

        assert!(json.contains("\"id\": \"bolsa-01\""));
        assert!(json.contains("\"slug\": \"chevening\""));
        assert!(json.contains("\"country_code\": \"gb\""));
        assert!(json.contains("\"featured\": true"));
        assert!(json.contains("\"title_en\""));
        assert!(json.contains("\"created_at\""));
        // The catalog export is the listing record alone.
        assert!(!json.contains("\"seo\""));
        assert!(!json.contains("\"quick_info\""));
    }

    #[test]
    fn test_listing_json_round_trip() {
        let listing = Listing::default();
        let json = listing_json(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, back);
    }
}
