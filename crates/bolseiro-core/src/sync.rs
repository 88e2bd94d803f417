//! Canonical-field synchronization.
//!
//! Listing metadata is the single source of truth for a number of display
//! fields scattered across the model. Applying a [`ListingUpdate`] writes the
//! canonical field and fans the value out to every derived field in one
//! atomic update, per the table below. Derived fields stay independently
//! editable afterwards; the link is last-write-wins with no back-propagation.
//!
//! | canonical field | derived fields |
//! |---|---|
//! | `title` | `seo.title`, `seo.og_title`, `hero.title` |
//! | `description` | `seo.description`, `seo.og_description`, `hero.description` |
//! | `slug` | `seo.canonical_url`, `seo.og_url` |
//! | `country` | `quick_info.country` |
//! | `country_code` | `quick_info.country_flag` |
//! | `level` | `quick_info.level`, `hero.badge` |
//! | `deadline` | `quick_info.deadline` |
//! | `funding` | `quick_info.funding` |
//! | `image_url` | `seo.og_image`, `seo.twitter_image`, `hero.thumbnail_url` |
//!
//! Every other listing field updates the listing record alone.

use crate::config::SiteConfig;
use crate::model::Scholarship;

/// Badge country placeholder used while no country has been entered.
pub const COUNTRY_PLACEHOLDER: &str = "País";

/// One edit to a canonical listing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingUpdate {
    Id(String),
    Slug(String),
    Title(String),
    TitleEn(String),
    Description(String),
    DescriptionEn(String),
    Country(String),
    CountryCode(String),
    Level(String),
    LevelEn(String),
    Deadline(String),
    Funding(String),
    ImageUrl(String),
    Featured(bool),
    CreatedAt(String),
}

/// Apply a listing edit, fanning the value out to its derived fields.
///
/// Returns a new aggregate; the input is never mutated. All arms are total
/// over strings and booleans, so there is no error path.
pub fn apply_listing_update(
    current: &Scholarship,
    config: &SiteConfig,
    update: ListingUpdate,
) -> Scholarship {
    let mut next = current.clone();

    match update {
        ListingUpdate::Id(value) => next.listing.id = value,
        ListingUpdate::TitleEn(value) => next.listing.title_en = value,
        ListingUpdate::DescriptionEn(value) => next.listing.description_en = value,
        ListingUpdate::LevelEn(value) => next.listing.level_en = value,
        ListingUpdate::Featured(value) => next.listing.featured = value,
        ListingUpdate::CreatedAt(value) => next.listing.created_at = value,

        ListingUpdate::Title(value) => {
            next.listing.title = value.clone();
            next.seo.title = value.clone();
            next.seo.og_title = value.clone();
            next.hero.title = value;
        }
        ListingUpdate::Description(value) => {
            next.listing.description = value.clone();
            next.seo.description = value.clone();
            next.seo.og_description = value.clone();
            next.hero.description = value;
        }
        ListingUpdate::Slug(value) => {
            let url = config.listing_url(&value);
            next.listing.slug = value;
            next.seo.canonical_url = url.clone();
            next.seo.og_url = url;
        }
        ListingUpdate::Country(value) => {
            next.listing.country = value.clone();
            next.quick_info.country = value;
        }
        ListingUpdate::CountryCode(value) => {
            next.quick_info.country_flag = config.flag_url(&value);
            next.listing.country_code = value;
        }
        ListingUpdate::Level(value) => {
            // The badge reads the country current at this moment; editing the
            // country later does not recompose it.
            let country = if next.quick_info.country.is_empty() {
                COUNTRY_PLACEHOLDER
            } else {
                next.quick_info.country.as_str()
            };
            next.hero.badge = format!("{country} • {value}");
            next.listing.level = value.clone();
            next.quick_info.level = value;
        }
        ListingUpdate::Deadline(value) => {
            next.listing.deadline = value.clone();
            next.quick_info.deadline = value;
        }
        ListingUpdate::Funding(value) => {
            next.listing.funding = value.clone();
            next.quick_info.funding = value;
        }
        ListingUpdate::ImageUrl(value) => {
            let absolute = config.absolute_url(&value);
            next.seo.og_image = absolute.clone();
            next.seo.twitter_image = absolute;
            next.hero.thumbnail_url = value.clone();
            next.listing.image_url = value;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Scholarship, SiteConfig) {
        (Scholarship::default(), SiteConfig::default())
    }

    #[test]
    fn test_title_fans_out() {
        let (s, config) = setup();
        let next = apply_listing_update(&s, &config, ListingUpdate::Title("X".to_string()));

        assert_eq!(next.listing.title, "X");
        assert_eq!(next.seo.title, "X");
        assert_eq!(next.seo.og_title, "X");
        assert_eq!(next.hero.title, "X");
        // No other derived field is touched.
        assert_eq!(next.seo.twitter_title, s.seo.twitter_title);
        assert_eq!(next.hero.badge, s.hero.badge);
        assert_eq!(next.quick_info, s.quick_info);
    }

    #[test]
    fn test_description_fans_out() {
        let (s, config) = setup();
        let next =
            apply_listing_update(&s, &config, ListingUpdate::Description("D".to_string()));

        assert_eq!(next.listing.description, "D");
        assert_eq!(next.seo.description, "D");
        assert_eq!(next.seo.og_description, "D");
        assert_eq!(next.hero.description, "D");
        assert_eq!(next.seo.twitter_description, s.seo.twitter_description);
    }

    #[test]
    fn test_slug_composes_canonical_url() {
        let (s, config) = setup();
        let config = SiteConfig {
            base_url: "https://example.org".to_string(),
            ..config
        };
        let next = apply_listing_update(
            &s,
            &config,
            ListingUpdate::Slug("my-scholarship".to_string()),
        );

        assert_eq!(next.listing.slug, "my-scholarship");
        assert_eq!(
            next.seo.canonical_url,
            "https://example.org/bolsas/my-scholarship.html"
        );
        assert_eq!(next.seo.og_url, next.seo.canonical_url);
    }

    #[test]
    fn test_country_code_composes_flag_path() {
        let (s, config) = setup();
        let next =
            apply_listing_update(&s, &config, ListingUpdate::CountryCode("gb".to_string()));

        assert_eq!(next.listing.country_code, "gb");
        assert_eq!(next.quick_info.country_flag, "/flags/gb.svg");
    }

    #[test]
    fn test_level_badge_uses_current_country() {
        let (s, config) = setup();
        let s = apply_listing_update(&s, &config, ListingUpdate::Country("Portugal".to_string()));
        let next = apply_listing_update(&s, &config, ListingUpdate::Level("Doutoramento".to_string()));

        assert_eq!(next.hero.badge, "Portugal • Doutoramento");
        assert_eq!(next.quick_info.level, "Doutoramento");
    }

    #[test]
    fn test_level_badge_placeholder_when_country_unset() {
        let (mut s, config) = setup();
        s.quick_info.country.clear();
        let next = apply_listing_update(&s, &config, ListingUpdate::Level("Mestrado".to_string()));

        assert_eq!(next.hero.badge, "País • Mestrado");
    }

    #[test]
    fn test_level_badge_ignores_later_country_edit() {
        // Edit ordering is observable: the badge snapshots the country at the
        // time of the level update.
        let (s, config) = setup();
        let s = apply_listing_update(&s, &config, ListingUpdate::Level("Mestrado".to_string()));
        let next = apply_listing_update(&s, &config, ListingUpdate::Country("Irlanda".to_string()));

        assert_eq!(next.hero.badge, "País • Mestrado");
        assert_eq!(next.quick_info.country, "Irlanda");
    }

    #[test]
    fn test_image_url_relative_kept_for_thumbnail() {
        let (s, config) = setup();
        let next = apply_listing_update(
            &s,
            &config,
            ListingUpdate::ImageUrl("/images/og-chevening.webp".to_string()),
        );

        assert_eq!(next.listing.image_url, "/images/og-chevening.webp");
        assert_eq!(
            next.seo.og_image,
            "https://bolseiro.org/images/og-chevening.webp"
        );
        assert_eq!(next.seo.twitter_image, next.seo.og_image);
        assert_eq!(next.hero.thumbnail_url, "/images/og-chevening.webp");
    }

    #[test]
    fn test_image_url_absolute_passthrough() {
        let (s, config) = setup();
        let next = apply_listing_update(
            &s,
            &config,
            ListingUpdate::ImageUrl("https://cdn.example.com/og.webp".to_string()),
        );

        assert_eq!(next.seo.og_image, "https://cdn.example.com/og.webp");
        assert_eq!(next.hero.thumbnail_url, "https://cdn.example.com/og.webp");
    }

    #[test]
    fn test_plain_fields_touch_listing_only() {
        let (s, config) = setup();
        let next = apply_listing_update(&s, &config, ListingUpdate::Id("bolsa-01".to_string()));
        assert_eq!(next.listing.id, "bolsa-01");
        assert_eq!(next.seo, s.seo);
        assert_eq!(next.hero, s.hero);
        assert_eq!(next.quick_info, s.quick_info);

        let next = apply_listing_update(&s, &config, ListingUpdate::Featured(true));
        assert!(next.listing.featured);
        assert_eq!(next.seo, s.seo);
    }

    #[test]
    fn test_input_not_mutated() {
        let (s, config) = setup();
        let before = s.clone();
        let _ = apply_listing_update(&s, &config, ListingUpdate::Title("X".to_string()));
        assert_eq!(s, before);
    }

    #[test]
    fn test_derived_override_lasts_until_next_sync() {
        let (s, config) = setup();
        let mut s = apply_listing_update(&s, &config, ListingUpdate::Title("A".to_string()));
        // Independent override of a derived field...
        s.seo.title = "Custom SEO title".to_string();
        // ...survives unrelated canonical edits...
        let s = apply_listing_update(&s, &config, ListingUpdate::Deadline("Junho".to_string()));
        assert_eq!(s.seo.title, "Custom SEO title");
        // ...and is overwritten when the source field changes again.
        let s = apply_listing_update(&s, &config, ListingUpdate::Title("B".to_string()));
        assert_eq!(s.seo.title, "B");
    }
}
