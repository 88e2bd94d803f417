//! End-to-end rendering tests.
//!
//! These exercise the full pipeline over realistic content: synchronize
//! listing edits, render the document, and check the export artifacts.

use bolseiro_core::{ListingUpdate, Scholarship, SiteConfig, apply_listing_update};
use bolseiro_generator::{PageGenerator, export_filename, listing_json};

fn edited_scholarship(config: &SiteConfig) -> Scholarship {
    let mut s = Scholarship::default();
    for update in [
        ListingUpdate::Id("bolsa-chevening".to_string()),
        ListingUpdate::Slug("chevening-2026".to_string()),
        ListingUpdate::Title("Bolsa Chevening 2026/2027".to_string()),
        ListingUpdate::Description("Mestrado no Reino Unido totalmente financiado.".to_string()),
        ListingUpdate::Country("Reino Unido".to_string()),
        ListingUpdate::CountryCode("gb".to_string()),
        ListingUpdate::Level("Mestrado".to_string()),
        ListingUpdate::Deadline("5 de Novembro de 2026".to_string()),
        ListingUpdate::Funding("100% Financiado".to_string()),
        ListingUpdate::ImageUrl("/images/og-chevening.webp".to_string()),
    ] {
        s = apply_listing_update(&s, config, update);
    }
    s
}

#[test]
fn test_edited_model_renders_synchronized_fields() {
    let config = SiteConfig::default();
    let s = edited_scholarship(&config);
    let html = PageGenerator::new(config).render(&s).unwrap();

    // Canonical edits surface in every derived location of the document.
    assert!(html.contains("<title>Bolsa Chevening 2026/2027</title>"));
    assert!(html.contains(r#"<meta property="og:title" content="Bolsa Chevening 2026/2027">"#));
    assert!(html.contains("<h1>Bolsa Chevening 2026/2027</h1>"));
    assert!(html.contains("Reino Unido • Mestrado"));
    assert!(html.contains(r#"src="/flags/gb.svg""#));
    assert!(html.contains("5 de Novembro de 2026"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://bolseiro.org/bolsas/chevening-2026.html">"#
    ));
    // Social image is absolute, the article thumbnail stays site-relative.
    assert!(html.contains(
        r#"<meta property="og:image" content="https://bolseiro.org/images/og-chevening.webp">"#
    ));
    assert!(html.contains(r#"src="/images/og-chevening.webp""#));
}

#[test]
fn test_render_deterministic_across_generators() {
    let config = SiteConfig::default();
    let s = edited_scholarship(&config);

    let first = PageGenerator::new(config.clone()).render(&s).unwrap();
    let second = PageGenerator::new(config).render(&s).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_study_areas_render_empty_container() {
    let config = SiteConfig::default();
    let mut s = edited_scholarship(&config);
    s.study_areas.clear();
    s.required_documents.clear();

    let html = PageGenerator::new(config).render(&s).unwrap();

    assert!(html.contains("Áreas e Cursos de Estudos"));
    assert!(html.contains(r#"<div class="study-areas">"#));
    assert!(!html.contains(r#"<div class="study-area-card">"#));
}

#[test]
fn test_injection_attempt_is_neutralized() {
    let config = SiteConfig::default();
    let mut s = edited_scholarship(&config);
    s.about = vec![r#"<img src=x onerror="steal()">"#.to_string()];

    let html = PageGenerator::new(config).render(&s).unwrap();
    assert!(!html.contains(r#"<img src=x"#));
    assert!(html.contains("&lt;img src=x onerror=&quot;steal()&quot;&gt;"));
}

#[test]
fn test_export_artifacts_for_edited_model() {
    let config = SiteConfig::default();
    let s = edited_scholarship(&config);

    assert_eq!(export_filename(&s.listing.slug), "chevening-2026.html");

    let json = listing_json(&s.listing).unwrap();
    assert!(json.contains("\"id\": \"bolsa-chevening\""));
    assert!(json.contains("\"country\": \"Reino Unido\""));
    assert!(json.contains("\"country_code\": \"gb\""));
    assert!(json.contains("\"image_url\": \"/images/og-chevening.webp\""));
}

#[test]
fn test_default_model_exports_fallback_filename() {
    assert_eq!(export_filename(&Scholarship::default().listing.slug), "bolsa.html");
}
