//! Page generation from the content model.
//!
//! [`PageGenerator`] maps a [`Scholarship`] to the complete static listing
//! page. Rendering is pure: equal models produce byte-identical documents,
//! and every repeated section keeps its container when its sequence is
//! empty. Free text is escaped on the way in (see [`crate::escape`]).

use bolseiro_core::{FaqEntry, Scholarship, SiteConfig, TimelineEntry, TitledItem};
use tracing::debug;

use crate::escape::escape_html;
use crate::template::{Result, TemplateContext, TemplateRegistry};

/// Static page generator.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    templates: TemplateRegistry,
    config: SiteConfig,
}

impl PageGenerator {
    /// Create a generator with the built-in templates.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(config: SiteConfig, templates: TemplateRegistry) -> Self {
        Self { templates, config }
    }

    /// The site configuration this generator renders against.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the complete document for a scholarship.
    pub fn render(&self, scholarship: &Scholarship) -> Result<String> {
        debug!(slug = %scholarship.listing.slug, "rendering listing page");

        let ctx = self.build_document_context(scholarship)?;
        self.templates.render("document", &ctx)
    }

    fn build_document_context(&self, s: &Scholarship) -> Result<TemplateContext> {
        let mut ctx = TemplateContext::new()
            .with_var("site_title", escape_html(&self.config.title))
            // Head
            .with_var("seo_title", escape_html(&s.seo.title))
            .with_var("seo_description", escape_html(&s.seo.description))
            .with_var("seo_keywords", escape_html(&s.seo.keywords))
            .with_var("author", escape_html(&s.seo.author))
            .with_var("canonical_url", escape_html(&s.seo.canonical_url))
            .with_var("og_title", escape_html(&s.seo.og_title))
            .with_var("og_description", escape_html(&s.seo.og_description))
            .with_var("og_image", escape_html(&s.seo.og_image))
            .with_var("og_image_width", escape_html(&s.seo.og_image_width))
            .with_var("og_image_height", escape_html(&s.seo.og_image_height))
            .with_var("og_url", escape_html(&s.seo.og_url))
            .with_var("og_locale", escape_html(&s.seo.og_locale))
            .with_var("date_published", escape_html(&s.seo.date_published))
            .with_var("date_modified", escape_html(&s.seo.date_modified))
            .with_var("twitter_title", escape_html(&s.seo.twitter_title))
            .with_var(
                "twitter_description",
                escape_html(&s.seo.twitter_description),
            )
            .with_var("twitter_image", escape_html(&s.seo.twitter_image))
            // Hero
            .with_var("country_flag", escape_html(&s.quick_info.country_flag))
            .with_var("hero_badge", escape_html(&s.hero.badge))
            .with_var("hero_title", escape_html(&s.hero.title))
            .with_var("hero_description", escape_html(&s.hero.description))
            .with_var("thumbnail_url", escape_html(&s.hero.thumbnail_url))
            .with_var("thumbnail_alt", escape_html(&s.hero.thumbnail_alt))
            // Quick info
            .with_var("quick_country", escape_html(&s.quick_info.country))
            .with_var("quick_level", escape_html(&s.quick_info.level))
            .with_var("quick_deadline", escape_html(&s.quick_info.deadline))
            .with_var("quick_funding", escape_html(&s.quick_info.funding))
            // Single-description sections
            .with_var("host_institution", escape_html(&s.host_institution))
            .with_var("eligible_countries", escape_html(&s.eligible_countries))
            // CTA
            .with_var("cta_title", escape_html(&s.cta.title))
            .with_var("cta_description", escape_html(&s.cta.description))
            .with_var("cta_apply_url", escape_html(&s.cta.apply_url))
            .with_var("cta_apply_text", escape_html(&s.cta.apply_text))
            .with_var("cta_channel_url", escape_html(&s.cta.channel_url))
            .with_var("cta_channel_text", escape_html(&s.cta.channel_text));

        ctx.insert("about_html", self.paragraphs_html(&s.about)?);
        ctx.insert(
            "final_considerations_html",
            self.paragraphs_html(&s.final_considerations)?,
        );
        ctx.insert("coverage_html", self.titled_items_html(&s.coverage)?);
        ctx.insert("advantages_html", self.titled_items_html(&s.advantages)?);
        ctx.insert(
            "study_areas_html",
            self.labelled_html("area_card", &s.study_areas)?,
        );
        ctx.insert(
            "required_documents_html",
            self.labelled_html("area_card", &s.required_documents)?,
        );
        ctx.insert(
            "eligibility_html",
            self.labelled_html("criterion_item", &s.eligibility)?,
        );
        ctx.insert("tips_html", self.labelled_html("tip_item", &s.tips)?);
        ctx.insert("timeline_html", self.timeline_html(&s.timeline)?);
        ctx.insert("process_html", self.process_html(&s.application_process)?);
        ctx.insert("faq_html", self.faq_html(&s.faq)?);

        Ok(ctx)
    }

    fn paragraphs_html(&self, paragraphs: &[String]) -> Result<String> {
        let rendered: Vec<String> = paragraphs
            .iter()
            .map(|p| {
                let ctx = TemplateContext::new().with_var("text", escape_html(p));
                self.templates.render("paragraph", &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }

    fn titled_items_html(&self, items: &[TitledItem]) -> Result<String> {
        let rendered: Vec<String> = items
            .iter()
            .map(|item| {
                let ctx = TemplateContext::new()
                    .with_var("title", escape_html(&item.title))
                    .with_var("description", escape_html(&item.description));
                self.templates.render("check_item", &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }

    /// Render a plain string sequence through a single-label fragment.
    fn labelled_html(&self, template: &str, labels: &[String]) -> Result<String> {
        let rendered: Vec<String> = labels
            .iter()
            .map(|label| {
                let ctx = TemplateContext::new().with_var("label", escape_html(label));
                self.templates.render(template, &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }

    fn timeline_html(&self, timeline: &[TimelineEntry]) -> Result<String> {
        let rendered: Vec<String> = timeline
            .iter()
            .map(|entry| {
                let ctx = TemplateContext::new()
                    .with_var("stage", escape_html(&entry.stage))
                    .with_var("date", escape_html(&entry.date));
                self.templates.render("timeline_row", &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }

    fn process_html(&self, steps: &[String]) -> Result<String> {
        let rendered: Vec<String> = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let ctx = TemplateContext::new()
                    .with_var("number", (index + 1).to_string())
                    .with_var("text", escape_html(step));
                self.templates.render("process_step", &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }

    fn faq_html(&self, faq: &[FaqEntry]) -> Result<String> {
        let rendered: Vec<String> = faq
            .iter()
            .map(|entry| {
                let ctx = TemplateContext::new()
                    .with_var("question", escape_html(&entry.question))
                    .with_var("answer", escape_html(&entry.answer));
                self.templates.render("faq_item", &ctx)
            })
            .collect::<Result<_>>()?;
        Ok(rendered.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> PageGenerator {
        PageGenerator::new(SiteConfig::default())
    }

    #[test]
    fn test_render_default_model() {
        let html = generator().render(&Scholarship::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Bolsa de Estudo</title>"));
        assert!(html.contains("Sobre a Bolsa"));
        assert!(html.contains("Perguntas Frequentes"));
        assert!(html.contains("Propinas universitárias"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let s = Scholarship::default();
        let g = generator();
        assert_eq!(g.render(&s).unwrap(), g.render(&s).unwrap());
    }

    #[test]
    fn test_process_steps_are_numbered_from_one() {
        let mut s = Scholarship::default();
        s.application_process = vec!["Primeiro".to_string(), "Segundo".to_string()];
        let html = generator().render(&s).unwrap();

        assert!(html.contains(r#"<span class="step-number">1</span>"#));
        assert!(html.contains(r#"<span class="step-number">2</span>"#));
        assert!(!html.contains(r#"<span class="step-number">0</span>"#));
    }

    #[test]
    fn test_empty_sequences_keep_containers() {
        let mut s = Scholarship::default();
        s.about.clear();
        s.coverage.clear();
        s.study_areas.clear();
        s.eligibility.clear();
        s.required_documents.clear();
        s.timeline.clear();
        s.application_process.clear();
        s.tips.clear();
        s.advantages.clear();
        s.faq.clear();
        s.final_considerations.clear();

        let html = generator().render(&s).unwrap();

        assert!(html.contains(r#"<div class="study-areas">"#));
        assert!(html.contains(r#"<ul class="coverage-list">"#));
        assert!(html.contains(r#"<table class="schedule-table">"#));
        assert!(html.contains(r#"<div class="faq-list">"#));
        assert!(!html.contains(r#"<div class="study-area-card">"#));
        assert!(!html.contains(r#"<div class="faq-item">"#));
    }

    #[test]
    fn test_empty_strings_render_as_empty_text() {
        let mut s = Scholarship::default();
        s.seo.title.clear();
        s.hero.title.clear();
        s.host_institution.clear();

        let html = generator().render(&s).unwrap();
        assert!(html.contains("<title></title>"));
        assert!(html.contains("<h1></h1>"));
    }

    #[test]
    fn test_free_text_is_escaped() {
        let mut s = Scholarship::default();
        s.hero.title = "<script>alert('x')</script>".to_string();
        s.faq[0].answer = "a < b & c".to_string();

        let html = generator().render(&s).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_timeline_rows_in_source_order() {
        let mut s = Scholarship::default();
        s.timeline = vec![
            TimelineEntry::new("Abertura", "Janeiro"),
            TimelineEntry::new("Prazo", "Março"),
        ];
        let html = generator().render(&s).unwrap();

        let first = html.find("<td>Abertura</td>").unwrap();
        let second = html.find("<td>Prazo</td>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_boilerplate_sections_always_present() {
        let html = generator().render(&Scholarship::default()).unwrap();

        assert!(html.contains("Bolsas Relacionadas"));
        assert!(html.contains("Ver Outras Bolsas"));
        assert!(html.contains("function toggleFaq"));
        assert!(html.contains("function toggleMobileMenu"));
        assert!(html.contains("© 2026 Bolseiro"));
    }
}
