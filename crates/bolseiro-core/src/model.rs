//! Content model for a scholarship listing page.
//!
//! A [`Scholarship`] is the single aggregate holding everything the studio
//! form can edit. Every field is always present; the empty string is the
//! "absent" value and renders as a placeholder in the preview.

use serde::{Deserialize, Serialize};

/// Listing metadata — the identity record consumed by the external catalog.
///
/// Several of these fields are canonical sources for derived display fields
/// elsewhere in the model (see [`crate::sync`]). The `*_en` fields are static
/// English duplicates used by the catalog, never by the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Catalog identifier.
    pub id: String,

    /// URL slug; also drives the canonical URL and the export filename.
    pub slug: String,

    /// Scholarship title.
    pub title: String,

    /// English duplicate of the title.
    pub title_en: String,

    /// Short description for listing cards.
    pub description: String,

    /// English duplicate of the description.
    pub description_en: String,

    /// Destination country display name.
    pub country: String,

    /// Two-letter country code; drives the flag asset path.
    pub country_code: String,

    /// Study level (e.g. "Mestrado").
    pub level: String,

    /// English duplicate of the level.
    pub level_en: String,

    /// Application deadline, free-form display text.
    pub deadline: String,

    /// Funding summary, free-form display text.
    pub funding: String,

    /// Social-preview image, usually a site-relative path.
    pub image_url: String,

    /// Whether the listing is featured on the catalog front page.
    pub featured: bool,

    /// Creation date, free-form display text.
    pub created_at: String,
}

/// SEO and social-preview metadata for the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,

    pub description: String,

    pub keywords: String,

    pub canonical_url: String,

    pub og_title: String,

    pub og_description: String,

    pub og_image: String,

    pub og_image_width: String,

    pub og_image_height: String,

    pub og_url: String,

    pub og_locale: String,

    pub twitter_title: String,

    pub twitter_description: String,

    pub twitter_image: String,

    pub author: String,

    pub date_published: String,

    pub date_modified: String,
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    /// Badge line above the title (e.g. "Reino Unido • Mestrado").
    pub badge: String,

    pub title: String,

    pub description: String,

    /// Article thumbnail; kept site-relative, unlike the social image.
    pub thumbnail_url: String,

    pub thumbnail_alt: String,
}

/// Quick-info card values — display duplicates of listing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickInfo {
    pub country: String,

    /// Flag asset path (e.g. "/flags/gb.svg").
    pub country_flag: String,

    pub level: String,

    pub deadline: String,

    pub funding: String,
}

/// A titled entry with a one-line description (coverage and advantages).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitledItem {
    pub title: String,

    pub description: String,
}

impl TitledItem {
    /// Create a new item from display strings.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One row of the application timeline table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub stage: String,

    pub date: String,
}

impl TimelineEntry {
    pub fn new(stage: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            date: date.into(),
        }
    }
}

/// One collapsible FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,

    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Call-to-action box content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub title: String,

    pub description: String,

    pub apply_url: String,

    pub apply_text: String,

    /// Community channel link (WhatsApp or similar).
    pub channel_url: String,

    pub channel_text: String,
}

/// The full editable content of one scholarship page.
///
/// Mutations never happen in place: editing code clones the aggregate,
/// modifies the clone, and replaces the whole value, so change detection in
/// the reactive view layer stays a cheap equality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scholarship {
    pub listing: Listing,

    pub seo: Seo,

    pub hero: Hero,

    pub quick_info: QuickInfo,

    /// "Sobre a Bolsa" paragraphs, in display order.
    pub about: Vec<String>,

    pub host_institution: String,

    pub eligible_countries: String,

    pub coverage: Vec<TitledItem>,

    pub study_areas: Vec<String>,

    pub eligibility: Vec<String>,

    pub required_documents: Vec<String>,

    pub timeline: Vec<TimelineEntry>,

    /// Numbered application steps; ordinals come from position.
    pub application_process: Vec<String>,

    pub tips: Vec<String>,

    pub advantages: Vec<TitledItem>,

    pub faq: Vec<FaqEntry>,

    pub final_considerations: Vec<String>,

    pub cta: CallToAction,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            id: String::new(),
            slug: String::new(),
            title: String::new(),
            title_en: String::new(),
            description: String::new(),
            description_en: String::new(),
            country: String::new(),
            country_code: String::new(),
            level: "Mestrado".to_string(),
            level_en: "Master's".to_string(),
            deadline: String::new(),
            funding: "Bolsa".to_string(),
            image_url: "/images/og-exemplo.webp".to_string(),
            featured: false,
            created_at: String::new(),
        }
    }
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            title: "Bolsa de Estudo".to_string(),
            description: "Candidata-te a esta bolsa.".to_string(),
            keywords: "bolsa, estudo, mestrado".to_string(),
            canonical_url: "https://bolseiro.org/bolsas/exemplo.html".to_string(),
            og_title: "Bolsa de Estudo".to_string(),
            og_description:
                "Candidata-te a esta bolsa para fazer o teu mestrado totalmente financiado."
                    .to_string(),
            og_image: "https://bolseiro.org/images/og-exemplo.webp".to_string(),
            og_image_width: "1200".to_string(),
            og_image_height: "630".to_string(),
            og_url: "https://bolseiro.org/bolsas/exemplo.html".to_string(),
            og_locale: "pt_PT".to_string(),
            twitter_title: "Bolsa de Estudo".to_string(),
            twitter_description:
                "Candidata-te a esta bolsa para fazer o teu mestrado totalmente financiado."
                    .to_string(),
            twitter_image: "https://bolseiro.org/images/og-exemplo.webp".to_string(),
            author: "Bolseiro Editorial".to_string(),
            date_published: String::new(),
            date_modified: String::new(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "País • Nível".to_string(),
            title: "Nome da Bolsa 2025/2026".to_string(),
            description: "Descrição breve da bolsa de estudo e seus principais benefícios."
                .to_string(),
            thumbnail_url: "/images/og-exemplo.webp".to_string(),
            thumbnail_alt: "Nome da Bolsa".to_string(),
        }
    }
}

impl Default for QuickInfo {
    fn default() -> Self {
        Self {
            country: "País".to_string(),
            country_flag: "/flags/xx.svg".to_string(),
            level: "Mestrado".to_string(),
            deadline: "Data Limite".to_string(),
            funding: "100% Financiado".to_string(),
        }
    }
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            title: "Pronto para te candidatares?".to_string(),
            description: "Acede ao portal oficial para começar a tua candidatura.".to_string(),
            apply_url: "https://exemplo.com/candidatura".to_string(),
            apply_text: "Candidatar-se Agora".to_string(),
            channel_url: "https://whatsapp.com/channel/bolseiro".to_string(),
            channel_text: "Participar no WhatsApp".to_string(),
        }
    }
}

impl Default for Scholarship {
    fn default() -> Self {
        Self {
            listing: Listing::default(),
            seo: Seo::default(),
            hero: Hero::default(),
            quick_info: QuickInfo::default(),
            about: vec![
                "Descrição detalhada sobre a bolsa de estudo, a sua história e missão."
                    .to_string(),
                "Informações adicionais sobre o programa e os seus objetivos.".to_string(),
            ],
            host_institution: "Descrição das universidades e instituições parceiras do programa."
                .to_string(),
            eligible_countries: "Informações sobre os países elegíveis para esta bolsa de estudo."
                .to_string(),
            coverage: vec![
                TitledItem::new(
                    "Propinas universitárias",
                    "Cobertura total das propinas do programa",
                ),
                TitledItem::new("Subsídio mensal", "Para despesas de vida"),
                TitledItem::new("Passagens aéreas", "Ida e volta"),
                TitledItem::new("Alojamento", "Apoio para alojamento"),
            ],
            study_areas: vec![
                "Área de Estudo 1".to_string(),
                "Área de Estudo 2".to_string(),
                "Área de Estudo 3".to_string(),
            ],
            eligibility: vec![
                "Critério de elegibilidade 1".to_string(),
                "Critério de elegibilidade 2".to_string(),
                "Critério de elegibilidade 3".to_string(),
            ],
            required_documents: vec![
                "Documento necessário 1".to_string(),
                "Documento necessário 2".to_string(),
                "Documento necessário 3".to_string(),
            ],
            // Starts empty: timeline rows are added per scholarship, and an
            // append followed by a front removal restores this default.
            timeline: Vec::new(),
            application_process: vec![
                "Passo 1 do processo de candidatura".to_string(),
                "Passo 2 do processo de candidatura".to_string(),
                "Passo 3 do processo de candidatura".to_string(),
            ],
            tips: vec![
                "Dica importante 1".to_string(),
                "Dica importante 2".to_string(),
            ],
            advantages: vec![
                TitledItem::new("Vantagem 1", "Descrição da vantagem"),
                TitledItem::new("Vantagem 2", "Descrição da vantagem"),
            ],
            faq: vec![
                FaqEntry::new("Pergunta frequente 1?", "Resposta à pergunta 1."),
                FaqEntry::new("Pergunta frequente 2?", "Resposta à pergunta 2."),
            ],
            final_considerations: vec!["Consideração final sobre a bolsa.".to_string()],
            cta: CallToAction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_constant() {
        // Reset semantics depend on the default being a stable value.
        assert_eq!(Scholarship::default(), Scholarship::default());
    }

    #[test]
    fn test_default_sequences_nonempty() {
        let s = Scholarship::default();
        assert_eq!(s.about.len(), 2);
        assert_eq!(s.coverage.len(), 4);
        assert!(s.timeline.is_empty());
        assert_eq!(s.application_process.len(), 3);
        assert_eq!(s.faq.len(), 2);
        assert_eq!(s.final_considerations.len(), 1);
    }

    #[test]
    fn test_default_dates_empty() {
        let s = Scholarship::default();
        assert!(s.listing.created_at.is_empty());
        assert!(s.seo.date_published.is_empty());
        assert!(s.seo.date_modified.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let s = Scholarship::default();
        let json = serde_json::to_string(&s).expect("serialize");
        let back: Scholarship = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(s, back);
    }

    #[test]
    fn test_missing_fields_fill_defaults() {
        // Persisted blobs from older versions may lack fields entirely.
        let partial: Scholarship = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(partial, Scholarship::default());
    }

    #[test]
    fn test_listing_field_names_match_catalog_layout() {
        let json = serde_json::to_string(&Listing::default()).expect("serialize");
        for field in [
            "\"id\"",
            "\"slug\"",
            "\"title_en\"",
            "\"description_en\"",
            "\"country_code\"",
            "\"level_en\"",
            "\"image_url\"",
            "\"featured\"",
            "\"created_at\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }
}
