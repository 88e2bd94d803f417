//! HTML template system for page generation.
//!
//! A lightweight string-interpolation engine rather than a full template
//! crate: placeholders are written `{{ variable }}`, with `{{ variable? }}`
//! marking values that may be absent from the context. The built-in
//! templates cover the complete listing page document plus one fragment per
//! repeated section item.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Check if a variable exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A template supporting `{{ variable }}` interpolation.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    ///
    /// Replaces all `{{ variable }}` placeholders with values from context;
    /// `{{ variable? }}` renders as the empty string when absent.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in page templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Template::new("document", DOCUMENT_TEMPLATE));
        self.register(Template::new("paragraph", PARAGRAPH_TEMPLATE));
        self.register(Template::new("check_item", CHECK_ITEM_TEMPLATE));
        self.register(Template::new("area_card", AREA_CARD_TEMPLATE));
        self.register(Template::new("criterion_item", CRITERION_ITEM_TEMPLATE));
        self.register(Template::new("timeline_row", TIMELINE_ROW_TEMPLATE));
        self.register(Template::new("process_step", PROCESS_STEP_TEMPLATE));
        self.register(Template::new("tip_item", TIP_ITEM_TEMPLATE));
        self.register(Template::new("faq_item", FAQ_ITEM_TEMPLATE));
    }

    /// Register a template, replacing any existing one with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Paragraph fragment for the about and final-considerations sections.
pub const PARAGRAPH_TEMPLATE: &str = "                    <p>{{ text }}</p>";

/// Checked list entry used by coverage and advantages.
pub const CHECK_ITEM_TEMPLATE: &str = r#"                        <li>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                                <polyline points="22 4 12 14.01 9 11.01"/>
                            </svg>
                            <span><strong>{{ title }}</strong> - {{ description }}</span>
                        </li>"#;

/// Card fragment used by study areas and required documents.
pub const AREA_CARD_TEMPLATE: &str = r#"                        <div class="study-area-card">
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>
                                <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>
                            </svg>
                            <span>{{ label }}</span>
                        </div>"#;

/// Arrowed list entry for eligibility criteria.
pub const CRITERION_ITEM_TEMPLATE: &str = r#"                        <li>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M5 12h14"/>
                                <path d="m12 5 7 7-7 7"/>
                            </svg>
                            <span>{{ label }}</span>
                        </li>"#;

/// Timeline table row.
pub const TIMELINE_ROW_TEMPLATE: &str = r#"                            <tr>
                                <td>{{ stage }}</td>
                                <td>{{ date }}</td>
                            </tr>"#;

/// Numbered application step; `number` is the 1-based position.
pub const PROCESS_STEP_TEMPLATE: &str = r#"                        <li class="numbered-step">
                            <span class="step-number">{{ number }}</span>
                            <span class="step-content">{{ text }}</span>
                        </li>"#;

/// Tip-box list entry.
pub const TIP_ITEM_TEMPLATE: &str = r#"                            <li>
                                <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                                    <polyline points="22 4 12 14.01 9 11.01"/>
                                </svg>
                                <span>{{ label }}</span>
                            </li>"#;

/// Collapsible FAQ entry; the toggle handler ships in the document script.
pub const FAQ_ITEM_TEMPLATE: &str = r#"                        <div class="faq-item">
                            <button class="faq-question" onclick="toggleFaq(this)">
                                <span>{{ question }}</span>
                                <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <polyline points="6 9 12 15 18 9"/>
                                </svg>
                            </button>
                            <div class="faq-answer">
                                {{ answer }}
                            </div>
                        </div>"#;

/// The complete listing page document.
///
/// Everything outside a placeholder is fixed boilerplate: navigation, footer,
/// related-listing sidebar, the embedded stylesheet, and the inline toggle
/// scripts. Sections repeat fragments through the `*_html` variables and keep
/// their containers even when those are empty.
pub const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="pt">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">

    <!-- SEO -->
    <title>{{ seo_title }}</title>
    <meta name="description" content="{{ seo_description }}">
    <meta name="keywords" content="{{ seo_keywords }}">
    <meta name="author" content="{{ author }}">
    <link rel="canonical" href="{{ canonical_url }}">

    <!-- Open Graph -->
    <meta property="og:type" content="article">
    <meta property="og:title" content="{{ og_title }}">
    <meta property="og:description" content="{{ og_description }}">
    <meta property="og:image" content="{{ og_image }}">
    <meta property="og:image:width" content="{{ og_image_width }}">
    <meta property="og:image:height" content="{{ og_image_height }}">
    <meta property="og:url" content="{{ og_url }}">
    <meta property="og:locale" content="{{ og_locale }}">
    <meta property="og:site_name" content="{{ site_title }}">
    <meta property="article:published_time" content="{{ date_published }}">
    <meta property="article:modified_time" content="{{ date_modified }}">

    <!-- Twitter Card -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="{{ twitter_title }}">
    <meta name="twitter:description" content="{{ twitter_description }}">
    <meta name="twitter:image" content="{{ twitter_image }}">

    <!-- Favicon -->
    <link rel="icon" type="image/x-icon" href="/favicon.ico">

    <style>
        :root {
            --color-primary: #2563EB;
            --color-primary-hover: #1D4ED8;
            --color-success: #16A34A;
            --color-bg: #F8FAFC;
            --color-surface: #FFFFFF;
            --color-text: #1E293B;
            --color-text-muted: #64748B;
            --color-border: #E2E8F0;
        }

        *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
            line-height: 1.7;
            color: var(--color-text);
            background-color: var(--color-bg);
        }

        .container { width: 100%; max-width: 1080px; margin: 0 auto; padding: 0 1.5rem; }

        .header { position: sticky; top: 0; z-index: 50; background: var(--color-surface); border-bottom: 1px solid var(--color-border); }
        .header-inner { display: flex; align-items: center; justify-content: space-between; padding: 1rem 0; gap: 1rem; }
        .logo { font-size: 1.25rem; font-weight: 700; color: var(--color-text); text-decoration: none; }
        .logo span { color: var(--color-primary); }
        .nav { display: flex; gap: 1.25rem; }
        .nav-link { font-size: 0.9rem; color: var(--color-text-muted); text-decoration: none; }
        .nav-link.active, .nav-link:hover { color: var(--color-primary); }
        .mobile-nav { display: none; flex-direction: column; gap: 0.5rem; padding-bottom: 1rem; }
        .mobile-nav.open { display: flex; }
        .mobile-menu-btn { display: none; background: none; border: none; cursor: pointer; font-size: 1.4rem; }
        @media (max-width: 760px) {
            .nav { display: none; }
            .mobile-menu-btn { display: block; }
        }

        .hero { padding: 3rem 0; background: linear-gradient(135deg, #EFF6FF, transparent); border-bottom: 1px solid var(--color-border); }
        .hero-badge { display: inline-flex; align-items: center; gap: 0.5rem; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 999px; padding: 0.35rem 0.9rem; font-size: 0.85rem; color: var(--color-text-muted); margin-bottom: 1rem; }
        .hero h1 { font-size: 2rem; line-height: 1.3; margin-bottom: 0.75rem; }
        .hero p { color: var(--color-text-muted); max-width: 48rem; }

        .main-content { padding: 2.5rem 0; }
        .content-grid { display: grid; grid-template-columns: minmax(0, 1fr) 300px; gap: 2rem; }
        @media (max-width: 900px) { .content-grid { grid-template-columns: 1fr; } }

        .article-thumbnail { width: 100%; border-radius: 0.75rem; border: 1px solid var(--color-border); margin-bottom: 2rem; }
        .section-header { display: flex; align-items: center; gap: 0.6rem; font-size: 1.35rem; margin: 2rem 0 1rem; padding-bottom: 0.5rem; border-bottom: 1px solid var(--color-border); }
        .section-header svg { color: var(--color-primary); flex-shrink: 0; }
        .article p { margin-bottom: 1.1rem; }

        .sidebar-card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 0.75rem; padding: 1.25rem; }
        .quick-info { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
        .info-item { display: flex; gap: 0.75rem; align-items: flex-start; }
        .info-icon { width: 2rem; height: 2rem; border-radius: 0.5rem; background: #EFF6FF; color: var(--color-primary); display: flex; align-items: center; justify-content: center; flex-shrink: 0; }
        .info-label { font-size: 0.75rem; color: var(--color-text-muted); }
        .info-value { font-size: 0.9rem; font-weight: 600; }

        .coverage-list, .requirements-list { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.5rem; }
        .coverage-list svg { color: var(--color-success); flex-shrink: 0; margin-top: 0.15rem; }
        .requirements-list svg { color: var(--color-primary); flex-shrink: 0; margin-top: 0.15rem; }
        .coverage-list li, .requirements-list li { display: flex; gap: 0.75rem; }

        .study-areas { display: flex; flex-wrap: wrap; gap: 0.6rem; margin-bottom: 1.5rem; }
        .study-area-card { display: inline-flex; align-items: center; gap: 0.5rem; background: #EFF6FF; color: var(--color-primary); border-radius: 0.6rem; padding: 0.5rem 0.9rem; font-size: 0.9rem; }

        .schedule-table { width: 100%; border-collapse: collapse; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 0.6rem; overflow: hidden; margin-bottom: 1.5rem; }
        .schedule-table th, .schedule-table td { text-align: left; padding: 0.7rem 1rem; border-bottom: 1px solid var(--color-border); font-size: 0.95rem; }
        .schedule-table th { background: var(--color-bg); }
        .schedule-table tr:last-child td { border-bottom: none; }

        .numbered-steps { list-style: none; display: flex; flex-direction: column; gap: 0.9rem; margin-bottom: 1.5rem; }
        .numbered-step { display: flex; gap: 0.75rem; align-items: flex-start; }
        .step-number { width: 1.6rem; height: 1.6rem; border-radius: 999px; background: var(--color-primary); color: #fff; font-size: 0.8rem; font-weight: 600; display: flex; align-items: center; justify-content: center; flex-shrink: 0; }

        .tip-box { background: #FEFCE8; border: 1px solid #FDE68A; border-radius: 0.75rem; padding: 1.25rem; margin: 1.5rem 0; }
        .tip-box-header { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; margin-bottom: 0.75rem; }
        .tip-list { list-style: none; display: flex; flex-direction: column; gap: 0.6rem; }
        .tip-list li { display: flex; gap: 0.6rem; font-size: 0.95rem; }
        .tip-list svg { color: var(--color-success); flex-shrink: 0; margin-top: 0.15rem; }

        .faq-list { display: flex; flex-direction: column; gap: 0.6rem; margin-bottom: 1.5rem; }
        .faq-item { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 0.6rem; overflow: hidden; }
        .faq-question { width: 100%; display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; background: none; border: none; padding: 1rem; font: inherit; font-weight: 600; text-align: left; cursor: pointer; }
        .faq-question svg { transition: transform 0.2s ease; flex-shrink: 0; }
        .faq-item.open .faq-question svg { transform: rotate(180deg); }
        .faq-answer { display: none; padding: 0 1rem 1rem; color: var(--color-text-muted); }
        .faq-item.open .faq-answer { display: block; }

        .cta-box { background: linear-gradient(135deg, #EFF6FF, transparent); border: 1px solid #BFDBFE; border-radius: 0.75rem; padding: 2rem; text-align: center; margin-top: 2rem; }
        .cta-box h3 { font-size: 1.4rem; margin-bottom: 0.5rem; }
        .cta-box p { color: var(--color-text-muted); margin-bottom: 1.25rem; }
        .cta-buttons { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; }

        .btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; border-radius: 0.6rem; padding: 0.65rem 1.25rem; font-weight: 600; font-size: 0.95rem; text-decoration: none; border: 1px solid transparent; cursor: pointer; }
        .btn-primary { background: var(--color-primary); color: #fff; }
        .btn-primary:hover { background: var(--color-primary-hover); }
        .btn-channel { background: var(--color-success); color: #fff; }
        .btn-outline { background: none; border-color: var(--color-border); color: var(--color-text); }

        .related-list { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 0.75rem; }
        .related-item { display: flex; gap: 0.75rem; align-items: center; text-decoration: none; color: inherit; }
        .related-thumb { width: 3.5rem; height: 2.5rem; object-fit: cover; border-radius: 0.4rem; border: 1px solid var(--color-border); }
        .related-title { font-size: 0.9rem; font-weight: 600; }
        .related-country { font-size: 0.8rem; color: var(--color-text-muted); }
        .sidebar { display: flex; flex-direction: column; gap: 1.25rem; }

        .footer { background: var(--color-surface); border-top: 1px solid var(--color-border); margin-top: 3rem; }
        .footer-grid { display: grid; grid-template-columns: 2fr repeat(3, 1fr); gap: 2rem; padding: 2.5rem 0; }
        @media (max-width: 760px) { .footer-grid { grid-template-columns: 1fr 1fr; } }
        .footer-desc { font-size: 0.9rem; color: var(--color-text-muted); margin-top: 0.5rem; }
        .footer-section h4 { margin-bottom: 0.6rem; font-size: 0.95rem; }
        .footer-links { list-style: none; display: flex; flex-direction: column; gap: 0.4rem; }
        .footer-links a { font-size: 0.9rem; color: var(--color-text-muted); text-decoration: none; }
        .footer-links a:hover { color: var(--color-primary); }
        .footer-bottom { border-top: 1px solid var(--color-border); padding: 1.25rem 0; font-size: 0.85rem; color: var(--color-text-muted); }
    </style>
</head>
<body>
    <!-- Header -->
    <header class="header">
        <div class="container">
            <div class="header-inner">
                <a href="/" class="logo">Bol<span>seiro</span></a>

                <nav class="nav">
                    <a href="/" class="nav-link">Início</a>
                    <a href="/bolsas.html" class="nav-link active">Bolsas</a>
                    <a href="/paises.html" class="nav-link">Países</a>
                    <a href="/blog.html" class="nav-link">Blog</a>
                    <a href="/guias.html" class="nav-link">Guias</a>
                    <a href="/faq.html" class="nav-link">FAQ</a>
                </nav>

                <button class="mobile-menu-btn" onclick="toggleMobileMenu()" aria-label="Menu">☰</button>
            </div>

            <nav class="mobile-nav" id="mobileNav">
                <a href="/" class="nav-link">Início</a>
                <a href="/bolsas.html" class="nav-link active">Bolsas</a>
                <a href="/paises.html" class="nav-link">Países</a>
                <a href="/blog.html" class="nav-link">Blog</a>
                <a href="/guias.html" class="nav-link">Guias</a>
                <a href="/faq.html" class="nav-link">FAQ</a>
            </nav>
        </div>
    </header>

    <!-- Hero -->
    <section class="hero">
        <div class="container">
            <div class="hero-badge">
                <img src="{{ country_flag }}" alt="{{ quick_country }}" style="width: 20px; height: 15px; border-radius: 2px;">
                <span>{{ hero_badge }}</span>
            </div>
            <h1>{{ hero_title }}</h1>
            <p>{{ hero_description }}</p>
        </div>
    </section>

    <!-- Main Content -->
    <main class="main-content">
        <div class="container">
            <div class="content-grid">
                <!-- Article -->
                <article class="article">
                    <img
                        src="{{ thumbnail_url }}"
                        alt="{{ thumbnail_alt }}"
                        class="article-thumbnail"
                    >

                    <!-- Sobre a Bolsa -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 16v-4"/>
                            <path d="M12 8h.01"/>
                        </svg>
                        <span>Sobre a Bolsa</span>
                    </h2>

                    <!-- Quick Info -->
                    <div class="sidebar-card" style="margin-bottom: 2rem;">
                        <div class="quick-info">
                            <div class="info-item">
                                <div class="info-icon">📍</div>
                                <div class="info-content">
                                    <div class="info-label">País</div>
                                    <div class="info-value">{{ quick_country }}</div>
                                </div>
                            </div>
                            <div class="info-item">
                                <div class="info-icon">🎓</div>
                                <div class="info-content">
                                    <div class="info-label">Nível</div>
                                    <div class="info-value">{{ quick_level }}</div>
                                </div>
                            </div>
                            <div class="info-item">
                                <div class="info-icon">🕑</div>
                                <div class="info-content">
                                    <div class="info-label">Prazo</div>
                                    <div class="info-value">{{ quick_deadline }}</div>
                                </div>
                            </div>
                            <div class="info-item">
                                <div class="info-icon">💰</div>
                                <div class="info-content">
                                    <div class="info-label">Financiamento</div>
                                    <div class="info-value">{{ quick_funding }}</div>
                                </div>
                            </div>
                        </div>
                    </div>

{{ about_html }}

                    <!-- Instituição Anfitriã -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/>
                            <path d="M10 6h4"/>
                            <path d="M10 10h4"/>
                            <path d="M10 14h4"/>
                        </svg>
                        <span>Instituição Anfitriã</span>
                    </h2>
                    <p>{{ host_institution }}</p>

                    <!-- Países Elegíveis -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/>
                            <path d="M2 12h20"/>
                        </svg>
                        <span>Países Elegíveis</span>
                    </h2>
                    <p>{{ eligible_countries }}</p>

                    <!-- O Que a Bolsa Cobre -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M12 2v20M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>
                        </svg>
                        <span>O Que a Bolsa Cobre</span>
                    </h2>
                    <ul class="coverage-list">
{{ coverage_html }}
                    </ul>

                    <!-- Áreas e Cursos de Estudos -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"/>
                        </svg>
                        <span>Áreas e Cursos de Estudos</span>
                    </h2>
                    <div class="study-areas">
{{ study_areas_html }}
                    </div>

                    <!-- Critérios de Elegibilidade -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                            <circle cx="9" cy="7" r="4"/>
                            <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
                        </svg>
                        <span>Critérios de Elegibilidade</span>
                    </h2>
                    <ul class="requirements-list">
{{ eligibility_html }}
                    </ul>

                    <!-- Documentos Necessários -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/>
                            <polyline points="14 2 14 8 20 8"/>
                        </svg>
                        <span>Documentos Necessários</span>
                    </h2>
                    <div class="study-areas">
{{ required_documents_html }}
                    </div>

                    <!-- Cronograma Completo -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 6v6l4 2"/>
                        </svg>
                        <span>Cronograma Completo</span>
                    </h2>
                    <table class="schedule-table">
                        <thead>
                            <tr>
                                <th>Etapa</th>
                                <th>Data</th>
                            </tr>
                        </thead>
                        <tbody>
{{ timeline_html }}
                        </tbody>
                    </table>

                    <!-- Processo de Candidatura -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/>
                            <line x1="16" x2="8" y1="13" y2="13"/>
                            <line x1="16" x2="8" y1="17" y2="17"/>
                        </svg>
                        <span>Processo de Candidatura</span>
                    </h2>
                    <ol class="numbered-steps">
{{ process_html }}
                    </ol>

                    <!-- Dicas -->
                    <div class="tip-box">
                        <div class="tip-box-header">
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/>
                                <path d="M9 18h6"/>
                                <path d="M10 22h4"/>
                            </svg>
                            Dicas para uma Candidatura Forte
                        </div>
                        <ul class="tip-list">
{{ tips_html }}
                        </ul>
                    </div>

                    <!-- Vantagens do Programa -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
                        </svg>
                        <span>Vantagens do Programa</span>
                    </h2>
                    <ul class="coverage-list">
{{ advantages_html }}
                    </ul>

                    <!-- FAQ -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/>
                            <path d="M12 17h.01"/>
                        </svg>
                        <span>Perguntas Frequentes</span>
                    </h2>
                    <div class="faq-list">
{{ faq_html }}
                    </div>

                    <!-- Considerações Finais -->
                    <h2 class="section-header">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z"/>
                            <path d="m9 12 2 2 4-4"/>
                        </svg>
                        <span>Considerações Finais</span>
                    </h2>
{{ final_considerations_html }}

                    <!-- CTA Box -->
                    <div class="cta-box">
                        <h3>{{ cta_title }}</h3>
                        <p>{{ cta_description }}</p>
                        <div class="cta-buttons">
                            <a href="{{ cta_apply_url }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary">{{ cta_apply_text }}</a>
                            <a href="{{ cta_channel_url }}" target="_blank" rel="noopener noreferrer" class="btn btn-channel">{{ cta_channel_text }}</a>
                        </div>
                        <a href="/bolsas.html" style="display: inline-block; margin-top: 1rem; color: var(--color-text-muted); font-weight: 500;">Ver Outras Bolsas</a>
                    </div>
                </article>

                <!-- Sidebar -->
                <aside class="sidebar">
                    <!-- Related Scholarships -->
                    <div class="sidebar-card">
                        <h3>Bolsas Relacionadas</h3>
                        <div class="related-list">
                            <a href="/bolsas/commonwealth.html" class="related-item">
                                <img src="/images/og-commonwealth.webp" alt="Commonwealth" class="related-thumb">
                                <div class="related-info">
                                    <div class="related-title">Commonwealth Scholarship</div>
                                    <div class="related-country">Reino Unido</div>
                                </div>
                            </a>
                            <a href="/bolsas/gates-cambridge.html" class="related-item">
                                <img src="/images/og-gates.webp" alt="Gates Cambridge" class="related-thumb">
                                <div class="related-info">
                                    <div class="related-title">Gates Cambridge</div>
                                    <div class="related-country">Reino Unido</div>
                                </div>
                            </a>
                            <a href="/bolsas/fulbright.html" class="related-item">
                                <img src="/images/og-fulbright.webp" alt="Fulbright" class="related-thumb">
                                <div class="related-info">
                                    <div class="related-title">Fulbright</div>
                                    <div class="related-country">Estados Unidos</div>
                                </div>
                            </a>
                            <a href="/bolsas/erasmus-mundus.html" class="related-item">
                                <img src="/images/og-erasmus.webp" alt="Erasmus Mundus" class="related-thumb">
                                <div class="related-info">
                                    <div class="related-title">Erasmus Mundus</div>
                                    <div class="related-country">Europa</div>
                                </div>
                            </a>
                        </div>
                    </div>

                    <!-- CTA Button -->
                    <a href="{{ cta_apply_url }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary" style="width: 100%;">{{ cta_apply_text }}</a>
                </aside>
            </div>
        </div>
    </main>

    <!-- Footer -->
    <footer class="footer">
        <div class="container">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="/" class="logo">Bol<span>seiro</span></a>
                    <p class="footer-desc">Bolsas de estudo para estudantes lusófonos. Realizamos sonhos académicos.</p>
                    <p class="footer-desc">info@bolseiro.org · Lisboa, Portugal</p>
                </div>

                <div class="footer-section">
                    <h4>Bolsas</h4>
                    <ul class="footer-links">
                        <li><a href="/bolsas/chevening.html">Chevening</a></li>
                        <li><a href="/bolsas/commonwealth.html">Commonwealth</a></li>
                        <li><a href="/bolsas/fulbright.html">Fulbright</a></li>
                        <li><a href="/bolsas/erasmus-mundus.html">Erasmus Mundus</a></li>
                    </ul>
                </div>

                <div class="footer-section">
                    <h4>Destinos</h4>
                    <ul class="footer-links">
                        <li><a href="/paises.html?country=gb">Reino Unido</a></li>
                        <li><a href="/paises.html?country=us">Estados Unidos</a></li>
                        <li><a href="/paises.html?country=de">Alemanha</a></li>
                        <li><a href="/paises.html?country=pt">Portugal</a></li>
                    </ul>
                </div>

                <div class="footer-section">
                    <h4>Recursos</h4>
                    <ul class="footer-links">
                        <li><a href="/blog.html">Blog</a></li>
                        <li><a href="/guias.html">Guias</a></li>
                        <li><a href="/faq.html">FAQ</a></li>
                        <li><a href="/contacto.html">Contacto</a></li>
                    </ul>
                </div>
            </div>
        </div>

        <div class="footer-bottom">
            <div class="container">
                <p>© 2026 {{ site_title }}. Todos os direitos reservados.</p>
            </div>
        </div>
    </footer>

    <!-- Scripts -->
    <script>
        // Mobile menu toggle
        function toggleMobileMenu() {
            const mobileNav = document.getElementById('mobileNav');
            mobileNav.classList.toggle('open');
        }

        // FAQ toggle
        function toggleFaq(button) {
            const faqItem = button.closest('.faq-item');
            faqItem.classList.toggle('open');
        }
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Olá, {{ name }}!");
        let mut ctx = TemplateContext::new();
        ctx.insert("name", "Mundo");

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Olá, Mundo!");
    }

    #[test]
    fn test_template_multiple_variables() {
        let template = Template::new("test", "{{ a }} e {{ b }} e {{ a }}");
        let ctx = TemplateContext::new().with_var("a", "x").with_var("b", "y");

        assert_eq!(template.render(&ctx).unwrap(), "x e y e x");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Olá{{ suffix? }}!");
        let ctx = TemplateContext::new();
        assert_eq!(template.render(&ctx).unwrap(), "Olá!");

        let ctx = TemplateContext::new().with_var("suffix", ", Mundo");
        assert_eq!(template.render(&ctx).unwrap(), "Olá, Mundo!");
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("test", "Olá, {{ name }}!");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(_))));
    }

    #[test]
    fn test_template_unclosed_delimiter() {
        let template = Template::new("test", "Olá {{ name");
        let result = template.render(&TemplateContext::new().with_var("name", "x"));
        assert!(matches!(result, Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn test_registry_defaults_present() {
        let registry = TemplateRegistry::new();

        assert!(registry.get("document").is_some());
        assert!(registry.get("paragraph").is_some());
        assert!(registry.get("check_item").is_some());
        assert!(registry.get("faq_item").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_render_unknown() {
        let registry = TemplateRegistry::new();
        let result = registry.render("nope", &TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_fragment_render() {
        let registry = TemplateRegistry::new();
        let ctx = TemplateContext::new()
            .with_var("stage", "Abertura")
            .with_var("date", "Janeiro");

        let html = registry.render("timeline_row", &ctx).unwrap();
        assert!(html.contains("<td>Abertura</td>"));
        assert!(html.contains("<td>Janeiro</td>"));
    }
}
