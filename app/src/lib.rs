//! The Bolseiro page studio application.
//!
//! A single-page editor: the left panel mutates the content model through
//! the synchronizer and collection editors, the right panel renders the
//! generated document live, and the header exports the artifacts. Every
//! committed edit is persisted fire-and-forget to localStorage.

use bolseiro_core::{ListingUpdate, Scholarship, SiteConfig, apply_listing_update};
use bolseiro_generator::{PageGenerator, export_filename, listing_json};
use bolseiro_ui::{
    CheckboxField, ContentStore, FaqEditor, FormSection, PreviewPane, StringListEditor,
    TextAreaField, TextField, TimelineEditor, TitledListEditor, export,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Bolseiro — Estúdio de Páginas" />

      <Router>
        <main>
          <Routes fallback=|| "Página não encontrada.".into_view()>
            <Route path=StaticSegment("") view=StudioPage />
          </Routes>
        </main>
      </Router>
    }
}

/// Build a committed setter: clone the model, apply the edit, persist, swap.
fn commit<V: 'static>(
    scholarship: RwSignal<Scholarship>,
    store: ContentStore,
    mutate: impl Fn(&mut Scholarship, V) + Copy + Send + Sync + 'static,
) -> impl Fn(V) + Copy + Send + Sync + 'static {
    move |value| {
        let mut next = scholarship.get_untracked();
        mutate(&mut next, value);
        store.save(&next);
        scholarship.set(next);
    }
}

/// The studio: content form, live preview, export actions.
#[component]
fn StudioPage() -> impl IntoView {
    let store = ContentStore::default();
    let config = StoredValue::new(SiteConfig::default());
    let scholarship = RwSignal::new(store.load().unwrap_or_default());
    let generator = StoredValue::new(PageGenerator::new(SiteConfig::default()));

    let html = Memo::new(move |_| {
        generator.with_value(|g| g.render(&scholarship.get())).unwrap_or_else(|err| {
            log::error!("document rendering failed: {err}");
            String::new()
        })
    });

    // Canonical listing edits go through the synchronizer.
    let update_listing = move |update: ListingUpdate| {
        let next =
            config.with_value(|c| apply_listing_update(&scholarship.get_untracked(), c, update));
        store.save(&next);
        scholarship.set(next);
    };

    let on_reset = move |_| {
        scholarship.set(Scholarship::default());
        store.clear();
    };
    let on_copy_json = move |_| match listing_json(&scholarship.get_untracked().listing) {
        Ok(json) => export::copy_to_clipboard(&json),
        Err(err) => log::warn!("listing export failed: {err}"),
    };
    let on_copy_html = move |_| export::copy_to_clipboard(&html.get_untracked());
    let on_download = move |_| {
        let filename = export_filename(&scholarship.get_untracked().listing.slug);
        export::download_html(&filename, &html.get_untracked());
    };

    view! {
      <div class="studio">
        <header class="studio-header">
          <div class="studio-brand">
            <h1>"Bolseiro"</h1>
            <p>"Estúdio de Páginas de Bolsas"</p>
          </div>
          <div class="studio-actions">
            <button class="btn btn-outline" on:click=on_reset>
              "Limpar"
            </button>
            <button class="btn btn-outline" on:click=on_copy_json>
              "Copiar JSON"
            </button>
            <button class="btn btn-outline" on:click=on_copy_html>
              "Copiar HTML"
            </button>
            <button class="btn btn-primary" on:click=on_download>
              "Descarregar HTML"
            </button>
          </div>
        </header>

        <div class="studio-body">
          <div class="studio-form">
            <ContentForm scholarship=scholarship store=store update_listing=Callback::new(update_listing) />
          </div>
          <div class="studio-preview">
            <PreviewPane html={Signal::<String>::from(html)} />
          </div>
        </div>
      </div>
    }
}

/// The full editor form, one collapsible section per model area.
#[component]
fn ContentForm(
    scholarship: RwSignal<Scholarship>,
    store: ContentStore,
    /// Canonical listing edits, routed through the synchronizer.
    update_listing: Callback<ListingUpdate>,
) -> impl IntoView {
    view! {
      <div class="form-panel">
        <FormSection title="Catálogo (campos canónicos)" open=true>
          <TextField
            label="ID"
            value=Signal::derive(move || scholarship.get().listing.id)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Id(v)))
          />
          <TextField
            label="Slug"
            placeholder="bolsa-chevening-2026"
            value=Signal::derive(move || scholarship.get().listing.slug)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Slug(v)))
          />
          <TextField
            label="Título"
            value=Signal::derive(move || scholarship.get().listing.title)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Title(v)))
          />
          <TextField
            label="Título (EN)"
            value=Signal::derive(move || scholarship.get().listing.title_en)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::TitleEn(v)))
          />
          <TextAreaField
            label="Descrição"
            value=Signal::derive(move || scholarship.get().listing.description)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Description(v)))
          />
          <TextAreaField
            label="Descrição (EN)"
            value=Signal::derive(move || scholarship.get().listing.description_en)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::DescriptionEn(v)))
          />
          <TextField
            label="País"
            value=Signal::derive(move || scholarship.get().listing.country)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Country(v)))
          />
          <TextField
            label="Código do país"
            placeholder="gb"
            value=Signal::derive(move || scholarship.get().listing.country_code)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::CountryCode(v)))
          />
          <TextField
            label="Nível"
            value=Signal::derive(move || scholarship.get().listing.level)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Level(v)))
          />
          <TextField
            label="Nível (EN)"
            value=Signal::derive(move || scholarship.get().listing.level_en)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::LevelEn(v)))
          />
          <TextField
            label="Prazo"
            value=Signal::derive(move || scholarship.get().listing.deadline)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Deadline(v)))
          />
          <TextField
            label="Financiamento"
            value=Signal::derive(move || scholarship.get().listing.funding)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::Funding(v)))
          />
          <TextField
            label="URL da imagem"
            placeholder="/images/og-bolsa.webp"
            value=Signal::derive(move || scholarship.get().listing.image_url)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::ImageUrl(v)))
          />
          <TextField
            label="Data de criação"
            value=Signal::derive(move || scholarship.get().listing.created_at)
            on_input=Callback::new(move |v| update_listing.run(ListingUpdate::CreatedAt(v)))
          />
          <CheckboxField
            label="Em destaque"
            value=Signal::derive(move || scholarship.get().listing.featured)
            on_toggle=Callback::new(move |v| update_listing.run(ListingUpdate::Featured(v)))
          />
        </FormSection>

        <FormSection title="SEO & Open Graph">
          <TextField
            label="Título da página"
            value=Signal::derive(move || scholarship.get().seo.title)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.title = v))
          />
          <TextAreaField
            label="Meta descrição"
            value=Signal::derive(move || scholarship.get().seo.description)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.description = v))
          />
          <TextField
            label="Keywords"
            placeholder="bolsa, estudo, mestrado"
            value=Signal::derive(move || scholarship.get().seo.keywords)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.keywords = v))
          />
          <TextField
            label="URL canónica"
            value=Signal::derive(move || scholarship.get().seo.canonical_url)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.canonical_url = v))
          />
          <TextField
            label="OG título"
            value=Signal::derive(move || scholarship.get().seo.og_title)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.og_title = v))
          />
          <TextAreaField
            label="OG descrição"
            value=Signal::derive(move || scholarship.get().seo.og_description)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.og_description = v))
          />
          <TextField
            label="OG imagem"
            value=Signal::derive(move || scholarship.get().seo.og_image)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.seo.og_image = v))
          />
        </FormSection>

        <FormSection title="Hero & Imagem Principal">
          <TextField
            label="Badge"
            placeholder="Reino Unido • Mestrado"
            value=Signal::derive(move || scholarship.get().hero.badge)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.hero.badge = v))
          />
          <TextField
            label="Título principal"
            value=Signal::derive(move || scholarship.get().hero.title)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.hero.title = v))
          />
          <TextAreaField
            label="Descrição do hero"
            value=Signal::derive(move || scholarship.get().hero.description)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.hero.description = v))
          />
          <TextField
            label="URL da thumbnail"
            value=Signal::derive(move || scholarship.get().hero.thumbnail_url)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.hero.thumbnail_url = v))
          />
          <TextField
            label="Alt da imagem"
            value=Signal::derive(move || scholarship.get().hero.thumbnail_alt)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.hero.thumbnail_alt = v))
          />
        </FormSection>

        <FormSection title="Informações Rápidas">
          <TextField
            label="País"
            value=Signal::derive(move || scholarship.get().quick_info.country)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.quick_info.country = v))
          />
          <TextField
            label="URL da bandeira"
            placeholder="/flags/gb.svg"
            value=Signal::derive(move || scholarship.get().quick_info.country_flag)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.quick_info.country_flag = v))
          />
          <TextField
            label="Nível de estudo"
            value=Signal::derive(move || scholarship.get().quick_info.level)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.quick_info.level = v))
          />
          <TextField
            label="Prazo"
            value=Signal::derive(move || scholarship.get().quick_info.deadline)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.quick_info.deadline = v))
          />
          <TextField
            label="Financiamento"
            value=Signal::derive(move || scholarship.get().quick_info.funding)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.quick_info.funding = v))
          />
        </FormSection>

        <FormSection title="Sobre a Bolsa">
          <StringListEditor
            multiline=true
            add_label="Adicionar parágrafo"
            items=Signal::derive(move || scholarship.get().about)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.about = v))
          />
        </FormSection>

        <FormSection title="Instituição Anfitriã">
          <TextAreaField
            label="Descrição"
            rows=3
            value=Signal::derive(move || scholarship.get().host_institution)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.host_institution = v))
          />
        </FormSection>

        <FormSection title="Países Elegíveis">
          <TextAreaField
            label="Descrição"
            rows=3
            value=Signal::derive(move || scholarship.get().eligible_countries)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.eligible_countries = v))
          />
        </FormSection>

        <FormSection title="O Que a Bolsa Cobre">
          <TitledListEditor
            add_label="Adicionar cobertura"
            items=Signal::derive(move || scholarship.get().coverage)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.coverage = v))
          />
        </FormSection>

        <FormSection title="Áreas de Estudo">
          <StringListEditor
            add_label="Adicionar área"
            items=Signal::derive(move || scholarship.get().study_areas)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.study_areas = v))
          />
        </FormSection>

        <FormSection title="Critérios de Elegibilidade">
          <StringListEditor
            multiline=true
            add_label="Adicionar critério"
            items=Signal::derive(move || scholarship.get().eligibility)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.eligibility = v))
          />
        </FormSection>

        <FormSection title="Documentos Necessários">
          <StringListEditor
            add_label="Adicionar documento"
            items=Signal::derive(move || scholarship.get().required_documents)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.required_documents = v))
          />
        </FormSection>

        <FormSection title="Cronograma Completo">
          <TimelineEditor
            items=Signal::derive(move || scholarship.get().timeline)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.timeline = v))
          />
        </FormSection>

        <FormSection title="Processo de Candidatura">
          <StringListEditor
            multiline=true
            add_label="Adicionar passo"
            items=Signal::derive(move || scholarship.get().application_process)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.application_process = v))
          />
        </FormSection>

        <FormSection title="Dicas">
          <StringListEditor
            multiline=true
            add_label="Adicionar dica"
            items=Signal::derive(move || scholarship.get().tips)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.tips = v))
          />
        </FormSection>

        <FormSection title="Vantagens do Programa">
          <TitledListEditor
            add_label="Adicionar vantagem"
            items=Signal::derive(move || scholarship.get().advantages)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.advantages = v))
          />
        </FormSection>

        <FormSection title="Perguntas Frequentes">
          <FaqEditor
            items=Signal::derive(move || scholarship.get().faq)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.faq = v))
          />
        </FormSection>

        <FormSection title="Considerações Finais">
          <StringListEditor
            multiline=true
            add_label="Adicionar parágrafo"
            items=Signal::derive(move || scholarship.get().final_considerations)
            on_change=Callback::new(commit(scholarship, store, |s, v| s.final_considerations = v))
          />
        </FormSection>

        <FormSection title="Call to Action">
          <TextField
            label="Título"
            value=Signal::derive(move || scholarship.get().cta.title)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.title = v))
          />
          <TextAreaField
            label="Descrição"
            value=Signal::derive(move || scholarship.get().cta.description)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.description = v))
          />
          <TextField
            label="URL de candidatura"
            value=Signal::derive(move || scholarship.get().cta.apply_url)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.apply_url = v))
          />
          <TextField
            label="Texto do botão"
            value=Signal::derive(move || scholarship.get().cta.apply_text)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.apply_text = v))
          />
          <TextField
            label="URL do canal"
            value=Signal::derive(move || scholarship.get().cta.channel_url)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.channel_url = v))
          />
          <TextField
            label="Texto do canal"
            value=Signal::derive(move || scholarship.get().cta.channel_text)
            on_input=Callback::new(commit(scholarship, store, |s, v| s.cta.channel_text = v))
          />
        </FormSection>
      </div>
    }
}
