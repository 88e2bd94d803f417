//! Live preview pane.
//!
//! Both views consume the rendered document read-only: the preview tab loads
//! it into a sandboxed iframe via `srcdoc`, the code tab shows the markup
//! verbatim. One renderer feeds both, so the preview can never drift from
//! the exported file.

use leptos::prelude::*;

/// Which face of the preview is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreviewMode {
    Rendered,
    Markup,
}

/// Preview pane with a rendered/markup toggle.
#[component]
pub fn PreviewPane(
    /// The generated document.
    #[prop(into)]
    html: Signal<String>,
) -> impl IntoView {
    let mode = RwSignal::new(PreviewMode::Rendered);

    view! {
      <div class="preview-pane">
        <div class="preview-toolbar">
          <span class="preview-title">"Preview em Tempo Real"</span>
          <div class="preview-toggle">
            <button
              class:active=move || mode.get() == PreviewMode::Rendered
              on:click=move |_| mode.set(PreviewMode::Rendered)
            >
              "Preview"
            </button>
            <button
              class:active=move || mode.get() == PreviewMode::Markup
              on:click=move |_| mode.set(PreviewMode::Markup)
            >
              "Código"
            </button>
          </div>
        </div>
        <Show
          when=move || mode.get() == PreviewMode::Rendered
          fallback=move || {
            view! { <pre class="preview-code">{move || html.get()}</pre> }
          }
        >
          <iframe
            class="preview-frame"
            title="Pré-visualização da página"
            srcdoc=move || html.get()
          ></iframe>
        </Show>
      </div>
    }
}
