//! Form building blocks for the studio editor.
//!
//! Sections are collapsible; list editors address elements by position and
//! route every edit through the collection operations in
//! [`bolseiro_core::collection`], emitting the whole new sequence.

use bolseiro_core::collection::{append, remove_at, update_at};
use bolseiro_core::{FaqEntry, TimelineEntry, TitledItem};
use leptos::prelude::*;

/// Collapsible form section with a heading.
#[component]
pub fn FormSection(
    /// Section heading.
    #[prop(into)]
    title: String,
    /// Whether the section starts expanded.
    #[prop(default = false)]
    open: bool,
    children: Children,
) -> impl IntoView {
    let expanded = RwSignal::new(open);

    view! {
      <section class="form-section">
        <button class="form-section-title" on:click=move |_| expanded.update(|v| *v = !*v)>
          <span class="form-section-label">{title}</span>
          <span class="form-section-chevron">{move || if expanded.get() { "▴" } else { "▾" }}</span>
        </button>
        <div class="form-section-body" class:hidden=move || !expanded.get()>{children()}</div>
      </section>
    }
}

/// Labelled single-line text input.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, default = String::new())] placeholder: String,
) -> impl IntoView {
    view! {
      <div class="field">
        <label class="field-label">{label}</label>
        <input
          type="text"
          class="field-input"
          placeholder=placeholder
          prop:value=move || value.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        />
      </div>
    }
}

/// Labelled multi-line text input.
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, default = String::new())] placeholder: String,
    #[prop(default = 2)] rows: i32,
) -> impl IntoView {
    view! {
      <div class="field">
        <label class="field-label">{label}</label>
        <textarea
          class="field-input"
          placeholder=placeholder
          rows=rows
          prop:value=move || value.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
      </div>
    }
}

/// Labelled checkbox.
#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
      <label class="field field-checkbox">
        <input
          type="checkbox"
          prop:checked=move || value.get()
          on:change=move |ev| on_toggle.run(event_target_checked(&ev))
        />
        <span class="field-label">{label}</span>
      </label>
    }
}

/// Editor for an ordered sequence of strings.
#[component]
pub fn StringListEditor(
    #[prop(into)] items: Signal<Vec<String>>,
    /// Receives the whole replacement sequence on every edit.
    #[prop(into)]
    on_change: Callback<Vec<String>>,
    #[prop(into, default = "Adicionar item".to_string())] add_label: String,
    #[prop(default = false)] multiline: bool,
) -> impl IntoView {
    view! {
      <div class="list-editor">
        <For
          each={move || (0..items.get().len()).collect::<Vec<_>>()}
          key=|index| *index
          children=move |index| {
            // Position-keyed rows: the value is re-read from the sequence so
            // removals keep the remaining rows in sync.
            let value = Signal::derive(move || {
              items.get().get(index).cloned().unwrap_or_default()
            });
            let edit = move |text: String| {
              on_change.run(update_at(&items.get_untracked(), index, text));
            };
            view! {
              <div class="list-row">
                {if multiline {
                  view! {
                    <textarea
                      class="field-input"
                      rows=2
                      prop:value=move || value.get()
                      on:input=move |ev| edit(event_target_value(&ev))
                    ></textarea>
                  }
                    .into_any()
                } else {
                  view! {
                    <input
                      type="text"
                      class="field-input"
                      prop:value=move || value.get()
                      on:input=move |ev| edit(event_target_value(&ev))
                    />
                  }
                    .into_any()
                }}
                <button
                  class="list-remove"
                  aria-label="Remover"
                  on:click=move |_| on_change.run(remove_at(&items.get_untracked(), index))
                >
                  "×"
                </button>
              </div>
            }
          }
        />
        <button
          class="list-add"
          on:click=move |_| on_change.run(append(&items.get_untracked(), String::new()))
        >
          "+ " {add_label.clone()}
        </button>
      </div>
    }
}

/// Editor for title/description record sequences (coverage, advantages).
#[component]
pub fn TitledListEditor(
    #[prop(into)] items: Signal<Vec<TitledItem>>,
    #[prop(into)] on_change: Callback<Vec<TitledItem>>,
    #[prop(into, default = "Adicionar item".to_string())] add_label: String,
) -> impl IntoView {
    view! {
      <div class="list-editor">
        <For
          each={move || (0..items.get().len()).collect::<Vec<_>>()}
          key=|index| *index
          children=move |index| {
            let item = Signal::derive(move || {
              items.get().get(index).cloned().unwrap_or_default()
            });
            view! {
              <div class="list-row list-row-pair">
                <input
                  type="text"
                  class="field-input"
                  placeholder="Título"
                  prop:value=move || item.get().title
                  on:input=move |ev| {
                    let next = TitledItem {
                      title: event_target_value(&ev),
                      ..item.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                />
                <input
                  type="text"
                  class="field-input"
                  placeholder="Descrição"
                  prop:value=move || item.get().description
                  on:input=move |ev| {
                    let next = TitledItem {
                      description: event_target_value(&ev),
                      ..item.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                />
                <button
                  class="list-remove"
                  aria-label="Remover"
                  on:click=move |_| on_change.run(remove_at(&items.get_untracked(), index))
                >
                  "×"
                </button>
              </div>
            }
          }
        />
        <button
          class="list-add"
          on:click=move |_| on_change.run(append(&items.get_untracked(), TitledItem::default()))
        >
          "+ " {add_label.clone()}
        </button>
      </div>
    }
}

/// Editor for the timeline table rows.
#[component]
pub fn TimelineEditor(
    #[prop(into)] items: Signal<Vec<TimelineEntry>>,
    #[prop(into)] on_change: Callback<Vec<TimelineEntry>>,
) -> impl IntoView {
    view! {
      <div class="list-editor">
        <For
          each={move || (0..items.get().len()).collect::<Vec<_>>()}
          key=|index| *index
          children=move |index| {
            let entry = Signal::derive(move || {
              items.get().get(index).cloned().unwrap_or_default()
            });
            view! {
              <div class="list-row list-row-pair">
                <input
                  type="text"
                  class="field-input"
                  placeholder="Etapa"
                  prop:value=move || entry.get().stage
                  on:input=move |ev| {
                    let next = TimelineEntry {
                      stage: event_target_value(&ev),
                      ..entry.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                />
                <input
                  type="text"
                  class="field-input"
                  placeholder="Data"
                  prop:value=move || entry.get().date
                  on:input=move |ev| {
                    let next = TimelineEntry {
                      date: event_target_value(&ev),
                      ..entry.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                />
                <button
                  class="list-remove"
                  aria-label="Remover"
                  on:click=move |_| on_change.run(remove_at(&items.get_untracked(), index))
                >
                  "×"
                </button>
              </div>
            }
          }
        />
        <button
          class="list-add"
          on:click=move |_| on_change.run(append(&items.get_untracked(), TimelineEntry::default()))
        >
          "+ Adicionar etapa"
        </button>
      </div>
    }
}

/// Editor for the FAQ entries.
#[component]
pub fn FaqEditor(
    #[prop(into)] items: Signal<Vec<FaqEntry>>,
    #[prop(into)] on_change: Callback<Vec<FaqEntry>>,
) -> impl IntoView {
    view! {
      <div class="list-editor">
        <For
          each={move || (0..items.get().len()).collect::<Vec<_>>()}
          key=|index| *index
          children=move |index| {
            let entry = Signal::derive(move || {
              items.get().get(index).cloned().unwrap_or_default()
            });
            view! {
              <div class="list-row list-row-stacked">
                <input
                  type="text"
                  class="field-input"
                  placeholder="Pergunta"
                  prop:value=move || entry.get().question
                  on:input=move |ev| {
                    let next = FaqEntry {
                      question: event_target_value(&ev),
                      ..entry.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                />
                <textarea
                  class="field-input"
                  rows=2
                  placeholder="Resposta"
                  prop:value=move || entry.get().answer
                  on:input=move |ev| {
                    let next = FaqEntry {
                      answer: event_target_value(&ev),
                      ..entry.get_untracked()
                    };
                    on_change.run(update_at(&items.get_untracked(), index, next));
                  }
                ></textarea>
                <button
                  class="list-remove"
                  aria-label="Remover"
                  on:click=move |_| on_change.run(remove_at(&items.get_untracked(), index))
                >
                  "×"
                </button>
              </div>
            }
          }
        />
        <button
          class="list-add"
          on:click=move |_| on_change.run(append(&items.get_untracked(), FaqEntry::default()))
        >
          "+ Adicionar pergunta"
        </button>
      </div>
    }
}
