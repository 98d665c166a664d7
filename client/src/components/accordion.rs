//! Accordion rows and the single-open group that drives them.

use leptos::prelude::*;

use crate::content::practice::AccordionEntry;
use crate::state::accordion::AccordionState;

/// One expandable row. Fully controlled: it renders `is_open` and reports
/// clicks through `on_toggle`.
#[component]
pub fn AccordionItem(entry: AccordionEntry, #[prop(into)] is_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <div class="accordion-item" class:accordion-item--open=move || is_open.get()>
            <button
                class="accordion-item__header"
                type="button"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                <span class="accordion-item__title">{entry.title}</span>
                <span class="accordion-item__icon" aria-hidden="true">
                    {move || if is_open.get() { "−" } else { "+" }}
                </span>
            </button>
            <div class="accordion-item__panel" aria-hidden=move || if is_open.get() { "false" } else { "true" }>
                <p class="accordion-item__answer">{entry.answer}</p>
            </div>
        </div>
    }
}

/// Render `entries` as rows of one group sharing `state`.
#[component]
pub fn AccordionGroup(entries: &'static [AccordionEntry], state: RwSignal<AccordionState>) -> impl IntoView {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_open = Signal::derive(move || state.with(|s| s.is_open(index)));
            let on_toggle = Callback::new(move |()| state.update(|s| s.toggle(index)));
            view! { <AccordionItem entry=*entry is_open on_toggle/> }
        })
        .collect_view()
}
