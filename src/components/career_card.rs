//! Career Card Component
//!
//! Expandable card for one career entry.

use leptos::prelude::*;

use crate::models::CareerEntry;

/// Header button toggles the description body
#[component]
pub fn CareerCard(
    entry: CareerEntry,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let heading = entry.heading();
    let period = entry.period();
    let description = entry.description;

    view! {
        <article class="card">
            <button
                class="card-header"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                <div class="header-content">
                    <h3 class="card-title">{heading}</h3>
                    <p class="card-subtitle">{period}</p>
                </div>
            </button>
            <Show when=move || is_open.get()>
                <div class="card-content">
                    <p class="card-description">{description.clone()}</p>
                </div>
            </Show>
        </article>
    }
}
