//! Skill Card Component

use leptos::prelude::*;

use crate::models::SkillEntry;

/// Expandable skill card; the body only appears when there is a description
#[component]
pub fn SkillCard(
    entry: SkillEntry,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let has_description = entry.has_description();
    let skill = entry.skill;
    let description = entry.description;

    view! {
        <article class="card">
            <button
                class="card-header"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                <h3 class="card-title">{skill}</h3>
            </button>
            <Show when=move || has_description && is_open.get()>
                <div class="card-content">
                    <p class="card-description">{description.clone()}</p>
                </div>
            </Show>
        </article>
    }
}
