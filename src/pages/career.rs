//! Career Page
//!
//! Loads career.csv once per visit and renders it as a collapsible role list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NavLink, RoleList};
use crate::data::load_career;
use crate::models::CareerEntry;
use crate::route::Page;

#[component]
pub fn CareerPage() -> impl IntoView {
    let (careers, set_careers) = signal(Vec::<CareerEntry>::new());
    let (loading, set_loading) = signal(true);

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let data = load_career().await;
            set_careers.set(data);
            set_loading.set(false);
        });
    });

    view! {
        <main class="container">
            <div class="content">
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <NavLink to=Page::Home class="back-link">"← Home"</NavLink>

                    <h1 class="page-title">"Career"</h1>

                    <section class="cards-section">
                        {move || {
                            let entries = careers.get();
                            if entries.is_empty() {
                                view! { <p>"No career entries found."</p> }.into_any()
                            } else {
                                view! { <RoleList entries=entries /> }.into_any()
                            }
                        }}
                    </section>
                </Show>
            </div>
        </main>
    }
}
