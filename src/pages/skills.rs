//! Skills Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NavLink, SkillCard};
use crate::data::load_skills;
use crate::models::SkillEntry;
use crate::route::Page;
use crate::store::{is_open, toggle_open};

#[component]
pub fn SkillsPage() -> impl IntoView {
    let (skills, set_skills) = signal(Vec::<SkillEntry>::new());
    let (open_cards, set_open_cards) = signal(Vec::<usize>::new());
    let (loading, set_loading) = signal(true);

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let data = load_skills().await;
            set_skills.set(data);
            set_loading.set(false);
        });
    });

    view! {
        <main class="container">
            <div class="content">
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <NavLink to=Page::Home class="back-link">"← Home"</NavLink>

                    <h1 class="page-title">"Skills"</h1>

                    <section class="cards-section">
                        <Show
                            when=move || !skills.with(|s| s.is_empty())
                            fallback=|| view! { <p>"No skills found."</p> }
                        >
                            <For
                                each=move || skills.get()
                                key=|skill| skill.id
                                children=move |skill| {
                                    let id = skill.id;
                                    view! {
                                        <SkillCard
                                            entry=skill
                                            is_open=Signal::derive(move || open_cards.with(|open| is_open(open, id)))
                                            on_toggle=move |_| set_open_cards.update(|open| toggle_open(open, id))
                                        />
                                    }
                                }
                            />
                        </Show>
                    </section>
                </Show>
            </div>
        </main>
    }
}
