//! Portfolio App
//!
//! Root component: picks the page from the URL and keeps it in sync with
//! browser history.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::pages::{CareerPage, HomePage, SkillsPage};
use crate::route::{current_page, Page};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(current_page());
    let ctx = AppContext::new((page, set_page));
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.restore(current_page());
    });

    view! {
        {move || match page.get() {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::Career => view! { <CareerPage /> }.into_any(),
            Page::Skills => view! { <SkillsPage /> }.into_any(),
        }}
    }
}
