//! Navigation Link Component
//!
//! In-app link that switches pages without a reload.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Page;

/// Anchor to another page; plain href keeps middle-click and no-JS working
#[component]
pub fn NavLink(
    to: Page,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
