//! Portfolio Frontend Entry Point

mod app;
mod components;
mod context;
mod data;
mod logging;
mod models;
mod pages;
mod route;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        role_collapse::dom::mark_enhanced(&document);
    }
    mount_to_body(App);
}
