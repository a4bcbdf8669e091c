//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::route::{push_history, Page};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() == page {
            return;
        }
        push_history(page);
        self.set_page.set(page);
    }

    /// Sync with the location after back/forward navigation
    pub fn restore(&self, page: Page) {
        self.set_page.set(page);
    }
}
