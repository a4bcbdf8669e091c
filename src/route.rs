//! Routes
//!
//! Three pages selected from the URL path.

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Career,
    Skills,
}

impl Page {
    /// Unknown paths fall back to Home
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/career" => Page::Career,
            "/skills" => Page::Skills,
            _ => Page::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Career => "/career",
            Page::Skills => "/skills",
        }
    }
}

/// Page for the current browser location
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::Home)
}

/// Push a history entry for `page`
pub fn push_history(page: Page) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(page.path())) {
        log::debug!("pushState failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/career"), Page::Career);
        assert_eq!(Page::from_path("/career/"), Page::Career);
        assert_eq!(Page::from_path("/skills"), Page::Skills);
        assert_eq!(Page::from_path("/nowhere"), Page::Home);
    }

    #[test]
    fn test_path_roundtrip() {
        for page in [Page::Home, Page::Career, Page::Skills] {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
