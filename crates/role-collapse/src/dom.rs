//! Browser Bindings
//!
//! web-sys implementations of the view and storage ports, plus the entry
//! points that attach the controller to rendered markup.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::config::CollapseConfig;
use crate::controller::CollapsibleList;
use crate::store::{MemoryStore, PreferenceStore, StorageError};
use crate::view::{RoleItem, RoleListView};

/// Class added to the document root once the enhancement is registered
const ENHANCED_CLASS: &str = "js";
const COLLAPSED_CLASS: &str = "is-collapsed";
const INDICATOR_CLASS: &str = "chev";
const INDICATOR_GLYPH: &str = "▾";

/// Controller shared with its click listener
pub type SharedList = Rc<RefCell<CollapsibleList<DomRoleList, Box<dyn PreferenceStore>>>>;

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// Storage
// ========================

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails when there is no window or storage is disabled
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Read(js_message(e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read(js_message(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write(js_message(e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write(js_message(e)))
    }
}

/// Local storage when available, otherwise a per-page memory store
fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::debug!("falling back to memory store: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

// ========================
// View
// ========================

/// Role list rendered in the document
pub struct DomRoleList {
    document: Document,
    region: Element,
    toggle: HtmlElement,
    roles: Vec<(u32, HtmlElement)>,
    focus_selector: String,
}

impl DomRoleList {
    /// Query the markup hooks named by `config`.
    ///
    /// Returns None when the region or the toggle is missing. Role elements
    /// without a numeric `data-index` are ignored.
    pub fn query(document: &Document, config: &CollapseConfig) -> Option<Self> {
        let region = document.get_element_by_id(&config.region_id)?;
        let toggle = document
            .query_selector(&config.toggle_selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let mut roles = Vec::new();
        if let Ok(nodes) = document.query_selector_all(&config.role_selector) {
            for i in 0..nodes.length() {
                let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                    continue;
                };
                let index = el.get_attribute("data-index").and_then(|v| parse_index(&v));
                if let Some(index) = index {
                    roles.push((index, el));
                }
            }
        }

        Some(Self {
            document: document.clone(),
            region,
            toggle,
            roles,
            focus_selector: config.focus_selector.clone(),
        })
    }

    pub fn role_items(&self) -> Vec<RoleItem> {
        self.roles
            .iter()
            .map(|(index, el)| RoleItem { index: *index, hidden: el.hidden() })
            .collect()
    }

    pub fn toggle_element(&self) -> &HtmlElement {
        &self.toggle
    }

    fn role(&self, index: u32) -> Option<&HtmlElement> {
        self.roles.iter().find(|(i, _)| *i == index).map(|(_, el)| el)
    }
}

impl RoleListView for DomRoleList {
    fn set_role_hidden(&mut self, index: u32, hidden: bool) {
        for (_, el) in self.roles.iter().filter(|(i, _)| *i == index) {
            el.set_hidden(hidden);
        }
    }

    fn set_region_collapsed(&mut self, collapsed: bool) {
        let classes = self.region.class_list();
        let _ = if collapsed {
            classes.add_1(COLLAPSED_CLASS)
        } else {
            classes.remove_1(COLLAPSED_CLASS)
        };
        let _ = self.region.set_attribute("aria-hidden", if collapsed { "true" } else { "false" });
    }

    fn clear_toggle(&mut self) {
        self.toggle.set_text_content(None);
    }

    fn append_toggle_text(&mut self, text: &str) {
        let _ = self.toggle.append_with_str_1(text);
    }

    fn append_toggle_indicator(&mut self) {
        let Ok(chev) = self.document.create_element("span") else {
            return;
        };
        chev.set_class_name(INDICATOR_CLASS);
        let _ = chev.set_attribute("aria-hidden", "true");
        chev.set_text_content(Some(INDICATOR_GLYPH));
        let _ = self.toggle.append_child(&chev);
    }

    fn set_toggle_expanded(&mut self, expanded: bool) {
        let _ = self.toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
    }

    fn set_toggle_visible(&mut self, visible: bool) {
        self.toggle.set_hidden(!visible);
    }

    fn focus_first_in(&mut self, index: u32) -> bool {
        let target = self
            .role(index)
            .and_then(|role| role.query_selector(&self.focus_selector).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match target {
            Some(el) => el.focus().is_ok(),
            None => false,
        }
    }
}

/// Parse a `data-index` value; anything but a non-negative integer is None
pub fn parse_index(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

// ========================
// Entry Points
// ========================

/// Controller attached to the document.
///
/// Dropping it removes the click listener and releases the controller.
pub struct MountedRoles {
    list: SharedList,
    toggle: HtmlElement,
    on_click: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl MountedRoles {
    pub fn list(&self) -> &SharedList {
        &self.list
    }

    /// Keep the listener for the rest of the page's life
    pub fn leak(self) {
        std::mem::forget(self);
    }
}

impl Drop for MountedRoles {
    fn drop(&mut self) {
        if let Some(on_click) = self.on_click.take() {
            let _ = self
                .toggle
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

/// Attach the controller to the current document.
///
/// Returns None when the page lacks the region or toggle markup; the page
/// then keeps all roles visible.
pub fn mount(config: &CollapseConfig) -> Option<MountedRoles> {
    let document = web_sys::window()?.document()?;
    let Some(view) = DomRoleList::query(&document, config) else {
        log::debug!("collapsible markup missing, enhancement skipped");
        return None;
    };

    let items = view.role_items();
    let toggle = view.toggle_element().clone();
    let list = CollapsibleList::initialize(items, config, view, open_store());
    log::debug!("role list mounted: {} collapsible", list.collapsible_count());

    let list: SharedList = Rc::new(RefCell::new(list));
    let mut on_click = None;
    if !list.borrow().is_inert() {
        let handle = Rc::downgrade(&list);
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            let Some(list) = handle.upgrade() else {
                return;
            };
            if let Ok(mut list) = list.try_borrow_mut() {
                list.toggle();
            };
        });
        let _ = toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        on_click = Some(cb);
    }

    Some(MountedRoles { list, toggle, on_click })
}

/// Add the root marker class used by CSS to detect the enhancement
pub fn mark_enhanced(document: &Document) {
    if let Some(root) = document.document_element() {
        let _ = root.class_list().add_1(ENHANCED_CLASS);
    }
}

/// Entry point for static pages: mark the document and mount with the
/// default configuration once the DOM is ready.
#[wasm_bindgen(js_name = registerRoleCollapse)]
pub fn register() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    mark_enhanced(&document);

    if document.ready_state() != "loading" {
        if let Some(mounted) = mount(&CollapseConfig::default()) {
            mounted.leak();
        }
        return;
    }

    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(mounted) = mount(&CollapseConfig::default()) {
            mounted.leak();
        }
    });
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("4"), Some(4));
        assert_eq!(parse_index(" 5 "), Some(5));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("x"), None);
        assert_eq!(parse_index("2.5"), None);
        assert_eq!(parse_index(""), None);
    }
}
