//! Collapsible List Controller
//!
//! Two-state machine (collapsed / expanded) over the roles whose index is at
//! or beyond the visibility threshold. State lives here; the view and the
//! store only mirror it.

use crate::config::CollapseConfig;
use crate::store::{read_preference, write_preference, PreferenceStore};
use crate::view::{RoleItem, RoleListView};

/// Visibility of the collapsible roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Collapsed,
    Expanded,
}

impl ListState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            ListState::Expanded
        } else {
            ListState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ListState::Expanded
    }

    pub fn flipped(self) -> Self {
        match self {
            ListState::Collapsed => ListState::Expanded,
            ListState::Expanded => ListState::Collapsed,
        }
    }
}

/// Toggle label for a state
pub fn toggle_label(state: ListState, hidden_count: usize) -> String {
    match state {
        ListState::Collapsed => format!("Show {} more", hidden_count),
        ListState::Expanded => "Show less".to_string(),
    }
}

/// Show/hide controller for older roles
pub struct CollapsibleList<V, S> {
    view: V,
    store: S,
    storage_key: String,
    max_visible: u32,
    /// Sorted by index
    roles: Vec<RoleItem>,
    /// None when nothing is collapsible
    state: Option<ListState>,
}

impl<V: RoleListView, S: PreferenceStore> CollapsibleList<V, S> {
    /// Partition the roles, read the stored preference and apply the
    /// initial state.
    ///
    /// With no role at or beyond `max_visible` the toggle is hidden and the
    /// controller stays inert for its whole lifetime.
    pub fn initialize(mut roles: Vec<RoleItem>, config: &CollapseConfig, view: V, store: S) -> Self {
        roles.sort_by_key(|role| role.index);

        let mut list = Self {
            view,
            store,
            storage_key: config.storage_key.clone(),
            max_visible: config.max_visible,
            roles,
            state: None,
        };

        if list.collapsible_count() == 0 {
            log::debug!("no roles beyond {}, toggle disabled", list.max_visible);
            list.view.set_toggle_visible(false);
            return list;
        }

        let expanded = read_preference(&list.store, &list.storage_key);
        list.apply_state(ListState::from_expanded(expanded));
        list
    }

    /// Current state, or None when inert
    pub fn state(&self) -> Option<ListState> {
        self.state
    }

    pub fn is_inert(&self) -> bool {
        self.state.is_none()
    }

    pub fn roles(&self) -> &[RoleItem] {
        &self.roles
    }

    pub fn always_visible(&self) -> impl Iterator<Item = &RoleItem> + '_ {
        let max_visible = self.max_visible;
        self.roles.iter().filter(move |role| role.index < max_visible)
    }

    pub fn collapsible(&self) -> impl Iterator<Item = &RoleItem> + '_ {
        let max_visible = self.max_visible;
        self.roles.iter().filter(move |role| role.index >= max_visible)
    }

    pub fn collapsible_count(&self) -> usize {
        self.collapsible().count()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mirror `state` onto the roles, region and toggle.
    ///
    /// Entering `Expanded` always moves focus into the first collapsible
    /// role, including the first application during `initialize`.
    pub fn apply_state(&mut self, state: ListState) {
        let hidden_count = self.collapsible_count();
        if hidden_count == 0 {
            return;
        }

        let collapse = !state.is_expanded();
        let max_visible = self.max_visible;
        for role in self.roles.iter_mut().filter(|role| role.index >= max_visible) {
            role.hidden = collapse;
            self.view.set_role_hidden(role.index, collapse);
        }

        self.view.set_region_collapsed(collapse);
        self.set_label(state, hidden_count);
        self.view.set_toggle_expanded(state.is_expanded());
        self.state = Some(state);

        if state.is_expanded() {
            let first = self.collapsible().next().map(|role| role.index);
            if let Some(first) = first {
                if !self.view.focus_first_in(first) {
                    log::debug!("role {first} has nothing focusable");
                }
            }
        }
    }

    /// Flip the state and persist it. Returns the new state, or None when
    /// the controller is inert.
    pub fn toggle(&mut self) -> Option<ListState> {
        let next = self.state?.flipped();
        self.apply_state(next);
        write_preference(&self.store, &self.storage_key, next.is_expanded());
        Some(next)
    }

    fn set_label(&mut self, state: ListState, hidden_count: usize) {
        self.view.clear_toggle();
        self.view.append_toggle_text(&toggle_label(state, hidden_count));
        self.view.append_toggle_indicator();
    }
}
