//! Role List View
//!
//! Side-effect port mirroring controller state onto rendered markup.

/// One rendered role, identified by its declared order index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleItem {
    pub index: u32,
    pub hidden: bool,
}

impl RoleItem {
    pub fn new(index: u32) -> Self {
        Self { index, hidden: false }
    }
}

/// Operations the controller performs on the rendered list.
///
/// Implementations only mirror state; they never decide it.
pub trait RoleListView {
    /// Remove a role from (or restore it to) the layout and tab order
    fn set_role_hidden(&mut self, index: u32, hidden: bool);

    /// Mark the collapsible region collapsed for styling and assistive tech
    fn set_region_collapsed(&mut self, collapsed: bool);

    /// Drop all toggle content, including any indicator
    fn clear_toggle(&mut self);

    fn append_toggle_text(&mut self, text: &str);

    /// Append the decorative chevron after the label
    fn append_toggle_indicator(&mut self);

    fn set_toggle_expanded(&mut self, expanded: bool);

    /// Show or hide the toggle control itself
    fn set_toggle_visible(&mut self, visible: bool);

    /// Focus the first focusable element inside a role.
    /// Returns whether anything received focus.
    fn focus_first_in(&mut self, index: u32) -> bool;
}
