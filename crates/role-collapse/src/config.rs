//! Controller Configuration

/// Number of roles always shown when the enhancement is active
pub const MAX_VISIBLE: u32 = 4;

/// Local storage key holding the "expanded" preference
pub const STORAGE_KEY: &str = "resume:experience:expanded";

/// Markup hooks and thresholds for one collapsible role list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseConfig {
    /// Roles with an index below this stay visible
    pub max_visible: u32,
    /// Storage key for the persisted preference
    pub storage_key: String,
    /// Element id of the collapsible region
    pub region_id: String,
    /// Selector matching every role item
    pub role_selector: String,
    /// Selector matching the toggle control
    pub toggle_selector: String,
    /// Selector for the element focused when the list expands
    pub focus_selector: String,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            max_visible: MAX_VISIBLE,
            storage_key: STORAGE_KEY.to_string(),
            region_id: "older-roles".to_string(),
            role_selector: ".role".to_string(),
            toggle_selector: ".collapse-toggle".to_string(),
            focus_selector: "h3, a, button, [tabindex]".to_string(),
        }
    }
}

impl CollapseConfig {
    pub fn with_max_visible(mut self, max_visible: u32) -> Self {
        self.max_visible = max_visible;
        self
    }
}
