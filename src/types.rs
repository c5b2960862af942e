use crate::constants::{NAV_HIDE_DELAY_MS, SCROLL_GUTTER_ROWS};

/// Which visibility policy governs the fixed navbar.
///
/// Exactly one policy is active per run; the two are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarPolicy {
    /// Show on pointer movement, hide after an inactivity timeout
    AutoHide,
    /// Keep shown and reserve layout space below the navbar instead
    AlwaysVisible,
}

impl NavbarPolicy {
    /// Parse a policy name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto-hide" => Some(NavbarPolicy::AutoHide),
            "always-visible" => Some(NavbarPolicy::AlwaysVisible),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub navbar_policy: NavbarPolicy,
    pub hide_delay_ms: u64,
    pub scroll_gutter: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            navbar_policy: NavbarPolicy::AutoHide,
            hide_delay_ms: NAV_HIDE_DELAY_MS,
            scroll_gutter: SCROLL_GUTTER_ROWS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Normal,
    Help,
    AckPopup(String),
}
