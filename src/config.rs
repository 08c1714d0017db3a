//! Page configuration
//!
//! Defaults match the sidebar markup of the MkDocs bootstrap themes.

use log::LevelFilter;
use serde::Deserialize;

use crate::collapser::overflows;
use crate::error::{NavError, NavResult};

/// Selectors and class names used to read and update the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Navigation container, checked for overflow
    pub sidenav_selector: String,
    /// Navigation items, in document order
    pub item_selector: String,
    /// Class marking an item as a section header
    pub header_class: String,
    /// Class added to the selected header
    pub selected_class: String,
    /// Scrollspy marker, looked up inside the container
    pub active_class: String,
    /// Links in the page content that should resync the sidebar
    pub content_link_selector: String,
    /// Leave short, non-scrolling sidebars untouched
    pub require_overflow: bool,
    /// Console log threshold: off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sidenav_selector: "ul.nav.bs-sidenav".to_string(),
            item_selector: ".nav-item".to_string(),
            header_class: "main".to_string(),
            selected_class: "at-selected".to_string(),
            active_class: "active".to_string(),
            content_link_selector: ".col-md-9 a".to_string(),
            require_overflow: true,
            log_level: "warn".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> NavResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that could never match anything
    pub fn validate(&self) -> NavResult<()> {
        let required = [
            ("sidenav_selector", &self.sidenav_selector),
            ("item_selector", &self.item_selector),
            ("header_class", &self.header_class),
            ("selected_class", &self.selected_class),
            ("active_class", &self.active_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(NavError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> NavResult<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| NavError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }

    /// Whether a sidebar with these dimensions should be collapsed.
    ///
    /// With `require_overflow`, a sidebar that fits keeps its default,
    /// fully expanded presentation and no listener is installed.
    pub fn applies_to(&self, scroll_height: i32, client_height: i32) -> bool {
        !self.require_overflow || overflows(scroll_height, client_height)
    }

    /// Selector for the scrollspy marker inside the container
    pub fn active_selector(&self) -> String {
        format!(".{}", self.active_class)
    }
}
