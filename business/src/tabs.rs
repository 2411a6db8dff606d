//! Tab bar state: one active tab, one visible panel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("unknown tab `{0}`")]
    UnknownTab(String),
    #[error("tab targets panel `{0}`, which is not on the page")]
    MissingPanel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tab {
    panel: String,
    panel_present: bool,
}

/// Tabs in page order, each naming the panel it shows (`data-tab`).
#[derive(Debug, Clone, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tab. `panel_present` tells whether its target panel exists.
    pub fn push(&mut self, panel: impl Into<String>, panel_present: bool) {
        self.tabs.push(Tab {
            panel: panel.into(),
            panel_present,
        });
    }

    /// Panel of the active tab, if any tab was activated.
    pub fn active_panel(&self) -> Option<&str> {
        self.active.map(|index| self.tabs[index].panel.as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Activate the tab at `index`, deactivating all others.
    ///
    /// When the target panel is missing nothing changes.
    pub fn activate(&mut self, index: usize) -> Result<&str, TabError> {
        let tab = self
            .tabs
            .get(index)
            .ok_or_else(|| TabError::UnknownTab(index.to_string()))?;

        if !tab.panel_present {
            return Err(TabError::MissingPanel(tab.panel.clone()));
        }

        self.active = Some(index);
        Ok(self.tabs[index].panel.as_str())
    }
}
