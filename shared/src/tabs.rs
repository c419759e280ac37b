//! Tab selection model
//!
//! Selectors name the panel they reveal. Activating a selector hides every
//! panel, resets every selector, then reveals the one target panel and marks
//! the clicked selector active. The model only tracks which target is shown;
//! the browser applies [`TabSet::panel_states`] and
//! [`TabSet::selector_states`] to the DOM.

/// Classes a selector carries while active
pub const ACTIVE_SELECTOR_CLASSES: [&str; 2] = ["bg-green-600", "text-white"];

/// Classes a selector carries while inactive
pub const INACTIVE_SELECTOR_CLASSES: [&str; 2] = ["bg-gray-200", "text-gray-800"];

/// Class that hides a content panel
pub const HIDDEN_PANEL_CLASS: &str = "hidden";

/// Visibility of one content panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub id: String,
    pub visible: bool,
}

/// Visual state of one selector control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    /// Panel id named by the selector
    pub target: String,
    pub active: bool,
}

/// Known panels and selectors, plus the selector currently active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    panels: Vec<String>,
    selectors: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// `selectors` lists each selector's target in document order
    pub fn new(panels: Vec<String>, selectors: Vec<String>) -> Self {
        Self {
            panels,
            selectors,
            active: None,
        }
    }

    /// Index of the active selector, if any has been clicked
    pub fn active_selector(&self) -> Option<usize> {
        self.active
    }

    /// Target panel of the active selector
    pub fn active_panel(&self) -> Option<&str> {
        self.active.map(|i| self.selectors[i].as_str())
    }

    /// Handle a click on the selector at `index`
    ///
    /// Returns `false` and leaves the state untouched when the index is out
    /// of range or the selector names a panel that does not exist.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(target) = self.selectors.get(index) else {
            return false;
        };
        if !self.panels.iter().any(|p| p == target) {
            tracing::debug!("Tab target {} has no panel", target);
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Visibility of every panel after the last click
    pub fn panel_states(&self) -> Vec<PanelState> {
        let shown = self.active_panel();
        self.panels
            .iter()
            .map(|id| PanelState {
                id: id.clone(),
                visible: shown == Some(id.as_str()),
            })
            .collect()
    }

    /// Active flag of every selector after the last click
    pub fn selector_states(&self) -> Vec<SelectorState> {
        self.selectors
            .iter()
            .enumerate()
            .map(|(i, target)| SelectorState {
                target: target.clone(),
                active: self.active == Some(i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_set() -> TabSet {
        TabSet::new(
            vec!["recommend".into(), "history".into(), "about".into()],
            vec!["recommend".into(), "history".into(), "about".into()],
        )
    }

    #[test]
    fn test_activate_reveals_only_target() {
        let mut tabs = tab_set();
        assert!(tabs.activate(1));

        let visible: Vec<String> = tabs
            .panel_states()
            .into_iter()
            .filter(|p| p.visible)
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, ["history"]);
        assert_eq!(tabs.active_panel(), Some("history"));
        assert_eq!(tabs.active_selector(), Some(1));
    }

    #[test]
    fn test_activate_twice_is_noop() {
        let mut tabs = tab_set();
        tabs.activate(2);
        let once = tabs.clone();
        tabs.activate(2);
        assert_eq!(tabs, once);
    }

    #[test]
    fn test_unknown_target_keeps_state() {
        let mut tabs = TabSet::new(
            vec!["recommend".into()],
            vec!["recommend".into(), "missing".into()],
        );
        tabs.activate(0);
        assert!(!tabs.activate(1));
        assert!(!tabs.activate(7));
        assert_eq!(tabs.active_panel(), Some("recommend"));
    }

    #[test]
    fn test_no_click_no_active() {
        let tabs = tab_set();
        assert!(tabs.selector_states().iter().all(|s| !s.active));
        assert!(tabs.panel_states().iter().all(|p| !p.visible));
    }
}
