/// Stock alerts listed in the notification dropdown.
pub const ALERTS: [&str; 3] = [
    "Printer Cartridge is out of stock",
    "Wireless Mouse is almost out of stock",
    "USB-C Cable is almost out of stock",
];

/// Notification dropdown. The panel content is built on first use and kept.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    panel: Option<Vec<String>>,
    open: bool,
}

impl NotificationState {
    pub fn badge_count(&self) -> usize {
        ALERTS.len()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_built(&self) -> bool {
        self.panel.is_some()
    }

    /// Panel items, once built.
    pub fn items(&self) -> &[String] {
        self.panel.as_deref().unwrap_or_default()
    }

    fn ensure_built(&mut self) {
        if self.panel.is_none() {
            self.panel = Some(ALERTS.iter().map(|s| s.to_string()).collect());
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Bell click: build the panel if needed, close any open panel, reopen if it was closed.
    pub fn toggle(&mut self) -> bool {
        self.ensure_built();
        let was_open = self.open;
        self.close();
        if !was_open {
            self.open = true;
        }
        self.open
    }

    /// Page-level click that was not stopped by the bell.
    pub fn handle_page_click(&mut self, in_subtree: bool) {
        if self.open && !in_subtree {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_build() {
        let mut state = NotificationState::default();
        assert!(!state.is_built());
        assert!(state.items().is_empty());
        state.toggle();
        assert!(state.is_built());
        assert_eq!(state.items(), ALERTS.map(String::from).as_slice());
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut state = NotificationState::default();
        assert!(state.toggle());
        assert!(!state.toggle());
        assert!(!state.is_open());
        assert!(state.is_built());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut state = NotificationState::default();
        state.toggle();
        state.handle_page_click(true);
        assert!(state.is_open());
        state.handle_page_click(false);
        assert!(!state.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut state = NotificationState::default();
        state.handle_page_click(false);
        assert!(!state.is_open());
        assert!(!state.is_built());
    }

    #[test]
    fn test_badge() {
        assert_eq!(NotificationState::default().badge_count(), 3);
    }
}
