//! Mobile navigation menu.

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu from the toggle button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu, e.g. after a nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Font Awesome icon for the toggle button.
    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_icon() {
        let mut menu = MenuState::default();
        assert_eq!(menu.icon_class(), "fas fa-bars");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon_class(), "fas fa-times");
        assert_eq!(menu.links_class(), "nav-links active");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.icon_class(), "fas fa-bars");
    }
}
