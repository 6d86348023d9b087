//! Full-screen loading overlay.

use crate::config::LoaderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub enum LoaderPhase {
    /// Shown until the page has loaded.
    #[default]
    Spinning,
    /// Fading out.
    Fading,
    /// Removed from the page.
    Gone,
}

impl LoaderPhase {
    /// Next phase and the delay before entering it, once the page loaded.
    pub fn next(&self, config: &LoaderConfig) -> Option<(LoaderPhase, u32)> {
        match self {
            LoaderPhase::Spinning => Some((LoaderPhase::Fading, config.hold_ms)),
            LoaderPhase::Fading => Some((LoaderPhase::Gone, config.fade_ms)),
            LoaderPhase::Gone => None,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LoaderPhase::Spinning => "loading",
            LoaderPhase::Fading | LoaderPhase::Gone => "loading hidden",
        }
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self, LoaderPhase::Gone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_run_to_completion() {
        let config = LoaderConfig::default();
        let mut phase = LoaderPhase::default();
        let mut elapsed = 0;
        while let Some((next, delay)) = phase.next(&config) {
            elapsed += delay;
            phase = next;
        }
        assert_eq!(phase, LoaderPhase::Gone);
        assert_eq!(elapsed, 1500);
        assert!(!phase.is_mounted());
    }

    #[test]
    fn fading_uses_hidden_class() {
        assert_eq!(LoaderPhase::Fading.class(), "loading hidden");
        assert!(LoaderPhase::Fading.is_mounted());
    }
}
