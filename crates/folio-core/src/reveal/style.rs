//! Inline style declarations for the two visual states.

/// A single `property: value` pair written to an element's inline style.
pub type StyleDecl = (&'static str, String);

/// Easing shared by every reveal transition.
pub const DEFAULT_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

/// Vertical offset of a hidden element, in pixels.
pub const DEFAULT_OFFSET_PX: u32 = 30;

/// How hidden and shown elements look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStyle {
    pub offset_px: u32,
    pub transition: String,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            offset_px: DEFAULT_OFFSET_PX,
            transition: DEFAULT_TRANSITION.to_string(),
        }
    }
}

impl RevealStyle {
    /// Declarations for the hidden state, including the transition so the
    /// later switch to shown animates.
    pub fn hidden(&self) -> Vec<StyleDecl> {
        vec![
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.offset_px)),
            ("transition", self.transition.clone()),
        ]
    }

    /// Declarations for a cascading child's hidden state.
    pub fn hidden_child(&self) -> Vec<StyleDecl> {
        self.hidden()
    }

    pub fn shown(&self) -> Vec<StyleDecl> {
        vec![
            ("opacity", "1".to_string()),
            ("transform", "translateY(0)".to_string()),
        ]
    }

    /// Shown declarations plus a transition delay (omitted when zero).
    pub fn shown_after(&self, transition_delay_ms: u32) -> Vec<StyleDecl> {
        let mut decls = self.shown();
        if transition_delay_ms > 0 {
            decls.push(("transition-delay", format!("{}ms", transition_delay_ms)));
        }
        decls
    }
}
