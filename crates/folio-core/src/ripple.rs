//! Click ripple geometry.

use crate::reveal::StyleDecl;

/// Bounding box of the clicked element, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A ripple circle positioned inside the clicked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    /// Offset from the element's left edge.
    pub x: f64,
    /// Offset from the element's top edge.
    pub y: f64,
}

impl Ripple {
    /// Circle covering the element, centered on the click point.
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self) -> Vec<StyleDecl> {
        vec![
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.x)),
            ("top", format!("{}px", self.y)),
        ]
    }
}

/// Class of the ripple element; its look and keyframes live in the stylesheet.
pub const RIPPLE_CLASS: &str = "ripple";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_centers_on_click() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 80.0,
        };
        let ripple = Ripple::at(rect, 150.0, 90.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.x, -50.0);
        assert_eq!(ripple.y, -60.0);
    }

    #[test]
    fn style_uses_pixels() {
        let ripple = Ripple {
            size: 40.0,
            x: 1.5,
            y: 2.0,
        };
        let style = ripple.style();
        assert_eq!(style[0], ("width", "40px".to_string()));
        assert_eq!(style[2], ("left", "1.5px".to_string()));
    }
}
