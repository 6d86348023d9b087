//! Observation options for a reveal group.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Default fraction of an element that must be visible before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Pre-trigger offset around the viewport, in CSS `rootMargin` order
/// (top, right, bottom, left). Negative values shrink the trigger zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    /// No offset on any side.
    pub const ZERO: RootMargin = RootMargin {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// Shrink the trigger zone at the bottom edge only.
    pub const fn bottom_inset(px: i32) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: -px,
            left: 0,
        }
    }
}

impl Default for RootMargin {
    /// Elements trigger once they are 50px above the viewport's bottom edge.
    fn default() -> Self {
        Self::bottom_inset(50)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

fn parse_px(token: &str) -> Option<i32> {
    let number = token.strip_suffix("px").unwrap_or(token);
    // A bare number is only legal when it is zero, as in CSS.
    if number.len() == token.len() && number != "0" {
        return None;
    }
    number.parse().ok()
}

impl FromStr for RootMargin {
    type Err = FolioError;

    /// Parse CSS margin shorthand with one to four pixel values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| FolioError::InvalidRootMargin(s.to_string()))?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(FolioError::InvalidRootMargin(s.to_string())),
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

/// How a triggered element spreads its reveal over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "increment_ms")]
pub enum Stagger {
    /// Reveal the element at once.
    #[default]
    None,
    /// Reveal the container at once, then child `k` after `k * increment` ms.
    Children(u32),
    /// Delay the element's own transition by `sibling_index * increment` ms.
    Siblings(u32),
}

/// What a reveal does to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealEffect {
    /// Hidden until visible, then fade and slide into place.
    #[default]
    Fade,
    /// No hidden state; swap a deferred image source in when visible.
    LoadImage,
}

/// Options shared by every element of a reveal group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible (0.0 - 1.0).
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub stagger: Stagger,
    pub effect: RevealEffect,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            stagger: Stagger::None,
            effect: RevealEffect::Fade,
        }
    }
}

impl RevealOptions {
    pub fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_effect(mut self, effect: RevealEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margin_shrinks_bottom() {
        let margin = RootMargin::default();
        assert_eq!(margin.to_string(), "0px 0px -50px 0px");
    }

    #[test]
    fn parse_shorthand_forms() {
        assert_eq!("10px".parse::<RootMargin>().unwrap(), RootMargin {
            top: 10,
            right: 10,
            bottom: 10,
            left: 10
        });
        assert_eq!("0 -20px".parse::<RootMargin>().unwrap(), RootMargin {
            top: 0,
            right: -20,
            bottom: 0,
            left: -20
        });
        assert_eq!(
            "0px 0px -50px 0px".parse::<RootMargin>().unwrap(),
            RootMargin::default()
        );
    }

    #[test]
    fn parse_rejects_units_and_arity() {
        assert!("10%".parse::<RootMargin>().is_err());
        assert!("5".parse::<RootMargin>().is_err());
        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
    }

    #[test]
    fn margin_serializes_as_css_string() {
        let json = serde_json::to_string(&RootMargin::bottom_inset(50)).unwrap();
        assert_eq!(json, "\"0px 0px -50px 0px\"");
        let back: RootMargin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RootMargin::bottom_inset(50));
    }

    #[test]
    fn stagger_json_shape() {
        let stagger: Stagger =
            serde_json::from_str(r#"{"kind":"children","increment_ms":100}"#).unwrap();
        assert_eq!(stagger, Stagger::Children(100));
        let none: Stagger = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
        assert_eq!(none, Stagger::None);
    }
}
