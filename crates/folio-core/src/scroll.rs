//! Scroll-derived page state.
//!
//! One scroll handler measures the page into [`ScrollMetrics`] and derives
//! everything that depends on the scroll offset at once.

use crate::config::ScrollConfig;

/// A page section's anchor id and its offset from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Raw measurements taken in the scroll handler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    /// Total document height (`scrollHeight`).
    pub document_height: f64,
    /// Visible height (`clientHeight`).
    pub viewport_height: f64,
    /// Sections in document order.
    pub sections: Vec<SectionOffset>,
}

/// Everything the page renders from the scroll offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    /// Nav bar switches to its compact `scrolled` look.
    pub nav_scrolled: bool,
    /// Id of the section the nav highlights, if any.
    pub active_section: Option<String>,
    /// Reading progress, 0.0 - 100.0.
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
    /// Vertical hero translation in pixels.
    pub parallax_offset: f64,
}

impl ScrollSnapshot {
    pub fn compute(metrics: &ScrollMetrics, config: &ScrollConfig) -> Self {
        Self {
            nav_scrolled: metrics.scroll_y > config.nav_scrolled_px,
            active_section: active_section(metrics, config.section_lead_px),
            progress_percent: progress_percent(
                metrics.scroll_y,
                metrics.document_height,
                metrics.viewport_height,
            ),
            back_to_top_visible: metrics.scroll_y > config.back_to_top_px,
            parallax_offset: metrics.scroll_y * config.parallax_speed,
        }
    }

    /// Whether the nav link for `href` (`#id`) is the active one.
    pub fn is_active_link(&self, href: &str) -> bool {
        match (&self.active_section, anchor_id(href)) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

/// The last section whose top (minus `lead`) the viewport has passed.
pub fn active_section(metrics: &ScrollMetrics, lead: f64) -> Option<String> {
    metrics
        .sections
        .iter()
        .filter(|s| metrics.scroll_y >= s.top - lead)
        .last()
        .map(|s| s.id.clone())
}

/// Scrolled fraction of the scrollable range, as a percentage.
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Anchor id of an in-page link (`#about` → `about`).
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed header.
pub fn scroll_destination(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}
