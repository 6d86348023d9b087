//! Site configuration.
//!
//! Every timing and threshold the page behaviors use lives here. Each
//! section defaults independently, so a JSON file only needs the keys it
//! changes:
//!
//! ```json
//! { "reveal": { "threshold": 0.25 }, "trail": { "enabled": false } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::reveal::{RevealOptions, RevealStyle, RootMargin, DEFAULT_OFFSET_PX, DEFAULT_TRANSITION};

/// Complete configuration for the page behaviors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub toast: ToastConfig,
    pub typing: TypingConfig,
    pub loader: LoaderConfig,
    pub cv: CvConfig,
    pub hover: HoverConfig,
    pub ripple: RippleConfig,
    pub trail: TrailConfig,
    pub easter_egg: EasterEggConfig,
}

/// Scroll-triggered reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub offset_px: u32,
    pub transition: String,
    /// Delay between skill badges inside a revealed category.
    pub skill_stagger_ms: u32,
    /// Delay between consecutive timeline items.
    pub timeline_stagger_ms: u32,
    /// Defer `img[data-src]` sources until the image scrolls into view.
    pub lazy_images: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::default(),
            offset_px: DEFAULT_OFFSET_PX,
            transition: DEFAULT_TRANSITION.to_string(),
            skill_stagger_ms: 100,
            timeline_stagger_ms: 200,
            lazy_images: true,
        }
    }
}

impl RevealConfig {
    pub fn style(&self) -> RevealStyle {
        RevealStyle {
            offset_px: self.offset_px,
            transition: self.transition.clone(),
        }
    }

    /// Base options for a flat reveal group.
    pub fn options(&self) -> RevealOptions {
        RevealOptions::default()
            .with_threshold(self.threshold)
            .with_root_margin(self.root_margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll offset past which the nav bar gets its `scrolled` look.
    pub nav_scrolled_px: f64,
    /// A section becomes active this many pixels before its top edge.
    pub section_lead_px: f64,
    /// Scroll offset past which the back-to-top button appears.
    pub back_to_top_px: f64,
    pub parallax_speed: f64,
    /// Height of the fixed header that anchor scrolling must clear.
    pub header_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_px: 50.0,
            section_lead_px: 200.0,
            back_to_top_px: 300.0,
            parallax_speed: 0.5,
            header_offset_px: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay before a new toast slides in.
    pub enter_delay_ms: u32,
    /// Time from creation until the toast starts leaving.
    pub visible_ms: u32,
    /// Slide-out duration before removal.
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub char_interval_ms: u32,
    pub cursor_linger_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1500,
            char_interval_ms: 100,
            cursor_linger_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Spinner time after the page finished loading.
    pub hold_ms: u32,
    pub fade_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            hold_ms: 1000,
            fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    /// Simulated preparation time before the download starts.
    pub prepare_ms: u32,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self { prepare_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub badge_stagger_ms: u32,
    pub badge_scale: f64,
    pub lift_px: u32,
    pub lift_scale: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            badge_stagger_ms: 50,
            badge_scale: 1.1,
            lift_px: 8,
            lift_scale: 1.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub lifetime_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { lifetime_ms: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    /// Minimum pointer travel between two particles.
    pub min_distance_px: f64,
    pub max_particles: usize,
    pub lifetime_ms: u32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance_px: 12.0,
            max_particles: 24,
            lifetime_ms: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasterEggConfig {
    pub duration_ms: u32,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json).map_err(FolioError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Reject values the behaviors cannot work with.
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::InvalidConfig {
                field: "reveal.threshold",
                reason: format!("{} is outside 0.0..=1.0", self.reveal.threshold),
            });
        }
        if !(self.scroll.parallax_speed.is_finite() && self.scroll.parallax_speed > 0.0) {
            return Err(FolioError::InvalidConfig {
                field: "scroll.parallax_speed",
                reason: format!("{} must be positive", self.scroll.parallax_speed),
            });
        }
        if self.toast.visible_ms == 0 {
            return Err(FolioError::InvalidConfig {
                field: "toast.visible_ms",
                reason: "a toast must stay visible for some time".to_string(),
            });
        }
        if self.toast.visible_ms < self.toast.enter_delay_ms {
            return Err(FolioError::InvalidConfig {
                field: "toast.visible_ms",
                reason: format!(
                    "{} ends before the {}ms entrance",
                    self.toast.visible_ms, self.toast.enter_delay_ms
                ),
            });
        }
        if self.trail.enabled && self.trail.max_particles == 0 {
            return Err(FolioError::InvalidConfig {
                field: "trail.max_particles",
                reason: "an enabled trail needs at least one particle".to_string(),
            });
        }
        Ok(())
    }
}
