//! Hover micro-interactions on project cards and skill badges.

use crate::config::HoverConfig;
use crate::reveal::child_delays;

/// Transform for a project's tech badges while the card is hovered.
pub fn badge_pulse_transform(config: &HoverConfig) -> String {
    format!("scale({})", config.badge_scale)
}

pub const BADGE_REST_TRANSFORM: &str = "scale(1)";

/// `(badge index, delay)` pairs: badge `k` pulses after `k * stagger` ms.
pub fn badge_pulse_delays(count: usize, config: &HoverConfig) -> Vec<(usize, u32)> {
    child_delays(count, config.badge_stagger_ms).collect()
}

pub fn skill_lift_transform(config: &HoverConfig) -> String {
    format!("translateY(-{}px) scale({})", config.lift_px, config.lift_scale)
}

pub const SKILL_REST_TRANSFORM: &str = "translateY(0) scale(1)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_pulse_in_sequence() {
        let delays = badge_pulse_delays(3, &HoverConfig::default());
        assert_eq!(delays, vec![(0, 0), (1, 50), (2, 100)]);
    }

    #[test]
    fn transforms() {
        let config = HoverConfig::default();
        assert_eq!(badge_pulse_transform(&config), "scale(1.1)");
        assert_eq!(
            skill_lift_transform(&config),
            "translateY(-8px) scale(1.05)"
        );
    }
}
