//! Reveal groups registered by the portfolio page.

use super::options::{RevealEffect, RevealOptions, RootMargin, Stagger};
use crate::config::RevealConfig;

/// Attribute the host writes on each watched element to map observer
/// entries back to engine keys.
pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

/// A group to register: which elements, which children cascade, how.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroupPlan {
    pub name: &'static str,
    /// CSS selector matching the group's elements.
    pub selector: &'static str,
    /// Selector (relative to each element) of children that cascade.
    pub child_selector: Option<&'static str>,
    pub options: RevealOptions,
}

/// The page's reveal groups, in registration order.
///
/// Every element matches at most one group; the engine skips any element
/// registered twice anyway.
pub fn portfolio_groups(config: &RevealConfig) -> Vec<RevealGroupPlan> {
    let base = config.options();

    let mut groups = vec![
        RevealGroupPlan {
            name: "cards",
            selector: ".glass-card, .hero-text, .hero-image, .project-card, .social-item",
            child_selector: None,
            options: base,
        },
        RevealGroupPlan {
            name: "skills",
            selector: ".skill-category",
            child_selector: Some(".skill-item"),
            options: base.with_stagger(Stagger::Children(config.skill_stagger_ms)),
        },
        RevealGroupPlan {
            name: "timeline",
            selector: ".timeline-item",
            child_selector: None,
            options: base.with_stagger(Stagger::Siblings(config.timeline_stagger_ms)),
        },
    ];

    if config.lazy_images {
        groups.push(RevealGroupPlan {
            name: "images",
            selector: "img[data-src]",
            child_selector: None,
            options: RevealOptions::default()
                .with_threshold(0.0)
                .with_root_margin(RootMargin::ZERO)
                .with_effect(RevealEffect::LoadImage),
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_cascade_to_items() {
        let groups = portfolio_groups(&RevealConfig::default());
        let skills = groups.iter().find(|g| g.name == "skills").unwrap();
        assert_eq!(skills.child_selector, Some(".skill-item"));
        assert_eq!(skills.options.stagger, Stagger::Children(100));
    }

    #[test]
    fn timeline_staggers_siblings() {
        let groups = portfolio_groups(&RevealConfig::default());
        let timeline = groups.iter().find(|g| g.name == "timeline").unwrap();
        assert_eq!(timeline.options.stagger, Stagger::Siblings(200));
        assert_eq!(timeline.options.threshold, 0.1);
    }

    #[test]
    fn lazy_images_can_be_disabled() {
        let config = RevealConfig {
            lazy_images: false,
            ..RevealConfig::default()
        };
        assert!(portfolio_groups(&config).iter().all(|g| g.name != "images"));
    }
}
