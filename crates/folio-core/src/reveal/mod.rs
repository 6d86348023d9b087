//! Viewport-visibility reveal engine.
//!
//! Elements start hidden and transition to shown exactly once, the first
//! time they cross their group's visibility threshold. Groups can stagger
//! their reveal across children or siblings.

mod engine;
mod options;
mod plan;
mod style;

pub use engine::{
    child_delays, GroupId, Intersection, RevealCommand, RevealEngine, RevealState, RevealTarget,
};
pub use options::{RevealEffect, RevealOptions, RootMargin, Stagger, DEFAULT_THRESHOLD};
pub use plan::{portfolio_groups, RevealGroupPlan, REVEAL_ID_ATTRIBUTE};
pub use style::{RevealStyle, StyleDecl, DEFAULT_OFFSET_PX, DEFAULT_TRANSITION};
