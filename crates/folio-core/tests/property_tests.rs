//! Property-based tests for the reveal engine
//!
//! Uses proptest to check the one-shot and stagger invariants under
//! arbitrary visibility event sequences.

use std::collections::HashMap;

use folio_core::reveal::{
    Intersection, RevealCommand, RevealEngine, RevealOptions, RevealTarget, Stagger,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A visibility event for one of `keys` elements.
fn event_strategy(keys: u32) -> impl Strategy<Value = Intersection<u32>> {
    (0..keys, any::<bool>()).prop_map(|(target, is_intersecting)| Intersection {
        target,
        is_intersecting,
    })
}

/// Batches of events, as the observer would deliver them.
fn batches_strategy(keys: u32) -> impl Strategy<Value = Vec<Vec<Intersection<u32>>>> {
    prop::collection::vec(prop::collection::vec(event_strategy(keys), 0..8), 0..30)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Each element is shown at most once, whatever the event sequence
    #[test]
    fn show_happens_at_most_once(batches in batches_strategy(6)) {
        let mut engine = RevealEngine::new();
        engine.register((0..6u32).map(RevealTarget::new), RevealOptions::default());

        let mut shows: HashMap<u32, usize> = HashMap::new();
        let mut unobserves: HashMap<u32, usize> = HashMap::new();
        for batch in batches {
            for command in engine.handle(batch) {
                match command {
                    RevealCommand::Show { target, .. } => *shows.entry(target).or_default() += 1,
                    RevealCommand::Unobserve { target, .. } => {
                        *unobserves.entry(target).or_default() += 1
                    }
                    _ => {}
                }
            }
        }

        prop_assert!(shows.values().all(|n| *n == 1));
        prop_assert_eq!(shows.len(), unobserves.len());
        prop_assert_eq!(engine.pending(), 6 - shows.len());
    }

    /// An element reveals iff some event for it was intersecting
    #[test]
    fn reveal_iff_ever_intersecting(batches in batches_strategy(4)) {
        let mut engine = RevealEngine::new();
        engine.register((0..4u32).map(RevealTarget::new), RevealOptions::default());

        let mut entered = [false; 4];
        for batch in batches {
            for entry in &batch {
                if entry.is_intersecting {
                    entered[entry.target as usize] = true;
                }
            }
            engine.handle(batch);
        }

        for key in 0..4u32 {
            prop_assert_eq!(!engine.is_observed(&key), entered[key as usize]);
        }
    }

    /// Child k of a staggered container is delayed by exactly k * increment
    #[test]
    fn child_delays_are_exact(children in 0usize..40, increment in 0u32..1000) {
        let mut engine = RevealEngine::new();
        engine.register(
            [RevealTarget::new(0u32).with_children(children)],
            RevealOptions::default().with_stagger(Stagger::Children(increment)),
        );

        let delays: Vec<(usize, u32)> = engine
            .handle([Intersection::entering(0)])
            .into_iter()
            .filter_map(|c| match c {
                RevealCommand::ShowChild { child, after_ms, .. } => Some((child, after_ms)),
                _ => None,
            })
            .collect();

        prop_assert_eq!(delays.len(), children);
        for (k, (child, after_ms)) in delays.into_iter().enumerate() {
            prop_assert_eq!(child, k);
            prop_assert_eq!(after_ms, k as u32 * increment);
        }
    }
}
