//! Reveal engine scenarios against a fake page.

mod common;

use common::{FakeElement, FakePage};
use folio_core::reveal::{
    Intersection, RevealEngine, RevealOptions, RevealState, RevealTarget, Stagger,
};

// ============================================================================
// One-shot reveal
// ============================================================================

#[test]
fn element_reveals_once_and_is_unobserved() {
    let mut page = FakePage::new();
    page.add(1, FakeElement::default());
    let mut engine = RevealEngine::new();

    page.apply(engine.register([RevealTarget::new(1)], RevealOptions::default()));
    assert_eq!(page.element(1).opacity(), Some("0"));
    assert!(page.element(1).observed);

    page.apply(engine.handle([Intersection::entering(1)]));
    assert_eq!(page.element(1).opacity(), Some("1"));
    assert!(!page.element(1).observed);

    // A second identical event must not re-apply anything.
    let again = engine.handle([Intersection::entering(1)]);
    assert!(again.is_empty());
    assert_eq!(page.show_writes[&1], 1);
}

#[test]
fn repeated_scrolling_never_flickers() {
    let mut page = FakePage::new();
    page.add(1, FakeElement::default());
    let mut engine = RevealEngine::new();
    page.apply(engine.register([RevealTarget::new(1)], RevealOptions::default()));

    for _ in 0..5 {
        page.apply(engine.handle([Intersection::entering(1)]));
        page.apply(engine.handle([Intersection::leaving(1)]));
    }

    assert_eq!(page.show_writes[&1], 1);
    assert_eq!(page.element(1).opacity(), Some("1"));
    assert_eq!(engine.state(&1), Some(RevealState::Shown));
}

#[test]
fn batch_order_does_not_matter() {
    let mut forward = RevealEngine::new();
    let mut reverse = RevealEngine::new();
    let targets = || (0..4u32).map(RevealTarget::new);
    forward.register(targets(), RevealOptions::default());
    reverse.register(targets(), RevealOptions::default());

    forward.handle((0..4).map(Intersection::entering));
    reverse.handle((0..4).rev().map(Intersection::entering));

    for key in 0..4 {
        assert_eq!(forward.state(&key), reverse.state(&key));
        assert_eq!(forward.state(&key), Some(RevealState::Shown));
    }
}

#[test]
fn mixed_batch_reveals_only_intersecting() {
    let mut engine = RevealEngine::new();
    engine.register((0..3u32).map(RevealTarget::new), RevealOptions::default());

    engine.handle([
        Intersection::leaving(0),
        Intersection::entering(1),
        Intersection::leaving(2),
    ]);

    assert!(engine.is_observed(&0));
    assert!(!engine.is_observed(&1));
    assert!(engine.is_observed(&2));
    assert_eq!(engine.pending(), 2);
}

#[test]
fn empty_registration_observes_nothing() {
    let mut page = FakePage::new();
    let mut engine: RevealEngine<u32> = RevealEngine::new();

    let commands = engine.register(Vec::new(), RevealOptions::default());
    assert!(commands.is_empty());
    page.apply(commands);

    assert_eq!(engine.group_count(), 0);
    assert!(engine.handle([Intersection::entering(0)]).is_empty());
}

// ============================================================================
// Stagger
// ============================================================================

#[test]
fn skill_badges_cascade_at_100ms_steps() {
    let mut page = FakePage::new();
    page.add(10, FakeElement::with_children(3));
    let mut engine = RevealEngine::new();

    page.apply(engine.register(
        [RevealTarget::new(10).with_children(3)],
        RevealOptions::default().with_stagger(Stagger::Children(100)),
    ));
    for child in 0..3 {
        assert_eq!(page.element(10).child_opacity(child), Some("0"));
    }

    page.advance(5_000);
    let trigger_at = page.now();
    page.apply(engine.handle([Intersection::entering(10)]));
    assert_eq!(page.element(10).opacity(), Some("1"));

    page.advance(250);
    assert_eq!(page.pending_timers(), 0);
    for child in 0..3 {
        assert_eq!(page.element(10).child_opacity(child), Some("1"));
        assert_eq!(
            page.child_shown_at[&(10, child)] - trigger_at,
            child as u32 * 100
        );
    }
}

#[test]
fn badges_are_still_hidden_between_steps() {
    let mut page = FakePage::new();
    page.add(10, FakeElement::with_children(3));
    let mut engine = RevealEngine::new();
    page.apply(engine.register(
        [RevealTarget::new(10).with_children(3)],
        RevealOptions::default().with_stagger(Stagger::Children(100)),
    ));

    page.apply(engine.handle([Intersection::entering(10)]));
    page.advance(150);

    assert_eq!(page.element(10).child_opacity(0), Some("1"));
    assert_eq!(page.element(10).child_opacity(1), Some("1"));
    assert_eq!(page.element(10).child_opacity(2), Some("0"));
}

#[test]
fn removed_container_ignores_late_timers() {
    let mut page = FakePage::new();
    page.add(10, FakeElement::with_children(2));
    let mut engine = RevealEngine::new();
    page.apply(engine.register(
        [RevealTarget::new(10).with_children(2)],
        RevealOptions::default().with_stagger(Stagger::Children(100)),
    ));
    page.apply(engine.handle([Intersection::entering(10)]));

    page.elements.remove(&10);
    page.advance(500);

    assert!(page.child_shown_at.is_empty());
}

#[test]
fn timeline_items_delay_by_position() {
    let mut page = FakePage::new();
    let mut engine = RevealEngine::new();
    for key in 0..3u32 {
        page.add(key, FakeElement::default());
    }
    page.apply(engine.register(
        (0..3u32).map(|k| RevealTarget::new(k).with_sibling_index(k as usize)),
        RevealOptions::default().with_stagger(Stagger::Siblings(200)),
    ));

    page.apply(engine.handle((0..3).map(Intersection::entering)));

    assert_eq!(page.element(0).style.get("transition-delay"), None);
    assert_eq!(
        page.element(1).style.get("transition-delay").map(String::as_str),
        Some("200ms")
    );
    assert_eq!(
        page.element(2).style.get("transition-delay").map(String::as_str),
        Some("400ms")
    );
}
