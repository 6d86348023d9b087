//! Secret key sequence matcher (the easter egg).

use std::collections::VecDeque;

/// Keys the matcher cares about; everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Letters are case-insensitive.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "b" | "B" => Key::B,
            "a" | "A" => Key::A,
            _ => Key::Other,
        }
    }
}

/// Toast shown when the sequence is entered.
pub const EASTER_EGG_NOTICE: &str = "🎉 Easter egg found! Keep coding!";

/// Up Up Down Down Left Right Left Right B A
pub const KONAMI_SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::B,
    Key::A,
];

/// Rolling window over the most recent key presses.
#[derive(Debug, Clone)]
pub struct KonamiDetector {
    recent: VecDeque<Key>,
}

impl Default for KonamiDetector {
    fn default() -> Self {
        Self {
            recent: VecDeque::with_capacity(KONAMI_SEQUENCE.len()),
        }
    }
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns `true` when the sequence completes; the
    /// window is cleared so the next match needs the full sequence again.
    pub fn push(&mut self, key: Key) -> bool {
        if self.recent.len() == KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key);

        if self.recent.iter().eq(KONAMI_SEQUENCE.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }

    /// Convenience for raw `KeyboardEvent.key` values.
    pub fn push_dom_key(&mut self, key: &str) -> bool {
        self.push(Key::from_dom_key(key))
    }
}

/// Tracks the temporary celebration a match triggers.
///
/// Each trigger bumps the generation; a reset timer only ends the effect if
/// no newer trigger happened since it was scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Celebration {
    generation: u64,
    active: bool,
}

impl Celebration {
    /// Start (or extend) the effect; returns the generation to reset later.
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.active = true;
        self.generation
    }

    /// End the effect if `generation` is still the latest trigger.
    pub fn reset(&mut self, generation: u64) -> bool {
        if self.active && generation == self.generation {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOM_SEQUENCE: [&str; 10] = [
        "ArrowUp",
        "ArrowUp",
        "ArrowDown",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "ArrowLeft",
        "ArrowRight",
        "b",
        "a",
    ];

    #[test]
    fn full_sequence_matches_once() {
        let mut detector = KonamiDetector::new();
        let hits: Vec<bool> = DOM_SEQUENCE.iter().map(|k| detector.push_dom_key(k)).collect();
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
    }

    #[test]
    fn noise_before_sequence_is_tolerated() {
        let mut detector = KonamiDetector::new();
        for key in ["x", "ArrowUp", "Enter"] {
            assert!(!detector.push_dom_key(key));
        }
        let matched = DOM_SEQUENCE.iter().any(|k| detector.push_dom_key(k));
        assert!(matched);
    }

    #[test]
    fn uppercase_letters_count() {
        let mut detector = KonamiDetector::new();
        let mut matched = false;
        for key in &DOM_SEQUENCE[..8] {
            matched |= detector.push_dom_key(key);
        }
        matched |= detector.push_dom_key("B");
        matched |= detector.push_dom_key("A");
        assert!(matched);
    }

    #[test]
    fn match_clears_window() {
        let mut detector = KonamiDetector::new();
        for key in DOM_SEQUENCE {
            detector.push_dom_key(key);
        }
        // Only the trailing "a" would repeat; the window must start over.
        assert!(!detector.push_dom_key("a"));
    }

    #[test]
    fn newer_trigger_outlives_older_reset() {
        let mut celebration = Celebration::default();
        let first = celebration.trigger();
        let second = celebration.trigger();

        assert!(!celebration.reset(first));
        assert!(celebration.is_active());
        assert!(celebration.reset(second));
        assert!(!celebration.is_active());
    }
}
