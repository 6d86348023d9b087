//! Typewriter animation for the hero subtitle.

use crate::config::TypingConfig;

/// One frame of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// Wait before applying this step, relative to the previous one.
    pub delay_ms: u32,
    /// Text shown after this step.
    pub text: String,
    /// Whether the blinking cursor border is shown.
    pub cursor: bool,
}

/// Frames that retype `text` one character at a time.
///
/// The first frame clears the text immediately; characters follow after
/// the start delay, one per interval; the last frame hides the cursor.
pub fn typing_steps(text: &str, config: &TypingConfig) -> Vec<TypingStep> {
    let mut steps = Vec::with_capacity(text.chars().count() + 2);
    steps.push(TypingStep {
        delay_ms: 0,
        text: String::new(),
        cursor: true,
    });

    let mut typed = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        typed.push(ch);
        steps.push(TypingStep {
            delay_ms: if i == 0 {
                config.start_delay_ms
            } else {
                config.char_interval_ms
            },
            text: typed.clone(),
            cursor: true,
        });
    }

    // The last character is followed by one more interval before the
    // cursor linger starts counting.
    let tail = if text.is_empty() {
        config.start_delay_ms
    } else {
        config.char_interval_ms
    };
    steps.push(TypingStep {
        delay_ms: tail + config.cursor_linger_ms,
        text: typed,
        cursor: false,
    });
    steps
}

/// Total running time of the animation.
pub fn typing_duration_ms(text: &str, config: &TypingConfig) -> u32 {
    typing_steps(text, config).iter().map(|s| s.delay_ms).sum()
}
