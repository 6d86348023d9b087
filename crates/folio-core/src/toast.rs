//! Transient notification toasts.
//!
//! A toast slides in shortly after it is created, stays for a while, then
//! slides out and is removed. The host drives the phases with one-shot
//! timers built from [`ToastSchedule`]; advancing a toast that is already
//! gone does nothing, so late timers are harmless.

use crate::config::ToastConfig;

/// Toast flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Font Awesome icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    /// Created off-screen.
    Entering,
    Visible,
    /// Sliding out; removed once the exit finishes.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class(&self) -> String {
        let phase = match self.phase {
            ToastPhase::Visible => " show",
            ToastPhase::Entering | ToastPhase::Leaving => "",
        };
        format!("notification {}{}", self.kind.class(), phase)
    }
}

/// Delays between phase changes, each relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    /// Creation → `Visible`.
    pub enter_ms: u32,
    /// `Visible` → `Leaving`.
    pub hold_ms: u32,
    /// `Leaving` → removed.
    pub exit_ms: u32,
}

impl From<&ToastConfig> for ToastSchedule {
    fn from(config: &ToastConfig) -> Self {
        Self {
            enter_ms: config.enter_delay_ms,
            hold_ms: config.visible_ms.saturating_sub(config.enter_delay_ms),
            exit_ms: config.exit_ms,
        }
    }
}

/// All toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast in the `Entering` phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Move a toast forward to `phase`. Returns `false` if the toast is gone
    /// or already past that phase.
    pub fn advance(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase < phase => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }

    /// Remove a toast. Returns `false` if it was already removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
