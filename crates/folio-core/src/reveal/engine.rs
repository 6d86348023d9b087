//! One-shot reveal state machine.
//!
//! The engine never touches a document. Registration and visibility batches
//! go in, [`RevealCommand`]s come out, and the host applies them (style
//! writes, timers, observer calls). That keeps every transition testable
//! without a layout engine.
//!
//! ```text
//! register ──► Hide + Observe
//!                   │
//!   visibility batch (is_intersecting)
//!                   ▼
//!   Hidden ──► Shown ──► Unobserve   (terminal, never re-enters)
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::options::{RevealEffect, RevealOptions, Stagger};

/// Identifies a reveal group; one observer per group on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

/// Visual state of a watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Shown,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Shown)
    }
}

/// An element offered for registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget<K> {
    pub key: K,
    /// Number of children that cascade under a [`Stagger::Children`] policy.
    pub children: usize,
    /// Position among the parent's children, for [`Stagger::Siblings`].
    pub sibling_index: usize,
}

impl<K> RevealTarget<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            children: 0,
            sibling_index: 0,
        }
    }

    pub fn with_children(mut self, children: usize) -> Self {
        self.children = children;
        self
    }

    pub fn with_sibling_index(mut self, index: usize) -> Self {
        self.sibling_index = index;
        self
    }
}

/// One entry of a visibility-crossing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection<K> {
    pub target: K,
    pub is_intersecting: bool,
}

impl<K> Intersection<K> {
    pub fn entering(target: K) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: K) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Side effects the host must apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommand<K> {
    /// Put the element in its hidden visual state.
    Hide { target: K },
    /// Put the element's `child`-th cascading child in its hidden state.
    HideChild { target: K, child: usize },
    /// Start observing the element with the group's observer.
    Observe { target: K, group: GroupId },
    /// Apply the shown visual state, with a CSS transition delay.
    Show { target: K, transition_delay_ms: u32 },
    /// Apply the shown state to a child once `after_ms` have elapsed.
    ShowChild { target: K, child: usize, after_ms: u32 },
    /// Swap the element's deferred image source in.
    LoadSource { target: K },
    /// Stop observing the element.
    Unobserve { target: K, group: GroupId },
}

#[derive(Debug, Clone, Copy)]
struct Watched {
    group: GroupId,
    state: RevealState,
    children: usize,
    sibling_index: usize,
}

/// Tracks every registered element and its one-shot state.
#[derive(Debug)]
pub struct RevealEngine<K> {
    groups: Vec<RevealOptions>,
    watched: HashMap<K, Watched>,
}

impl<K> Default for RevealEngine<K> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            watched: HashMap::new(),
        }
    }
}

impl<K> RevealEngine<K>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group of elements sharing `options`.
    ///
    /// Elements already watched by an earlier registration are skipped, so
    /// registering the same node twice cannot double its transitions. An
    /// empty (or fully duplicate) registration creates no group and returns
    /// no commands.
    pub fn register<I>(&mut self, targets: I, options: RevealOptions) -> Vec<RevealCommand<K>>
    where
        I: IntoIterator<Item = RevealTarget<K>>,
    {
        let fresh: Vec<RevealTarget<K>> = targets
            .into_iter()
            .filter(|t| !self.watched.contains_key(&t.key))
            .collect();

        if fresh.is_empty() {
            return Vec::new();
        }

        let group = GroupId(self.groups.len() as u32);
        self.groups.push(options);

        let mut commands = Vec::new();
        for target in fresh {
            if self.watched.contains_key(&target.key) {
                tracing::debug!(key = ?target.key, "duplicate reveal target in one group");
                continue;
            }

            if options.effect == RevealEffect::Fade {
                commands.push(RevealCommand::Hide { target: target.key });
                if let Stagger::Children(_) = options.stagger {
                    commands.extend((0..target.children).map(|child| RevealCommand::HideChild {
                        target: target.key,
                        child,
                    }));
                }
            }
            commands.push(RevealCommand::Observe {
                target: target.key,
                group,
            });

            self.watched.insert(
                target.key,
                Watched {
                    group,
                    state: RevealState::Hidden,
                    children: target.children,
                    sibling_index: target.sibling_index,
                },
            );
        }

        tracing::debug!(group = group.0, pending = self.pending(), "registered reveal group");
        commands
    }

    /// Process one batch of visibility-crossing entries.
    ///
    /// Entries may arrive in any order. Each hidden element that is now
    /// intersecting reveals and is unobserved; everything else is ignored.
    pub fn handle<I>(&mut self, batch: I) -> Vec<RevealCommand<K>>
    where
        I: IntoIterator<Item = Intersection<K>>,
    {
        let mut commands = Vec::new();

        for entry in batch {
            if !entry.is_intersecting {
                continue;
            }
            let Some(watched) = self.watched.get_mut(&entry.target) else {
                continue;
            };
            if watched.state.is_revealed() {
                continue;
            }
            watched.state = RevealState::Shown;

            let watched = *watched;
            let options = self.groups[watched.group.0 as usize];
            let target = entry.target;

            match options.effect {
                RevealEffect::LoadImage => commands.push(RevealCommand::LoadSource { target }),
                RevealEffect::Fade => match options.stagger {
                    Stagger::None => commands.push(RevealCommand::Show {
                        target,
                        transition_delay_ms: 0,
                    }),
                    Stagger::Siblings(increment) => commands.push(RevealCommand::Show {
                        target,
                        transition_delay_ms: increment.saturating_mul(watched.sibling_index as u32),
                    }),
                    Stagger::Children(increment) => {
                        commands.push(RevealCommand::Show {
                            target,
                            transition_delay_ms: 0,
                        });
                        commands.extend(child_delays(watched.children, increment).map(
                            |(child, after_ms)| RevealCommand::ShowChild {
                                target,
                                child,
                                after_ms,
                            },
                        ));
                    }
                },
            }

            commands.push(RevealCommand::Unobserve {
                target,
                group: watched.group,
            });
            tracing::trace!(key = ?target, group = watched.group.0, "revealed");
        }

        commands
    }

    /// Options of a registered group.
    pub fn group_options(&self, group: GroupId) -> Option<&RevealOptions> {
        self.groups.get(group.0 as usize)
    }

    /// Number of groups created so far.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Current state of an element, `None` if it was never registered.
    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.watched.get(key).map(|w| w.state)
    }

    /// Whether the element is still waiting for its trigger.
    pub fn is_observed(&self, key: &K) -> bool {
        self.state(key) == Some(RevealState::Hidden)
    }

    /// Elements still waiting for their trigger.
    pub fn pending(&self) -> usize {
        self.watched
            .values()
            .filter(|w| !w.state.is_revealed())
            .count()
    }

    /// Whether every registered element has revealed.
    pub fn is_settled(&self) -> bool {
        self.pending() == 0
    }
}

/// Delay of each child under a per-child stagger: child `k` waits `k * increment` ms.
pub fn child_delays(count: usize, increment_ms: u32) -> impl Iterator<Item = (usize, u32)> {
    (0..count).map(move |k| (k, increment_ms.saturating_mul(k as u32)))
}
