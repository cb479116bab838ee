//! Staggered reveal scheduling for newly inserted posts.
//!
//! Items arrive in batches (one fetched page, or one observer callback).
//! Item `i` of a batch is revealed `i * stagger` after the batch, giving a
//! cascading fade-in. With reduced motion, or without an intersection
//! observer, everything is revealed at once.
//!
//! `VisibilityRegistry` is the fire-once bookkeeping behind the shared
//! observer: register interest in a key, receive exactly one notification
//! when it becomes visible, then the key is forgotten.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// How a batch of new nodes should be revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Apply the revealed state now, without delays.
    Immediate,
    /// Mark pending and reveal when scrolled into view.
    OnVisible,
}

impl RevealStrategy {
    #[must_use]
    pub fn select(reduced_motion: bool, observer_available: bool) -> Self {
        if reduced_motion || !observer_available {
            Self::Immediate
        } else {
            Self::OnVisible
        }
    }
}

/// Intersection observer settings for the shared reveal observer.
///
/// Any visible pixel counts as "in view" and the root is the full viewport:
/// a post resting at the very bottom of a page that cannot scroll further
/// must still be revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { root_margin: "0px", threshold: 0.0 }
    }
}

/// Delay for the item at `index` within its batch.
#[must_use]
pub fn stagger_delay(index: usize, stagger: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    stagger.saturating_mul(index)
}

/// Pair each item with its staggered delay, preserving order.
pub fn schedule<T>(items: impl IntoIterator<Item = T>, stagger: Duration) -> Vec<(T, Duration)> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (item, stagger_delay(i, stagger)))
        .collect()
}

/// Fire-once interest registry.
#[derive(Clone, Debug)]
pub struct VisibilityRegistry<K> {
    pending: HashSet<K>,
    stagger: Duration,
}

impl<K: Eq + Hash + Clone> VisibilityRegistry<K> {
    #[must_use]
    pub fn new(stagger: Duration) -> Self {
        Self { pending: HashSet::new(), stagger }
    }

    /// Register interest. Returns `false` if `key` was already pending.
    pub fn register(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    /// Consume a visibility notification.
    ///
    /// Each still-pending key in `visible` is deregistered and returned with
    /// its delay; the stagger index counts only keys that fire in this batch.
    /// Unknown or already-fired keys are skipped.
    pub fn notify_visible(&mut self, visible: impl IntoIterator<Item = K>) -> Vec<(K, Duration)> {
        let fired = visible.into_iter().filter(|key| self.pending.remove(key));
        schedule(fired.collect::<Vec<_>>(), self.stagger)
    }

    /// Drop every pending key, e.g. when the container is replaced.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
