//! Back-to-top button visibility.
//!
//! The button appears only once the reader is deep in the page *and* heading
//! back up; any downward scroll hides it again.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

/// How the click handler should scroll to the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

impl ScrollBehavior {
    #[must_use]
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion { Self::Instant } else { Self::Smooth }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackToTopState {
    pub last_y: f64,
    pub visible: bool,
    pub threshold: f64,
}

impl BackToTopState {
    #[must_use]
    pub fn new(threshold: f64, initial_y: f64) -> Self {
        Self { last_y: initial_y.max(0.0), visible: false, threshold }
    }

    /// Feed one scroll sample. Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let y = scroll_y.max(0.0);
        let scrolling_up = y < self.last_y;
        let next = scrolling_up && y >= self.threshold;
        self.last_y = y;

        if next == self.visible {
            return None;
        }
        self.visible = next;
        Some(next)
    }
}
