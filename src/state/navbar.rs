//! Navbar show/hide state machine.
//!
//! Scrolling down past the header pins the navbar (`is-fixed`) and hides it;
//! scrolling back up slides it in (`is-visible`) while pinned, and reaching
//! the top releases it entirely.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Class flags applied to `#mainNav`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarClasses {
    pub fixed: bool,
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavbarState {
    pub last_scroll_y: f64,
    pub header_height: f64,
    pub is_fixed: bool,
    pub is_visible: bool,
}

impl NavbarState {
    #[must_use]
    pub fn new(header_height: f64) -> Self {
        Self { header_height: header_height.max(0.0), ..Self::default() }
    }

    #[must_use]
    pub fn classes(&self) -> NavbarClasses {
        NavbarClasses { fixed: self.is_fixed, visible: self.is_visible }
    }

    /// Feed one scroll sample (`window.pageYOffset`).
    ///
    /// Returns the new class flags when they changed, `None` otherwise.
    pub fn on_scroll(&mut self, page_y_offset: f64) -> Option<NavbarClasses> {
        let before = self.classes();
        let current_top = page_y_offset.max(0.0);

        if current_top < self.last_scroll_y {
            if current_top > 0.0 && self.is_fixed {
                self.is_visible = true;
            } else {
                self.is_visible = false;
                self.is_fixed = false;
            }
        } else {
            self.is_visible = false;
            if current_top > self.header_height {
                self.is_fixed = true;
            }
        }
        self.last_scroll_y = current_top;

        let after = self.classes();
        (after != before).then_some(after)
    }
}
