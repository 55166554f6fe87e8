#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Horizontal distance a leftward swipe must cover to close the panel.
pub const SWIPE_CLOSE_THRESHOLD_PX: i32 = 50;

/// Open/closed state of the mobile navigation panel.
///
/// The DOM layer mirrors this onto the panel and overlay elements: both
/// carry the `active` class exactly when `open` is true. Transitions report
/// whether anything changed so callers can keep the scroll-suspension count
/// accurate when, for example, a resize event fires while the panel is
/// already closed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavState {
    open: bool,
}

impl NavState {
    /// Whether the panel is currently open.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Open the panel. Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Close the panel. Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }
}

/// Tracks one horizontal touch gesture.
///
/// The start coordinate is captured on `touchstart` and compared against the
/// end coordinate on `touchend`. Keeping both inside one tracker (rather
/// than module-wide variables) means a tracker per touch surface cannot
/// interfere with another.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<i32>,
}

impl SwipeTracker {
    /// Record the starting screen-X coordinate of a gesture.
    pub fn touch_start(&mut self, screen_x: i32) {
        self.start_x = Some(screen_x);
    }

    /// Finish the gesture at the given screen-X coordinate.
    ///
    /// Returns `true` when the gesture was a leftward swipe longer than
    /// [`SWIPE_CLOSE_THRESHOLD_PX`]. A `touchend` without a preceding
    /// `touchstart` is not a gesture.
    pub fn touch_end(&mut self, screen_x: i32) -> bool {
        let Some(start_x) = self.start_x.take() else {
            return false;
        };
        start_x - screen_x > SWIPE_CLOSE_THRESHOLD_PX
    }
}
