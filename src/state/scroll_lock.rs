#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Reference count of overlay-like elements that suspend page scrolling.
///
/// The mobile navigation panel and every open modal each hold one
/// reference. Scrolling is suspended on the first acquire and restored only
/// when the last holder releases, so closing one modal while another is
/// still open leaves the page locked.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollLock {
    open_overlays: u32,
}

impl ScrollLock {
    /// Take a reference. Returns `true` when scrolling should now be
    /// suspended (count went from zero to one).
    pub fn acquire(&mut self) -> bool {
        self.open_overlays += 1;
        self.open_overlays == 1
    }

    /// Drop a reference. Returns `true` when scrolling should now be
    /// restored (count returned to zero). A release without a matching
    /// acquire is ignored.
    pub fn release(&mut self) -> bool {
        if self.open_overlays == 0 {
            return false;
        }
        self.open_overlays -= 1;
        self.open_overlays == 0
    }

    /// Whether any overlay currently holds the lock.
    pub fn is_locked(self) -> bool {
        self.open_overlays > 0
    }
}
