use super::*;

// =============================================================
// NavState transitions
// =============================================================

#[test]
fn nav_starts_closed() {
    let state = NavState::default();
    assert!(!state.is_open());
}

#[test]
fn open_then_close_reports_changes() {
    let mut state = NavState::default();
    assert!(state.open());
    assert!(state.is_open());
    assert!(state.close());
    assert!(!state.is_open());
}

#[test]
fn repeated_open_is_idempotent() {
    let mut state = NavState::default();
    assert!(state.open());
    assert!(!state.open());
    assert!(state.is_open());
}

#[test]
fn close_while_closed_reports_no_change() {
    let mut state = NavState::default();
    assert!(!state.close());
    state.open();
    assert!(state.close());
    assert!(!state.close());
}

// =============================================================
// SwipeTracker
// =============================================================

#[test]
fn leftward_swipe_past_threshold_closes() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(300);
    assert!(tracker.touch_end(300 - SWIPE_CLOSE_THRESHOLD_PX - 1));
}

#[test]
fn leftward_swipe_at_threshold_does_not_close() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(300);
    assert!(!tracker.touch_end(300 - SWIPE_CLOSE_THRESHOLD_PX));
}

#[test]
fn rightward_swipe_does_not_close() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(100);
    assert!(!tracker.touch_end(400));
}

#[test]
fn touch_end_without_start_is_not_a_gesture() {
    let mut tracker = SwipeTracker::default();
    assert!(!tracker.touch_end(0));
}

#[test]
fn gesture_state_is_consumed_by_touch_end() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(500);
    assert!(tracker.touch_end(100));
    // The same end coordinate again has no start to compare against.
    assert!(!tracker.touch_end(100));
}
