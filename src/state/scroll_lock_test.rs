use super::*;

#[test]
fn first_acquire_suspends() {
    let mut lock = ScrollLock::default();
    assert!(lock.acquire());
    assert!(lock.is_locked());
}

#[test]
fn nested_acquire_does_not_suspend_twice() {
    let mut lock = ScrollLock::default();
    assert!(lock.acquire());
    assert!(!lock.acquire());
}

#[test]
fn release_restores_only_at_zero() {
    let mut lock = ScrollLock::default();
    lock.acquire();
    lock.acquire();
    assert!(!lock.release());
    assert!(lock.is_locked());
    assert!(lock.release());
    assert!(!lock.is_locked());
}

#[test]
fn unmatched_release_is_ignored() {
    let mut lock = ScrollLock::default();
    assert!(!lock.release());
    assert!(lock.acquire());
    assert!(lock.release());
    assert!(!lock.release());
}
