//! Pure client-side models.
//!
//! DESIGN
//! ======
//! Everything in here is plain data with no `web_sys` dependency: panel and
//! gesture state, the scroll-suspension counter, and the notification render
//! decisions. The `dom` modules own the actual element mutations and keep
//! these models as their single source of truth, which is what makes the
//! transition invariants testable on the host.

pub mod nav;
pub mod notifications;
pub mod scroll_lock;
