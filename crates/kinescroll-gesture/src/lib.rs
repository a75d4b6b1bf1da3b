//! Gesture lifecycle for kinetic scrolling.
//!
//! A [`Session`] sequences one gesture from toggle press to standstill:
//! while the toggle is held it tracks pointer motion and scrolls directly;
//! on release it freezes the tracked velocity into a trail and keeps
//! emitting decaying deltas until the trail judges the speed negligible.
//!
//! Hosts that own a timer can wrap the session in a [`FlingDriver`], which
//! pairs it with a [`Clock`](kinescroll_core::Clock) and forwards each
//! tick's delta to a [`ScrollSink`].

mod driver;
mod session;

pub use driver::{FlingDriver, ScrollSink};
pub use session::{Phase, Session};
