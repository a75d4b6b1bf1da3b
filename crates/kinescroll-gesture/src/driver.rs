//! Host-facing tick loop: clock + session + sink.

use kinescroll_core::{Clock, Point, PointerSample, ScrollConfig};

use crate::session::Session;

/// Receives the integer scroll deltas produced by each tick.
///
/// Implementations apply them however they like: a scrollbar value, an
/// editor viewport offset, a terminal history position. The driver does not
/// care and never reads anything back.
pub trait ScrollSink {
    fn scroll_by(&mut self, dx: i32, dy: i32);
}

/// Drives one session from a host-owned periodic timer.
///
/// The host arms its timer for the delay returned by every [`pump`] call,
/// so the loop re-arms itself one frame at a time. Once `pump` returns
/// `None` the session is over and the timer must not be re-armed;
/// [`cancel`] stops the session from any other exit path (focus loss, a
/// second toggle press, surface disposal).
///
/// [`pump`]: Self::pump
/// [`cancel`]: Self::cancel
pub struct FlingDriver<C: Clock> {
    clock: C,
    session: Session,
    frame_period_ms: i64,
}

impl<C: Clock> FlingDriver<C> {
    /// Starts a session at the current pointer position.
    pub fn press(clock: C, position: Point, config: ScrollConfig) -> Self {
        let now = clock.now_ms();
        let session = Session::start(
            PointerSample {
                position,
                timestamp_ms: now,
            },
            config,
        );
        let frame_period_ms = session.config().frame_period_ms();
        Self {
            clock,
            session,
            frame_period_ms,
        }
    }

    /// Forwards a pointer movement, stamped with the driver's clock.
    pub fn pointer_moved(&mut self, position: Point) {
        let now = self.clock.now_ms();
        self.session.on_move(PointerSample {
            position,
            timestamp_ms: now,
        });
    }

    /// Forwards the toggle release, folding the release position in first
    /// so the final movement counts toward the velocity. Returns whether a
    /// fling began; when it did not, the host should replay the release as
    /// an ordinary click.
    pub fn pointer_released(&mut self, position: Point) -> bool {
        self.pointer_moved(position);
        self.session.on_release(self.clock.now_ms())
    }

    /// Runs one frame and forwards its delta to the sink.
    ///
    /// Returns the delay until the next frame, or `None` once the session
    /// has terminated (including the tick that discovers the trail is
    /// finished, which emits nothing).
    pub fn pump(&mut self, sink: &mut dyn ScrollSink) -> Option<i64> {
        let (dx, dy) = self.session.tick(self.clock.now_ms());
        if self.session.is_terminated() {
            return None;
        }
        sink.scroll_by(dx, dy);
        Some(self.frame_period_ms)
    }

    /// Cancels the gesture immediately. Idempotent; nothing further is
    /// emitted.
    pub fn cancel(&mut self) {
        self.session.dispose();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
