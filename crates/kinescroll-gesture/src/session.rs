//! The per-gesture session state machine.

use kinescroll_core::{
    DeltaAccumulator, Point, PointerSample, ScrollConfig, Velocity, VelocityTracker,
};
use kinescroll_motion::Trail;

/// Lifecycle phase of a scroll session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Toggle held: pointer motion scrolls directly and feeds the tracker.
    Dragging,
    /// Toggle released with enough drag history: a trail is emitting.
    Trailing,
    /// Final state. Every operation is a no-op from here on; it is entered
    /// exactly once and never left.
    Terminated,
}

/// One kinetic scroll gesture, from toggle press to standstill.
///
/// The session owns its velocity tracker and, after release, its trail and
/// remainder carry; nothing else mutates them. All calls come from the one
/// host thread that owns the UI events and the frame timer, so there is no
/// locking anywhere.
///
/// Drag motion uses grab-and-pull semantics: the content follows the
/// opposite of the pointer, so dragging up scrolls down. The tracker itself
/// stays in pointer space; the sign flips when displacement is emitted and
/// when the release velocity is frozen into the trail.
pub struct Session {
    config: ScrollConfig,
    phase: Phase,
    activation_deadline_ms: i64,
    tracker: VelocityTracker,
    last_point: Point,
    last_sample_ms: i64,
    /// Continuous drag displacement accumulated since the previous tick,
    /// scroll space.
    drag_dx: f64,
    drag_dy: f64,
    accumulator: DeltaAccumulator,
    last_tick_ms: i64,
    trail: Option<Trail>,
}

impl Session {
    /// Starts a session at the first sample of a drag. The configuration is
    /// normalized here, so out-of-range knobs are clamped once up front.
    pub fn start(sample: PointerSample, config: ScrollConfig) -> Self {
        let config = config.normalized();
        Self {
            phase: Phase::Dragging,
            activation_deadline_ms: sample.timestamp_ms + config.activation_ms,
            tracker: VelocityTracker::new(sample, config.sensitivity_window_ms),
            last_point: sample.position,
            last_sample_ms: sample.timestamp_ms,
            drag_dx: 0.0,
            drag_dy: 0.0,
            accumulator: DeltaAccumulator::new(),
            last_tick_ms: sample.timestamp_ms,
            trail: None,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Feeds a pointer movement while dragging.
    ///
    /// No-op in any other phase; samples that do not advance time are
    /// discarded.
    pub fn on_move(&mut self, sample: PointerSample) {
        if self.phase != Phase::Dragging {
            return;
        }
        if sample.timestamp_ms <= self.last_sample_ms {
            return;
        }

        // Grab-and-pull: content moves against the pointer.
        self.drag_dx += self.last_point.x - sample.position.x;
        self.drag_dy += self.last_point.y - sample.position.y;

        self.tracker.observe(sample);
        self.last_point = sample.position;
        self.last_sample_ms = sample.timestamp_ms;
    }

    /// Handles the toggle release. Returns whether a fling began.
    ///
    /// A release before the activation deadline terminates the session
    /// without a fling; the host should treat the gesture as an ordinary
    /// click. Otherwise the tracked velocity is frozen into the configured
    /// trail and subsequent ticks emit its decaying displacement.
    ///
    /// Hosts that want the release position to count toward the velocity
    /// feed it through [`on_move`](Self::on_move) first.
    pub fn on_release(&mut self, now_ms: i64) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }

        if now_ms < self.activation_deadline_ms {
            log::debug!(
                "released {} ms before activation, no fling",
                self.activation_deadline_ms - now_ms
            );
            self.phase = Phase::Terminated;
            return false;
        }

        // Pointer velocity, negated into scroll space to match the drag
        // accumulation above.
        let tracked = self.tracker.velocity();
        let release_velocity = Velocity::new(-tracked.x, -tracked.y);
        let trail = Trail::for_release(release_velocity, now_ms, &self.config);
        log::debug!(
            "fling started: velocity ({:.3}, {:.3}) px/ms, end {:?}",
            release_velocity.x,
            release_velocity.y,
            trail.end_ms()
        );

        self.trail = Some(trail);
        self.last_tick_ms = now_ms;
        self.phase = Phase::Trailing;
        true
    }

    /// Runs one frame: emits the integer scroll delta for the interval
    /// since the previous tick.
    ///
    /// While dragging this drains the movement accumulated from `on_move`;
    /// while trailing it samples the trail over `[last tick, now]`. Either
    /// way the continuous displacement is scaled and inverted per the
    /// configuration, then passed through the delta accumulator so sub-unit
    /// motion carries over to later ticks.
    ///
    /// The tick that finds the trail finished transitions to `Terminated`
    /// and emits nothing, as does any tick after that.
    pub fn tick(&mut self, now_ms: i64) -> (i32, i32) {
        let (dx, dy) = match self.phase {
            Phase::Terminated => return (0, 0),
            Phase::Dragging => {
                let moved = (self.drag_dx, self.drag_dy);
                self.drag_dx = 0.0;
                self.drag_dy = 0.0;
                moved
            }
            Phase::Trailing => {
                let Some(trail) = self.trail.as_ref() else {
                    self.phase = Phase::Terminated;
                    return (0, 0);
                };
                if trail.finished(self.last_tick_ms) {
                    log::debug!("trail finished");
                    self.phase = Phase::Terminated;
                    return (0, 0);
                }
                trail.displacement(self.last_tick_ms, now_ms)
            }
        };

        self.last_tick_ms = now_ms;
        let (dx, dy) = self.scaled(dx, dy);
        self.accumulator.push(dx, dy)
    }

    /// Cancels the session. Idempotent; nothing is emitted.
    pub fn dispose(&mut self) {
        self.phase = Phase::Terminated;
    }

    /// Applies the speed multiplier and per-axis inversion to a continuous
    /// displacement, ahead of the accumulator so the carry stays in emitted
    /// units.
    fn scaled(&self, dx: f64, dy: f64) -> (f64, f64) {
        let scale = self.config.scroll_scale as f64 / 100.0;
        let sx = if self.config.inverse_x { -scale } else { scale };
        let sy = if self.config.inverse_y { -scale } else { scale };
        (dx * sx, dy * sy)
    }
}
