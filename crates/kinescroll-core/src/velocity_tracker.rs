//! Windowed velocity estimation for fling gestures.

use crate::geometry::{PointerSample, Velocity};

/// 2D pointer velocity tracker with a trailing blend window.
///
/// Each accepted sample contributes the raw instantaneous velocity between
/// it and the previous sample. The estimate is a weighted average over a
/// trailing window of `window_ms`, anchored no earlier than the first
/// sample of the drag: the previous estimate keeps weight
/// `(window_left / window_span)²` and the new raw velocity takes the
/// complement. When the window is shorter than the inter-sample gap the
/// estimate is replaced outright.
///
/// The quadratic weighting is deliberate. It lets contributions fade
/// smoothly at the window edge instead of flattening jitter, and it is what
/// gives flings their feel; treat it as a fixed empirical constant rather
/// than something to re-derive.
///
/// O(1) per call, no history buffer.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    drag_start_ms: i64,
    window_ms: i64,
    last: PointerSample,
    velocity: Velocity,
}

impl VelocityTracker {
    /// Starts tracking at the first sample of a drag.
    pub fn new(first: PointerSample, window_ms: i64) -> Self {
        Self {
            drag_start_ms: first.timestamp_ms,
            window_ms,
            last: first,
            velocity: Velocity::ZERO,
        }
    }

    /// Feeds one pointer sample.
    ///
    /// Samples that do not advance time are discarded; this guards against
    /// non-monotonic clocks and duplicate events.
    pub fn observe(&mut self, sample: PointerSample) {
        let delta_ms = sample.timestamp_ms - self.last.timestamp_ms;
        if delta_ms <= 0 {
            log::trace!(
                "ignoring sample at {} ms, not after {} ms",
                sample.timestamp_ms,
                self.last.timestamp_ms
            );
            return;
        }

        let raw_x = (sample.position.x - self.last.position.x) / delta_ms as f64;
        let raw_y = (sample.position.y - self.last.position.y) / delta_ms as f64;

        let window_start = self
            .drag_start_ms
            .max(sample.timestamp_ms - self.window_ms);
        if window_start >= self.last.timestamp_ms {
            // Window shorter than the inter-sample gap: replace outright.
            self.velocity = Velocity { x: raw_x, y: raw_y };
        } else {
            let window_span = (sample.timestamp_ms - window_start) as f64;
            let window_left = (self.last.timestamp_ms - window_start) as f64;
            let old_weight = (window_left / window_span) * (window_left / window_span);
            let new_weight = 1.0 - old_weight;
            self.velocity = Velocity {
                x: old_weight * self.velocity.x + new_weight * raw_x,
                y: old_weight * self.velocity.y + new_weight * raw_y,
            };
        }

        self.last = sample;
    }

    /// Current smoothed velocity in pixels per millisecond.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Timestamp of the last accepted sample.
    pub fn last_timestamp_ms(&self) -> i64 {
        self.last.timestamp_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_motion_yields_zero_velocity() {
        let tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 140);
        assert_eq!(tracker.velocity(), Velocity::ZERO);
    }

    #[test]
    fn window_shorter_than_gap_replaces_estimate() {
        // Two samples 100 ms apart with a 140 ms window anchored at the
        // drag start: the window start coincides with the previous sample,
        // so the raw instantaneous velocity wins outright.
        let mut tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 140);
        tracker.observe(PointerSample::new(10.0, 0.0, 100));

        assert_eq!(tracker.velocity().x, 0.1);
        assert_eq!(tracker.velocity().y, 0.0);
    }

    #[test]
    fn blends_with_quadratic_window_weight() {
        let mut tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 140);
        tracker.observe(PointerSample::new(10.0, 0.0, 100));
        tracker.observe(PointerSample::new(30.0, 0.0, 150));

        // Window [10, 150]: span 140, left 90. The previous estimate (0.1)
        // keeps (90/140)² of its weight; the raw velocity over the last gap
        // is 20/50 = 0.4.
        let old_weight = (90.0f64 / 140.0) * (90.0 / 140.0);
        let expected = old_weight * 0.1 + (1.0 - old_weight) * 0.4;
        assert!((tracker.velocity().x - expected).abs() < 1e-12);
    }

    #[test]
    fn window_anchors_at_drag_start() {
        // A window far wider than the drag so far: the anchor falls back to
        // the drag start rather than reaching before it.
        let mut tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 10_000);
        tracker.observe(PointerSample::new(10.0, 0.0, 100));
        tracker.observe(PointerSample::new(40.0, 0.0, 200));

        // Window [0, 200]: span 200, left 100 ⇒ old weight 0.25.
        let expected = 0.25 * 0.1 + 0.75 * 0.3;
        assert!((tracker.velocity().x - expected).abs() < 1e-12);
    }

    #[test]
    fn ignores_samples_that_do_not_advance_time() {
        let mut tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 140);
        tracker.observe(PointerSample::new(10.0, 0.0, 100));
        let before = tracker.velocity();

        tracker.observe(PointerSample::new(500.0, 500.0, 100));
        tracker.observe(PointerSample::new(500.0, 500.0, 50));

        assert_eq!(tracker.velocity(), before);
        assert_eq!(tracker.last_timestamp_ms(), 100);
    }

    #[test]
    fn tracks_both_axes_independently() {
        let mut tracker = VelocityTracker::new(PointerSample::new(0.0, 0.0, 0), 140);
        tracker.observe(PointerSample::new(10.0, -20.0, 100));

        assert_eq!(tracker.velocity().x, 0.1);
        assert_eq!(tracker.velocity().y, -0.2);
    }
}
