//! Linear slowdown: constant deceleration to a standstill.

use kinescroll_core::Velocity;

use crate::windowed_axis;

/// Linear slowdown curve.
///
/// Velocity decays as `v(t) = v0 − p·t·sign(v0)` with the deceleration `p`
/// mapped from the 0..=1000 decay knob (higher knob = gentler stop, between
/// 0.008 and 0.001 px/ms²). The distance integral is
/// `s(t) = v0·t − sign(v0)·p·t²/2`.
///
/// Each axis reaches zero at its own `|v0|/p`. The trail as a whole runs
/// until the slower axis stops, while each axis clamps its own evaluation
/// to its own zero time so the faster axis never reverses direction.
#[derive(Clone, Copy, Debug)]
pub struct LinearSlowdown {
    vx: f64,
    vy: f64,
    init_ms: i64,
    /// Deceleration magnitude in px/ms².
    deceleration: f64,
    end_x_ms: i64,
    end_y_ms: i64,
}

impl LinearSlowdown {
    pub fn new(velocity: Velocity, init_ms: i64, decay_param: i32) -> Self {
        let knob = decay_param.clamp(0, 1000) as f64;
        let p = 0.001 * knob / 1000.0 + 0.008 * (1000.0 - knob) / 1000.0;

        Self {
            vx: velocity.x,
            vy: velocity.y,
            init_ms,
            deceleration: p,
            end_x_ms: init_ms + (velocity.x.abs() / p) as i64,
            end_y_ms: init_ms + (velocity.y.abs() / p) as i64,
        }
    }

    fn distance(&self, t: f64, v0: f64) -> f64 {
        v0 * t - v0.signum() * self.deceleration * t * t / 2.0
    }

    /// The later of the two per-axis zero-crossing times; the finish check
    /// waits for the slower axis even after the faster one has stopped.
    pub fn end_ms(&self) -> i64 {
        self.end_x_ms.max(self.end_y_ms)
    }

    pub fn finished(&self, from_ms: i64) -> bool {
        self.end_ms() <= from_ms
    }

    pub fn displacement(&self, from_ms: i64, to_ms: i64) -> (f64, f64) {
        (
            windowed_axis(
                |t| self.distance(t, self.vx),
                self.init_ms,
                self.end_x_ms,
                from_ms,
                to_ms,
            ),
            windowed_axis(
                |t| self.distance(t, self.vy),
                self.init_ms,
                self.end_y_ms,
                from_ms,
                to_ms,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_knob_maps_to_the_deceleration_range() {
        // Knob 0 ⇒ hardest stop, knob 1000 ⇒ gentlest.
        let hard = LinearSlowdown::new(Velocity::new(1.0, 0.0), 0, 0);
        let gentle = LinearSlowdown::new(Velocity::new(1.0, 0.0), 0, 1000);

        assert_eq!(hard.end_ms(), (1.0f64 / 0.008) as i64);
        assert_eq!(gentle.end_ms(), (1.0f64 / 0.001) as i64);
        assert!(gentle.end_ms() > hard.end_ms());
    }

    #[test]
    fn zero_velocity_is_immediately_finished() {
        let curve = LinearSlowdown::new(Velocity::ZERO, 250, 500);

        assert_eq!(curve.end_ms(), 250);
        assert!(curve.finished(250));
        assert_eq!(curve.displacement(250, 5_000), (0.0, 0.0));
    }

    #[test]
    fn finish_waits_for_the_slower_axis() {
        // X stops well before Y; the trail is only over when Y is.
        let curve = LinearSlowdown::new(Velocity::new(0.5, 2.0), 0, 500);
        let end_x = (0.5f64 / 0.0045) as i64;
        let end_y = (2.0f64 / 0.0045) as i64;

        assert_eq!(curve.end_ms(), end_y);
        assert!(!curve.finished(end_x));
        assert!(!curve.finished(end_y - 1));
        assert!(curve.finished(end_y));
    }

    #[test]
    fn stopped_axis_never_reverses() {
        let curve = LinearSlowdown::new(Velocity::new(0.5, 2.0), 0, 500);
        let end_x = (0.5f64 / 0.0045) as i64;

        // After its own zero crossing the X axis contributes nothing, while
        // Y keeps moving.
        let (dx, dy) = curve.displacement(end_x, end_x + 100);
        assert_eq!(dx, 0.0);
        assert!(dy > 0.0);

        // And the total X displacement equals the clamped closed form.
        let (total_x, _) = curve.displacement(0, curve.end_ms());
        let expected = 0.5 * end_x as f64 - 0.0045 * (end_x as f64).powi(2) / 2.0;
        assert!((total_x - expected).abs() < 1e-9);
    }

    #[test]
    fn displacement_decays_monotonically() {
        let curve = LinearSlowdown::new(Velocity::new(-1.2, 0.0), 0, 300);

        let mut previous = f64::INFINITY;
        let mut t = 0;
        while !curve.finished(t) {
            let (dx, _) = curve.displacement(t, t + 16);
            assert!(dx.abs() <= previous);
            assert!(dx <= 0.0);
            previous = dx.abs();
            t += 16;
        }
    }
}
