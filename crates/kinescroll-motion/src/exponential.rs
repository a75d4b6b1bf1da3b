//! Exponential slowdown: velocity halves every fixed interval.

use kinescroll_core::Velocity;

use crate::{windowed_axis, LN_2};

/// Exponential slowdown curve.
///
/// Velocity decays as `v(t) = v0 / 2^(t/p)`; the closed-form distance is
/// `s(t) = −v0·p/ln2 / 2^(t/p)`, so a windowed displacement is the
/// difference of two evaluations.
///
/// The motion counts as over once the speed drops below the minimal
/// considerable speed `1/2^n`. Solving `1/2^n = v0 / 2^(t/p)` gives
/// `t = p·(n + log2(v0))`, with `log2(v0) = 0.5·ln(vx² + vy²)/ln2` for the
/// combined-axis speed. Both axes share that end time so diagonal flings
/// stay synchronized.
#[derive(Clone, Copy, Debug)]
pub struct ExponentialSlowdown {
    vx: f64,
    vy: f64,
    init_ms: i64,
    /// Halving period `p` in milliseconds.
    half_life_ms: f64,
    end_ms: i64,
}

impl ExponentialSlowdown {
    /// `decay_param` is the 0..=1000 decay knob (`p = max(decay, 0) + 1`);
    /// `subpixel_param` is the 0..=100 tail knob (`n = (subpixel + 20)/10`),
    /// where higher values keep the trail of barely-visible single-pixel
    /// motion alive longer.
    pub fn new(velocity: Velocity, init_ms: i64, decay_param: i32, subpixel_param: i32) -> Self {
        let p = (decay_param.max(0) + 1) as f64;
        let n = (subpixel_param.clamp(0, 100) + 20) as f64 / 10.0;

        let speed_sq = velocity.x * velocity.x + velocity.y * velocity.y;
        // t = p·(n + log2(|v0|)); for |v0| = 0 the logarithm diverges to
        // −∞ and the max() collapses the trail to immediately finished.
        let run_ms = (p * (n + 0.5 * speed_sq.ln() / LN_2)).max(0.0);

        Self {
            vx: velocity.x,
            vy: velocity.y,
            init_ms,
            half_life_ms: p,
            end_ms: init_ms + run_ms as i64,
        }
    }

    fn distance(&self, t: f64, v0: f64) -> f64 {
        -v0 * self.half_life_ms / LN_2 / 2f64.powf(t / self.half_life_ms)
    }

    pub fn finished(&self, from_ms: i64) -> bool {
        self.end_ms <= from_ms
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    pub fn displacement(&self, from_ms: i64, to_ms: i64) -> (f64, f64) {
        (
            windowed_axis(
                |t| self.distance(t, self.vx),
                self.init_ms,
                self.end_ms,
                from_ms,
                to_ms,
            ),
            windowed_axis(
                |t| self.distance(t, self.vy),
                self.init_ms,
                self.end_ms,
                from_ms,
                to_ms,
            ),
        )
    }
}
