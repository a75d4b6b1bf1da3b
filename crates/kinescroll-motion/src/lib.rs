//! Trail models: time-indexed displacement functions for fling slowdown.
//!
//! A [`Trail`] is built once at release time from the velocity at that
//! instant and is never mutated afterward. It answers two questions for the
//! ticking session: how far did the content move over `[from, to]`, and is
//! the motion over yet. Evaluation is always clamped into the model's
//! domain so late or early ticks contribute zero displacement instead of
//! oscillation artifacts.
//!
//! The set of shapes is closed: `{none, exponential, linear}` curves,
//! optionally filtered to the vertical axis.

mod exponential;
mod linear;

pub use exponential::ExponentialSlowdown;
pub use linear::LinearSlowdown;

use kinescroll_core::{FlingDirection, ScrollConfig, SlowdownAlgorithm, Velocity};

pub(crate) const LN_2: f64 = std::f64::consts::LN_2;

/// Windowed displacement along one axis: clamp the interval into the
/// curve's domain, then difference the closed-form distance. An interval
/// that is empty after clamping contributes nothing.
pub(crate) fn windowed_axis(
    distance: impl Fn(f64) -> f64,
    init_ms: i64,
    end_ms: i64,
    from_ms: i64,
    to_ms: i64,
) -> f64 {
    let from = from_ms.clamp(init_ms, end_ms) - init_ms;
    let to = to_ms.clamp(init_ms, end_ms) - init_ms;
    if from == to {
        return 0.0;
    }
    distance(to as f64) - distance(from as f64)
}

/// The slowdown curve of a trail.
#[derive(Clone, Copy, Debug)]
enum Curve {
    /// Already over; never moves. Also stands in for a drag that produced
    /// no fling.
    None,
    Exponential(ExponentialSlowdown),
    Linear(LinearSlowdown),
}

/// A fling's motion model, frozen at release time.
#[derive(Clone, Copy, Debug)]
pub struct Trail {
    curve: Curve,
    /// Forces the horizontal displacement to zero while delegating the
    /// vertical axis and the finish check unchanged.
    vertical_only: bool,
}

impl Trail {
    /// A trail that is already finished and never moves.
    pub fn none() -> Self {
        Self {
            curve: Curve::None,
            vertical_only: false,
        }
    }

    pub fn exponential(
        velocity: Velocity,
        init_ms: i64,
        decay_param: i32,
        subpixel_param: i32,
    ) -> Self {
        Self {
            curve: Curve::Exponential(ExponentialSlowdown::new(
                velocity,
                init_ms,
                decay_param,
                subpixel_param,
            )),
            vertical_only: false,
        }
    }

    pub fn linear(velocity: Velocity, init_ms: i64, decay_param: i32) -> Self {
        Self {
            curve: Curve::Linear(LinearSlowdown::new(velocity, init_ms, decay_param)),
            vertical_only: false,
        }
    }

    /// Builds the configured trail for a release velocity, applying the
    /// direction filter.
    pub fn for_release(velocity: Velocity, init_ms: i64, config: &ScrollConfig) -> Self {
        if config.direction == FlingDirection::None {
            return Self::none();
        }

        let mut trail = match config.algorithm {
            SlowdownAlgorithm::Exponential => Self::exponential(
                velocity,
                init_ms,
                config.decay_param,
                config.subpixel_param,
            ),
            SlowdownAlgorithm::Linear => Self::linear(velocity, init_ms, config.decay_param),
        };
        trail.vertical_only = config.direction == FlingDirection::Vertical;
        trail
    }

    /// Whether the motion has fully decayed as of `from_ms`.
    pub fn finished(&self, from_ms: i64) -> bool {
        match &self.curve {
            Curve::None => true,
            Curve::Exponential(curve) => curve.finished(from_ms),
            Curve::Linear(curve) => curve.finished(from_ms),
        }
    }

    /// Net continuous displacement over `[from_ms, to_ms]`.
    pub fn displacement(&self, from_ms: i64, to_ms: i64) -> (f64, f64) {
        let (dx, dy) = match &self.curve {
            Curve::None => (0.0, 0.0),
            Curve::Exponential(curve) => curve.displacement(from_ms, to_ms),
            Curve::Linear(curve) => curve.displacement(from_ms, to_ms),
        };
        if self.vertical_only {
            (0.0, dy)
        } else {
            (dx, dy)
        }
    }

    /// The timestamp at which the motion is over, if the trail moves at all.
    pub fn end_ms(&self) -> Option<i64> {
        match &self.curve {
            Curve::None => None,
            Curve::Exponential(curve) => Some(curve.end_ms()),
            Curve::Linear(curve) => Some(curve.end_ms()),
        }
    }
}
