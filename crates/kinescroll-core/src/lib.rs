//! Primitives for kinetic scrolling: pointer samples, per-session
//! configuration, monotonic clocks, windowed velocity tracking, and
//! fractional-carry delta accumulation.
//!
//! Everything here is plain synchronous CPU work on caller-supplied data.
//! The gesture lifecycle that sequences these pieces lives in
//! `kinescroll-gesture`; the slowdown curves live in `kinescroll-motion`.

pub mod accumulator;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod velocity_tracker;

pub use accumulator::DeltaAccumulator;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FlingDirection, ScrollConfig, SlowdownAlgorithm};
pub use geometry::{Point, PointerSample, Velocity};
pub use velocity_tracker::VelocityTracker;
