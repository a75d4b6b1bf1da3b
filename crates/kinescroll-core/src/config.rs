//! Per-session scrolling configuration.
//!
//! A [`ScrollConfig`] is an immutable snapshot supplied by the host when a
//! session starts. Out-of-range values are clamped by
//! [`ScrollConfig::normalized`], never rejected: a bad knob degrades the
//! feel, it does not break the gesture.

/// Which axes keep moving after release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlingDirection {
    /// Both axes fling.
    #[default]
    Both,
    /// Only the vertical axis flings; horizontal motion stops at release.
    Vertical,
    /// Release stops all motion immediately.
    None,
}

/// Slowdown curve applied to the release velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlowdownAlgorithm {
    /// Velocity halves every fixed interval; long soft tail.
    #[default]
    Exponential,
    /// Constant deceleration to a standstill; abrupt stop.
    Linear,
}

/// Immutable configuration for one scroll session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Tick rate for the host timer, frames per second.
    pub fps: u32,
    /// Minimum drag duration before a release starts a fling. Shorter drags
    /// terminate without one so the host can treat them as clicks.
    pub activation_ms: i64,
    /// Width of the velocity smoothing window.
    pub sensitivity_window_ms: i64,
    /// Algorithm-specific decay knob, 0..=1000. Higher values slow down
    /// more gently for both curves.
    pub decay_param: i32,
    /// Lengthens the exponential curve's tail of sub-pixel motion before it
    /// counts as finished, 0..=100.
    pub subpixel_param: i32,
    /// Scroll speed multiplier as a percentage, 20..=500 (100 = x1.0).
    pub scroll_scale: u32,
    /// Reverses the emitted horizontal deltas.
    pub inverse_x: bool,
    /// Reverses the emitted vertical deltas.
    pub inverse_y: bool,
    pub direction: FlingDirection,
    pub algorithm: SlowdownAlgorithm,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            activation_ms: 100,
            sensitivity_window_ms: 140,
            decay_param: 500,
            subpixel_param: 35,
            scroll_scale: 100,
            inverse_x: false,
            inverse_y: false,
            direction: FlingDirection::Both,
            algorithm: SlowdownAlgorithm::Exponential,
        }
    }
}

impl ScrollConfig {
    /// Returns a copy with every knob clamped into its documented range.
    ///
    /// `Session::start` runs this on the snapshot it keeps, so a session
    /// always operates on in-range values no matter what the host passed.
    pub fn normalized(self) -> Self {
        Self {
            fps: self.fps.clamp(1, 240),
            activation_ms: self.activation_ms.clamp(0, 1000),
            sensitivity_window_ms: self.sensitivity_window_ms.clamp(0, 300),
            decay_param: self.decay_param.clamp(0, 1000),
            subpixel_param: self.subpixel_param.clamp(0, 100),
            scroll_scale: self.scroll_scale.clamp(20, 500),
            ..self
        }
    }

    /// Milliseconds between host timer ticks, at least 1.
    pub fn frame_period_ms(&self) -> i64 {
        (1000 / self.fps.max(1) as i64).max(1)
    }
}

// Mapping between the centered speed slider (0..=100, 50 = x1.0) and the
// stored scale percentage (20..=500). Settings UIs present the slider; the
// session only ever sees the percentage.

/// Maps a slider position (0..=100) to a scroll scale percentage.
///
/// Left half interpolates x0.2..x1.0, right half x1.0..x5.0.
pub fn slider_to_scale(slider: u32) -> u32 {
    let slider = slider.min(100);
    if slider < 50 {
        20 + (slider as f64 / 50.0 * 80.0) as u32
    } else {
        100 + ((slider - 50) as f64 / 50.0 * 400.0) as u32
    }
}

/// Maps a scroll scale percentage (20..=500) back to a slider position.
pub fn scale_to_slider(scale: u32) -> u32 {
    let scale = scale.clamp(20, 500);
    if scale < 100 {
        ((scale - 20) as f64 / 80.0 * 50.0) as u32
    } else {
        50 + ((scale - 100) as f64 / 400.0 * 50.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_every_knob() {
        let config = ScrollConfig {
            fps: 0,
            activation_ms: -5,
            sensitivity_window_ms: 10_000,
            decay_param: 2_000,
            subpixel_param: -1,
            scroll_scale: 1_000,
            ..ScrollConfig::default()
        }
        .normalized();

        assert_eq!(config.fps, 1);
        assert_eq!(config.activation_ms, 0);
        assert_eq!(config.sensitivity_window_ms, 300);
        assert_eq!(config.decay_param, 1000);
        assert_eq!(config.subpixel_param, 0);
        assert_eq!(config.scroll_scale, 500);
    }

    #[test]
    fn normalized_keeps_in_range_values() {
        let config = ScrollConfig::default();
        assert_eq!(config.normalized(), config);
    }

    #[test]
    fn frame_period_follows_fps() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.frame_period_ms(), 16);

        config.fps = 20;
        assert_eq!(config.frame_period_ms(), 50);

        config.fps = 240;
        assert_eq!(config.frame_period_ms(), 4);
    }

    #[test]
    fn slider_mapping_hits_anchor_points() {
        assert_eq!(slider_to_scale(0), 20);
        assert_eq!(slider_to_scale(25), 60);
        assert_eq!(slider_to_scale(50), 100);
        assert_eq!(slider_to_scale(75), 300);
        assert_eq!(slider_to_scale(100), 500);

        assert_eq!(scale_to_slider(20), 0);
        assert_eq!(scale_to_slider(100), 50);
        assert_eq!(scale_to_slider(500), 100);
    }

    #[test]
    fn slider_mapping_round_trips_at_anchors() {
        for slider in [0, 25, 50, 75, 100] {
            assert_eq!(scale_to_slider(slider_to_scale(slider)), slider);
        }
    }
}
