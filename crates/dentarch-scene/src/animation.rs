//! Per-frame scale animation.
//!
//! Every animated quantity is advanced by an explicit, pure step function:
//! no hidden timers, no captured mutable state. Targets are recomputed from
//! current props each frame and approached by exponential smoothing so
//! selection changes never pop visually.

/// Scale of an unselected, unhovered tooth.
pub const REST_SCALE: f64 = 1.0;
/// Scale target while hovered.
pub const HOVER_SCALE: f64 = 1.1;
/// Scale target while selected.
pub const ACTIVE_SCALE: f64 = 1.2;
/// Fraction of the remaining distance closed per frame.
pub const SCALE_SMOOTHING: f64 = 0.1;
/// Peak deviation of the finding pulse.
pub const PULSE_AMPLITUDE: f64 = 0.05;
/// Period of the finding pulse, in seconds.
pub const PULSE_PERIOD: f64 = 2.0;

/// One smoothing step: move `current` toward `target` by `factor` of the
/// remaining distance.
pub fn step_scale(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// The sinusoidal pulse contribution at a given elapsed time.
pub fn pulse_offset(elapsed: f64) -> f64 {
    let omega = std::f64::consts::TAU / PULSE_PERIOD;
    PULSE_AMPLITUDE * (elapsed * omega).sin()
}

/// Smoothed scale state for one tooth node.
///
/// The selection target and the finding pulse are additive contributions to
/// a single combined per-frame target; one smoothing step is applied toward
/// it. O(1) per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleAnimator {
    scale: f64,
    elapsed: f64,
}

impl ScaleAnimator {
    /// Start at rest scale with phase zero.
    pub fn new() -> Self {
        Self {
            scale: REST_SCALE,
            elapsed: 0.0,
        }
    }

    /// The current smoothed scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Advance one frame: accumulate pulse phase, combine the targets, and
    /// smooth toward the result. Returns the new scale.
    pub fn advance(&mut self, dt: f64, base_target: f64, pulsing: bool) -> f64 {
        self.elapsed += dt;
        let pulse = if pulsing {
            pulse_offset(self.elapsed)
        } else {
            0.0
        };
        self.scale = step_scale(self.scale, base_target + pulse, SCALE_SMOOTHING);
        self.scale
    }
}

impl Default for ScaleAnimator {
    fn default() -> Self {
        Self::new()
    }
}
