//! Optional jitter reduction for projected landmarks.
//!
//! One Euro filter per coordinate. Runs as a separate stage after projection
//! and is disabled unless configured.

use nalgebra::Vector3;
use serde::Deserialize;

use crate::hand_tracking::landmarks::WorldLandmarks;
use crate::hand_tracking::skeleton::topology::JOINT_COUNT;

/// Used when the caller passes a non-positive time step
const FALLBACK_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SmoothingConfig {
    /// Cutoff frequency at rest (Hz); lower is smoother
    #[serde(default = "default_min_cutoff")]
    pub min_cutoff: f32,
    /// Speed coefficient; higher reduces lag on fast motion
    #[serde(default = "default_beta")]
    pub beta: f32,
    /// Cutoff for the derivative estimate (Hz)
    #[serde(default = "default_d_cutoff")]
    pub d_cutoff: f32,
}

fn default_min_cutoff() -> f32 { 1.0 }
fn default_beta() -> f32 { 0.5 }
fn default_d_cutoff() -> f32 { 1.0 }

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_cutoff: default_min_cutoff(),
            beta: default_beta(),
            d_cutoff: default_d_cutoff(),
        }
    }
}

/// alpha = 1 / (1 + tau/Te), tau = 1/(2*pi*fc)
fn smoothing_factor(te: f32, cutoff: f32) -> f32 {
    let r = 2.0 * std::f32::consts::PI * cutoff * te;
    r / (r + 1.0)
}

#[derive(Debug, Clone, Copy, Default)]
struct LowPass {
    prev: Option<f32>,
}

impl LowPass {
    fn filter(&mut self, value: f32, alpha: f32) -> f32 {
        let result = match self.prev {
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
            None => value,
        };
        self.prev = Some(result);
        result
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ScalarFilter {
    x: LowPass,
    dx: LowPass,
    prev_value: Option<f32>,
}

impl ScalarFilter {
    fn filter(&mut self, value: f32, dt: f32, config: &SmoothingConfig) -> f32 {
        let dx = self.prev_value.map_or(0.0, |prev| (value - prev) / dt);
        self.prev_value = Some(value);

        let edx = self.dx.filter(dx, smoothing_factor(dt, config.d_cutoff));
        let cutoff = config.min_cutoff + config.beta * edx.abs();
        self.x.filter(value, smoothing_factor(dt, cutoff))
    }
}

/// One Euro filter over every coordinate of the projected landmarks.
pub struct LandmarkSmoother {
    config: SmoothingConfig,
    filters: [[ScalarFilter; 3]; JOINT_COUNT],
}

impl LandmarkSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            filters: [[ScalarFilter::default(); 3]; JOINT_COUNT],
        }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Filters `points` in place. `dt` is the time since the previous call in
    /// seconds.
    pub fn apply(&mut self, points: &mut WorldLandmarks, dt: f32) {
        let dt = if dt > 0.0 { dt } else { FALLBACK_DT };
        for (point, filters) in points.iter_mut().zip(self.filters.iter_mut()) {
            *point = Vector3::new(
                filters[0].filter(point.x, dt, &self.config),
                filters[1].filter(point.y, dt, &self.config),
                filters[2].filter(point.z, dt, &self.config),
            );
        }
    }

    /// Forgets history; the next frame passes through unfiltered.
    pub fn reset(&mut self) {
        self.filters = [[ScalarFilter::default(); 3]; JOINT_COUNT];
    }
}
