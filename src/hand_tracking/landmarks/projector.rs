//! Reconstruction of viewport landmarks into skeleton-local 3D points.
//!
//! Depth is a pseudo-depth: the apparent size of the hand picks a point
//! between `min_depth` and `max_depth`, larger hands landing closer.

use nalgebra::Vector3;
use serde::Deserialize;
use tracing::trace;

use crate::hand_tracking::calibration::CalibrationSettings;
use crate::hand_tracking::landmarks::types::{LandmarkSet, WorldLandmarks};
use crate::hand_tracking::skeleton::topology::JOINT_COUNT;

/// How the camera is mounted relative to the default pipeline orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountOrientation {
    /// Handheld or front camera; landmarks are used as-is
    #[default]
    Handheld,
    /// AR device camera, rotated a quarter turn about the forward axis
    ArMounted,
}

/// Axis-aligned bounds of a landmark set in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

pub fn bounding_box(landmarks: &LandmarkSet) -> BoundingBox {
    let init = BoundingBox {
        min_x: f32::MAX,
        min_y: f32::MAX,
        max_x: f32::MIN,
        max_y: f32::MIN,
    };

    landmarks.iter().fold(init, |b, l| BoundingBox {
        min_x: b.min_x.min(l.x),
        min_y: b.min_y.min(l.y),
        max_x: b.max_x.max(l.x),
        max_y: b.max_y.max(l.y),
    })
}

/// Larger side of the bounding box. Not clamped: landmarks outside the
/// viewport can push it above 1.
pub fn hand_size(bounds: &BoundingBox) -> f32 {
    bounds.width().max(bounds.height())
}

/// Unclamped linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn pseudo_depth(hand_size: f32, settings: &CalibrationSettings) -> f32 {
    lerp(settings.min_depth, settings.max_depth, 1.0 - hand_size) * settings.depth_scale
}

/// Quarter turn about the forward axis: `(x, y) -> (-y, x)`.
#[inline]
pub fn rotate_ar_mounted(x: f32, y: f32) -> (f32, f32) {
    (-y, x)
}

/// Stateless landmark-to-local-space projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandmarkWorldProjector {
    mount: MountOrientation,
}

impl LandmarkWorldProjector {
    pub fn new(mount: MountOrientation) -> Self {
        Self { mount }
    }

    pub fn mount(&self) -> MountOrientation {
        self.mount
    }

    pub fn project(&self, landmarks: &LandmarkSet, settings: &CalibrationSettings) -> WorldLandmarks {
        let bounds = bounding_box(landmarks);
        let size = hand_size(&bounds);
        let depth = pseudo_depth(size, settings);
        let offset = Vector3::new(settings.x_offset, settings.y_offset, settings.z_offset);

        trace!(hand_size = size, depth, "Projecting landmarks");

        let mut points = [Vector3::zeros(); JOINT_COUNT];
        for (point, landmark) in points.iter_mut().zip(landmarks.iter()) {
            let (mut x, mut y) = (landmark.x - 0.5, landmark.y - 0.5);
            if self.mount == MountOrientation::ArMounted {
                (x, y) = rotate_ar_mounted(x, y);
            }
            *point = Vector3::new(x, y, depth) + offset;
        }
        points
    }
}
