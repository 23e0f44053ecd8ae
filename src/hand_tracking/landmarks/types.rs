//! Landmark data types

use nalgebra::Vector3;

use crate::hand_tracking::common::error::{PipelineError, Result};
use crate::hand_tracking::skeleton::topology::JOINT_COUNT;

/// One estimated key point in viewport-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Present when the engine reports a third component
    pub z: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None }
    }
}

/// The full set of hand landmarks for one frame, always [`JOINT_COUNT`] long.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    landmarks: [Landmark; JOINT_COUNT],
}

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; JOINT_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Reads a flat engine buffer holding `stride` floats per landmark
    /// (`x, y` and optionally `z` and a fourth component).
    pub fn from_buffer(buffer: &[f32], stride: usize) -> Result<Self> {
        if !(2..=4).contains(&stride) {
            return Err(PipelineError::LandmarkStride(stride));
        }

        if buffer.len() % stride != 0 || buffer.len() / stride != JOINT_COUNT {
            return Err(PipelineError::LandmarkCount {
                expected: JOINT_COUNT,
                actual: buffer.len() / stride,
            });
        }

        let mut landmarks = [Landmark::new(0.0, 0.0); JOINT_COUNT];
        for (landmark, entry) in landmarks.iter_mut().zip(buffer.chunks_exact(stride)) {
            *landmark = Landmark {
                x: entry[0],
                y: entry[1],
                z: entry.get(2).copied(),
            };
        }

        Ok(Self { landmarks })
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

/// Local-space landmark positions, indexed like the landmark set
pub type WorldLandmarks = [Vector3<f32>; JOINT_COUNT];

/// Crop image the engine analysed, used only by the debug overlay
#[derive(Debug, Clone, PartialEq)]
pub struct CropRegion {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGB floats
    pub pixels: Vec<f32>,
}
