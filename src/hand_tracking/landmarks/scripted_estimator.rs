use tracing::trace;

use crate::hand_tracking::common::error::{PipelineError, Result};
use crate::hand_tracking::landmarks::estimator::HandLandmarkEstimator;
use crate::hand_tracking::landmarks::types::CropRegion;
use crate::hand_tracking::texture::ConvertedTexture;

/// Estimator that replays prepared landmark buffers in a loop.
///
/// Stands in for the real engine in the demo binary, benches and tests.
pub struct ScriptedEstimator {
    frames: Vec<Vec<f32>>,
    stride: usize,
    next: usize,
    current: Vec<f32>,
    crop: Option<CropRegion>,
    processed: u64,
}

impl ScriptedEstimator {
    pub fn new(frames: Vec<Vec<f32>>, stride: usize) -> Self {
        Self {
            frames,
            stride,
            next: 0,
            current: Vec::new(),
            crop: None,
            processed: 0,
        }
    }

    pub fn with_crop_region(mut self, crop: CropRegion) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Number of images processed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}

impl HandLandmarkEstimator for ScriptedEstimator {
    fn process_image(&mut self, input: &ConvertedTexture) -> Result<()> {
        if self.frames.is_empty() {
            return Err(PipelineError::Estimator(
                "no scripted landmark frames".to_string(),
            ));
        }

        trace!(
            width = input.width(),
            height = input.height(),
            frame = self.next,
            "Replaying scripted landmarks"
        );

        self.current.clone_from(&self.frames[self.next]);
        self.next = (self.next + 1) % self.frames.len();
        self.processed += 1;
        Ok(())
    }

    fn key_point_buffer(&self) -> &[f32] {
        &self.current
    }

    fn key_point_stride(&self) -> usize {
        self.stride
    }

    fn crop_region(&self) -> Option<&CropRegion> {
        self.crop.as_ref()
    }
}
