use crate::hand_tracking::common::error::Result;
use crate::hand_tracking::landmarks::types::CropRegion;
use crate::hand_tracking::texture::ConvertedTexture;

/// External hand pose estimation engine.
///
/// Consumes one texture per display frame and exposes its results as flat
/// buffers; the pipeline never looks inside the model.
pub trait HandLandmarkEstimator {
    fn process_image(&mut self, input: &ConvertedTexture) -> Result<()>;

    /// Landmarks from the last `process_image`, `key_point_stride` floats each.
    fn key_point_buffer(&self) -> &[f32];

    fn key_point_stride(&self) -> usize {
        4
    }

    /// Region the engine cropped for its last run, if it exposes one.
    fn crop_region(&self) -> Option<&CropRegion> {
        None
    }
}
