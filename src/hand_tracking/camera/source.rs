use crate::hand_tracking::camera::types::{ConversionParams, PixelFormat};
use crate::hand_tracking::common::error::Result;

/// A camera image borrowed from the capture subsystem.
///
/// Implementations release the underlying image when dropped; a frame must not
/// outlive the call that acquired it.
pub trait RawFrame {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn format(&self) -> PixelFormat;

    /// Size in bytes of the output `convert` will produce for `params`.
    fn converted_size(&self, params: &ConversionParams) -> Result<usize>;

    /// Converts the image into `destination`, which must be exactly
    /// `converted_size(params)` bytes long.
    fn convert(&self, params: &ConversionParams, destination: &mut [u8]) -> Result<()>;
}

/// Source of asynchronously arriving camera images.
pub trait CameraSource {
    type Frame: RawFrame;

    /// Returns the newest available image, or `None` when nothing new arrived.
    /// Never blocks.
    fn try_acquire_latest_image(&mut self) -> Option<Self::Frame>;
}
