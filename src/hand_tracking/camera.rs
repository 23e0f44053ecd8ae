//! Camera frame acquisition module
//!
//! This module describes the camera source contract consumed by the pipeline,
//! together with a CPU implementation of frame conversion and a queued source
//! that any producer thread can feed.

mod source;
mod cpu_convert;
mod cpu_image;
mod queued_source;
pub mod types;

pub use source::{CameraSource, RawFrame};
pub use cpu_convert::convert_to_rgba;
pub use cpu_image::CpuImage;
pub use queued_source::{FrameFeeder, QueuedCameraSource};
pub use types::{ConversionParams, PixelFormat, RectInt, Transformation};
