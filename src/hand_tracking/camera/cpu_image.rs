use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hand_tracking::camera::cpu_convert::convert_to_rgba;
use crate::hand_tracking::camera::source::RawFrame;
use crate::hand_tracking::camera::types::{ConversionParams, PixelFormat};
use crate::hand_tracking::common::error::{PipelineError, Result};

/// Camera image held in host memory.
///
/// When acquired through a [`QueuedCameraSource`](super::QueuedCameraSource)
/// the image counts itself as live until dropped.
#[derive(Debug)]
pub struct CpuImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
    live: Option<Arc<AtomicUsize>>,
}

impl CpuImage {
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(PipelineError::ConversionSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            data,
            live: None,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn track(mut self, live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        self.live = Some(live);
        self
    }
}

impl RawFrame for CpuImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn converted_size(&self, params: &ConversionParams) -> Result<usize> {
        Ok(params.output_len())
    }

    fn convert(&self, params: &ConversionParams, destination: &mut [u8]) -> Result<()> {
        convert_to_rgba(
            &self.data,
            self.width,
            self.height,
            self.format,
            params,
            destination,
        )
    }
}

impl Drop for CpuImage {
    fn drop(&mut self) {
        if let Some(live) = self.live.take() {
            live.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
