//! Texture types

use crate::hand_tracking::common::error::{PipelineError, Result};

/// Bytes per RGBA8 texel
pub const RGBA8_BYTES_PER_PIXEL: usize = 4;

/// Persistent RGBA8 image that converted camera frames are uploaded into.
///
/// Rows are stored bottom-up, matching the GPU texture origin.
#[derive(Debug, Clone)]
pub struct ConvertedTexture {
    width: u32,
    height: u32,
    data: Vec<u8>,
    upload_count: u64,
}

impl ConvertedTexture {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        Ok(Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * RGBA8_BYTES_PER_PIXEL],
            upload_count: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of successful uploads since creation.
    pub fn upload_count(&self) -> u64 {
        self.upload_count
    }

    /// Texel at `(x, y)` in texture space (row 0 is the bottom row).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * RGBA8_BYTES_PER_PIXEL;
        let mut texel = [0u8; 4];
        texel.copy_from_slice(&self.data[offset..offset + RGBA8_BYTES_PER_PIXEL]);
        Some(texel)
    }

    /// Replaces the texture contents with `bytes`, which must cover the whole
    /// texture.
    pub fn load_raw_texture_data(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != self.data.len() {
            return Err(PipelineError::TextureSizeMismatch {
                expected: self.data.len(),
                actual: bytes.len(),
            });
        }

        self.data.copy_from_slice(bytes);
        self.upload_count += 1;
        Ok(())
    }
}
