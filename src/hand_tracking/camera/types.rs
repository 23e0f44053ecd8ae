//! Camera image and conversion types

/// Pixel layouts a camera may deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit R, G, B, A
    Rgba32,
    /// 8-bit B, G, R, A
    Bgra32,
    /// 8-bit R, G, B
    Rgb24,
    /// Single 8-bit luminance channel
    Gray8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba32 | PixelFormat::Bgra32 => 4,
            PixelFormat::Rgb24 => 3,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// Integer rectangle in source image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectInt {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectInt {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Geometric transformation applied during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    None,
    /// Flip rows so the first output row is the last source row
    MirrorY,
}

/// Parameters for converting a raw camera frame into a texture upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionParams {
    /// Region of the source image to read
    pub input_rect: RectInt,
    /// Output size as (width, height)
    pub output_dimensions: (u32, u32),
    /// Target pixel layout
    pub output_format: PixelFormat,
    pub transformation: Transformation,
}

impl ConversionParams {
    /// Full-frame conversion to RGBA8, mirrored vertically to match the
    /// bottom-up row order of GPU textures.
    pub fn full_frame_rgba(width: u32, height: u32) -> Self {
        Self {
            input_rect: RectInt::new(0, 0, width, height),
            output_dimensions: (width, height),
            output_format: PixelFormat::Rgba32,
            transformation: Transformation::MirrorY,
        }
    }

    /// Number of bytes the conversion writes.
    pub fn output_len(&self) -> usize {
        let (w, h) = self.output_dimensions;
        w as usize * h as usize * self.output_format.bytes_per_pixel()
    }
}
