//! CPU conversion of camera images into RGBA8 texture data.

use tracing::trace;

use crate::hand_tracking::camera::types::{ConversionParams, PixelFormat, Transformation};
use crate::hand_tracking::common::error::{PipelineError, Result};

/// Converts `source` (tightly packed, `width` x `height` in `format`) into
/// RGBA8 according to `params`.
///
/// Only the RGBA8 output format is supported and the output dimensions must
/// match the input rectangle; resampling is left to the camera subsystem.
pub fn convert_to_rgba(
    source: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    params: &ConversionParams,
    destination: &mut [u8],
) -> Result<()> {
    validate(width, height, format, params)?;

    let src_bpp = format.bytes_per_pixel();
    let expected_src = width as usize * height as usize * src_bpp;
    if source.len() != expected_src {
        return Err(PipelineError::ConversionSizeMismatch {
            expected: expected_src,
            actual: source.len(),
        });
    }

    let expected_dst = params.output_len();
    if destination.len() != expected_dst {
        return Err(PipelineError::ConversionSizeMismatch {
            expected: expected_dst,
            actual: destination.len(),
        });
    }

    let rect = params.input_rect;
    let src_stride = width as usize * src_bpp;
    let dst_stride = rect.width as usize * 4;
    let rows = rect.height as usize;

    trace!(
        "Converting {:?} {}x{} rect to RGBA8 ({:?})",
        format, rect.width, rect.height, params.transformation
    );

    for row in 0..rows {
        let src_row = rect.y as usize + row;
        let dst_row = match params.transformation {
            Transformation::None => row,
            Transformation::MirrorY => rows - 1 - row,
        };

        let src_start = src_row * src_stride + rect.x as usize * src_bpp;
        let src = &source[src_start..src_start + rect.width as usize * src_bpp];
        let dst = &mut destination[dst_row * dst_stride..(dst_row + 1) * dst_stride];

        for (pixel, out) in src.chunks_exact(src_bpp).zip(dst.chunks_exact_mut(4)) {
            out.copy_from_slice(&to_rgba(format, pixel));
        }
    }

    Ok(())
}

fn validate(width: u32, height: u32, format: PixelFormat, params: &ConversionParams) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidDimensions(width, height));
    }

    if params.output_format != PixelFormat::Rgba32 {
        return Err(PipelineError::UnsupportedConversion(format!(
            "{:?} -> {:?}",
            format, params.output_format
        )));
    }

    let rect = params.input_rect;
    let in_bounds = rect.width > 0
        && rect.height > 0
        && rect.x as u64 + rect.width as u64 <= width as u64
        && rect.y as u64 + rect.height as u64 <= height as u64;
    if !in_bounds {
        return Err(PipelineError::UnsupportedConversion(format!(
            "input rect {:?} outside {}x{} image",
            rect, width, height
        )));
    }

    if params.output_dimensions != (rect.width, rect.height) {
        return Err(PipelineError::UnsupportedConversion(format!(
            "resampling {}x{} to {}x{}",
            rect.width, rect.height, params.output_dimensions.0, params.output_dimensions.1
        )));
    }

    Ok(())
}

#[inline]
fn to_rgba(format: PixelFormat, pixel: &[u8]) -> [u8; 4] {
    match format {
        PixelFormat::Rgba32 => [pixel[0], pixel[1], pixel[2], pixel[3]],
        PixelFormat::Bgra32 => [pixel[2], pixel[1], pixel[0], pixel[3]],
        PixelFormat::Rgb24 => [pixel[0], pixel[1], pixel[2], u8::MAX],
        PixelFormat::Gray8 => [pixel[0], pixel[0], pixel[0], u8::MAX],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_tracking::camera::types::RectInt;

    #[test]
    fn test_mirror_y_reverses_rows() {
        // 1x3 gray column: rows 10, 20, 30
        let source = [10u8, 20, 30];
        let params = ConversionParams::full_frame_rgba(1, 3);
        let mut out = vec![0u8; params.output_len()];

        convert_to_rgba(&source, 1, 3, PixelFormat::Gray8, &params, &mut out).unwrap();

        assert_eq!(out, vec![30, 30, 30, 255, 20, 20, 20, 255, 10, 10, 10, 255]);
    }

    #[test]
    fn test_bgra_swizzle_without_mirror() {
        let source = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let params = ConversionParams {
            transformation: Transformation::None,
            ..ConversionParams::full_frame_rgba(2, 1)
        };
        let mut out = vec![0u8; 8];

        convert_to_rgba(&source, 2, 1, PixelFormat::Bgra32, &params, &mut out).unwrap();

        assert_eq!(out, vec![3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let source = [9u8, 8, 7];
        let params = ConversionParams::full_frame_rgba(1, 1);
        let mut out = vec![0u8; 4];

        convert_to_rgba(&source, 1, 1, PixelFormat::Rgb24, &params, &mut out).unwrap();

        assert_eq!(out, vec![9, 8, 7, 255]);
    }

    #[test]
    fn test_sub_rect_conversion() {
        // 3x2 gray image, take the right 2x1 of the bottom row
        let source = [0u8, 1, 2, 3, 4, 5];
        let params = ConversionParams {
            input_rect: RectInt::new(1, 1, 2, 1),
            output_dimensions: (2, 1),
            output_format: PixelFormat::Rgba32,
            transformation: Transformation::None,
        };
        let mut out = vec![0u8; params.output_len()];

        convert_to_rgba(&source, 3, 2, PixelFormat::Gray8, &params, &mut out).unwrap();

        assert_eq!(out, vec![4, 4, 4, 255, 5, 5, 5, 255]);
    }

    #[test]
    fn test_destination_size_mismatch() {
        let source = [0u8; 4];
        let params = ConversionParams::full_frame_rgba(2, 2);
        let mut out = vec![0u8; 3];

        let result = convert_to_rgba(&source, 2, 2, PixelFormat::Gray8, &params, &mut out);

        assert!(matches!(
            result,
            Err(PipelineError::ConversionSizeMismatch { expected: 16, actual: 3 })
        ));
    }

    #[test]
    fn test_resampling_is_rejected() {
        let source = [0u8; 4];
        let params = ConversionParams {
            output_dimensions: (1, 1),
            ..ConversionParams::full_frame_rgba(2, 2)
        };
        let mut out = vec![0u8; 4];

        let result = convert_to_rgba(&source, 2, 2, PixelFormat::Gray8, &params, &mut out);

        assert!(matches!(result, Err(PipelineError::UnsupportedConversion(_))));
    }
}
