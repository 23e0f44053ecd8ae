use tracing::{debug, info, instrument};

use crate::hand_tracking::camera::{CameraSource, ConversionParams, RawFrame};
use crate::hand_tracking::common::error::{PipelineError, Result};
use crate::hand_tracking::texture::notification::NotificationSlot;
use crate::hand_tracking::texture::types::ConvertedTexture;

/// Outcome of handling one frame notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The texture was created with the dimensions of the first frame
    Initialized { width: u32, height: u32 },
    /// A new frame was converted and uploaded
    Updated,
    /// No frame was available; nothing changed
    NoFrame,
}

/// Owns the output texture and keeps it fed from a camera source.
pub struct FrameAcquisition<S: CameraSource> {
    source: S,
    texture: Option<ConvertedTexture>,
}

impl<S: CameraSource> FrameAcquisition<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            texture: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture(&self) -> Option<&ConvertedTexture> {
        self.texture.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Handles a "new camera frame" notification.
    ///
    /// The first successful acquisition only sizes the texture; later ones
    /// convert and upload. A missing frame is never an error.
    pub fn on_frame_notified(&mut self) -> Result<FrameEvent> {
        if self.texture.is_none() {
            self.initialize()
        } else {
            self.update()
        }
    }

    /// Runs [`on_frame_notified`](Self::on_frame_notified) if `slot` holds a
    /// pending notification.
    pub fn pump(&mut self, slot: &NotificationSlot) -> Result<FrameEvent> {
        if slot.take_pending() {
            self.on_frame_notified()
        } else {
            Ok(FrameEvent::NoFrame)
        }
    }

    fn initialize(&mut self) -> Result<FrameEvent> {
        let Some(frame) = self.source.try_acquire_latest_image() else {
            debug!("Camera texture not ready, no frame available yet");
            return Ok(FrameEvent::NoFrame);
        };

        let (width, height) = (frame.width(), frame.height());
        // Sized only; the frame is released without conversion.
        drop(frame);

        self.texture = Some(ConvertedTexture::new(width, height)?);
        info!(width, height, "Camera texture initialized");

        Ok(FrameEvent::Initialized { width, height })
    }

    #[instrument(level = "trace", skip(self))]
    fn update(&mut self) -> Result<FrameEvent> {
        let Some(texture) = self.texture.as_mut() else {
            return Ok(FrameEvent::NoFrame);
        };

        let Some(frame) = self.source.try_acquire_latest_image() else {
            return Ok(FrameEvent::NoFrame);
        };

        let params = ConversionParams::full_frame_rgba(frame.width(), frame.height());
        let size = frame.converted_size(&params)?;
        if size != texture.byte_len() {
            return Err(PipelineError::ConversionSizeMismatch {
                expected: texture.byte_len(),
                actual: size,
            });
        }

        let mut buffer = vec![0u8; size];
        frame.convert(&params, &mut buffer)?;
        texture.load_raw_texture_data(&buffer)?;

        drop(buffer);
        drop(frame);

        debug!(uploads = texture.upload_count(), "Camera texture updated");
        Ok(FrameEvent::Updated)
    }
}
