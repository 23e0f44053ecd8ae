use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::trace;

use crate::hand_tracking::camera::cpu_image::CpuImage;
use crate::hand_tracking::camera::source::CameraSource;

/// Camera source fed by an external producer.
///
/// Holds at most one pending image; pushing a new one replaces the previous
/// image, which is never seen by the consumer.
pub struct QueuedCameraSource {
    slot: Arc<Mutex<Option<CpuImage>>>,
    live: Arc<AtomicUsize>,
    replaced: Arc<AtomicU64>,
}

/// Producer handle for a [`QueuedCameraSource`]. Cheap to clone and `Send`.
#[derive(Clone)]
pub struct FrameFeeder {
    slot: Arc<Mutex<Option<CpuImage>>>,
    replaced: Arc<AtomicU64>,
}

impl QueuedCameraSource {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            live: Arc::new(AtomicUsize::new(0)),
            replaced: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn feeder(&self) -> FrameFeeder {
        FrameFeeder {
            slot: Arc::clone(&self.slot),
            replaced: Arc::clone(&self.replaced),
        }
    }

    /// Frames handed out and not yet released.
    pub fn live_frames(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Frames overwritten before anyone acquired them.
    pub fn replaced_frames(&self) -> u64 {
        self.replaced.load(Ordering::SeqCst)
    }
}

impl Default for QueuedCameraSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameFeeder {
    pub fn push(&self, image: CpuImage) {
        let previous = self.slot.lock().replace(image);
        if previous.is_some() {
            self.replaced.fetch_add(1, Ordering::SeqCst);
            trace!("Dropped stale camera frame");
        }
    }
}

impl CameraSource for QueuedCameraSource {
    type Frame = CpuImage;

    fn try_acquire_latest_image(&mut self) -> Option<CpuImage> {
        let image = self.slot.lock().take()?;
        Some(image.track(Arc::clone(&self.live)))
    }
}
