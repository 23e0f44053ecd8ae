#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use crate::hand_tracking::camera::{
        CameraSource, ConversionParams, CpuImage, PixelFormat, QueuedCameraSource, RawFrame,
        Transformation,
    };
    use crate::hand_tracking::common::error::{PipelineError, Result};
    use crate::hand_tracking::texture::{FrameAcquisition, FrameEvent, notification_slot};

    /// Records the order in which frames and conversion requests happen.
    type EventLog = Rc<RefCell<Vec<String>>>;

    struct MockFrame {
        width: u32,
        height: u32,
        fill: u8,
        size_override: Option<usize>,
        fail_convert: bool,
        log: EventLog,
        seen_params: Rc<RefCell<Vec<ConversionParams>>>,
    }

    impl RawFrame for MockFrame {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn format(&self) -> PixelFormat {
            PixelFormat::Rgba32
        }

        fn converted_size(&self, params: &ConversionParams) -> Result<usize> {
            Ok(self.size_override.unwrap_or(params.output_len()))
        }

        fn convert(&self, params: &ConversionParams, destination: &mut [u8]) -> Result<()> {
            self.seen_params.borrow_mut().push(*params);
            self.log.borrow_mut().push("convert".to_string());
            if self.fail_convert {
                return Err(PipelineError::UnsupportedConversion("mock".to_string()));
            }
            destination.fill(self.fill);
            Ok(())
        }
    }

    impl Drop for MockFrame {
        fn drop(&mut self) {
            self.log.borrow_mut().push("release".to_string());
        }
    }

    struct MockSource {
        frames: VecDeque<MockFrame>,
    }

    impl CameraSource for MockSource {
        type Frame = MockFrame;

        fn try_acquire_latest_image(&mut self) -> Option<MockFrame> {
            self.frames.pop_front()
        }
    }

    struct Harness {
        log: EventLog,
        params: Rc<RefCell<Vec<ConversionParams>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                log: Rc::new(RefCell::new(Vec::new())),
                params: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn frame(&self, width: u32, height: u32, fill: u8) -> MockFrame {
            MockFrame {
                width,
                height,
                fill,
                size_override: None,
                fail_convert: false,
                log: self.log.clone(),
                seen_params: self.params.clone(),
            }
        }
    }

    fn gray_image(width: u32, height: u32, value: u8) -> CpuImage {
        CpuImage::new(
            width,
            height,
            PixelFormat::Gray8,
            vec![value; (width * height) as usize],
        )
        .unwrap()
    }

    #[test]
    fn test_absent_frame_during_initialization() {
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::new(),
        });

        let event = acquisition.on_frame_notified().unwrap();

        assert_eq!(event, FrameEvent::NoFrame);
        assert!(!acquisition.is_initialized());
        assert!(acquisition.texture().is_none());
    }

    #[test]
    fn test_initialization_sizes_texture_without_converting() {
        let harness = Harness::new();
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(4, 2, 7)]),
        });

        let event = acquisition.on_frame_notified().unwrap();

        assert_eq!(event, FrameEvent::Initialized { width: 4, height: 2 });
        let texture = acquisition.texture().unwrap();
        assert_eq!((texture.width(), texture.height()), (4, 2));
        assert_eq!(texture.upload_count(), 0);
        assert_eq!(*harness.log.borrow(), vec!["release".to_string()]);
    }

    #[test]
    fn test_update_uploads_and_releases_frame() {
        let harness = Harness::new();
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(2, 2, 0), harness.frame(2, 2, 42)]),
        });

        acquisition.on_frame_notified().unwrap();
        let event = acquisition.on_frame_notified().unwrap();

        assert_eq!(event, FrameEvent::Updated);
        let texture = acquisition.texture().unwrap();
        assert_eq!(texture.upload_count(), 1);
        assert!(texture.data().iter().all(|&b| b == 42));
        assert_eq!(
            *harness.log.borrow(),
            vec!["release".to_string(), "convert".to_string(), "release".to_string()]
        );

        let params = harness.params.borrow();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].transformation, Transformation::MirrorY);
        assert_eq!(params[0].output_format, PixelFormat::Rgba32);
        assert_eq!(params[0].output_dimensions, (2, 2));
    }

    #[test]
    fn test_absent_frame_during_update_keeps_contents() {
        let harness = Harness::new();
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(2, 1, 0), harness.frame(2, 1, 9)]),
        });
        acquisition.on_frame_notified().unwrap();
        acquisition.on_frame_notified().unwrap();
        let before = acquisition.texture().unwrap().data().to_vec();

        let event = acquisition.on_frame_notified().unwrap();

        assert_eq!(event, FrameEvent::NoFrame);
        let texture = acquisition.texture().unwrap();
        assert_eq!(texture.data(), before.as_slice());
        assert_eq!(texture.upload_count(), 1);
    }

    #[test]
    fn test_conversion_failure_still_releases_frame() {
        let harness = Harness::new();
        let mut failing = harness.frame(2, 2, 5);
        failing.fail_convert = true;
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(2, 2, 0), failing]),
        });
        acquisition.on_frame_notified().unwrap();

        let result = acquisition.on_frame_notified();

        assert!(matches!(result, Err(PipelineError::UnsupportedConversion(_))));
        assert_eq!(harness.log.borrow().last().map(String::as_str), Some("release"));
        assert_eq!(acquisition.texture().unwrap().upload_count(), 0);
    }

    #[test]
    fn test_unexpected_converted_size_is_an_error() {
        let harness = Harness::new();
        let mut lying = harness.frame(2, 2, 5);
        lying.size_override = Some(3);
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(2, 2, 0), lying]),
        });
        acquisition.on_frame_notified().unwrap();

        let result = acquisition.on_frame_notified();

        assert!(matches!(
            result,
            Err(PipelineError::ConversionSizeMismatch { expected: 16, actual: 3 })
        ));
        assert_eq!(harness.log.borrow().last().map(String::as_str), Some("release"));
    }

    #[test]
    fn test_resized_camera_frame_is_rejected() {
        let harness = Harness::new();
        let mut acquisition = FrameAcquisition::new(MockSource {
            frames: VecDeque::from(vec![harness.frame(2, 2, 0), harness.frame(4, 4, 1)]),
        });
        acquisition.on_frame_notified().unwrap();

        let result = acquisition.on_frame_notified();

        assert!(matches!(result, Err(PipelineError::ConversionSizeMismatch { .. })));
        assert_eq!(acquisition.texture().unwrap().width(), 2);
    }

    #[test]
    fn test_queued_source_mirrors_into_texture() {
        let source = QueuedCameraSource::new();
        let feeder = source.feeder();
        let mut acquisition = FrameAcquisition::new(source);

        feeder.push(gray_image(1, 2, 0));
        acquisition.on_frame_notified().unwrap();

        // top row 10, bottom row 200
        feeder.push(CpuImage::new(1, 2, PixelFormat::Gray8, vec![10, 200]).unwrap());
        acquisition.on_frame_notified().unwrap();

        let texture = acquisition.texture().unwrap();
        assert_eq!(texture.pixel(0, 0), Some([200, 200, 200, 255]));
        assert_eq!(texture.pixel(0, 1), Some([10, 10, 10, 255]));
        assert_eq!(acquisition.source().live_frames(), 0);
    }

    #[test]
    fn test_queued_source_keeps_only_latest() {
        let mut source = QueuedCameraSource::new();
        let feeder = source.feeder();

        feeder.push(gray_image(1, 1, 1));
        feeder.push(gray_image(1, 1, 2));
        feeder.push(gray_image(1, 1, 3));

        let frame = source.try_acquire_latest_image().unwrap();
        assert_eq!(frame.data(), &[3]);
        assert_eq!(source.live_frames(), 1);
        assert_eq!(source.replaced_frames(), 2);

        drop(frame);
        assert_eq!(source.live_frames(), 0);
        assert!(source.try_acquire_latest_image().is_none());
    }

    #[test]
    fn test_notifications_coalesce() {
        let (notifier, slot) = notification_slot();
        let source = QueuedCameraSource::new();
        let feeder = source.feeder();
        let mut acquisition = FrameAcquisition::new(source);

        feeder.push(gray_image(2, 2, 1));
        notifier.notify();
        notifier.notify();
        notifier.notify();

        assert!(matches!(
            acquisition.pump(&slot).unwrap(),
            FrameEvent::Initialized { .. }
        ));
        assert_eq!(acquisition.pump(&slot).unwrap(), FrameEvent::NoFrame);
        assert!(!slot.take_pending());
    }

    #[test]
    fn test_notifier_works_across_threads() {
        let (notifier, slot) = notification_slot();

        let handle = std::thread::spawn(move || {
            for _ in 0..100 {
                notifier.notify();
            }
        });
        handle.join().unwrap();

        assert!(slot.take_pending());
        assert!(!slot.take_pending());
    }
}
