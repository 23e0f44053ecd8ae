use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use handpose_ar_rs::hand_tracking::calibration::JsonSettingsStore;
use handpose_ar_rs::hand_tracking::camera::{CpuImage, PixelFormat, QueuedCameraSource};
use handpose_ar_rs::hand_tracking::landmarks::ScriptedEstimator;
use handpose_ar_rs::hand_tracking::skeleton::{FINGER_CHAINS, JOINT_COUNT, RecordingScene};
use handpose_ar_rs::hand_tracking::texture::notification_slot;
use handpose_ar_rs::hand_tracking::{FrameAcquisition, FrameEvent, HandVisualizer, VisualizerConfig};
use handpose_ar_rs::logger;

use tracing::{info, warn};

const FRAME_WIDTH: u32 = 320;
const FRAME_HEIGHT: u32 = 240;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_FRAMES: usize = 120;

/// One open hand per frame, drifting sideways and growing slightly.
fn synthetic_hand_frames(count: usize) -> Vec<Vec<f32>> {
    (0..count)
        .map(|i| {
            let phase = i as f32 / count as f32 * std::f32::consts::TAU;
            let (cx, cy) = (0.5 + 0.1 * phase.sin(), 0.6);
            let spread = 0.05 + 0.01 * phase.cos();

            let mut points = [(cx, cy); JOINT_COUNT];
            for (finger, chain) in FINGER_CHAINS.iter().enumerate() {
                let angle = -0.8 + finger as f32 * 0.4;
                for (step, &joint) in chain.iter().enumerate().skip(1) {
                    let reach = spread * step as f32;
                    points[joint] = (cx + reach * angle.sin(), cy - reach * angle.cos());
                }
            }
            points
                .iter()
                .flat_map(|&(x, y)| [x, y, 0.0, 1.0])
                .collect()
        })
        .collect()
}

fn gradient_frame(tick: u32) -> Result<CpuImage> {
    let mut data = Vec::with_capacity((FRAME_WIDTH * FRAME_HEIGHT * 4) as usize);
    for y in 0..FRAME_HEIGHT {
        for x in 0..FRAME_WIDTH {
            data.extend_from_slice(&[(x + tick) as u8, y as u8, tick as u8, 255]);
        }
    }
    Ok(CpuImage::new(FRAME_WIDTH, FRAME_HEIGHT, PixelFormat::Bgra32, data)?)
}

fn main() -> Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => VisualizerConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => VisualizerConfig::default(),
    };
    let frame_count = match args.next() {
        Some(n) => n.parse::<usize>().context("frame count must be a number")?,
        None => DEFAULT_FRAMES,
    };

    info!("Starting hand visualizer demo...");
    info!("Mount: {:?}", config.mount);
    info!("Settings file: {}", config.settings_path.display());

    let source = QueuedCameraSource::new();
    let feeder = source.feeder();
    let (notifier, slot) = notification_slot();

    let producer = thread::spawn(move || -> Result<()> {
        for tick in 0..frame_count as u32 {
            feeder.push(gradient_frame(tick)?);
            notifier.notify();
            thread::sleep(FRAME_INTERVAL);
        }
        Ok(())
    });

    let store = JsonSettingsStore::open(&config.settings_path)?;
    let estimator = ScriptedEstimator::new(synthetic_hand_frames(60), 4);
    let mut scene = RecordingScene::new();
    let mut visualizer = HandVisualizer::start(&mut scene, estimator, store, &config);
    let mut acquisition = FrameAcquisition::new(source);

    let mut rendered = 0;
    let mut last = Instant::now();
    let deadline = last + FRAME_INTERVAL * (frame_count as u32 + 30);
    while rendered < frame_count && Instant::now() < deadline {
        match acquisition.pump(&slot) {
            Ok(FrameEvent::Initialized { width, height }) => {
                info!("Camera texture ready: {}x{}", width, height)
            }
            Ok(_) => {}
            Err(e) => warn!("Frame acquisition failed: {}", e),
        }

        // The demo camera is the only image source, so both mounts read it
        let Some(input) = acquisition.texture() else {
            thread::sleep(Duration::from_millis(1));
            continue;
        };

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if let Ok(timings) = visualizer.late_update_with_timings(&mut scene, input, dt) {
            if rendered % 30 == 0 {
                info!("Frame {}: {}", rendered, timings.summary());
            }
            rendered += 1;
        }
        thread::sleep(FRAME_INTERVAL);
    }

    match producer.join() {
        Ok(result) => result?,
        Err(_) => warn!("Frame producer panicked"),
    }

    info!(
        "Rendered {} frames ({} skipped), wrist at {:?}",
        visualizer.frames_rendered(),
        visualizer.frames_skipped(),
        visualizer.world_landmarks()[0]
    );
    info!(
        "Camera frames replaced before use: {}",
        acquisition.source().replaced_frames()
    );

    visualizer.shutdown(&mut scene);
    info!("Scene nodes left after shutdown: {}", scene.node_count());

    Ok(())
}
