use nalgebra::Vector3;
use tracing::{debug, info, instrument, warn};

use crate::hand_tracking::calibration::{
    CalibrationField, CalibrationSettings, CalibrationStore, EditOutcome, SettingsStore,
};
use crate::hand_tracking::common::error::Result;
use crate::hand_tracking::config::VisualizerConfig;
use crate::hand_tracking::landmarks::{
    HandLandmarkEstimator, LandmarkSet, LandmarkWorldProjector, MountOrientation, WorldLandmarks,
};
use crate::hand_tracking::skeleton::{SceneGraph, SkeletonRenderer, JOINT_COUNT};
use crate::hand_tracking::smoothing::LandmarkSmoother;
use crate::hand_tracking::texture::ConvertedTexture;
use crate::hand_tracking::timing::{FrameTimings, Timer};

/// Picks the texture fed to the estimator: the AR camera texture when the
/// camera is AR-mounted, the external image source otherwise.
pub fn select_input<'a>(
    mount: MountOrientation,
    image_source: Option<&'a ConvertedTexture>,
    ar_camera: Option<&'a ConvertedTexture>,
) -> Option<&'a ConvertedTexture> {
    match mount {
        MountOrientation::Handheld => image_source,
        MountOrientation::ArMounted => ar_camera,
    }
}

pub struct HandVisualizer<E: HandLandmarkEstimator, S: SettingsStore> {
    estimator: E,
    calibration: CalibrationStore<S>,
    projector: LandmarkWorldProjector,
    renderer: SkeletonRenderer,
    smoother: Option<LandmarkSmoother>,
    world_points: WorldLandmarks,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl<E: HandLandmarkEstimator, S: SettingsStore> HandVisualizer<E, S> {
    /// Loads calibration and spawns the skeleton into `scene`.
    pub fn start<G: SceneGraph>(
        scene: &mut G,
        estimator: E,
        store: S,
        config: &VisualizerConfig,
    ) -> Self {
        let calibration = CalibrationStore::load(store, &config.calibration_defaults);
        let mut renderer = SkeletonRenderer::spawn(scene, calibration.settings(), config.style);

        if let Some(crop) = estimator.crop_region() {
            renderer.bind_crop_material(scene, crop);
        }

        info!(
            mount = ?config.mount,
            smoothing = config.smoothing.is_some(),
            "Hand visualizer started"
        );

        Self {
            estimator,
            calibration,
            projector: LandmarkWorldProjector::new(config.mount),
            renderer,
            smoother: config.smoothing.map(LandmarkSmoother::new),
            world_points: [Vector3::zeros(); JOINT_COUNT],
            frames_rendered: 0,
            frames_skipped: 0,
        }
    }

    /// Per-frame update. `dt` is the time since the previous frame in
    /// seconds and only matters when smoothing is enabled.
    ///
    /// A failing estimator or a malformed landmark buffer skips the frame:
    /// the error is logged and returned, and the skeleton keeps its previous
    /// pose.
    pub fn late_update<G: SceneGraph>(
        &mut self,
        scene: &mut G,
        input: &ConvertedTexture,
        dt: f32,
    ) -> Result<()> {
        let mut timings = FrameTimings::new();
        self.run_frame(scene, input, dt, &mut timings)
    }

    /// Same as [`late_update`](Self::late_update), returning step timings.
    pub fn late_update_with_timings<G: SceneGraph>(
        &mut self,
        scene: &mut G,
        input: &ConvertedTexture,
        dt: f32,
    ) -> Result<FrameTimings> {
        let mut timings = FrameTimings::new();
        self.run_frame(scene, input, dt, &mut timings)?;
        Ok(timings)
    }

    #[instrument(level = "debug", skip_all, fields(frame = self.frames_rendered))]
    fn run_frame<G: SceneGraph>(
        &mut self,
        scene: &mut G,
        input: &ConvertedTexture,
        dt: f32,
        timings: &mut FrameTimings,
    ) -> Result<()> {
        let timer = Timer::start("estimate");
        let landmarks = self.estimate(input).inspect_err(|e| {
            self.frames_skipped += 1;
            warn!("Skipping frame: {}", e);
        })?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("project");
        let mut points = self.projector.project(&landmarks, self.calibration.settings());
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.apply(&mut points, dt);
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("render");
        self.renderer.update(scene, &points);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        self.world_points = points;
        self.frames_rendered += 1;
        debug!(wrist = ?points[0], "Skeleton updated");
        Ok(())
    }

    fn estimate(&mut self, input: &ConvertedTexture) -> Result<LandmarkSet> {
        self.estimator.process_image(input)?;
        LandmarkSet::from_buffer(
            self.estimator.key_point_buffer(),
            self.estimator.key_point_stride(),
        )
    }

    /// Commits a UI text edit; the anchor follows distance and scale edits.
    ///
    /// A failed flush is returned, but the anchor still tracks the in-memory
    /// value the edit already set.
    pub fn on_calibration_edit<G: SceneGraph>(
        &mut self,
        scene: &mut G,
        field: CalibrationField,
        text: &str,
    ) -> Result<EditOutcome> {
        let previous = self.calibration.get(field);
        let result = self.calibration.apply_text(field, text);

        let value_changed = self.calibration.get(field).to_bits() != previous.to_bits();
        let applied = matches!(result, Ok(EditOutcome::Applied { .. }));
        if field.affects_anchor() && (applied || value_changed) {
            self.renderer.apply_anchor(scene, self.calibration.settings());
        }
        result
    }

    /// Initial text for each calibration input field.
    pub fn calibration_texts(&self) -> Vec<(CalibrationField, String)> {
        CalibrationField::ALL
            .iter()
            .map(|&field| (field, self.calibration.field_text(field)))
            .collect()
    }

    pub fn settings(&self) -> &CalibrationSettings {
        self.calibration.settings()
    }

    pub fn calibration(&self) -> &CalibrationStore<S> {
        &self.calibration
    }

    pub fn renderer(&self) -> &SkeletonRenderer {
        &self.renderer
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Landmarks placed on the last successful frame.
    pub fn world_landmarks(&self) -> &WorldLandmarks {
        &self.world_points
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Releases every scene resource owned by the visualizer.
    pub fn shutdown<G: SceneGraph>(self, scene: &mut G) {
        info!(
            rendered = self.frames_rendered,
            skipped = self.frames_skipped,
            "Hand visualizer shutting down"
        );
        self.renderer.teardown(scene);
    }
}
