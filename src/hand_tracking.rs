//! Hand tracking visualization
//!
//! Camera frames are converted into an RGBA8 texture, handed to a landmark
//! estimator and the resulting 21 key points are placed in front of the
//! camera as a joint and bone skeleton.
//!
//! The pieces are wired together through traits so that a rendering engine,
//! a camera driver and an estimator can be swapped in:
//!
//! - [`camera::CameraSource`] / [`camera::RawFrame`] for frame acquisition
//! - [`landmarks::HandLandmarkEstimator`] for the estimation engine
//! - [`skeleton::SceneGraph`] for the renderer
//! - [`calibration::SettingsStore`] for persisted calibration

pub mod calibration;
pub mod camera;
pub mod common;
pub mod config;
pub mod landmarks;
pub mod skeleton;
pub mod smoothing;
pub mod texture;
pub mod timing;
pub mod visualizer;

pub use common::error::{PipelineError, Result};
pub use config::{VisualizerConfig, VisualizerConfigBuilder};
pub use texture::{ConvertedTexture, FrameAcquisition, FrameEvent};
pub use visualizer::HandVisualizer;
