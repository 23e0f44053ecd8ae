//! Visualizer configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::hand_tracking::calibration::{CalibrationField, CalibrationSettings};
use crate::hand_tracking::common::error::{PipelineError, Result};
use crate::hand_tracking::landmarks::MountOrientation;
use crate::hand_tracking::skeleton::SkeletonStyle;
use crate::hand_tracking::smoothing::SmoothingConfig;

/// Configuration for the hand visualizer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisualizerConfig {
    /// Camera mounting; AR mounting rotates landmarks a quarter turn
    #[serde(default)]
    pub mount: MountOrientation,
    #[serde(default)]
    pub style: SkeletonStyle,
    /// Values used when the settings store has nothing saved
    #[serde(default, rename = "calibration")]
    pub calibration_defaults: CalibrationSettings,
    /// Jitter filter; `None` leaves landmarks untouched
    #[serde(default)]
    pub smoothing: Option<SmoothingConfig>,
    /// Where calibration edits are persisted
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("hand_visualizer_settings.json")
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            mount: MountOrientation::default(),
            style: SkeletonStyle::default(),
            calibration_defaults: CalibrationSettings::default(),
            smoothing: None,
            settings_path: default_settings_path(),
        }
    }
}

impl VisualizerConfig {
    pub fn builder() -> VisualizerConfigBuilder {
        VisualizerConfigBuilder::default()
    }

    /// Reads a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: VisualizerConfig =
            toml::from_str(&content).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("joint_scale", self.style.joint_scale),
            ("bone_scale", self.style.bone_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PipelineError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        for field in CalibrationField::ALL {
            let value = self.calibration_defaults.get(field);
            if !value.is_finite() {
                return Err(PipelineError::Config(format!(
                    "calibration default {:?} must be finite, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// Builder for VisualizerConfig
#[derive(Default)]
pub struct VisualizerConfigBuilder {
    mount: Option<MountOrientation>,
    joint_scale: Option<f32>,
    bone_scale: Option<f32>,
    calibration_defaults: Option<CalibrationSettings>,
    smoothing: Option<Option<SmoothingConfig>>,
    settings_path: Option<PathBuf>,
}

impl VisualizerConfigBuilder {
    pub fn mount(mut self, mount: MountOrientation) -> Self {
        self.mount = Some(mount);
        self
    }

    pub fn joint_scale(mut self, scale: f32) -> Self {
        self.joint_scale = Some(scale);
        self
    }

    pub fn bone_scale(mut self, scale: f32) -> Self {
        self.bone_scale = Some(scale);
        self
    }

    pub fn calibration_defaults(mut self, defaults: CalibrationSettings) -> Self {
        self.calibration_defaults = Some(defaults);
        self
    }

    pub fn smoothing(mut self, smoothing: Option<SmoothingConfig>) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn settings_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn build(self) -> VisualizerConfig {
        let default = VisualizerConfig::default();
        VisualizerConfig {
            mount: self.mount.unwrap_or(default.mount),
            style: SkeletonStyle {
                joint_scale: self.joint_scale.unwrap_or(default.style.joint_scale),
                bone_scale: self.bone_scale.unwrap_or(default.style.bone_scale),
            },
            calibration_defaults: self
                .calibration_defaults
                .unwrap_or(default.calibration_defaults),
            smoothing: self.smoothing.unwrap_or(default.smoothing),
            settings_path: self.settings_path.unwrap_or(default.settings_path),
        }
    }
}
