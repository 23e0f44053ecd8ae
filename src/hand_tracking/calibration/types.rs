//! Calibration setting types

use serde::Deserialize;

/// Names one of the eight calibration scalars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationField {
    DepthScale,
    MinDepth,
    MaxDepth,
    VisualizationDistance,
    VisualizationScale,
    XOffset,
    YOffset,
    ZOffset,
}

impl CalibrationField {
    pub const ALL: [CalibrationField; 8] = [
        CalibrationField::DepthScale,
        CalibrationField::MinDepth,
        CalibrationField::MaxDepth,
        CalibrationField::VisualizationDistance,
        CalibrationField::VisualizationScale,
        CalibrationField::XOffset,
        CalibrationField::YOffset,
        CalibrationField::ZOffset,
    ];

    /// Key under which the value is persisted
    pub fn key(self) -> &'static str {
        match self {
            CalibrationField::DepthScale => "HandVisualizer_DepthScale",
            CalibrationField::MinDepth => "HandVisualizer_MinDepth",
            CalibrationField::MaxDepth => "HandVisualizer_MaxDepth",
            CalibrationField::VisualizationDistance => "HandVisualizer_VisualizationDistance",
            CalibrationField::VisualizationScale => "HandVisualizer_VisualizationScale",
            CalibrationField::XOffset => "HandVisualizer_XOffset",
            CalibrationField::YOffset => "HandVisualizer_YOffset",
            CalibrationField::ZOffset => "HandVisualizer_ZOffset",
        }
    }

    /// Whether a change moves or rescales the visualization anchor
    pub fn affects_anchor(self) -> bool {
        matches!(
            self,
            CalibrationField::VisualizationDistance | CalibrationField::VisualizationScale
        )
    }

    /// Parses user text into a value for this field.
    ///
    /// Surrounding whitespace is ignored; anything that is not a finite
    /// number is rejected.
    pub fn parse_value(self, text: &str) -> Option<f32> {
        text.trim()
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// Current calibration values
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CalibrationSettings {
    /// Post-multiplier applied to the pseudo-depth
    #[serde(default = "default_depth_scale")]
    pub depth_scale: f32,
    /// Depth assigned to a hand filling the viewport
    #[serde(default = "default_min_depth")]
    pub min_depth: f32,
    /// Depth assigned to a vanishingly small hand
    #[serde(default = "default_max_depth")]
    pub max_depth: f32,
    /// Anchor distance in front of the camera
    #[serde(default = "default_visualization_distance")]
    pub visualization_distance: f32,
    /// Uniform anchor scale
    #[serde(default = "default_visualization_scale")]
    pub visualization_scale: f32,
    #[serde(default)]
    pub x_offset: f32,
    #[serde(default)]
    pub y_offset: f32,
    #[serde(default)]
    pub z_offset: f32,
}

fn default_depth_scale() -> f32 { 1.0 }
fn default_min_depth() -> f32 { 0.1 }
fn default_max_depth() -> f32 { 10.0 }
fn default_visualization_distance() -> f32 { 0.5 }
fn default_visualization_scale() -> f32 { 0.1 }

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            depth_scale: default_depth_scale(),
            min_depth: default_min_depth(),
            max_depth: default_max_depth(),
            visualization_distance: default_visualization_distance(),
            visualization_scale: default_visualization_scale(),
            x_offset: 0.0,
            y_offset: 0.0,
            z_offset: 0.0,
        }
    }
}

impl CalibrationSettings {
    pub fn get(&self, field: CalibrationField) -> f32 {
        match field {
            CalibrationField::DepthScale => self.depth_scale,
            CalibrationField::MinDepth => self.min_depth,
            CalibrationField::MaxDepth => self.max_depth,
            CalibrationField::VisualizationDistance => self.visualization_distance,
            CalibrationField::VisualizationScale => self.visualization_scale,
            CalibrationField::XOffset => self.x_offset,
            CalibrationField::YOffset => self.y_offset,
            CalibrationField::ZOffset => self.z_offset,
        }
    }

    pub fn set(&mut self, field: CalibrationField, value: f32) {
        let slot = match field {
            CalibrationField::DepthScale => &mut self.depth_scale,
            CalibrationField::MinDepth => &mut self.min_depth,
            CalibrationField::MaxDepth => &mut self.max_depth,
            CalibrationField::VisualizationDistance => &mut self.visualization_distance,
            CalibrationField::VisualizationScale => &mut self.visualization_scale,
            CalibrationField::XOffset => &mut self.x_offset,
            CalibrationField::YOffset => &mut self.y_offset,
            CalibrationField::ZOffset => &mut self.z_offset,
        };
        *slot = value;
    }
}
