//! Hand visualizer module
//!
//! Runs the display-frame update: estimation, projection, optional
//! smoothing and skeleton placement, plus calibration edits from the UI.

mod hand_visualizer;


pub use hand_visualizer::{HandVisualizer, select_input};
