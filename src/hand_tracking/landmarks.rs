//! Hand landmark module
//!
//! Landmark records produced by the external estimation engine and the
//! projection of those records into the skeleton's local space.

mod estimator;
mod scripted_estimator;
mod projector;
pub mod types;

pub use estimator::HandLandmarkEstimator;
pub use scripted_estimator::ScriptedEstimator;
pub use projector::{
    BoundingBox, LandmarkWorldProjector, MountOrientation, bounding_box, hand_size, lerp,
    pseudo_depth, rotate_ar_mounted,
};
pub use types::{CropRegion, Landmark, LandmarkSet, WorldLandmarks};
