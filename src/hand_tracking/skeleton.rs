//! Skeleton rendering module
//!
//! Fixed hand topology, the scene graph contract the renderer drives, and
//! the renderer that keeps joint and bone drawables in step with the
//! projected landmarks.

mod recording_scene;
mod renderer;
pub mod scene;
pub mod topology;

pub use recording_scene::{NodeKind, RecordingScene, SceneNode};
pub use renderer::{SkeletonRenderer, SkeletonStyle, anchor_transform, bone_transform};
pub use scene::{Drawable, MaterialId, NodeId, SceneGraph, Transform};
pub use topology::{BONE_COUNT, BONES, FINGER_CHAINS, JOINT_COUNT};
