//! Scene graph contract

use nalgebra::{UnitQuaternion, Vector3};

use crate::hand_tracking::landmarks::CropRegion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u64);

/// Prefab kinds the renderer instantiates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawable {
    Joint,
    Bone,
}

/// Local transform of a scene node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vector3::repeat(scale))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rendering engine capabilities used by the skeleton renderer.
pub trait SceneGraph {
    /// Creates an empty node parented to the viewing camera.
    fn create_camera_anchor(&mut self, name: &str) -> NodeId;

    /// Instantiates a drawable under `parent` at the identity transform.
    fn spawn(&mut self, drawable: Drawable, parent: NodeId) -> NodeId;

    fn set_local_transform(&mut self, node: NodeId, transform: &Transform);

    /// Destroys `node` and everything parented under it.
    fn destroy(&mut self, node: NodeId);

    /// Creates the debug material that displays the estimator's crop buffer.
    fn create_crop_material(&mut self, crop: &CropRegion) -> MaterialId;

    fn destroy_material(&mut self, material: MaterialId);
}
