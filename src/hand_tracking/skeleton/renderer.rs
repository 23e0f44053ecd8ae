use std::f32::consts::PI;

use nalgebra::{UnitQuaternion, Vector3};
use serde::Deserialize;
use tracing::{debug, info};

use crate::hand_tracking::calibration::CalibrationSettings;
use crate::hand_tracking::landmarks::{CropRegion, WorldLandmarks};
use crate::hand_tracking::skeleton::scene::{Drawable, MaterialId, NodeId, SceneGraph, Transform};
use crate::hand_tracking::skeleton::topology::{BONES, JOINT_COUNT};

/// Below this length a bone has no usable direction
const MIN_BONE_LENGTH: f32 = 1e-6;

const ANCHOR_NAME: &str = "Hand Visualization Root";

/// Drawable sizing, in anchor-local units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SkeletonStyle {
    #[serde(default = "default_joint_scale")]
    pub joint_scale: f32,
    /// Cross-section of every bone
    #[serde(default = "default_bone_scale")]
    pub bone_scale: f32,
}

fn default_joint_scale() -> f32 { 0.01 }
fn default_bone_scale() -> f32 { 0.005 }

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            joint_scale: default_joint_scale(),
            bone_scale: default_bone_scale(),
        }
    }
}

/// Anchor placement in front of the camera.
pub fn anchor_transform(settings: &CalibrationSettings) -> Transform {
    Transform::identity()
        .with_position(Vector3::new(0.0, 0.0, settings.visualization_distance))
        .with_uniform_scale(settings.visualization_scale)
}

/// Transform of a bone spanning `start` to `end`.
///
/// The bone primitive is centred on its origin with its length along local
/// +Y, so the Y scale is half the segment length.
pub fn bone_transform(start: &Vector3<f32>, end: &Vector3<f32>, bone_scale: f32) -> Transform {
    let center = (start + end) / 2.0;
    let direction = end - start;
    let length = direction.norm();

    Transform {
        position: center,
        rotation: rotation_from_up(&direction),
        scale: Vector3::new(bone_scale, length / 2.0, bone_scale),
    }
}

/// Rotation taking local +Y onto `direction`.
fn rotation_from_up(direction: &Vector3<f32>) -> UnitQuaternion<f32> {
    if direction.norm() < MIN_BONE_LENGTH {
        return UnitQuaternion::identity();
    }
    UnitQuaternion::rotation_between(&Vector3::y(), direction)
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI))
}

/// Persistent joint and bone drawables parented to a calibratable anchor.
pub struct SkeletonRenderer {
    anchor: NodeId,
    joints: Vec<NodeId>,
    bones: Vec<NodeId>,
    crop_material: Option<MaterialId>,
    style: SkeletonStyle,
}

impl SkeletonRenderer {
    pub fn spawn<S: SceneGraph>(
        scene: &mut S,
        settings: &CalibrationSettings,
        style: SkeletonStyle,
    ) -> Self {
        let anchor = scene.create_camera_anchor(ANCHOR_NAME);
        scene.set_local_transform(anchor, &anchor_transform(settings));

        let joint_rest = Transform::identity().with_uniform_scale(style.joint_scale);
        let joints: Vec<NodeId> = (0..JOINT_COUNT)
            .map(|_| {
                let joint = scene.spawn(Drawable::Joint, anchor);
                scene.set_local_transform(joint, &joint_rest);
                joint
            })
            .collect();

        let bone_rest = Transform::identity()
            .with_scale(Vector3::new(style.bone_scale, style.bone_scale, 1.0));
        let bones: Vec<NodeId> = BONES
            .iter()
            .map(|_| {
                let bone = scene.spawn(Drawable::Bone, anchor);
                scene.set_local_transform(bone, &bone_rest);
                bone
            })
            .collect();

        info!(
            joints = joints.len(),
            bones = bones.len(),
            "Skeleton spawned"
        );

        Self {
            anchor,
            joints,
            bones,
            crop_material: None,
            style,
        }
    }

    pub fn anchor(&self) -> NodeId {
        self.anchor
    }

    pub fn joints(&self) -> &[NodeId] {
        &self.joints
    }

    pub fn bones(&self) -> &[NodeId] {
        &self.bones
    }

    pub fn style(&self) -> SkeletonStyle {
        self.style
    }

    pub fn crop_material(&self) -> Option<MaterialId> {
        self.crop_material
    }

    /// Re-applies visualization distance and scale to the anchor.
    pub fn apply_anchor<S: SceneGraph>(&self, scene: &mut S, settings: &CalibrationSettings) {
        debug!(
            distance = settings.visualization_distance,
            scale = settings.visualization_scale,
            "Updating visualization anchor"
        );
        scene.set_local_transform(self.anchor, &anchor_transform(settings));
    }

    /// Binds a debug material to the estimator's crop buffer, replacing any
    /// previous one.
    pub fn bind_crop_material<S: SceneGraph>(&mut self, scene: &mut S, crop: &CropRegion) {
        if let Some(old) = self.crop_material.take() {
            scene.destroy_material(old);
        }
        self.crop_material = Some(scene.create_crop_material(crop));
    }

    pub fn update<S: SceneGraph>(&self, scene: &mut S, points: &WorldLandmarks) {
        let joint_scale = Vector3::repeat(self.style.joint_scale);
        for (&joint, point) in self.joints.iter().zip(points.iter()) {
            let transform = Transform::identity()
                .with_position(*point)
                .with_scale(joint_scale);
            scene.set_local_transform(joint, &transform);
        }

        for (&bone, &(start, end)) in self.bones.iter().zip(BONES.iter()) {
            let transform = bone_transform(&points[start], &points[end], self.style.bone_scale);
            scene.set_local_transform(bone, &transform);
        }
    }

    /// Destroys every drawable, the anchor and the crop material.
    pub fn teardown<S: SceneGraph>(self, scene: &mut S) {
        for &node in self.joints.iter().chain(self.bones.iter()) {
            scene.destroy(node);
        }
        scene.destroy(self.anchor);
        if let Some(material) = self.crop_material {
            scene.destroy_material(material);
        }
        info!("Skeleton torn down");
    }
}
