use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::hand_tracking::landmarks::CropRegion;
use crate::hand_tracking::skeleton::scene::{Drawable, MaterialId, NodeId, SceneGraph, Transform};

/// What a node in a [`RecordingScene`] is
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Anchor(String),
    Drawable(Drawable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    /// `None` for nodes attached directly to the camera
    pub parent: Option<NodeId>,
    pub transform: Transform,
}

/// In-memory scene graph that records node state for inspection.
#[derive(Debug, Default)]
pub struct RecordingScene {
    nodes: BTreeMap<NodeId, SceneNode>,
    materials: HashSet<MaterialId>,
    next_id: u64,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn children_of(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent == Some(parent))
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn count_drawables(&self, drawable: Drawable) -> usize {
        self.nodes
            .values()
            .filter(|node| node.kind == NodeKind::Drawable(drawable))
            .count()
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl SceneGraph for RecordingScene {
    fn create_camera_anchor(&mut self, name: &str) -> NodeId {
        let id = NodeId(self.allocate());
        self.nodes.insert(
            id,
            SceneNode {
                kind: NodeKind::Anchor(name.to_string()),
                parent: None,
                transform: Transform::identity(),
            },
        );
        id
    }

    fn spawn(&mut self, drawable: Drawable, parent: NodeId) -> NodeId {
        let id = NodeId(self.allocate());
        self.nodes.insert(
            id,
            SceneNode {
                kind: NodeKind::Drawable(drawable),
                parent: Some(parent),
                transform: Transform::identity(),
            },
        );
        id
    }

    fn set_local_transform(&mut self, node: NodeId, transform: &Transform) {
        match self.nodes.get_mut(&node) {
            Some(n) => n.transform = *transform,
            None => trace!(?node, "Transform set on destroyed node"),
        }
    }

    fn destroy(&mut self, node: NodeId) {
        for child in self.children_of(node) {
            self.destroy(child);
        }
        self.nodes.remove(&node);
    }

    fn create_crop_material(&mut self, _crop: &CropRegion) -> MaterialId {
        let id = MaterialId(self.allocate());
        self.materials.insert(id);
        id
    }

    fn destroy_material(&mut self, material: MaterialId) {
        self.materials.remove(&material);
    }
}
