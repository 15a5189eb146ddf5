//! Headless scene mirror — the app-side picture of the render scene.
//!
//! Applies each snapshot's scene events and transform updates to a node
//! map, standing in for a real scene graph. Nodes exist only between
//! their NodeAdded and NodeRemoved events, so the mirror doubles as a
//! check that the engine's event stream is self-consistent.

use std::collections::HashMap;

use glam::DVec3;

use corsair_core::events::SceneEvent;
use corsair_core::state::{BoatView, CameraView, WorldSnapshot};
use corsair_core::types::{EntityKind, NodeId};

/// One visual node in the mirrored scene.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub kind: EntityKind,
    pub position: DVec3,
    pub heading: f64,
    pub scale: f64,
}

/// The mirrored scene: node map plus the current camera pose.
#[derive(Default)]
pub struct SceneMirror {
    nodes: HashMap<NodeId, SceneNode>,
    pub camera: Option<CameraView>,
}

impl SceneMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's snapshot into the scene.
    pub fn apply(&mut self, snapshot: &WorldSnapshot) {
        for event in &snapshot.scene_events {
            match event {
                SceneEvent::NodeAdded {
                    node,
                    kind,
                    position,
                    heading,
                    scale,
                } => {
                    self.nodes.insert(
                        *node,
                        SceneNode {
                            kind: *kind,
                            position: *position,
                            heading: *heading,
                            scale: *scale,
                        },
                    );
                }
                SceneEvent::NodeRemoved { node } => {
                    self.nodes.remove(node);
                }
            }
        }

        if let Some(player) = &snapshot.player {
            self.update_boat(player);
        }
        for pirate in &snapshot.pirates {
            self.update_boat(pirate);
        }
        for treasure in &snapshot.treasures {
            if let Some(node) = self.nodes.get_mut(&treasure.node) {
                node.position = treasure.position;
            }
        }

        self.camera = snapshot.camera;
    }

    fn update_boat(&mut self, view: &BoatView) {
        if let Some(node) = self.nodes.get_mut(&view.node) {
            node.position = view.position;
            node.heading = view.heading;
        }
    }

    pub fn node(&self, node: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
