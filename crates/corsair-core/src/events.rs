//! Events emitted by the simulation for the renderer and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::{EntityKind, NodeId};

/// Scene graph instructions, applied by the renderer in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A model finished loading; add its node at this pose.
    NodeAdded {
        node: NodeId,
        kind: EntityKind,
        position: DVec3,
        heading: f64,
        scale: f64,
    },
    /// An entity left the world; remove its node.
    NodeRemoved { node: NodeId },
}

/// Alert severity for the UI alert queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub frame: u64,
}
