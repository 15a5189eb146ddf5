//! World snapshot — the complete visible state sent to the renderer each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::events::{Alert, SceneEvent};
use crate::types::{NodeId, SimTime};

/// Complete visible state broadcast to the renderer after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    /// None until the player's model load completes.
    pub player: Option<BoatView>,
    /// Live pirates, sorted by node id.
    pub pirates: Vec<BoatView>,
    /// Living treasures with loaded models, sorted by node id.
    pub treasures: Vec<TreasureView>,
    /// None until the player's body exists.
    pub camera: Option<CameraView>,
    /// Scene graph changes since the previous snapshot.
    pub scene_events: Vec<SceneEvent>,
    pub alerts: Vec<Alert>,
    pub score: ScoreView,
}

/// A boat (player or pirate) on the water.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatView {
    pub node: NodeId,
    pub position: DVec3,
    /// Rotation about the vertical axis (radians).
    pub heading: f64,
    /// Units per frame; negative when running astern.
    pub speed: f64,
}

/// A living treasure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasureView {
    pub node: NodeId,
    pub position: DVec3,
}

/// Trailing third-person camera pose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
    /// Always the player body's position.
    pub look_at: DVec3,
}

/// Running pickup tally.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub treasures_collected: u32,
    pub treasures_total: u32,
}
