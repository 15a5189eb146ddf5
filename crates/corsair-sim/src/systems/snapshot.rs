//! Snapshot system — queries the ECS world and builds a complete WorldSnapshot.
//!
//! Read-only over the world; the event and alert buffers are taken by the
//! engine before the call so each snapshot carries only its own frame's
//! output.

use hecs::World;

use corsair_core::components::{Hull, MotionState, Pirate, PlayerBoat, Treasure};
use corsair_core::events::{Alert, SceneEvent};
use corsair_core::state::{BoatView, CameraView, ScoreView, TreasureView, WorldSnapshot};
use corsair_core::types::{NodeId, SimTime};

use crate::engine::ScoreState;

pub fn build_snapshot(
    world: &World,
    time: SimTime,
    camera: Option<CameraView>,
    scene_events: Vec<SceneEvent>,
    alerts: Vec<Alert>,
    score: &ScoreState,
) -> WorldSnapshot {
    WorldSnapshot {
        time,
        player: build_player(world),
        pirates: build_pirates(world),
        treasures: build_treasures(world),
        camera,
        scene_events,
        alerts,
        score: ScoreView {
            treasures_collected: score.treasures_collected,
            treasures_total: score.treasures_total,
        },
    }
}

fn boat_view(node: NodeId, hull: &Hull, motion: &MotionState) -> Option<BoatView> {
    match hull {
        Hull::Ready(body) => Some(BoatView {
            node,
            position: body.position,
            heading: body.heading,
            speed: motion.linear_velocity,
        }),
        Hull::Pending { .. } => None,
    }
}

fn build_player(world: &World) -> Option<BoatView> {
    world
        .query::<(&PlayerBoat, &NodeId, &Hull, &MotionState)>()
        .iter()
        .next()
        .and_then(|(_, (_, node, hull, motion))| boat_view(*node, hull, motion))
}

fn build_pirates(world: &World) -> Vec<BoatView> {
    let mut query = world.query::<(&Pirate, &NodeId, &Hull, &MotionState)>();
    let mut pirates: Vec<BoatView> = query
        .iter()
        .filter_map(|(_, (_, node, hull, motion))| boat_view(*node, hull, motion))
        .collect();

    pirates.sort_by_key(|view| view.node);
    pirates
}

fn build_treasures(world: &World) -> Vec<TreasureView> {
    let mut query = world.query::<(&Treasure, &NodeId, &Hull)>();
    let mut treasures: Vec<TreasureView> = query
        .iter()
        .filter_map(|(_, (treasure, node, hull))| {
            if !treasure.alive {
                return None;
            }
            match hull {
                Hull::Ready(body) => Some(TreasureView {
                    node: *node,
                    position: body.position,
                }),
                Hull::Pending { .. } => None,
            }
        })
        .collect();

    treasures.sort_by_key(|view| view.node);
    treasures
}
