//! Entity spawn factories for setting up the session world.
//!
//! Every renderable entity spawns with a Pending hull and leaves a load
//! request behind; nothing gets a live body until the loader reports in.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use corsair_core::components::{Hull, MotionState, Pirate, PlayerBoat, Treasure};
use corsair_core::constants::*;
use corsair_core::loading::LoadRequest;
use corsair_core::types::{EntityKind, NodeId};

/// Spawn the player's boat at its fixed spawn pose.
pub fn spawn_player(
    world: &mut World,
    next_node: &mut u32,
    requests: &mut Vec<LoadRequest>,
) -> Entity {
    let node = allocate_node(next_node);
    requests.push(load_request_for(node, EntityKind::Boat));

    world.spawn((
        PlayerBoat,
        node,
        EntityKind::Boat,
        Hull::Pending {
            position: BOAT_SPAWN_POSITION,
            heading: BOAT_SPAWN_HEADING,
        },
        MotionState {
            linear_velocity: 0.0,
            angular_velocity: 0.0,
            acceleration: BOAT_ACCELERATION,
            max_linear_velocity: BOAT_MAX_SPEED,
            idle_linear: true,
            idle_angular: true,
        },
    ))
}

/// Spawn pirates at a random bearing and range from the player spawn.
/// The range band sits outside the engage radius, so every session opens
/// with pirates in the thrust phase.
pub fn spawn_pirates(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_node: &mut u32,
    requests: &mut Vec<LoadRequest>,
    count: u32,
) {
    for _ in 0..count {
        let bearing = rng.gen_range(0.0..TAU);
        let range = rng.gen_range(PIRATE_SPAWN_RANGE_MIN..PIRATE_SPAWN_RANGE_MAX);
        let heading = rng.gen_range(0.0..TAU);

        let position = DVec3::new(
            BOAT_SPAWN_POSITION.x + range * bearing.cos(),
            BOAT_SPAWN_POSITION.y,
            BOAT_SPAWN_POSITION.z - range * bearing.sin(),
        );

        let node = allocate_node(next_node);
        requests.push(load_request_for(node, EntityKind::Pirate));

        world.spawn((
            Pirate,
            node,
            EntityKind::Pirate,
            Hull::Pending { position, heading },
            MotionState {
                linear_velocity: 0.0,
                angular_velocity: 0.0,
                acceleration: PIRATE_THRUST,
                // pursuit thrust never consults the clamp bound
                max_linear_velocity: f64::MAX,
                idle_linear: true,
                idle_angular: true,
            },
        ));
    }
}

/// Scatter treasures uniformly over the field square at the water line.
pub fn spawn_treasures(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_node: &mut u32,
    requests: &mut Vec<LoadRequest>,
    count: u32,
) {
    for _ in 0..count {
        let x = rng.gen_range(-TREASURE_FIELD_HALF_EXTENT..TREASURE_FIELD_HALF_EXTENT);
        let z = rng.gen_range(-TREASURE_FIELD_HALF_EXTENT..TREASURE_FIELD_HALF_EXTENT);

        let node = allocate_node(next_node);
        requests.push(load_request_for(node, EntityKind::Treasure));

        world.spawn((
            Treasure { alive: true },
            node,
            EntityKind::Treasure,
            Hull::Pending {
                position: DVec3::new(x, TREASURE_HEIGHT, z),
                heading: 0.0,
            },
        ));
    }
}

fn allocate_node(next_node: &mut u32) -> NodeId {
    let node = NodeId(*next_node);
    *next_node += 1;
    node
}

fn load_request_for(node: NodeId, kind: EntityKind) -> LoadRequest {
    LoadRequest {
        node,
        kind,
        path: kind.model_path().to_string(),
    }
}
