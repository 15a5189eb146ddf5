//! Pickup detection — tests living treasures against the player's
//! pickup box.
//!
//! The box is axis-aligned, 2 * PICKUP_HALF_EXTENT on a side, centered
//! on the player; height never enters the test. Hits are marked dead
//! and reported; cleanup despawns them at the end of the same frame.

use glam::DVec3;
use hecs::World;

use corsair_core::components::{Hull, Treasure};
use corsair_core::constants::PICKUP_HALF_EXTENT;
use corsair_core::events::SceneEvent;
use corsair_core::types::NodeId;

use crate::engine::ScoreState;

/// Strict planar overlap test. An offset of exactly the half-extent on
/// either axis misses.
fn within_pickup_box(player: DVec3, treasure: DVec3) -> bool {
    (player.x - treasure.x).abs() < PICKUP_HALF_EXTENT
        && (player.z - treasure.z).abs() < PICKUP_HALF_EXTENT
}

/// Collect every living, loaded treasure inside the player's pickup box.
pub fn run(world: &mut World, score: &mut ScoreState, scene_events: &mut Vec<SceneEvent>) {
    let Some(player) = super::player_body(world) else {
        return;
    };

    for (_entity, (treasure, hull, node)) in
        world.query_mut::<(&mut Treasure, &Hull, &NodeId)>()
    {
        if !treasure.alive {
            continue;
        }
        let Hull::Ready(body) = hull else {
            continue;
        };
        if within_pickup_box(player.position, body.position) {
            treasure.alive = false;
            score.treasures_collected += 1;
            scene_events.push(SceneEvent::NodeRemoved { node: *node });
        }
    }
}
