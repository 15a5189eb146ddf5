//! Cleanup — despawns treasures marked dead by pickup.

use hecs::{Entity, World};

use corsair_core::components::Treasure;

/// Remove dead treasures from the world. The buffer is engine-owned to
/// avoid a per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, treasure) in world.query_mut::<&Treasure>() {
        if !treasure.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
