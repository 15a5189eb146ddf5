//! Pursuit system — drives every pirate toward the player each frame.
//!
//! Asks the pursuit policy for a decision per pirate, applies it, then
//! advances the pirate's own body. Skipped entirely while the player's
//! model is loading: with no quarry there is nothing to chase.

use hecs::World;

use corsair_core::components::{Hull, MotionState, Pirate};
use corsair_pursuit::steering::{decide, PursuitAction, PursuitContext, PursuitProfile};

use super::movement;

pub fn run(world: &mut World) {
    let Some(player) = super::player_body(world) else {
        return;
    };
    let profile = PursuitProfile::standard();

    for (_entity, (_pirate, hull, motion)) in
        world.query_mut::<(&Pirate, &mut Hull, &mut MotionState)>()
    {
        let Hull::Ready(body) = hull else {
            continue;
        };

        let ctx = PursuitContext {
            position: body.position,
            heading: body.heading,
            quarry: player.position,
        };
        match decide(&ctx, &profile) {
            PursuitAction::Steer { turn } => movement::apply_direct_steering(body, turn),
            PursuitAction::Thrust => motion.linear_velocity += motion.acceleration,
        }
        movement::advance(body, motion);
    }
}
