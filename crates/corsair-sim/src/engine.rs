//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, drains input events and
//! load completions at each frame boundary, runs all systems, and
//! produces `WorldSnapshot`s. Completely headless (no window or GPU
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use corsair_core::components::{MotionState, PlayerBoat};
use corsair_core::constants::{PIRATE_COUNT, TREASURE_COUNT};
use corsair_core::events::{Alert, SceneEvent};
use corsair_core::input::{control_for_key, InputEvent};
use corsair_core::loading::{LoadCompletion, LoadRequest};
use corsair_core::state::{CameraView, WorldSnapshot};
use corsair_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same world.
    pub seed: u64,
    /// Number of pirates to spawn.
    pub pirates: u32,
    /// Number of treasures to scatter.
    pub treasures: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pirates: PIRATE_COUNT,
            treasures: TREASURE_COUNT,
        }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub treasures_collected: u32,
    pub treasures_total: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    next_node: u32,
    input_queue: VecDeque<InputEvent>,
    completion_queue: VecDeque<LoadCompletion>,
    pending_requests: Vec<LoadRequest>,
    despawn_buffer: Vec<hecs::Entity>,
    camera: Option<CameraView>,
    scene_events: Vec<SceneEvent>,
    alerts: Vec<Alert>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new engine with the world fully spawned. Every entity
    /// starts with a Pending hull; callers collect the load requests via
    /// [`take_load_requests`](Self::take_load_requests) and feed results
    /// back with [`queue_load_completion`](Self::queue_load_completion).
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_node: 0,
            input_queue: VecDeque::new(),
            completion_queue: VecDeque::new(),
            pending_requests: Vec::new(),
            despawn_buffer: Vec::new(),
            camera: None,
            scene_events: Vec::new(),
            alerts: Vec::new(),
            score: ScoreState {
                treasures_collected: 0,
                treasures_total: config.treasures,
            },
        };

        world_setup::spawn_player(
            &mut engine.world,
            &mut engine.next_node,
            &mut engine.pending_requests,
        );
        world_setup::spawn_pirates(
            &mut engine.world,
            &mut engine.rng,
            &mut engine.next_node,
            &mut engine.pending_requests,
            config.pirates,
        );
        world_setup::spawn_treasures(
            &mut engine.world,
            &mut engine.rng,
            &mut engine.next_node,
            &mut engine.pending_requests,
            config.treasures,
        );

        log::info!(
            "session start: seed {}, {} pirates, {} treasures",
            config.seed,
            config.pirates,
            config.treasures
        );

        engine
    }

    /// Queue an input event for processing at the next frame boundary.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple input events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Queue a load completion for processing at the next frame boundary.
    pub fn queue_load_completion(&mut self, completion: LoadCompletion) {
        self.completion_queue.push_back(completion);
    }

    /// Take the load requests issued since the last call.
    pub fn take_load_requests(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.pending_requests)
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn frame(&mut self) -> WorldSnapshot {
        self.process_inputs();
        self.apply_load_completions();
        self.run_systems();
        self.time.advance();

        let scene_events = std::mem::take(&mut self.scene_events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.camera,
            scene_events,
            alerts,
            &self.score,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a copy of the player's controller state (for testing).
    #[cfg(test)]
    pub fn player_motion(&self) -> Option<MotionState> {
        self.world
            .query::<(&PlayerBoat, &MotionState)>()
            .iter()
            .next()
            .map(|(_, (_, motion))| *motion)
    }

    /// Get the player's live body, if loaded (for testing).
    #[cfg(test)]
    pub fn player_body(&self) -> Option<corsair_core::components::KinematicBody> {
        systems::player_body(&self.world)
    }

    /// Move the player's live body to a fixed position (for testing).
    #[cfg(test)]
    pub fn teleport_player(&mut self, position: glam::DVec3) {
        use corsair_core::components::Hull;

        for (_entity, (_player, hull)) in self.world.query_mut::<(&PlayerBoat, &mut Hull)>() {
            if let Hull::Ready(body) = hull {
                body.position = position;
            }
        }
    }

    /// Spawn an already-loaded treasure at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_ready_treasure(&mut self, position: glam::DVec3) -> corsair_core::types::NodeId {
        use corsair_core::components::{Hull, KinematicBody, Treasure};
        use corsair_core::types::{EntityKind, NodeId};

        let node = NodeId(self.next_node);
        self.next_node += 1;
        self.score.treasures_total += 1;
        self.world.spawn((
            Treasure { alive: true },
            node,
            EntityKind::Treasure,
            Hull::Ready(KinematicBody {
                position,
                heading: 0.0,
            }),
        ));
        node
    }

    /// Process all queued input events.
    fn process_inputs(&mut self) {
        while let Some(event) = self.input_queue.pop_front() {
            self.handle_input(event);
        }
    }

    /// Apply a single input event to the player's controller state.
    /// Unmapped keys are dropped without effect.
    fn handle_input(&mut self, event: InputEvent) {
        let (control, pressed) = match &event {
            InputEvent::KeyDown { key } => match control_for_key(key) {
                Some(control) => (control, true),
                None => return,
            },
            InputEvent::KeyUp { key } => match control_for_key(key) {
                Some(control) => (control, false),
                None => return,
            },
        };

        for (_entity, (_player, motion)) in
            self.world.query_mut::<(&PlayerBoat, &mut MotionState)>()
        {
            if pressed {
                systems::controller::on_key_down(motion, control);
            } else {
                systems::controller::on_key_up(motion, control);
            }
        }
    }

    /// Apply all queued load completions.
    fn apply_load_completions(&mut self) {
        while let Some(completion) = self.completion_queue.pop_front() {
            systems::loading::apply_completion(
                &mut self.world,
                completion,
                self.time.frame,
                &mut self.scene_events,
                &mut self.alerts,
            );
        }
    }

    /// Run all systems in frame order.
    fn run_systems(&mut self) {
        // 1. Player movement integration
        systems::movement::run(&mut self.world);
        // 2. Chase camera placement off the new pose
        self.camera = systems::camera::run(&self.world);
        // 3. Friction decay on idle controller axes
        systems::controller::run_decay(&mut self.world);
        // 4. Pirate pursuit (steer or thrust, then advance)
        systems::pursuit::run(&mut self.world);
        // 5. Pickup detection
        systems::collision::run(&mut self.world, &mut self.score, &mut self.scene_events);
        // 6. Cleanup (collected treasures)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
