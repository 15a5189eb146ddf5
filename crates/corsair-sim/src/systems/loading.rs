//! Load completion handling — promotes hulls from Pending to Ready.
//!
//! The sim never blocks on asset IO. Entities spawn with a Pending hull
//! and a load request; when the loader reports back, the hull becomes a
//! live body at the pose it was waiting with and the renderer is told to
//! add the node. A failed load leaves the hull Pending for good, so every
//! system keeps skipping the entity.

use hecs::World;

use corsair_core::components::{Hull, KinematicBody};
use corsair_core::events::{Alert, AlertLevel, SceneEvent};
use corsair_core::loading::{LoadCompletion, LoadOutcome};
use corsair_core::types::{EntityKind, NodeId};

pub fn apply_completion(
    world: &mut World,
    completion: LoadCompletion,
    frame: u64,
    scene_events: &mut Vec<SceneEvent>,
    alerts: &mut Vec<Alert>,
) {
    let LoadCompletion { node, outcome } = completion;

    let mut pending: Option<(hecs::Entity, EntityKind, glam::DVec3, f64)> = None;
    {
        let mut query = world.query::<(&NodeId, &EntityKind, &Hull)>();
        for (entity, (id, kind, hull)) in query.iter() {
            if *id != node {
                continue;
            }
            if let Hull::Pending { position, heading } = hull {
                pending = Some((entity, *kind, *position, *heading));
            }
            break;
        }
    }

    let Some((entity, kind, position, heading)) = pending else {
        log::warn!("load completion for unknown or already-live node {}", node.0);
        return;
    };

    match outcome {
        LoadOutcome::Loaded => {
            if let Ok(mut hull) = world.get::<&mut Hull>(entity) {
                *hull = Hull::Ready(KinematicBody { position, heading });
            }
            scene_events.push(SceneEvent::NodeAdded {
                node,
                kind,
                position,
                heading,
                scale: kind.model_scale(),
            });
        }
        LoadOutcome::Failed { reason } => {
            log::warn!("model load failed for node {} ({:?}): {}", node.0, kind, reason);
            alerts.push(Alert {
                level: AlertLevel::Warning,
                message: format!("failed to load {:?} model: {}", kind, reason),
                frame,
            });
        }
    }
}
