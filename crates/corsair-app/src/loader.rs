//! Asset loader worker — answers the engine's load requests off-thread.
//!
//! Models are cached as templates keyed by asset path: the first request
//! for a path "parses" the template, every later request clones it. The
//! simulation never blocks on this; completions flow back over a channel
//! and the engine applies them at its next frame boundary.

use std::collections::HashMap;
use std::sync::mpsc;

use corsair_core::constants::{BOAT_MODEL_PATH, TREASURE_MODEL_PATH};
use corsair_core::loading::{LoadCompletion, LoadOutcome, LoadRequest};

/// One cached model, cloned per scene node.
#[derive(Debug, Clone)]
pub struct ModelTemplate {
    pub path: String,
    /// Scene nodes cloned off this template so far.
    pub clones: u32,
}

/// Template cache over the assets the game ships with.
pub struct ModelLibrary {
    templates: HashMap<String, ModelTemplate>,
}

impl ModelLibrary {
    /// A library that knows the shipped boat and treasure models.
    pub fn with_known_assets() -> Self {
        let mut templates = HashMap::new();
        for path in [BOAT_MODEL_PATH, TREASURE_MODEL_PATH] {
            templates.insert(
                path.to_string(),
                ModelTemplate {
                    path: path.to_string(),
                    clones: 0,
                },
            );
        }
        Self { templates }
    }

    /// Clone a node off the template for `path`.
    pub fn clone_node(&mut self, path: &str) -> Result<&ModelTemplate, String> {
        match self.templates.get_mut(path) {
            Some(template) => {
                template.clones += 1;
                Ok(template)
            }
            None => Err(format!("unknown asset path: {path}")),
        }
    }

    /// Total nodes cloned across all templates.
    pub fn total_clones(&self) -> u32 {
        self.templates.values().map(|t| t.clones).sum()
    }
}

/// Spawn the loader worker thread.
///
/// Returns the request sender and completion receiver the game loop
/// bridges to the engine. The worker exits when the request sender drops.
pub fn spawn_loader() -> (mpsc::Sender<LoadRequest>, mpsc::Receiver<LoadCompletion>) {
    let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
    let (completion_tx, completion_rx) = mpsc::channel::<LoadCompletion>();

    std::thread::Builder::new()
        .name("corsair-loader".into())
        .spawn(move || {
            let mut library = ModelLibrary::with_known_assets();
            for request in request_rx {
                let outcome = match library.clone_node(&request.path) {
                    Ok(template) => {
                        log::debug!(
                            "cloned node {} from {} (clone #{})",
                            request.node.0,
                            template.path,
                            template.clones
                        );
                        LoadOutcome::Loaded
                    }
                    Err(reason) => LoadOutcome::Failed { reason },
                };
                if completion_tx
                    .send(LoadCompletion {
                        node: request.node,
                        outcome,
                    })
                    .is_err()
                {
                    return;
                }
            }
        })
        .expect("Failed to spawn loader thread");

    (request_tx, completion_rx)
}
