//! State shared between the main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use corsair_core::input::InputEvent;
use corsair_core::state::WorldSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A raw key event to forward to the simulation engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, written by the game loop after every frame and
/// polled by the host.
pub type SharedSnapshot = Arc<Mutex<Option<WorldSnapshot>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared: SharedSnapshot = Arc::default();
        assert!(shared.lock().unwrap().is_none());
    }
}
