//! CORSAIR demo host.
//!
//! Spawns the game loop and sails a short scripted voyage: ahead full,
//! a sweep to port, then coasting to rest while pirates close in. Status
//! goes to the log; a summary prints on shutdown.

use std::sync::Arc;
use std::time::Duration;

use corsair_app::game_loop;
use corsair_app::state::{GameLoopCommand, SharedSnapshot};
use corsair_core::input::InputEvent;
use corsair_sim::engine::SimConfig;

fn key_down(key: &str) -> GameLoopCommand {
    GameLoopCommand::Input(InputEvent::KeyDown { key: key.into() })
}

fn key_up(key: &str) -> GameLoopCommand {
    GameLoopCommand::Input(InputEvent::KeyUp { key: key.into() })
}

fn log_status(latest: &SharedSnapshot) {
    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            match &snapshot.player {
                Some(player) => log::info!(
                    "frame {}: boat at ({:.1}, {:.1}), heading {:.2}, speed {:.3}, \
                     {}/{} treasures, {} pirates in sight",
                    snapshot.time.frame,
                    player.position.x,
                    player.position.z,
                    player.heading,
                    player.speed,
                    snapshot.score.treasures_collected,
                    snapshot.score.treasures_total,
                    snapshot.pirates.len(),
                ),
                None => log::info!("frame {}: boat still loading", snapshot.time.frame),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let latest: SharedSnapshot = Arc::default();
    let (commands, handle) =
        game_loop::spawn_game_loop(SimConfig::default(), Arc::clone(&latest));

    // The voyage script: (time from start, key event).
    let script = [
        (Duration::from_millis(500), key_down("w")),
        (Duration::from_millis(2500), key_down("a")),
        (Duration::from_millis(4000), key_up("a")),
        (Duration::from_millis(6500), key_up("w")),
    ];

    let mut elapsed = Duration::ZERO;
    for (at, command) in script {
        std::thread::sleep(at - elapsed);
        elapsed = at;
        if commands.send(command).is_err() {
            break;
        }
        log_status(&latest);
    }

    // Coast for a few seconds and watch the world go by.
    for _ in 0..3 {
        std::thread::sleep(Duration::from_secs(1));
        log_status(&latest);
    }

    let _ = commands.send(GameLoopCommand::Shutdown);
    let report = handle.join().expect("game loop thread panicked");

    println!(
        "voyage over: {} frames, {}/{} treasures collected, {} nodes in the scene",
        report.frames, report.treasures_collected, report.treasures_total, report.live_nodes
    );
    if let Some(position) = report.final_position {
        println!("boat rests at ({:.1}, {:.1})", position.x, position.z);
    }
}
