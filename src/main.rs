//! Dino Dash headless demo
//!
//! Runs a few autoplayed sessions at full speed: a trivial pilot taps
//! whenever the nearest obstacle comes into jump range. Useful for eyeballing
//! the simulation via logs without any renderer attached.

use std::thread;
use std::time::Duration;

use dino_dash::audio::{AudioError, AudioManager, JumpAudio};
use dino_dash::session::Session;
use dino_dash::sim::{GamePhase, Geometry, Snapshot};
use dino_dash::tuning::Tuning;

/// "Plays" the jump sound into the log
struct ConsoleAudio;

impl JumpAudio for ConsoleAudio {
    fn play_jump_sound(&self) -> Result<(), AudioError> {
        log::info!("* jump sound *");
        Ok(())
    }
}

/// Tap when the nearest obstacle ahead is close enough that a jump started
/// now keeps the dino above it while it passes
fn should_jump(snap: &Snapshot) -> bool {
    let dino_front = snap.dino.min.x + snap.dino.size.x;
    snap.obstacles
        .iter()
        .filter(|o| o.min.x + o.size.x > snap.dino.min.x)
        .any(|o| o.min.x - dino_front < 120.0)
}

fn main() {
    env_logger::init();

    let tuning = Tuning::default();
    let geometry = match Geometry::from_screen(1920.0, 1080.0, tuning.ground_ratio) {
        Ok(g) => g,
        Err(e) => {
            log::error!("bad demo geometry: {e}");
            return;
        }
    };
    let audio = AudioManager::new(Box::new(ConsoleAudio));
    let session = Session::new(geometry, tuning, audio, rand::random());

    let mut runs = 0;
    session.tap();
    log::info!("demo run {} started", runs + 1);

    loop {
        thread::sleep(Duration::from_millis(30));
        let snap = session.snapshot();
        match snap.phase {
            GamePhase::Playing => {
                if should_jump(&snap) {
                    session.tap();
                }
            }
            GamePhase::GameOver => {
                runs += 1;
                println!(
                    "run {} over: score {}, high score {}",
                    runs, snap.score, snap.high_score
                );
                if runs >= 3 {
                    break;
                }
                session.tap();
                log::info!("demo run {} started", runs + 1);
            }
            GamePhase::Ready => {
                session.tap();
            }
        }
    }
}
