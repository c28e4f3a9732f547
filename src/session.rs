//! Shared session state and the fixed-delay tick loop
//!
//! Tap handling and the tick loop may run on different threads, so all
//! mutable game state sits behind one mutex: taps and tick iterations are
//! serialized through it and nothing else. The loop's only exit condition is
//! the phase no longer being Playing, checked at the top of every iteration.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::sim::{GamePhase, GameState, Geometry, Snapshot, TapAction, tick};
use crate::tuning::Tuning;

struct SessionInner {
    state: Mutex<GameState>,
    audio: AudioManager,
}

impl SessionInner {
    /// A poisoned mutex only means another thread panicked mid-tick; the
    /// state itself is still coherent enough to read and reset.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A game session: one dino, one obstacle field, one tick loop at a time
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(geometry: Geometry, tuning: Tuning, audio: AudioManager, seed: u64) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(GameState::new(geometry, tuning, seed)),
                audio,
            }),
        }
    }

    /// Deliver a tap from the input layer.
    ///
    /// Starting a run (from Ready or GameOver) spawns the tick loop thread;
    /// taps during play start jumps and are otherwise ignored.
    pub fn tap(&self) -> TapAction {
        let action = self.inner.lock().handle_tap();
        if action == TapAction::Started {
            let inner = Arc::clone(&self.inner);
            thread::spawn(move || run_tick_loop(inner));
        }
        action
    }

    /// Read-only view for renderers and score displays. Never blocks the
    /// simulation beyond the copy itself.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }
}

/// Drive ticks at a soft fixed delay until the run ends.
///
/// Each iteration sleeps for the tick interval minus its own processing
/// time. A slow tick just sleeps zero; there is no catch-up, so under load
/// the game slows down rather than fast-forwarding.
fn run_tick_loop(inner: Arc<SessionInner>) {
    let interval = Duration::from_millis(inner.lock().tuning.tick_interval_ms);
    log::info!("tick loop started ({}ms interval)", interval.as_millis());

    loop {
        let tick_start = Instant::now();
        let events = {
            let mut state = inner.lock();
            if state.phase != GamePhase::Playing {
                break;
            }
            tick(&mut state)
        };

        // Audio is dispatched outside the lock so a slow backend can never
        // stall tap handling
        if events.jump_started {
            inner.audio.play_jump();
        }
        if events.game_over {
            break;
        }

        if let Some(rest) = interval.checked_sub(tick_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    log::info!("tick loop stopped");
}
