//! Fire-and-forget jump sound playback
//!
//! The simulation never waits on audio: playback is dispatched once at the
//! first frame of each jump and failures are logged and dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio backend unavailable")]
    Unavailable,
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Playback backend contract. Implementations must return promptly; the tick
/// loop calls this between frames.
pub trait JumpAudio: Send + Sync {
    fn play_jump_sound(&self) -> Result<(), AudioError>;
}

/// Silent backend for headless runs and tests
pub struct NullAudio;

impl JumpAudio for NullAudio {
    fn play_jump_sound(&self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Owns the playback backend and swallows its failures
pub struct AudioManager {
    sink: Option<Box<dyn JumpAudio>>,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn JumpAudio>) -> Self {
        Self {
            sink: Some(sink),
            muted: false,
        }
    }

    /// A manager with no backend; every play is a no-op
    pub fn disabled() -> Self {
        Self {
            sink: None,
            muted: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Best-effort jump sound. Audio trouble never reaches the simulation.
    pub fn play_jump(&self) {
        if self.muted {
            return;
        }
        let Some(sink) = &self.sink else { return };
        if let Err(e) = sink.play_jump_sound() {
            log::warn!("jump sound failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingAudio(Arc<AtomicU32>);

    impl JumpAudio for CountingAudio {
        fn play_jump_sound(&self) -> Result<(), AudioError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingAudio;

    impl JumpAudio for FailingAudio {
        fn play_jump_sound(&self) -> Result<(), AudioError> {
            Err(AudioError::Unavailable)
        }
    }

    #[test]
    fn test_disabled_and_muted_play_nothing() {
        AudioManager::disabled().play_jump();

        let mut mgr = AudioManager::new(Box::new(FailingAudio));
        mgr.set_muted(true);
        mgr.play_jump(); // would fail if it reached the backend
    }

    #[test]
    fn test_backend_failure_is_swallowed() {
        let mgr = AudioManager::new(Box::new(FailingAudio));
        mgr.play_jump(); // must not panic or propagate
    }

    #[test]
    fn test_play_reaches_backend() {
        let counter = Arc::new(AtomicU32::new(0));
        let mgr = AudioManager::new(Box::new(CountingAudio(counter.clone())));
        mgr.play_jump();
        mgr.play_jump();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
