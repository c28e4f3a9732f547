//! Game state and core simulation types
//!
//! The session state is a plain struct mutated by `tick` and `handle_tap`;
//! renderers and score displays read it through `Snapshot`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap
    Ready,
    /// Active gameplay, tick loop running
    Playing,
    /// Run ended on a collision; a tap restarts
    GameOver,
}

/// Screen geometry supplied by the display layer, constant for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    /// Ground line y, derived from height at construction
    pub ground_y: f32,
}

/// Malformed display metrics are a precondition violation, not something the
/// simulation can limp along with.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    NonPositive { width: f32, height: f32 },
    #[error("screen dimensions must be finite, got {width}x{height}")]
    NonFinite { width: f32, height: f32 },
}

impl Geometry {
    /// Build session geometry from raw screen metrics
    pub fn from_screen(width: f32, height: f32, ground_ratio: f32) -> Result<Self, GeometryError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::NonPositive { width, height });
        }
        Ok(Self {
            width,
            height,
            ground_y: height * ground_ratio,
        })
    }
}

/// An obstacle scrolling leftward along the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; strictly decreasing while the obstacle is alive
    pub x: f32,
    /// Fixed at spawn (ground line minus obstacle height)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Fully scrolled past the left screen edge
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// The player avatar's vertical motion state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dino {
    /// Top edge; equals `rest_y` whenever not jumping
    pub y: f32,
    pub is_jumping: bool,
    /// Frames elapsed in the current jump
    pub jump_count: u32,
}

impl Dino {
    pub fn at_rest(rest_y: f32) -> Self {
        Self {
            y: rest_y,
            is_jumping: false,
            jump_count: 0,
        }
    }

    /// Begin a jump; no-op while already airborne
    pub fn start_jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.jump_count = 0;
        true
    }

    /// Advance the jump by one tick.
    ///
    /// Ascends by `jump_height / (duration/2)` per tick for the first half,
    /// descends at the same rate for the second half, then snaps exactly to
    /// `rest_y` to kill floating-point drift. Returns true on the first frame
    /// of a jump (the jump-sound trigger).
    pub fn advance(&mut self, jump_height: f32, duration_ticks: u32, rest_y: f32) -> bool {
        if !self.is_jumping {
            return false;
        }
        let started = self.jump_count == 0;
        let half = duration_ticks / 2;
        let step = jump_height / half as f32;

        if self.jump_count < half {
            self.y -= step;
            self.jump_count += 1;
        } else if self.jump_count < duration_ticks {
            self.y += step;
            self.jump_count += 1;
        } else {
            self.is_jumping = false;
            self.jump_count = 0;
            self.y = rest_y;
        }
        started
    }
}

/// What a tap did, so the caller knows whether to start the tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// Entered Playing from Ready or GameOver; the tick loop must be started
    Started,
    /// A jump began
    Jumped,
    /// Tap while airborne; nothing changed
    Ignored,
}

/// Read-only view of the session for renderers and score displays
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub ground_y: f32,
    pub dino: Aabb,
    pub obstacles: Vec<Aabb>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub geometry: Geometry,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Monotonic per-run counter, +1 each tick
    pub score: u32,
    /// Running max of `score` for the process lifetime
    pub high_score: u32,
    /// Simulation tick counter across all runs
    pub time_ticks: u64,
    pub dino: Dino,
    /// Insertion-ordered: spawn spacing is checked against the last element
    pub obstacles: Vec<Obstacle>,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session in the Ready phase
    pub fn new(geometry: Geometry, tuning: Tuning, seed: u64) -> Self {
        let rest_y = geometry.ground_y - tuning.dino_size;
        Self {
            geometry,
            tuning,
            phase: GamePhase::Ready,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            dino: Dino::at_rest(rest_y),
            obstacles: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Dino rest position: standing on the ground line
    pub fn dino_rest_y(&self) -> f32 {
        self.geometry.ground_y - self.tuning.dino_size
    }

    /// Dino horizontal position, a fixed fraction of screen width
    pub fn dino_x(&self) -> f32 {
        self.geometry.width * self.tuning.dino_x_ratio
    }

    pub fn dino_aabb(&self) -> Aabb {
        Aabb::new(
            self.dino_x(),
            self.dino.y,
            self.tuning.dino_size,
            self.tuning.dino_size,
        )
    }

    /// Apply a tap from the input layer.
    ///
    /// Ready/GameOver: reset the run and enter Playing (caller starts the
    /// tick loop). Playing: start a jump, or ignore if already airborne.
    pub fn handle_tap(&mut self) -> TapAction {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => {
                self.phase = GamePhase::Playing;
                self.score = 0;
                self.dino = Dino::at_rest(self.dino_rest_y());
                self.obstacles.clear();
                log::debug!("run started by tap (high score {})", self.high_score);
                TapAction::Started
            }
            GamePhase::Playing => {
                if self.dino.start_jump() {
                    log::debug!("jump started by tap at score {}", self.score);
                    TapAction::Jumped
                } else {
                    TapAction::Ignored
                }
            }
        }
    }

    /// Read-only state for the render/score layers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            ground_y: self.geometry.ground_y,
            dino: self.dino_aabb(),
            obstacles: self.obstacles.iter().map(Obstacle::aabb).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        let tuning = Tuning::default();
        let geometry = Geometry::from_screen(1000.0, 1000.0, tuning.ground_ratio).unwrap();
        GameState::new(geometry, tuning, 42)
    }

    #[test]
    fn test_geometry_rejects_bad_metrics() {
        assert!(Geometry::from_screen(0.0, 1080.0, 0.7).is_err());
        assert!(Geometry::from_screen(1920.0, -1.0, 0.7).is_err());
        assert!(Geometry::from_screen(f32::NAN, 1080.0, 0.7).is_err());

        let g = Geometry::from_screen(1000.0, 1000.0, 0.7).unwrap();
        assert!((g.ground_y - 700.0).abs() < 1e-6);
    }

    #[test]
    fn test_tap_starts_and_jumps() {
        let mut state = test_state();
        assert_eq!(state.phase, GamePhase::Ready);

        assert_eq!(state.handle_tap(), TapAction::Started);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!((state.dino.y - 550.0).abs() < 1e-6); // 700 - 150

        assert_eq!(state.handle_tap(), TapAction::Jumped);
        assert!(state.dino.is_jumping);
        assert_eq!(state.dino.jump_count, 0);
    }

    #[test]
    fn test_tap_while_jumping_is_noop() {
        let mut state = test_state();
        state.handle_tap();
        state.handle_tap();
        state.dino.jump_count = 17;

        assert_eq!(state.handle_tap(), TapAction::Ignored);
        assert!(state.dino.is_jumping);
        assert_eq!(state.dino.jump_count, 17);
    }

    #[test]
    fn test_tap_after_game_over_resets_run() {
        let mut state = test_state();
        state.handle_tap();
        state.score = 500;
        state.high_score = 500;
        state.obstacles.push(Obstacle {
            x: 300.0,
            y: 550.0,
            width: 150.0,
            height: 150.0,
        });
        state.phase = GamePhase::GameOver;

        assert_eq!(state.handle_tap(), TapAction::Started);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.high_score, 500); // survives restarts
        assert!(!state.dino.is_jumping);
        assert!((state.dino.y - state.dino_rest_y()).abs() < 1e-6);
    }

    #[test]
    fn test_jump_trajectory_returns_to_rest() {
        let rest = 550.0;
        let mut dino = Dino::at_rest(rest);
        assert!(dino.start_jump());

        let mut started_frames = 0;
        let mut min_y = rest;
        for _ in 0..60 {
            if dino.advance(400.0, 60, rest) {
                started_frames += 1;
            }
            min_y = min_y.min(dino.y);
        }
        // Sound trigger fires exactly once, on frame 0
        assert_eq!(started_frames, 1);
        // Apex at the ascend/descend midpoint
        assert!((min_y - (rest - 400.0)).abs() < 1e-3);
        // Back at rest height after the full duration, still flagged airborne
        assert!((dino.y - rest).abs() < 1e-3);
        assert!(dino.is_jumping);

        // The landing tick snaps exactly and clears the jump
        dino.advance(400.0, 60, rest);
        assert!(!dino.is_jumping);
        assert_eq!(dino.jump_count, 0);
        assert_eq!(dino.y, rest);
    }

    #[test]
    fn test_jump_apex_at_half_duration() {
        let rest = 550.0;
        let mut dino = Dino::at_rest(rest);
        dino.start_jump();
        for _ in 0..30 {
            dino.advance(400.0, 60, rest);
        }
        assert!((dino.y - (rest - 400.0)).abs() < 1e-3);
    }

    #[test]
    fn test_obstacle_offscreen_boundary() {
        let mut o = Obstacle {
            x: -150.0,
            y: 550.0,
            width: 150.0,
            height: 150.0,
        };
        // x + width == 0 exactly: still on screen
        assert!(!o.is_offscreen());
        o.x = -150.1;
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = test_state();
        state.handle_tap();
        state.obstacles.push(Obstacle {
            x: 800.0,
            y: 550.0,
            width: 150.0,
            height: 150.0,
        });

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.obstacles.len(), 1);
        assert!((snap.dino.min.x - 200.0).abs() < 1e-6); // 1000 * 0.2
        assert!((snap.ground_y - 700.0).abs() < 1e-6);
    }
}
