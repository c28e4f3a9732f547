//! Dino Dash - a tap-to-jump endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (game state, tick loop body, collisions)
//! - `session`: Shared session state, tap dispatch, fixed-delay tick loop
//! - `audio`: Fire-and-forget jump sound playback
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod session;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, JumpAudio, NullAudio};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Dino sprite size in world pixels (square)
    pub const DINO_SIZE: f32 = 150.0;
    /// Peak jump height above the ground rest position
    pub const DINO_JUMP_HEIGHT: f32 = 400.0;
    /// Total ticks a jump takes (half ascend, half descend)
    pub const DINO_JUMP_DURATION_TICKS: u32 = 60;
    /// Dino horizontal position as a fraction of screen width
    pub const DINO_X_RATIO: f32 = 0.2;

    /// Obstacle sprite size in world pixels (square)
    pub const OBSTACLE_SIZE: f32 = 150.0;
    /// Leftward obstacle movement per tick
    pub const OBSTACLE_SPEED: f32 = 10.0;
    /// Per-tick spawn probability, in percent
    pub const OBSTACLE_SPAWN_CHANCE: u32 = 2;
    /// Minimum spacing between consecutive spawns, in obstacle widths
    pub const MIN_GAP_OBSTACLE_WIDTHS: f32 = 3.0;

    /// Ground line position as a fraction of screen height
    pub const GROUND_HEIGHT_RATIO: f32 = 0.7;

    /// Nominal delay between simulation ticks
    pub const TICK_INTERVAL_MS: u64 = 30;

    /// Hit-box scale applied before overlap tests (forgiving collisions)
    pub const COLLISION_SHRINK_FACTOR: f32 = 0.7;
}
