//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (pacing is the session's job, not the sim's)
//! - Seeded RNG only
//! - Insertion-ordered obstacle store (spawn spacing checks the last spawn)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, boxes_collide, dino_hits_obstacle};
pub use state::{
    Dino, GamePhase, GameState, Geometry, GeometryError, Obstacle, Snapshot, TapAction,
};
pub use tick::{TickEvents, tick};
