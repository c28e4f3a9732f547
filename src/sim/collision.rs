//! Axis-aligned collision detection with forgiving hit-boxes
//!
//! Every box is shrunk symmetrically about its center before the overlap
//! test, so the effective hit-box is smaller than the rendered sprite.
//! Touching edges never count as a collision (strict inequality on all four
//! interval comparisons).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Scale both axes by `factor` about the box center
    pub fn shrunk(&self, factor: f32) -> Self {
        let size = self.size * factor;
        let min = self.min + (self.size - size) / 2.0;
        Self { min, size }
    }

    /// Strict interval overlap on both axes; shared edges do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x + self.size.x > other.min.x
            && self.min.x < other.min.x + other.size.x
            && self.min.y + self.size.y > other.min.y
            && self.min.y < other.min.y + other.size.y
    }
}

/// Test two boxes after applying the hit-box shrink factor to each
pub fn boxes_collide(a: &Aabb, b: &Aabb, shrink: f32) -> bool {
    a.shrunk(shrink).overlaps(&b.shrunk(shrink))
}

/// True if any obstacle's shrunk box overlaps the dino's shrunk box
pub fn dino_hits_obstacle<I>(dino: &Aabb, obstacles: I, shrink: f32) -> bool
where
    I: IntoIterator<Item = Aabb>,
{
    let dino = dino.shrunk(shrink);
    obstacles
        .into_iter()
        .any(|o| dino.overlaps(&o.shrunk(shrink)))
}
