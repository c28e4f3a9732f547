//! Per-tick simulation update
//!
//! One call advances the world by exactly one frame: score, jump motion,
//! obstacle cull/move/spawn, collision. Pacing (the fixed delay between
//! ticks) lives in the session loop, never here.

use rand::Rng;

use super::collision::dino_hits_obstacle;
use super::state::{GamePhase, GameState, Obstacle};

/// Side effects of a tick the session layer must act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// First frame of a jump; fire the jump sound
    pub jump_started: bool,
    /// Collision ended the run; the tick loop should stop
    pub game_over: bool,
}

/// Spacing gate: spawn only when the store is empty or the most recently
/// added obstacle has cleared `min_gap` from the spawn edge.
fn spawn_gate(last: Option<&Obstacle>, screen_width: f32, min_gap: f32) -> bool {
    last.is_none_or(|o| o.x < screen_width - min_gap)
}

/// Advance the game by one tick. No-op unless the phase is Playing.
///
/// Score is incremented once per tick, not scaled by elapsed time: tick
/// throughput is the difficulty knob.
pub fn tick(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();
    if state.phase != GamePhase::Playing {
        return events;
    }
    state.time_ticks += 1;

    state.score += 1;
    state.high_score = state.high_score.max(state.score);

    let rest_y = state.dino_rest_y();
    events.jump_started = state.dino.advance(
        state.tuning.jump_height,
        state.tuning.jump_duration_ticks,
        rest_y,
    );

    // Cull fully off-screen obstacles before moving the rest
    state.obstacles.retain(|o| !o.is_offscreen());
    for obstacle in &mut state.obstacles {
        obstacle.x -= state.tuning.obstacle_speed;
    }

    let roll: u32 = state.rng.random_range(0..100);
    let min_gap = state.tuning.obstacle_size * state.tuning.min_gap_widths;
    if roll < state.tuning.spawn_chance_percent
        && spawn_gate(state.obstacles.last(), state.geometry.width, min_gap)
    {
        state.obstacles.push(Obstacle {
            x: state.geometry.width,
            y: state.geometry.ground_y - state.tuning.obstacle_size,
            width: state.tuning.obstacle_size,
            height: state.tuning.obstacle_size,
        });
    }

    let dino_box = state.dino_aabb();
    let obstacle_boxes = state.obstacles.iter().map(Obstacle::aabb);
    if dino_hits_obstacle(&dino_box, obstacle_boxes, state.tuning.collision_shrink) {
        state.phase = GamePhase::GameOver;
        events.game_over = true;
        log::info!(
            "run over at score {} (high score {})",
            state.score,
            state.high_score
        );
    }

    events
}
