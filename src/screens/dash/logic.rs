/// Track Dash tick logic.
///
/// Per tick: obstacles that crossed the far bound last tick are discarded,
/// the rest scroll forward, one may spawn, and the score counts the tick.

use super::save;
use super::state::{
    DashState, Obstacle, ObstacleKind, OBSTACLE_STEP, SPAWN_CHANCE_PCT, TRACK_MAX,
};

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

/// Advance the game by `delta_ticks` discrete ticks.
pub fn tick(state: &mut DashState, delta_ticks: u32) {
    for _ in 0..delta_ticks {
        tick_once(state);
    }
}

fn tick_once(state: &mut DashState) {
    state.anim_frame = state.anim_frame.wrapping_add(1);

    // Obstacles past the rendered bound survive one tick (they get drawn at
    // the edge once), then drop off here.
    state.obstacles.retain(|o| o.pos < TRACK_MAX as u32);

    for obstacle in &mut state.obstacles {
        obstacle.pos += OBSTACLE_STEP;
    }

    if rng_range(&mut state.rng_seed, 100) < SPAWN_CHANCE_PCT {
        spawn_obstacle(state);
    }

    state.score += 1;
    if state.score > state.best_score {
        state.best_score = state.score;
    }

    state.ticks_since_save += 1;
    if state.ticks_since_save >= save::AUTOSAVE_INTERVAL {
        state.ticks_since_save = 0;
        save::save_best(state.best_score);
    }
}

fn spawn_obstacle(state: &mut DashState) {
    let kinds = ObstacleKind::all();
    let kind = kinds[rng_range(&mut state.rng_seed, kinds.len() as u32) as usize];
    state.obstacles.push(Obstacle {
        id: state.next_id,
        pos: 0,
        kind,
    });
    state.next_id = state.next_id.wrapping_add(1);
}

/// Map a 0-100 track position to a column within `width` cells.
pub fn pos_to_col(pos: u32, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    (pos.min(TRACK_MAX as u32) as u16).saturating_mul(width - 1) / TRACK_MAX as u16
}
