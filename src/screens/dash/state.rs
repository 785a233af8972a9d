/// Track Dash state: a sprite on a 0-100 track, scrolling obstacles, and a
/// per-tick score. Obstacles are scenery — there is no collision.

/// Far end of the track (positions are percentages).
pub const TRACK_MAX: i32 = 100;
/// How far one key press moves the sprite.
pub const PLAYER_STEP: i32 = 5;
/// How far an obstacle scrolls per tick.
pub const OBSTACLE_STEP: u32 = 4;
/// Percent chance an obstacle spawns on any given tick.
pub const SPAWN_CHANCE_PCT: u32 = 15;

/// Obstacle flavors, purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleKind {
    Pumpkin,
    Ghost,
    Balloon,
}

impl ObstacleKind {
    pub fn all() -> &'static [ObstacleKind] {
        &[ObstacleKind::Pumpkin, ObstacleKind::Ghost, ObstacleKind::Balloon]
    }

    pub fn glyph(&self) -> char {
        match self {
            ObstacleKind::Pumpkin => '◍',
            ObstacleKind::Ghost => '☗',
            ObstacleKind::Balloon => '❀',
        }
    }
}

/// One moving obstacle on the track.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub id: u32,
    /// Track position, 0 at spawn edge; discarded once past [`TRACK_MAX`].
    pub pos: u32,
    pub kind: ObstacleKind,
}

pub struct DashState {
    /// Sprite position on the track, clamped to 0..=100.
    pub player_pos: i32,
    pub obstacles: Vec<Obstacle>,
    /// Incremented every tick while the run is going.
    pub score: u64,
    /// Longest run so far (persisted).
    pub best_score: u64,
    /// Next obstacle id.
    pub next_id: u32,
    /// Seeded LCG state for spawn rolls.
    pub rng_seed: u64,
    /// Animation frame counter.
    pub anim_frame: u32,
    /// Ticks since the best score was last written out.
    pub ticks_since_save: u32,
}

impl DashState {
    pub fn new() -> Self {
        Self {
            player_pos: TRACK_MAX / 2,
            obstacles: Vec::new(),
            score: 0,
            best_score: super::save::load_best(),
            next_id: 0,
            rng_seed: 0xda5e,
            anim_frame: 0,
            ticks_since_save: 0,
        }
    }

    /// Move the sprite, clamped to the track.
    pub fn move_player(&mut self, delta: i32) {
        self.player_pos = (self.player_pos + delta).clamp(0, TRACK_MAX);
    }

    /// Start the run over; the best score survives.
    pub fn reset_run(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.player_pos = TRACK_MAX / 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_centered_and_empty() {
        let s = DashState::new();
        assert_eq!(s.player_pos, 50);
        assert!(s.obstacles.is_empty());
        assert_eq!(s.score, 0);
    }

    #[test]
    fn move_player_clamps_low() {
        let mut s = DashState::new();
        for _ in 0..50 {
            s.move_player(-PLAYER_STEP);
        }
        assert_eq!(s.player_pos, 0);
    }

    #[test]
    fn move_player_clamps_high() {
        let mut s = DashState::new();
        for _ in 0..50 {
            s.move_player(PLAYER_STEP);
        }
        assert_eq!(s.player_pos, TRACK_MAX);
    }

    #[test]
    fn reset_keeps_best_score() {
        let mut s = DashState::new();
        s.score = 40;
        s.best_score = 99;
        s.obstacles.push(Obstacle {
            id: 0,
            pos: 10,
            kind: ObstacleKind::Ghost,
        });
        s.reset_run();
        assert_eq!(s.score, 0);
        assert!(s.obstacles.is_empty());
        assert_eq!(s.best_score, 99);
    }
}
