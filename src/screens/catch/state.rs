/// Confetti Catch state: a basket on a 0-100 track, falling confetti drops,
/// and cosmetic caught/missed tallies.

/// Track and fall extents (positions are percentages).
pub const TRACK_MAX: i32 = 100;
/// How far one key press moves the basket.
pub const PLAYER_STEP: i32 = 5;
/// How far a drop falls per tick.
pub const FALL_STEP: u32 = 3;
/// Percent chance a drop spawns on any given tick.
pub const SPAWN_CHANCE_PCT: u32 = 12;
/// A drop landing within this distance of the basket counts as caught.
pub const CATCH_RADIUS: i32 = 8;

/// One falling confetti drop.
#[derive(Clone, Debug)]
pub struct Drop {
    pub id: u32,
    /// Horizontal position, fixed at spawn.
    pub x: u32,
    /// Fall progress; the drop lands once past [`TRACK_MAX`].
    pub y: u32,
}

pub struct CatchState {
    /// Basket position, clamped to 0..=100.
    pub basket_pos: i32,
    pub drops: Vec<Drop>,
    /// Incremented every tick.
    pub score: u64,
    /// Drops that landed near the basket. Bragging rights only.
    pub caught: u64,
    /// Drops that hit the floor.
    pub missed: u64,
    pub next_id: u32,
    pub rng_seed: u64,
    pub anim_frame: u32,
}

impl CatchState {
    pub fn new() -> Self {
        Self {
            basket_pos: TRACK_MAX / 2,
            drops: Vec::new(),
            score: 0,
            caught: 0,
            missed: 0,
            next_id: 0,
            rng_seed: 0xc047e77,
            anim_frame: 0,
        }
    }

    /// Move the basket, clamped to the track.
    pub fn move_basket(&mut self, delta: i32) {
        self.basket_pos = (self.basket_pos + delta).clamp(0, TRACK_MAX);
    }

    /// Start over; tallies reset too.
    pub fn reset_run(&mut self) {
        self.drops.clear();
        self.score = 0;
        self.caught = 0;
        self.missed = 0;
        self.basket_pos = TRACK_MAX / 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_centered_and_empty() {
        let s = CatchState::new();
        assert_eq!(s.basket_pos, 50);
        assert!(s.drops.is_empty());
        assert_eq!((s.caught, s.missed), (0, 0));
    }

    #[test]
    fn move_basket_clamps() {
        let mut s = CatchState::new();
        for _ in 0..50 {
            s.move_basket(PLAYER_STEP);
        }
        assert_eq!(s.basket_pos, TRACK_MAX);
        for _ in 0..80 {
            s.move_basket(-PLAYER_STEP);
        }
        assert_eq!(s.basket_pos, 0);
    }

    #[test]
    fn reset_clears_tallies() {
        let mut s = CatchState::new();
        s.caught = 3;
        s.missed = 2;
        s.score = 10;
        s.reset_run();
        assert_eq!((s.caught, s.missed, s.score), (0, 0, 0));
    }
}
