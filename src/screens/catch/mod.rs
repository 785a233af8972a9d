//! Confetti Catch — the second toy mini-game. Confetti falls, the basket
//! slides, and the tallies are strictly for bragging.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;

use state::{CatchState, PLAYER_STEP};

// ── Action IDs ──────────────────────────────────────────────

pub const MOVE_LEFT: u16 = 40;
pub const MOVE_RIGHT: u16 = 41;
pub const RESET_RUN: u16 = 42;

pub struct CatchScreen {
    pub state: CatchState,
}

impl CatchScreen {
    pub fn new() -> Self {
        Self {
            state: CatchState::new(),
        }
    }
}

impl Screen for CatchScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(ch) => match ch {
                'h' | 'a' => {
                    self.state.move_basket(-PLAYER_STEP);
                    true
                }
                'l' | 'd' => {
                    self.state.move_basket(PLAYER_STEP);
                    true
                }
                'r' => {
                    self.state.reset_run();
                    true
                }
                _ => false,
            },
            InputEvent::Click(id) => match *id {
                MOVE_LEFT => {
                    self.state.move_basket(-PLAYER_STEP);
                    true
                }
                MOVE_RIGHT => {
                    self.state.move_basket(PLAYER_STEP);
                    true
                }
                RESET_RUN => {
                    self.state.reset_run();
                    true
                }
                _ => false,
            },
        }
    }

    fn tick(&mut self, delta_ticks: u32, _now_ms: f64) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::TRACK_MAX;

    #[test]
    fn keys_move_basket() {
        let mut screen = CatchScreen::new();
        let start = screen.state.basket_pos;
        assert!(screen.handle_input(&InputEvent::Key('l')));
        assert_eq!(screen.state.basket_pos, start + PLAYER_STEP);
    }

    #[test]
    fn basket_clamped_under_key_mashing() {
        let mut screen = CatchScreen::new();
        for _ in 0..100 {
            screen.handle_input(&InputEvent::Key('a'));
        }
        assert_eq!(screen.state.basket_pos, 0);
        for _ in 0..100 {
            screen.handle_input(&InputEvent::Key('d'));
        }
        assert_eq!(screen.state.basket_pos, TRACK_MAX);
    }

    #[test]
    fn reset_via_click() {
        let mut screen = CatchScreen::new();
        screen.tick(25, 0.0);
        assert!(screen.state.score > 0);
        assert!(screen.handle_input(&InputEvent::Click(RESET_RUN)));
        assert_eq!(screen.state.score, 0);
    }

    #[test]
    fn unknown_input_not_consumed() {
        let mut screen = CatchScreen::new();
        assert!(!screen.handle_input(&InputEvent::Key('q')));
        assert!(!screen.handle_input(&InputEvent::Click(7)));
    }
}
