//! Track Dash — collision-free obstacle scroller. Arrows or A/D slide the
//! sprite along the track; obstacles scroll past as scenery and the score
//! simply counts ticks.

pub mod logic;
pub mod render;
pub mod save;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;

use state::{DashState, PLAYER_STEP};

// ── Action IDs ──────────────────────────────────────────────

pub const MOVE_LEFT: u16 = 30;
pub const MOVE_RIGHT: u16 = 31;
pub const RESET_RUN: u16 = 32;

pub struct DashScreen {
    pub state: DashState,
}

impl DashScreen {
    pub fn new() -> Self {
        Self {
            state: DashState::new(),
        }
    }
}

impl Screen for DashScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(ch) => match ch {
                'h' | 'a' => {
                    self.state.move_player(-PLAYER_STEP);
                    true
                }
                'l' | 'd' => {
                    self.state.move_player(PLAYER_STEP);
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
                    self.state.move_player(-PLAYER_STEP);
                    true
                }
                MOVE_RIGHT => {
                    self.state.move_player(PLAYER_STEP);
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
