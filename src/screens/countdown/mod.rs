//! Countdown — the home screen. Three cosmetic theme variants of the same
//! computed record, selected with [1]-[3] or by tapping the theme tabs.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;

use state::{CountdownState, Theme};

// ── Action IDs ──────────────────────────────────────────────

/// Theme tab targets (base + theme index).
pub const THEME_BASE: u16 = 10;

pub struct CountdownScreen {
    pub state: CountdownState,
}

impl CountdownScreen {
    pub fn new(target_ms: f64) -> Self {
        Self {
            state: CountdownState::new(target_ms),
        }
    }

    fn select_theme(&mut self, index: usize) -> bool {
        match Theme::all().get(index) {
            Some(theme) => {
                self.state.theme = *theme;
                true
            }
            None => false,
        }
    }
}

impl Screen for CountdownScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(ch) => match ch {
                '1' => self.select_theme(0),
                '2' => self.select_theme(1),
                '3' => self.select_theme(2),
                _ => false,
            },
            InputEvent::Click(id) => {
                if (THEME_BASE..THEME_BASE + Theme::all().len() as u16).contains(id) {
                    self.select_theme((id - THEME_BASE) as usize)
                } else {
                    false
                }
            }
        }
    }

    fn tick(&mut self, delta_ticks: u32, now_ms: f64) {
        logic::tick(&mut self.state, delta_ticks, now_ms);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: f64 = 86_400_000.0;

    #[test]
    fn theme_keys_switch_variant() {
        let mut screen = CountdownScreen::new(DAY_MS);
        assert_eq!(screen.state.theme, Theme::Neon);
        assert!(screen.handle_input(&InputEvent::Key('2')));
        assert_eq!(screen.state.theme, Theme::Haunted);
        assert!(screen.handle_input(&InputEvent::Key('3')));
        assert_eq!(screen.state.theme, Theme::Midnight);
    }

    #[test]
    fn theme_clicks_switch_variant() {
        let mut screen = CountdownScreen::new(DAY_MS);
        assert!(screen.handle_input(&InputEvent::Click(THEME_BASE + 2)));
        assert_eq!(screen.state.theme, Theme::Midnight);
    }

    #[test]
    fn unrelated_input_not_consumed() {
        let mut screen = CountdownScreen::new(DAY_MS);
        assert!(!screen.handle_input(&InputEvent::Key('x')));
        assert!(!screen.handle_input(&InputEvent::Click(999)));
        assert_eq!(screen.state.theme, Theme::Neon);
    }

    #[test]
    fn tick_updates_record() {
        let mut screen = CountdownScreen::new(DAY_MS);
        screen.tick(1, DAY_MS - 90_000.0);
        assert_eq!(screen.state.remaining.minutes, 1);
        assert_eq!(screen.state.remaining.seconds, 30);
    }

    #[test]
    fn completion_flag_reached() {
        let mut screen = CountdownScreen::new(1000.0);
        screen.tick(1, 1000.0);
        assert!(screen.state.remaining.is_complete);
    }
}
