/// Screen trait and screen switching.

pub mod catch;
pub mod countdown;
pub mod dash;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

/// Trait that all screens implement.
pub trait Screen {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance screen logic by `delta_ticks` discrete ticks.
    ///
    /// `now_ms` is the wall clock (epoch ms); the countdown screen compares
    /// it against the party date, the mini-games ignore it.
    fn tick(&mut self, delta_ticks: u32, now_ms: f64);

    /// Render the screen into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenChoice {
    Countdown,
    Dash,
    Catch,
}

impl ScreenChoice {
    /// All screens in tab order.
    pub fn all() -> &'static [ScreenChoice] {
        &[ScreenChoice::Countdown, ScreenChoice::Dash, ScreenChoice::Catch]
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            ScreenChoice::Countdown => "Countdown",
            ScreenChoice::Dash => "Track Dash",
            ScreenChoice::Catch => "Confetti Catch",
        }
    }

    /// The screen after this one, wrapping around.
    pub fn next(&self) -> ScreenChoice {
        match self {
            ScreenChoice::Countdown => ScreenChoice::Dash,
            ScreenChoice::Dash => ScreenChoice::Catch,
            ScreenChoice::Catch => ScreenChoice::Countdown,
        }
    }
}

// App-level tab bar action IDs, kept out of the per-screen ranges.
pub const TAB_SCREEN_BASE: u16 = 900;

/// Action ID for a screen's tab.
pub fn tab_action(choice: &ScreenChoice) -> u16 {
    let idx = ScreenChoice::all()
        .iter()
        .position(|c| c == choice)
        .unwrap_or(0);
    TAB_SCREEN_BASE + idx as u16
}

/// Reverse of [`tab_action`]: None for IDs outside the tab range.
pub fn choice_from_tab(action_id: u16) -> Option<ScreenChoice> {
    let all = ScreenChoice::all();
    let idx = action_id.checked_sub(TAB_SCREEN_BASE)? as usize;
    all.get(idx).copied()
}

/// Create a screen instance from a choice.
///
/// `target_ms` is the party date (epoch ms); only the countdown screen
/// uses it.
pub fn create_screen(choice: &ScreenChoice, target_ms: f64) -> Box<dyn Screen> {
    match choice {
        ScreenChoice::Countdown => Box::new(countdown::CountdownScreen::new(target_ms)),
        ScreenChoice::Dash => Box::new(dash::DashScreen::new()),
        ScreenChoice::Catch => Box::new(catch::CatchScreen::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps() {
        let mut choice = ScreenChoice::Countdown;
        for _ in 0..ScreenChoice::all().len() {
            choice = choice.next();
        }
        assert_eq!(choice, ScreenChoice::Countdown);
    }

    #[test]
    fn tab_action_roundtrip() {
        for choice in ScreenChoice::all() {
            assert_eq!(choice_from_tab(tab_action(choice)), Some(*choice));
        }
    }

    #[test]
    fn non_tab_ids_map_to_none() {
        assert_eq!(choice_from_tab(0), None);
        assert_eq!(choice_from_tab(TAB_SCREEN_BASE + 99), None);
    }
}
