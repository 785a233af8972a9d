mod countdown;
mod input;
mod screens;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{normalize_key, pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use screens::{choice_from_tab, create_screen, tab_action, Screen, ScreenChoice};
use time::{FrameClock, TICKS_PER_SEC};
use widgets::TabBar;

/// The party date, local midnight.
const PARTY_DATE: &str = "2026-08-11T00:00:00";

/// Top-level application state: which screen is live.
struct App {
    choice: ScreenChoice,
    screen: Box<dyn Screen>,
    target_ms: f64,
}

impl App {
    fn new(target_ms: f64) -> Self {
        let choice = ScreenChoice::Countdown;
        Self {
            choice,
            screen: create_screen(&choice, target_ms),
            target_ms,
        }
    }

    fn switch_to(&mut self, choice: ScreenChoice) {
        if choice != self.choice {
            self.choice = choice;
            self.screen = create_screen(&choice, self.target_ms);
        }
    }

    fn next_screen(&mut self) {
        self.switch_to(self.choice.next());
    }
}

/// Party date in epoch ms, parsed by the browser so midnight is local.
fn party_target_ms() -> f64 {
    js_sys::Date::new(&PARTY_DATE.into()).get_time()
}

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;

    web_sys::console::log_1(
        &format!(
            "tap: cell=({},{}), targets={}",
            col,
            row,
            cs.targets.len()
        )
        .into(),
    );

    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new(party_target_ms())));
    let clock = Rc::new(RefCell::new(FrameClock::new(TICKS_PER_SEC)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let (col, row) = match dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) {
                Some(cell) => cell,
                None => return,
            };

            let matched = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = matched {
                let mut app = app.borrow_mut();
                if let Some(choice) = choice_from_tab(action_id) {
                    app.switch_to(choice);
                } else {
                    app.screen.handle_input(&InputEvent::Click(action_id));
                }
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let mut app = app.borrow_mut();
            match key_event.code {
                KeyCode::Tab => {
                    app.next_screen();
                }
                code => {
                    if let Some(ch) = normalize_key(code) {
                        app.screen.handle_input(&InputEvent::Key(ch));
                    }
                }
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let now_ms = js_sys::Date::now();
            let delta_ticks = clock.borrow_mut().update(now_ms);

            let mut app = app.borrow_mut();
            app.screen.tick(delta_ticks, now_ms);

            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            // Main layout: screen tabs, content, help
            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_screen_tabs(f, &app, main_chunks[0], &click_state);
            app.screen.render(f, main_chunks[1], &click_state);
            render_help(f, &app, main_chunks[2]);
        }
    });

    Ok(())
}

fn render_screen_tabs(
    f: &mut ratzilla::ratatui::Frame,
    app: &App,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let mut bar = TabBar::new(" │ ");
    for choice in ScreenChoice::all() {
        let style = if *choice == app.choice {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        bar = bar.tab(choice.label(), style, tab_action(choice));
    }
    bar.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .render(f, area, &mut cs);
}

fn render_help(f: &mut ratzilla::ratatui::Frame, app: &App, area: Rect) {
    let help_text = match app.choice {
        ScreenChoice::Countdown => "1-3 switch theme · Tab: mini-games",
        ScreenChoice::Dash => "arrows / A D move · R reset · Tab: next screen",
        ScreenChoice::Catch => "arrows / A D move · R start over · Tab: next screen",
    };
    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}
