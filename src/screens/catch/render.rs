//! Confetti Catch rendering: tallies, falling field, basket lane.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::logic::pos_to_col;
use super::state::{CatchState, TRACK_MAX};
use super::{MOVE_LEFT, MOVE_RIGHT, RESET_RUN};

/// Confetti glyph cycle, keyed off drop id so each keeps its look.
const CONFETTI: &[char] = &['❋', '✶', '✺', '❉'];

pub fn render(
    state: &CatchState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tallies
            Constraint::Min(8),    // falling field + basket
            Constraint::Length(4), // hints
        ])
        .split(area);

    render_tallies(state, f, chunks[0]);
    render_field(state, f, chunks[1], click_state);
    render_hints(f, chunks[2], click_state);
}

fn render_tallies(state: &CatchState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("CAUGHT ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.caught.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   MISSED ", Style::default().fg(Color::Gray)),
        Span::styled(state.missed.to_string(), Style::default().fg(Color::Red)),
        Span::styled("   TICKS ", Style::default().fg(Color::Gray)),
        Span::styled(state.score.to_string(), Style::default().fg(Color::Yellow)),
    ]);
    let tallies = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(tallies, area);
}

fn render_field(
    state: &CatchState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    if inner_width == 0 || inner_height < 2 {
        return;
    }
    let w = inner_width as usize;
    // Bottom inner row is the basket lane; drops fall through the rows above
    let fall_rows = inner_height - 1;

    let mut rows: Vec<Vec<Span>> = vec![vec![Span::raw(" "); w]; fall_rows as usize];
    for drop in &state.drops {
        let col = pos_to_col(drop.x, inner_width) as usize;
        let row = (drop.y.min(TRACK_MAX as u32) as u16 * (fall_rows - 1) / TRACK_MAX as u16)
            as usize;
        let glyph = CONFETTI[drop.id as usize % CONFETTI.len()];
        let color = match drop.id % 3 {
            0 => Color::Magenta,
            1 => Color::Cyan,
            _ => Color::Yellow,
        };
        rows[row][col] = Span::styled(glyph.to_string(), Style::default().fg(color));
    }

    let basket_col = pos_to_col(state.basket_pos.clamp(0, TRACK_MAX) as u32, inner_width) as usize;
    let mut basket_lane: Vec<Span> = vec![Span::raw(" "); w];
    basket_lane[basket_col] = Span::styled(
        "⊔".to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );

    let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    lines.push(Line::from(basket_lane));

    let field = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Confetti "),
    );
    f.render_widget(field, area);

    // Tap zones mirror Track Dash: halves of the field nudge the basket
    let mut cs = click_state.borrow_mut();
    let half = area.width / 2;
    cs.add_click_target(Rect::new(area.x, area.y, half, area.height), MOVE_LEFT);
    cs.add_click_target(
        Rect::new(area.x + half, area.y, area.width - half, area.height),
        MOVE_RIGHT,
    );
}

fn render_hints(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            " [R] start over",
            Style::default().fg(Color::Yellow),
        )),
        RESET_RUN,
    );
    cl.push(Line::from(Span::styled(
        "move: arrows / A D (or tap either side of the field)",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    let widget = Paragraph::new(cl.into_lines()).block(block);
    f.render_widget(widget, area);
}
