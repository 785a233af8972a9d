//! Track Dash rendering: scoreboard, scrolling track, tap zones.

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
use super::state::{DashState, ObstacleKind, TRACK_MAX};
use super::{MOVE_LEFT, MOVE_RIGHT, RESET_RUN};

pub fn render(
    state: &DashState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // scoreboard
            Constraint::Length(5), // track
            Constraint::Min(3),    // hints
        ])
        .split(area);

    render_scoreboard(state, f, chunks[0]);
    render_track(state, f, chunks[1], click_state);
    render_hints(f, chunks[2], click_state);
}

fn render_scoreboard(state: &DashState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("SCORE ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   BEST ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.best_score.to_string(),
            Style::default().fg(Color::Green),
        ),
    ]);
    let scoreboard = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(scoreboard, area);
}

fn kind_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Pumpkin => Color::Yellow,
        ObstacleKind::Ghost => Color::White,
        ObstacleKind::Balloon => Color::Magenta,
    }
}

fn render_track(
    state: &DashState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return;
    }
    let w = inner_width as usize;

    // Obstacle lane: place each obstacle by its track position
    let mut lane: Vec<Option<ObstacleKind>> = vec![None; w];
    for obstacle in &state.obstacles {
        let col = pos_to_col(obstacle.pos, inner_width) as usize;
        lane[col] = Some(obstacle.kind);
    }
    let lane_spans: Vec<Span> = lane
        .iter()
        .map(|cell| match cell {
            Some(kind) => Span::styled(
                kind.glyph().to_string(),
                Style::default().fg(kind_color(*kind)),
            ),
            None => Span::raw(" "),
        })
        .collect();

    let bed = "─".repeat(w);

    // Player lane: blink the sprite slightly for life
    let sprite = if state.anim_frame % 10 < 5 { '▲' } else { '△' };
    let player_col = pos_to_col(state.player_pos.clamp(0, TRACK_MAX) as u32, inner_width) as usize;
    let mut player_spans: Vec<Span> = vec![Span::raw(" "); w];
    player_spans[player_col] = Span::styled(
        sprite.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let track = Paragraph::new(vec![
        Line::from(lane_spans),
        Line::from(Span::styled(bed, Style::default().fg(Color::DarkGray))),
        Line::from(player_spans),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Track "),
    );
    f.render_widget(track, area);

    // Tap zones: left half nudges left, right half nudges right
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
    cl.push(Line::from(Span::styled(
        "Dodge nothing — the obstacles are just vibes.",
        Style::default().fg(Color::Gray),
    )));
    cl.push_clickable(
        Line::from(Span::styled(
            " [R] restart run",
            Style::default().fg(Color::Yellow),
        )),
        RESET_RUN,
    );
    cl.push(Line::from(Span::styled(
        "move: arrows / A D (or tap either side of the track)",
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
