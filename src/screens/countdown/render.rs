//! Countdown screen rendering: flickering banner, unit cards, party panel,
//! celebration state, and the floating particle background.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::countdown::pad2;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::TabBar;

use super::logic::bob_offset;
use super::state::{CountdownState, Theme};
use super::THEME_BASE;

pub fn render(
    state: &CountdownState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // banner
            Constraint::Length(3), // theme tabs
            Constraint::Length(if is_narrow_layout(area.width) { 8 } else { 4 }), // cards
            Constraint::Min(5),    // party details / celebration
            Constraint::Length(1), // dress code footer
        ])
        .split(area);

    render_banner(state, f, chunks[0]);
    render_theme_tabs(state, f, chunks[1], click_state);
    if state.remaining.is_complete {
        render_celebration(state, f, chunks[2].union(chunks[3]));
    } else {
        render_cards(state, f, chunks[2]);
        render_party_details(state, f, chunks[3]);
    }
    render_footer(state, f, chunks[4]);

    // Particle overlay renders last so it sits above the panels
    render_particles(state, f, area, chunks[2]);
}

fn render_banner(state: &CountdownState, f: &mut Frame, area: Rect) {
    let theme = state.theme;
    // Neon flicker: the banner drops to dim for a couple of frames each cycle
    let flicker = state.anim_frame % 24 < 2;
    let title_style = if flicker {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD)
    };

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(theme.title(), title_style)),
        Line::from(Span::styled(
            theme.tagline(),
            Style::default().fg(theme.secondary()),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn render_theme_tabs(
    state: &CountdownState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let mut bar = TabBar::new(" │ ");
    for (i, theme) in Theme::all().iter().enumerate() {
        let style = if *theme == state.theme {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        bar = bar.tab(
            format!("[{}] {}", i + 1, theme.label()),
            style,
            THEME_BASE + i as u16,
        );
    }
    bar.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .render(f, area, &mut cs);
}

fn render_cards(state: &CountdownState, f: &mut Frame, area: Rect) {
    let theme = state.theme;
    let r = &state.remaining;
    let labels = theme.unit_labels();
    let values = [
        pad2(r.days),
        pad2(r.hours),
        pad2(r.minutes),
        pad2(r.seconds),
    ];
    let colors = [
        theme.accent(),
        theme.secondary(),
        theme.accent(),
        theme.secondary(),
    ];

    if is_narrow_layout(area.width) {
        // 2x2 grid
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(4)])
            .split(area);
        for (row_idx, row) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (col_idx, cell) in cols.iter().enumerate() {
                let i = row_idx * 2 + col_idx;
                render_unit_card(f, *cell, &values[i], labels[i], colors[i]);
            }
        }
    } else {
        // 1x4 strip
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);
        for (i, cell) in cols.iter().enumerate() {
            render_unit_card(f, *cell, &values[i], labels[i], colors[i]);
        }
    }
}

fn render_unit_card(f: &mut Frame, area: Rect, value: &str, label: &str, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
    .alignment(Alignment::Center);
    f.render_widget(card, area);
}

fn render_party_details(state: &CountdownState, f: &mut Frame, area: Rect) {
    let theme = state.theme;
    let chips = Line::from(vec![
        Span::styled(" Spooky Cute ", Style::default().fg(theme.accent())),
        Span::raw(" "),
        Span::styled(" Haunted Hotness ", Style::default().fg(theme.secondary())),
        Span::raw(" "),
        Span::styled(" Campy Chaos ", Style::default().fg(Color::Magenta)),
    ])
    .alignment(Alignment::Center);

    let details = Paragraph::new(vec![
        Line::from(Span::styled(
            "👑 Time to get WASTED 👑",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "August 11th • Leo Grade Birthday Drama",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        chips,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary()))
            .title(" Party Details "),
    )
    .alignment(Alignment::Center);
    f.render_widget(details, area);
}

fn render_celebration(state: &CountdownState, f: &mut Frame, area: Rect) {
    let theme = state.theme;
    // Party pulse: swap the emoji row every half second
    let pulse = if state.anim_frame % 10 < 5 {
        "🎂 👑 🎊 🥳 🎈"
    } else {
        "🎈 🥳 🎊 👑 🎂"
    };

    let celebration = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 IT'S WAYNE'S BIRTHDAY! 🎉",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Let the chaos begin! Time to get absolutely wasted! 🍻",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(pulse, Style::default().fg(theme.secondary()))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .alignment(Alignment::Center);
    f.render_widget(celebration, area);
}

fn render_footer(_state: &CountdownState, f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "Dress Code: Black ⚫ White ⚪ Green 🟢",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

/// Draw the floating particle field, skipping `avoid` (the unit cards) so
/// drifting glyphs never land on the digits.
fn render_particles(state: &CountdownState, f: &mut Frame, area: Rect, avoid: Rect) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    let glyphs = state.theme.particle_glyphs();

    for spot in &state.particles {
        let base_x = area.x + (spot.x_pct as u32 * (area.width as u32 - 1) / 100) as u16;
        let base_y = area.y + (spot.y_pct as u32 * (area.height as u32 - 1) / 100) as u16;

        // Slow vertical bob plus a smaller horizontal sway
        let dy = bob_offset(spot.phase / 4, 2);
        let dx = bob_offset(spot.phase / 6, 1);
        let x = (base_x as i16 + dx).clamp(area.x as i16, (area.x + area.width - 1) as i16) as u16;
        let y = (base_y as i16 + dy).clamp(area.y as i16, (area.y + area.height - 1) as i16) as u16;

        if x >= avoid.x
            && x < avoid.x + avoid.width
            && y >= avoid.y
            && y < avoid.y + avoid.height
        {
            continue;
        }

        // Twinkle between accent and dim, offset per particle
        let color = if (spot.phase / 8) % 3 == 0 {
            Color::DarkGray
        } else {
            state.theme.accent()
        };

        let glyph = glyphs[spot.glyph % glyphs.len()];
        let widget = Paragraph::new(Span::styled(
            glyph.to_string(),
            Style::default().fg(color),
        ));
        f.render_widget(widget, Rect::new(x, y, 1, 1));
    }
}
