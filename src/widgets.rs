//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target
//! registration, so visual output and tap behaviour never drift apart.
//!
//! - [`TabBar`] — horizontal tab navigation (screen tabs, theme tabs).
//! - [`ClickableList`] — vertical list with per-row click targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as one row of styled labels with a separator between them,
/// and registers click targets matching the rendered label positions.
///
/// # Example
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("Countdown", tab_style(0), TAB_COUNTDOWN)
///     .tab("Dash", tab_style(1), TAB_DASH)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the tab bar in a [`Block`]. With a bordered block, click target
    /// positions are adjusted via `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the tab bar and register its click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans: Vec<Span> = Vec::new();
        let sep_width = Line::from(self.separator).width() as u16;
        let mut tab_widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            tab_widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        // Inner content area (accounting for borders) before the block is consumed
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height so the whole
        // bar height is tappable
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder pairing rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable when pushing them, then call
/// [`register_targets`](ClickableList::register_targets) once after
/// rendering; each action lands on whatever row its line ended up on, so
/// inserting or removing lines never desyncs the targets.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Header (not clickable)"));
/// cl.push_clickable(Line::from(" [R] restart run"), RESET_RUN);
/// let widget = Paragraph::new(cl.into_lines()).block(block);
/// f.render_widget(widget, area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line with a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows taken by borders.
    /// * `scroll` — vertical scroll offset (0 if not scrollable).
    ///
    /// Lines are assumed unwrapped: one logical line per visual row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        for &(line_idx, action_id) in &self.actions {
            if line_idx < scroll {
                continue;
            }
            let row = content_y + (line_idx - scroll);
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickState;

    #[test]
    fn clickable_list_targets_land_on_their_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("first"), 10);
        cl.push(Line::from("spacer"));
        cl.push_clickable(Line::from("second"), 20);

        let area = Rect::new(0, 5, 40, 8);
        let mut cs = ClickState::new();
        // Bordered block: content starts one row in
        cl.register_targets(area, &mut cs, 1, 1, 0);

        // header at row 6, "first" at row 7, spacer 8, "second" 9
        assert_eq!(cs.hit_test(3, 6), None);
        assert_eq!(cs.hit_test(3, 7), Some(10));
        assert_eq!(cs.hit_test(3, 8), None);
        assert_eq!(cs.hit_test(3, 9), Some(20));
    }

    #[test]
    fn clickable_list_respects_scroll() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("scrolled out"), 1);
        cl.push_clickable(Line::from("visible"), 2);

        let area = Rect::new(0, 0, 40, 4);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 1);

        // First line scrolled off; second sits on the first content row
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(0, 1), Some(2));
    }

    #[test]
    fn clickable_list_clips_below_content() {
        let mut cl = ClickableList::new();
        for i in 0..10 {
            cl.push_clickable(Line::from(format!("row {}", i)), i);
        }

        // Area with room for only 3 content rows
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
    }

    #[test]
    fn clickable_list_len_counts_all_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("a"));
        cl.push_clickable(Line::from("b"), 1);
        assert_eq!(cl.len(), 2);
        assert_eq!(cl.into_lines().len(), 2);
    }
}
