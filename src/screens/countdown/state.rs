/// Countdown screen state: theme variants, particle field, latest record.

use crate::countdown::{time_remaining, TimeRemaining};

use ratzilla::ratatui::style::Color;

/// Cosmetic variants of the countdown screen. They differ only in palette,
/// title, tagline, and unit labels; the computed record is shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Neon,
    Haunted,
    Midnight,
}

impl Theme {
    /// All themes in tab order.
    pub fn all() -> &'static [Theme] {
        &[Theme::Neon, Theme::Haunted, Theme::Midnight]
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Neon => "Neon",
            Theme::Haunted => "Haunted",
            Theme::Midnight => "Midnight",
        }
    }

    /// Banner title.
    pub fn title(&self) -> &'static str {
        match self {
            Theme::Neon => "★ AUGUST BDAY-VERSE ★",
            Theme::Haunted => "☾ AUGUST BDAY-VERSE ☽",
            Theme::Midnight => "✦ AUGUST BDAY-VERSE ✦",
        }
    }

    /// Tagline under the title.
    pub fn tagline(&self) -> &'static str {
        match self {
            Theme::Neon => "Spooky • Spicy • Slightly Unhinged",
            Theme::Haunted => "Ghostly Chic meets Glam Goblin",
            Theme::Midnight => "Campy Chaos after Dark",
        }
    }

    /// Accent color (title, days/seconds cards).
    pub fn accent(&self) -> Color {
        match self {
            Theme::Neon => Color::Green,
            Theme::Haunted => Color::Magenta,
            Theme::Midnight => Color::Blue,
        }
    }

    /// Secondary color (hours/minutes cards, chips).
    pub fn secondary(&self) -> Color {
        match self {
            Theme::Neon => Color::Magenta,
            Theme::Haunted => Color::Yellow,
            Theme::Midnight => Color::Cyan,
        }
    }

    /// Labels under the four unit cards, in days/hours/minutes/seconds order.
    pub fn unit_labels(&self) -> [&'static str; 4] {
        match self {
            Theme::Neon => [
                "CHAOTIC DAYS",
                "HAUNTED HOURS",
                "WASTED MINUTES",
                "UNHINGED SECONDS",
            ],
            Theme::Haunted => [
                "SPOOKY DAYS",
                "GHOSTLY HOURS",
                "CURSED MINUTES",
                "RESTLESS SECONDS",
            ],
            Theme::Midnight => [
                "SLEEPLESS DAYS",
                "SHADOW HOURS",
                "QUIET MINUTES",
                "GLITTER SECONDS",
            ],
        }
    }

    /// Glyphs the background particles cycle through.
    pub fn particle_glyphs(&self) -> &'static [char] {
        match self {
            Theme::Neon => &['✦', '•', '◦', '*'],
            Theme::Haunted => &['✧', '·', '˚', '•'],
            Theme::Midnight => &['·', '✦', '˖', '°'],
        }
    }
}

/// One floating background particle.
///
/// Positions are percentages of the content area so the field survives
/// terminal resizes; the bob offset is derived from `phase` at render time.
#[derive(Clone, Debug)]
pub struct FloatSpot {
    pub x_pct: u16,
    pub y_pct: u16,
    /// Per-particle phase offset, advanced every tick.
    pub phase: u32,
    /// Index into the theme's glyph table.
    pub glyph: usize,
}

/// How many particles float behind the countdown.
pub const PARTICLE_COUNT: usize = 12;

pub struct CountdownState {
    /// Party date, epoch ms.
    pub target_ms: f64,
    /// Latest computed record; recreated every tick.
    pub remaining: TimeRemaining,
    pub theme: Theme,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
    pub particles: Vec<FloatSpot>,
    /// Seeded LCG state for particle placement.
    pub rng_seed: u64,
}

impl CountdownState {
    pub fn new(target_ms: f64) -> Self {
        let mut state = Self {
            target_ms,
            // draw loop recomputes before first paint
            remaining: time_remaining(target_ms, target_ms),
            theme: Theme::Neon,
            anim_frame: 0,
            particles: Vec::new(),
            rng_seed: 0x5eed,
        };
        super::logic::seed_particles(&mut state);
        state
    }
}
