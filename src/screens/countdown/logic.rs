/// Countdown screen tick logic: record refresh and particle drift.

use crate::countdown::time_remaining;

use super::state::{CountdownState, FloatSpot, PARTICLE_COUNT};

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

/// Populate the particle field with randomly placed spots.
pub fn seed_particles(state: &mut CountdownState) {
    let glyph_count = state.theme.particle_glyphs().len();
    state.particles = (0..PARTICLE_COUNT)
        .map(|_| FloatSpot {
            x_pct: rng_range(&mut state.rng_seed, 101) as u16,
            y_pct: rng_range(&mut state.rng_seed, 101) as u16,
            phase: rng_range(&mut state.rng_seed, 40),
            glyph: rng_range(&mut state.rng_seed, glyph_count as u32) as usize,
        })
        .collect();
}

/// Advance the screen by `delta_ticks` and refresh the record from the
/// wall clock. The record is recreated from scratch; nothing accumulates.
pub fn tick(state: &mut CountdownState, delta_ticks: u32, now_ms: f64) {
    state.remaining = time_remaining(now_ms, state.target_ms);
    if delta_ticks == 0 {
        return;
    }

    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    for spot in &mut state.particles {
        spot.phase = spot.phase.wrapping_add(delta_ticks);
    }
}

/// Triangle wave in `-amplitude..=amplitude`, period `4 * amplitude` ticks.
///
/// Drives the particle bob.
pub fn bob_offset(phase: u32, amplitude: i16) -> i16 {
    if amplitude <= 0 {
        return 0;
    }
    let period = 4 * amplitude as u32;
    let t = (phase % period) as i16;
    // Rise from -a to +a, then fall back
    if t <= 2 * amplitude {
        t - amplitude
    } else {
        3 * amplitude - t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::TimeRemaining;

    const DAY_MS: f64 = 86_400_000.0;

    #[test]
    fn tick_refreshes_record_from_clock() {
        let mut state = CountdownState::new(2.0 * DAY_MS);
        tick(&mut state, 1, 0.0);
        assert_eq!(state.remaining.days, 2);
        assert!(!state.remaining.is_complete);
    }

    #[test]
    fn tick_past_target_completes() {
        let mut state = CountdownState::new(1000.0);
        tick(&mut state, 1, 5000.0);
        assert_eq!(state.remaining, TimeRemaining::complete());
    }

    #[test]
    fn record_recreated_every_tick() {
        let mut state = CountdownState::new(10.0 * DAY_MS);
        tick(&mut state, 1, 0.0);
        let first = state.remaining;
        tick(&mut state, 1, 3_000.0);
        assert_eq!(first.total_seconds() - state.remaining.total_seconds(), 3);
    }

    #[test]
    fn zero_ticks_still_refreshes_but_freezes_animation() {
        let mut state = CountdownState::new(DAY_MS);
        let frame = state.anim_frame;
        tick(&mut state, 0, 1000.0);
        assert_eq!(state.anim_frame, frame);
        assert_eq!(state.remaining.hours, 23);
    }

    #[test]
    fn particles_drift_with_ticks() {
        let mut state = CountdownState::new(DAY_MS);
        let before: Vec<u32> = state.particles.iter().map(|p| p.phase).collect();
        tick(&mut state, 3, 0.0);
        for (spot, prev) in state.particles.iter().zip(before) {
            assert_eq!(spot.phase, prev.wrapping_add(3));
        }
    }

    #[test]
    fn bob_offset_bounded_and_periodic() {
        for phase in 0..200 {
            let off = bob_offset(phase, 2);
            assert!((-2..=2).contains(&off), "offset {} at phase {}", off, phase);
        }
        assert_eq!(bob_offset(0, 2), bob_offset(8, 2));
    }

    #[test]
    fn bob_offset_zero_amplitude() {
        assert_eq!(bob_offset(17, 0), 0);
    }
}
