//! Clock Quiz - an analog alarm clock and a tell-the-time practice game
//!
//! Core modules:
//! - `clock`: Stateless dial geometry (hands, ticks, numerals, alarm-clock frame)
//! - `quiz`: Round generation, phrase derivation and the answer state machine
//! - `settings`: Player/host preferences
//! - `audio`, `web`: Browser collaborators (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod clock;
pub mod quiz;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Color, FrameCache, RenderPlan, compute_render_plan};
pub use quiz::{AnswerOutcome, Effects, GameState, Quiz, QuizPhase, Round, derive_phrase};
pub use settings::Settings;

use std::time::Duration;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Degrees the minute hand sweeps per minute
    pub const DEG_PER_MINUTE: f32 = 6.0;
    /// Degrees the hour hand sweeps per hour slot
    pub const DEG_PER_HOUR: f32 = 30.0;
    /// Hour hand drift per elapsed minute (30° spread over 60 minutes)
    pub const HOUR_DRIFT_PER_MINUTE: f32 = 0.5;

    /// Minutes a generated round may show
    pub const QUARTER_MINUTES: [i32; 4] = [0, 15, 30, 45];

    /// First round of every session (half past 10)
    pub const SEED_HOUR: i32 = 10;
    pub const SEED_MINUTE: i32 = 30;

    /// Delay between a correct answer and the next round
    pub const ADVANCE_DELAY: Duration = Duration::from_millis(2000);
    /// Accepted range for a configured advance delay
    pub const MIN_ADVANCE_DELAY: Duration = Duration::from_millis(2000);
    pub const MAX_ADVANCE_DELAY: Duration = Duration::from_millis(3000);

    /// Fixed host step used by the native driver (60 Hz)
    pub const HOST_DT: Duration = Duration::from_micros(16_667);

    /// Responsive layout
    pub const BASE_CLOCK_SIZE: f32 = 150.0;
    pub const BASE_MASCOT_WIDTH: f32 = 100.0;
    /// Below this viewport width everything shrinks proportionally
    pub const RESPONSIVE_BREAKPOINT: f32 = 345.0;
}

/// Wrap an hour into the dial range [0, 12)
///
/// Floor-modulo: negative input wraps from the top (`-1 -> 11`).
#[inline]
pub fn wrap_hour(hour: f32) -> f32 {
    wrap(hour, 12.0)
}

/// Wrap a minute into [0, 60)
#[inline]
pub fn wrap_minute(minute: f32) -> f32 {
    wrap(minute, 60.0)
}

#[inline]
fn wrap(value: f32, modulus: f32) -> f32 {
    let w = value.rem_euclid(modulus);
    // rem_euclid rounds tiny negatives up to the modulus itself
    if w >= modulus { 0.0 } else { w }
}

/// 12-hour display form of an hour (`0 -> 12`, `13 -> 1`)
#[inline]
pub fn to_display_hour(hour: i32) -> i32 {
    match hour.rem_euclid(12) {
        0 => 12,
        h => h,
    }
}

/// Convert a dial position (radius, degrees clockwise from 12) to a screen
/// offset from the dial centre (y grows downward)
#[inline]
pub fn dial_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.sin(), -r * theta.cos())
}

/// Shrink-only scale factor for a viewport width
#[inline]
pub fn viewport_scale(viewport_width: u32, breakpoint: f32) -> f32 {
    (viewport_width as f32 / breakpoint).min(1.0)
}

/// Scale a base pixel size, rounded to whole pixels
#[inline]
pub fn scaled_px(base: f32, scale: f32) -> f32 {
    (base * scale).round()
}

/// Host frame delta in milliseconds as a `Duration`; negative or non-finite
/// deltas count as no time passing
pub fn frame_delta(dt_ms: f64) -> Duration {
    Duration::try_from_secs_f64(dt_ms / 1000.0).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_frame_delta_rejects_bad_host_values() {
        assert_eq!(frame_delta(16.0), Duration::from_millis(16));
        assert_eq!(frame_delta(0.0), Duration::ZERO);
        assert_eq!(frame_delta(-5.0), Duration::ZERO);
        assert_eq!(frame_delta(f64::INFINITY), Duration::ZERO);
        assert_eq!(frame_delta(f64::NEG_INFINITY), Duration::ZERO);
        assert_eq!(frame_delta(f64::NAN), Duration::ZERO);
        assert_eq!(frame_delta(f64::MAX), Duration::ZERO);
    }

    #[test]
    fn test_wrap_hour_negative() {
        assert_eq!(wrap_hour(-1.0), 11.0);
        assert_eq!(wrap_hour(12.0), 0.0);
        assert_eq!(wrap_hour(25.0), 1.0);
        assert_eq!(wrap_minute(-15.0), 45.0);
    }

    #[test]
    fn test_display_hour() {
        assert_eq!(to_display_hour(0), 12);
        assert_eq!(to_display_hour(12), 12);
        assert_eq!(to_display_hour(13), 1);
        assert_eq!(to_display_hour(-1), 11);
        assert_eq!(to_display_hour(7), 7);
    }

    #[test]
    fn test_dial_to_cartesian_quarters() {
        let up = dial_to_cartesian(10.0, 0.0);
        assert!(up.x.abs() < 1e-4 && (up.y + 10.0).abs() < 1e-4);
        let right = dial_to_cartesian(10.0, 90.0);
        assert!((right.x - 10.0).abs() < 1e-4 && right.y.abs() < 1e-4);
        let down = dial_to_cartesian(10.0, 180.0);
        assert!(down.x.abs() < 1e-4 && (down.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_viewport_scale_is_shrink_only() {
        let bp = consts::RESPONSIVE_BREAKPOINT;
        assert_eq!(viewport_scale(1024, bp), 1.0);
        assert_eq!(viewport_scale(345, bp), 1.0);
        let s = viewport_scale(276, bp);
        assert!((s - 0.8).abs() < 1e-6);
        assert_eq!(scaled_px(consts::BASE_CLOCK_SIZE, s), 120.0);
        assert_eq!(scaled_px(consts::BASE_MASCOT_WIDTH, s), 80.0);
    }

    proptest! {
        #[test]
        fn prop_wrap_hour_in_range_and_periodic(h in -100_000i32..100_000) {
            let w = wrap_hour(h as f32);
            prop_assert!((0.0..12.0).contains(&w));
            prop_assert_eq!(wrap_hour((h + 12) as f32), w);
        }

        #[test]
        fn prop_wrap_minute_in_range(m in -100_000i32..100_000) {
            let w = wrap_minute(m as f32);
            prop_assert!((0.0..60.0).contains(&w));
            prop_assert_eq!(wrap_minute((m + 60) as f32), w);
        }
    }
}
