//! Dial geometry: hand angles, tick marks, numerals
//!
//! Angles are degrees clockwise from 12 o'clock. Positions are in the dial box
//! frame (origin top-left of the `size x size` face, y down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::frame::{FramePlan, compute_frame};
use crate::consts::*;
use crate::{dial_to_cartesian, wrap_hour, wrap_minute};

/// Number of hour slots on the dial
pub const DIAL_SLOTS: usize = 12;
/// Angular width of one slot
pub const SLOT_DEGREES: f32 = 360.0 / DIAL_SLOTS as f32;

/// Smallest font the numerals shrink to
const NUMERAL_FONT_FLOOR: f32 = 10.0;
const HAND_THICKNESS_FLOOR: f32 = 2.0;
const HUB_FLOOR: f32 = 4.0;
const RIM_FLOOR: f32 = 2.0;

/// A clock hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPlan {
    pub angle: f32,
    pub length: f32,
    pub thickness: f32,
    pub color: Color,
    /// Tip position (the hand pivots at the dial centre)
    pub tip: Vec2,
}

/// An hour marker on the rim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub index: u8,
    pub angle: f32,
    /// Quarter-hour emphasis
    pub major: bool,
    /// Distance of the tick centre from the dial centre
    pub distance: f32,
    pub length: f32,
    pub width: f32,
    pub opacity: f32,
    pub center: Vec2,
}

/// A numeral glyph (1-12)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numeral {
    pub value: u8,
    pub angle: f32,
    pub distance: f32,
    pub font_size: f32,
    /// Net rotation of the glyph itself; always upright
    pub glyph_rotation: f32,
    pub center: Vec2,
}

/// Time-independent face of the clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialPlan {
    pub size: f32,
    pub center: Vec2,
    pub radius: f32,
    pub rim_width: f32,
    pub rim_color: Color,
    pub face_color: Color,
    /// Tick and numeral colour
    pub ink: Color,
    pub ticks: Vec<TickMark>,
    pub numerals: Vec<Numeral>,
    pub hub_diameter: f32,
    pub hub_color: Color,
}

/// Everything needed to draw the clock at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub hour_hand: HandPlan,
    pub minute_hand: HandPlan,
    pub dial: DialPlan,
    pub frame: FramePlan,
    /// Clock should shake (feedback in progress)
    pub ringing: bool,
}

impl RenderPlan {
    pub fn with_ringing(mut self, ringing: bool) -> Self {
        self.ringing = ringing;
        self
    }
}

/// Hand angles `(hour, minute)` in degrees for any time
///
/// Inputs are wrapped first, so negative and out-of-range values are fine.
/// Fractional minutes sweep both hands continuously.
pub fn hand_angles(hour: f32, minute: f32) -> (f32, f32) {
    let hour = wrap_hour(hour);
    let minute = wrap_minute(minute);
    (
        hour * DEG_PER_HOUR + minute * HOUR_DRIFT_PER_MINUTE,
        minute * DEG_PER_MINUTE,
    )
}

/// Lay out the static dial face
pub fn compute_dial(size: f32, rim_color: Color) -> DialPlan {
    debug_assert!(size > 0.0, "dial size must be positive");

    let radius = size / 2.0;
    let center = Vec2::splat(radius);

    let tick_distance = radius - size * 0.08;
    let ticks = (0..DIAL_SLOTS)
        .map(|i| {
            let angle = i as f32 * SLOT_DEGREES;
            let major = i % 3 == 0;
            let (length, width, opacity) = if major {
                (size * 0.04, (size / 75.0).max(2.0), 0.9)
            } else {
                (size * 0.02, (size / 150.0).max(1.0), 0.6)
            };
            TickMark {
                index: i as u8,
                angle,
                major,
                distance: tick_distance,
                length,
                width,
                opacity,
                center: center + dial_to_cartesian(tick_distance, angle),
            }
        })
        .collect();

    let numeral_distance = radius - size * 0.14;
    let font_size = (size * 0.08).round().max(NUMERAL_FONT_FLOOR);
    let numerals = (1..=DIAL_SLOTS)
        .map(|n| {
            let angle = n as f32 * SLOT_DEGREES;
            Numeral {
                value: n as u8,
                angle,
                distance: numeral_distance,
                font_size,
                glyph_rotation: 0.0,
                center: center + dial_to_cartesian(numeral_distance, angle),
            }
        })
        .collect();

    DialPlan {
        size,
        center,
        radius,
        rim_width: (size * 0.08).round().max(RIM_FLOOR),
        rim_color,
        face_color: Color::FACE_WHITE,
        ink: Color::INK,
        ticks,
        numerals,
        hub_diameter: (size * 0.08).max(HUB_FLOOR),
        hub_color: Color::HOUR_HAND,
    }
}

fn hand(center: Vec2, angle: f32, length: f32, thickness: f32, color: Color) -> HandPlan {
    HandPlan {
        angle,
        length,
        thickness,
        color,
        tip: center + dial_to_cartesian(length, angle),
    }
}

fn hands(dial: &DialPlan, hour: f32, minute: f32) -> (HandPlan, HandPlan) {
    let (hour_angle, minute_angle) = hand_angles(hour, minute);
    let size = dial.size;
    (
        hand(
            dial.center,
            hour_angle,
            dial.radius * 0.55,
            (size * 0.04).max(HAND_THICKNESS_FLOOR),
            Color::HOUR_HAND,
        ),
        hand(
            dial.center,
            minute_angle,
            dial.radius * 0.72,
            (size * 0.027).max(HAND_THICKNESS_FLOOR),
            Color::MINUTE_HAND,
        ),
    )
}

/// Compute the full render plan for a time
///
/// Pure: the same inputs always give the same plan. `size` must be positive.
pub fn compute_render_plan(hour: f32, minute: f32, size: f32, border_color: Color) -> RenderPlan {
    let dial = compute_dial(size, border_color);
    let frame = compute_frame(size);
    let (hour_hand, minute_hand) = hands(&dial, hour, minute);
    RenderPlan {
        hour_hand,
        minute_hand,
        dial,
        frame,
        ringing: false,
    }
}

/// Cached static layers for one `(size, colour)` pair
#[derive(Debug)]
struct Layers {
    key: (u32, Color),
    dial: DialPlan,
    frame: FramePlan,
}

/// Memoized dial face and frame for the last `(size, colour)` pair
///
/// Only the hands change with time, so a caller redrawing at a fixed size
/// can skip the rest of the layout.
#[derive(Debug, Default)]
pub struct FrameCache {
    layers: Option<Layers>,
    hits: u64,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same result as [`compute_render_plan`], reusing the cached layers
    pub fn render_plan(&mut self, hour: f32, minute: f32, size: f32, border_color: Color) -> RenderPlan {
        let key = (size.to_bits(), border_color);
        if self.layers.as_ref().is_some_and(|l| l.key == key) {
            self.hits += 1;
        } else {
            self.layers = None;
        }
        let layers = self.layers.get_or_insert_with(|| {
            log::debug!("Laying out clock frame for size {} ({})", size, border_color.to_hex());
            Layers {
                key,
                dial: compute_dial(size, border_color),
                frame: compute_frame(size),
            }
        });
        let (hour_hand, minute_hand) = hands(&layers.dial, hour, minute);
        RenderPlan {
            hour_hand,
            minute_hand,
            dial: layers.dial.clone(),
            frame: layers.frame.clone(),
            ringing: false,
        }
    }

    /// Number of plans served without re-laying-out the frame
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn clear(&mut self) {
        self.layers = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_hand_angles_basic() {
        assert_eq!(hand_angles(3.0, 0.0), (90.0, 0.0));
        assert_eq!(hand_angles(10.0, 30.0), (315.0, 180.0));
        assert_eq!(hand_angles(12.0, 45.0), (22.5, 270.0));
        // Classic display pose: 10:10
        assert_eq!(hand_angles(10.0, 10.0), (305.0, 60.0));
    }

    #[test]
    fn test_hand_angles_wrap_negative_input() {
        assert_eq!(hand_angles(-1.0, 0.0), (330.0, 0.0));
        assert_eq!(hand_angles(13.0, -15.0), hand_angles(1.0, 45.0));
        assert_eq!(hand_angles(0.0, 60.0), (0.0, 0.0));
    }

    #[test]
    fn test_fractional_minutes_are_continuous() {
        let (h0, m0) = hand_angles(4.0, 20.0);
        let (h1, m1) = hand_angles(4.0, 20.5);
        assert!(approx(m1 - m0, 3.0));
        assert!(approx(h1 - h0, 0.25));
    }

    #[test]
    fn test_ticks_slotted_with_quarter_emphasis() {
        let dial = compute_dial(150.0, Color::ALARM_RED);
        assert_eq!(dial.ticks.len(), 12);
        assert_eq!(dial.ink, Color::INK);
        assert_eq!(dial.rim_color, Color::ALARM_RED);
        for (i, tick) in dial.ticks.iter().enumerate() {
            assert_eq!(tick.angle, i as f32 * 30.0);
            assert_eq!(tick.major, i % 3 == 0);
            assert!(approx(tick.center.distance(dial.center), 63.0));
        }
        let major = &dial.ticks[0];
        let minor = &dial.ticks[1];
        assert!(major.length > minor.length);
        assert!(major.width > minor.width);
        assert!(major.opacity > minor.opacity);
        // 12 o'clock tick sits straight above the centre
        assert!(approx(major.center.x, 75.0));
        assert!(approx(major.center.y, 12.0));
    }

    #[test]
    fn test_numerals_upright_at_slots() {
        let dial = compute_dial(150.0, Color::ALARM_RED);
        assert_eq!(dial.numerals.len(), 12);
        for numeral in &dial.numerals {
            assert_eq!(numeral.angle, numeral.value as f32 * 30.0);
            assert_eq!(numeral.glyph_rotation, 0.0);
            assert!(approx(numeral.distance, 54.0));
            assert_eq!(numeral.font_size, 12.0);
        }
        let three = &dial.numerals[2];
        assert_eq!(three.value, 3);
        assert!(approx(three.center.x, 129.0));
        assert!(approx(three.center.y, 75.0));
    }

    #[test]
    fn test_floors_for_tiny_dial() {
        let plan = compute_render_plan(1.0, 0.0, 20.0, Color::ALARM_RED);
        assert_eq!(plan.dial.numerals[0].font_size, 10.0);
        assert_eq!(plan.hour_hand.thickness, 2.0);
        assert_eq!(plan.minute_hand.thickness, 2.0);
        assert_eq!(plan.dial.rim_width, 2.0);
        assert!(plan.dial.ticks.iter().all(|t| t.width >= 1.0));
    }

    #[test]
    fn test_render_plan_hands() {
        let plan = compute_render_plan(3.0, 0.0, 150.0, Color::ALARM_RED);
        assert_eq!(plan.hour_hand.angle, 90.0);
        assert!(approx(plan.hour_hand.length, 41.25));
        assert!(approx(plan.hour_hand.tip.x, 75.0 + 41.25));
        assert!(approx(plan.hour_hand.tip.y, 75.0));
        assert!(approx(plan.minute_hand.length, 54.0));
        assert!(approx(plan.minute_hand.tip.y, 75.0 - 54.0));
        assert!(plan.hour_hand.thickness > plan.minute_hand.thickness);
        assert!(!plan.ringing);
        assert!(plan.clone().with_ringing(true).ringing);
    }

    #[test]
    fn test_layout_independent_of_time() {
        let a = compute_render_plan(1.0, 0.0, 150.0, Color::ALARM_RED);
        let b = compute_render_plan(7.0, 45.0, 150.0, Color::ALARM_RED);
        assert_eq!(a.dial, b.dial);
        assert_eq!(a.frame, b.frame);
        assert_ne!(a.hour_hand, b.hour_hand);
    }

    #[test]
    fn test_frame_cache_matches_fresh_plan() {
        let mut cache = FrameCache::new();
        let color = Color::rgb(0xff, 0x7b, 0x00);
        let first = cache.render_plan(10.0, 30.0, 150.0, color);
        assert_eq!(cache.hits(), 0);
        let second = cache.render_plan(4.0, 15.0, 150.0, color);
        assert_eq!(cache.hits(), 1);
        assert_eq!(second, compute_render_plan(4.0, 15.0, 150.0, color));
        assert_eq!(first.frame, second.frame);

        // New size invalidates
        cache.render_plan(4.0, 15.0, 120.0, color);
        assert_eq!(cache.hits(), 1);
        cache.clear();
        cache.render_plan(4.0, 15.0, 120.0, color);
        assert_eq!(cache.hits(), 1);
    }

    proptest! {
        #[test]
        fn prop_hour_angle_on_the_hour(h in 0i32..12) {
            let (hour_angle, _) = hand_angles(h as f32, 0.0);
            prop_assert_eq!(hour_angle, h as f32 * 30.0);
        }

        #[test]
        fn prop_hour_angle_increases_with_minute(h in 0i32..12, m in 0i32..59) {
            let (a, _) = hand_angles(h as f32, m as f32);
            let (b, _) = hand_angles(h as f32, (m + 1) as f32);
            prop_assert!(b > a);
            prop_assert!((0.0..360.0).contains(&a));
        }

        #[test]
        fn prop_angles_periodic(h in -500i32..500, m in -500i32..500) {
            prop_assert_eq!(hand_angles(h as f32, m as f32), hand_angles((h + 12) as f32, (m + 60) as f32));
        }
    }
}
