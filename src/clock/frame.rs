//! Alarm-clock frame: bells, handle, supports, clapper, legs and feet
//!
//! Everything here depends on `size` and the rim colour only. Positions are in
//! the dial box frame: origin at the top-left of the `size x size` face, y down.
//! Parts may sit outside the box (bells and handle above it, feet below).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Which piece of the frame a part is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartKind {
    LeftSupport,
    RightSupport,
    ClapperStem,
    ClapperBar,
    LeftBell,
    RightBell,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
}

/// Outline of a part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PartShape {
    /// Rounded rectangle with per-corner radii (tl, tr, br, bl)
    RoundedRect { radii: [f32; 4] },
    /// Circle inscribed in the part's box
    Circle,
}

/// A positioned, filled frame part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePart {
    pub kind: PartKind,
    /// Top-left of the unrotated box
    pub origin: Vec2,
    pub extent: Vec2,
    /// Degrees, clockwise, about the box centre
    pub rotation: f32,
    pub shape: PartShape,
    pub fill: Color,
    pub edge: Color,
    pub edge_width: f32,
    /// Paint layer: 0 behind the face, 1 around it, 2 is the face itself
    pub layer: u8,
}

impl FramePart {
    /// Centre of the unrotated box
    pub fn center(&self) -> Vec2 {
        self.origin + self.extent / 2.0
    }
}

/// One segment of the handle path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Cubic { c1: Vec2, c2: Vec2, to: Vec2 },
    Quad { c: Vec2, to: Vec2 },
}

/// The carrying handle: a stroked open path drawn in its own view box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlePlan {
    /// Element box in the dial frame
    pub origin: Vec2,
    pub extent: Vec2,
    /// Coordinate space of `start`/`segments`
    pub view_box: Vec2,
    pub start: Vec2,
    pub segments: Vec<PathSegment>,
    pub stroke_width: f32,
    pub color: Color,
}

impl HandlePlan {
    /// Final point of the path
    pub fn end(&self) -> Vec2 {
        match self.segments.last() {
            Some(PathSegment::Cubic { to, .. }) | Some(PathSegment::Quad { to, .. }) => *to,
            None => self.start,
        }
    }
}

/// Complete time-independent decoration around the dial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePlan {
    pub size: f32,
    pub handle: HandlePlan,
    /// Parts in paint order
    pub parts: Vec<FramePart>,
}

impl FramePlan {
    pub fn part(&self, kind: PartKind) -> Option<&FramePart> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

/// Horizontal anchoring of a part inside the dial box
#[derive(Debug, Clone, Copy)]
enum Anchor {
    /// Inset from the left edge (mirrored from the right for the twin)
    Side(f32),
    Centered,
}

/// Vertical anchoring
#[derive(Debug, Clone, Copy)]
enum Rest {
    Top(f32),
    Bottom(f32),
}

/// Proportional layout of one (possibly mirrored) part
struct PartSpec {
    kinds: (PartKind, Option<PartKind>),
    extent: Vec2,
    anchor: Anchor,
    rest: Rest,
    rotation: f32,
    shape: PartShape,
    edge_width: f32,
}

/// Minimum pixel floors (border/stroke widths never collapse below these)
const STROKE_FLOOR: f32 = 2.0;
const THIN_FLOOR: f32 = 1.0;
const CLAPPER_BAR_FLOOR: f32 = 6.0;

#[inline]
fn floored(value: f32, floor: f32) -> f32 {
    value.round().max(floor)
}

/// Lay out the frame for a dial of `size` pixels
pub fn compute_frame(size: f32) -> FramePlan {
    debug_assert!(size > 0.0, "dial size must be positive");

    let stroke = floored(size * 0.02, STROKE_FLOOR);
    let thin = floored(size * 0.01, THIN_FLOOR);

    let bell_w = size * 0.35;
    let bell_h = bell_w * 0.40;
    let support_w = floored(size * 0.02, STROKE_FLOOR);
    let leg_w = size * 0.04;
    let foot_d = size * 0.08;
    let bar_h = floored(size * 0.05, CLAPPER_BAR_FLOOR);
    let clapper_top = -size * 0.04;
    let stem_h = size * 0.09;

    let specs = [
        PartSpec {
            kinds: (PartKind::LeftSupport, Some(PartKind::RightSupport)),
            extent: Vec2::new(support_w, size * 0.22),
            anchor: Anchor::Side(size * 0.23),
            rest: Rest::Top(-size * 0.02),
            rotation: -35.0,
            shape: PartShape::RoundedRect { radii: [support_w; 4] },
            edge_width: thin,
        },
        PartSpec {
            kinds: (PartKind::ClapperStem, None),
            extent: Vec2::new(floored(size * 0.02, STROKE_FLOOR), stem_h),
            anchor: Anchor::Centered,
            rest: Rest::Top(clapper_top - stem_h + bar_h),
            rotation: 0.0,
            shape: PartShape::RoundedRect { radii: [size; 4] },
            edge_width: thin,
        },
        PartSpec {
            kinds: (PartKind::ClapperBar, None),
            extent: Vec2::new(size * 0.22, bar_h),
            anchor: Anchor::Centered,
            rest: Rest::Top(clapper_top - size * 0.05),
            rotation: 0.0,
            shape: PartShape::RoundedRect { radii: [bar_h; 4] },
            edge_width: thin,
        },
        PartSpec {
            kinds: (PartKind::LeftBell, Some(PartKind::RightBell)),
            extent: Vec2::new(bell_w, bell_h),
            anchor: Anchor::Side(size * 0.02),
            rest: Rest::Top(-bell_h * 0.50),
            rotation: -30.0,
            // Dome: fully rounded top, flat base
            shape: PartShape::RoundedRect { radii: [bell_w, bell_w, 0.0, 0.0] },
            edge_width: stroke,
        },
        PartSpec {
            kinds: (PartKind::LeftLeg, Some(PartKind::RightLeg)),
            extent: Vec2::new(leg_w, size * 0.14),
            anchor: Anchor::Side(size * 0.18),
            rest: Rest::Bottom(0.0),
            rotation: 30.0,
            shape: PartShape::RoundedRect { radii: [size * 0.04; 4] },
            edge_width: thin,
        },
        PartSpec {
            kinds: (PartKind::LeftFoot, Some(PartKind::RightFoot)),
            extent: Vec2::splat(foot_d),
            anchor: Anchor::Side(size * 0.153 + leg_w / 2.0 - foot_d / 2.0),
            rest: Rest::Bottom(-foot_d * 0.2),
            rotation: 0.0,
            shape: PartShape::Circle,
            edge_width: thin,
        },
    ];

    let mut parts = Vec::with_capacity(10);
    for spec in &specs {
        let y = match spec.rest {
            Rest::Top(top) => top,
            Rest::Bottom(bottom) => size - bottom - spec.extent.y,
        };
        let x = match spec.anchor {
            Anchor::Side(inset) => inset,
            Anchor::Centered => (size - spec.extent.x) / 2.0,
        };
        let part = FramePart {
            kind: spec.kinds.0,
            origin: Vec2::new(x, y),
            extent: spec.extent,
            rotation: spec.rotation,
            shape: spec.shape,
            fill: Color::METAL_FILL,
            edge: Color::METAL_EDGE,
            edge_width: spec.edge_width,
            layer: 1,
        };
        if let Some(twin) = spec.kinds.1 {
            let mirrored = FramePart {
                kind: twin,
                origin: Vec2::new(size - x - spec.extent.x, y),
                rotation: -spec.rotation,
                ..part.clone()
            };
            parts.push(part);
            parts.push(mirrored);
        } else {
            parts.push(part);
        }
    }

    FramePlan {
        size,
        handle: compute_handle(size, stroke, bell_w),
        parts,
    }
}

fn compute_handle(size: f32, stroke: f32, bell_w: f32) -> HandlePlan {
    let width = size * 0.88;
    let height = size * 0.30;

    let left_x = bell_w * 0.42;
    let right_x = size - bell_w * 0.42;
    let anchor_y = height;
    let side_top_y = height * 0.80;
    let crown_y = height * 0.06;
    let rise = anchor_y - side_top_y;

    let side = |x: f32, upward: bool| {
        let near_anchor = Vec2::new(x, anchor_y - rise * 0.6);
        let near_top = Vec2::new(x, side_top_y + rise * 0.2);
        if upward {
            PathSegment::Cubic { c1: near_anchor, c2: near_top, to: Vec2::new(x, side_top_y) }
        } else {
            PathSegment::Cubic { c1: near_top, c2: near_anchor, to: Vec2::new(x, anchor_y) }
        }
    };

    HandlePlan {
        origin: Vec2::new((size - width) / 2.0, -size * 0.33),
        extent: Vec2::new(width, height),
        view_box: Vec2::new(size, height),
        start: Vec2::new(left_x, anchor_y),
        segments: vec![
            side(left_x, true),
            PathSegment::Quad {
                c: Vec2::new(size / 2.0, crown_y),
                to: Vec2::new(right_x, side_top_y),
            },
            side(right_x, false),
        ],
        stroke_width: stroke.max((size * 0.025).round()),
        color: Color::METAL_EDGE,
    }
}
