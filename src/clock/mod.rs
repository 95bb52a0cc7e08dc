//! Analog alarm clock geometry
//!
//! Stateless: every call maps `(hour, minute, size, colour)` to a fresh plan.
//! - No rendering backend, no platform dependencies
//! - Only the hands depend on time; dial and frame depend on size/colour

pub mod color;
pub mod frame;
pub mod geometry;

pub use color::Color;
pub use frame::{FramePart, FramePlan, HandlePlan, PartKind, PartShape, PathSegment, compute_frame};
pub use geometry::{
    DialPlan, FrameCache, HandPlan, Numeral, RenderPlan, TickMark, compute_dial,
    compute_render_plan, hand_angles,
};
