//! Tell-the-time quiz
//!
//! Deterministic given a seed:
//! - Seeded RNG only (round generation, feedback picks)
//! - Host-driven time only (no wall clock, no background timers)
//! - One owner of all mutable state

pub mod controller;
pub mod phrase;
pub mod state;
pub mod timer;

pub use controller::{AnswerOutcome, ButtonView, Effects, NoEffects, Quiz};
pub use phrase::{QuarterMark, answers_match, candidate_labels, derive_phrase, normalize_answer};
pub use state::{Feedback, GameState, MascotPose, QuizPhase, RngState, Round, WAKE_MESSAGES};
pub use timer::AdvanceTimer;
