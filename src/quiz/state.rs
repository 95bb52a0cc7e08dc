//! Quiz state and round types
//!
//! Everything the presentation layer reads lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phrase::{QuarterMark, derive_phrase};
use crate::consts::*;

/// Positive messages shown when the clock wakes the mascot up
pub const WAKE_MESSAGES: [&str; 6] = [
    "Rise and shine!",
    "Right on time!",
    "Brilliant, the alarm is ringing!",
    "You woke Flexi up!",
    "Great job, no more snoozing!",
    "Ding ding ding!",
];

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizPhase {
    /// Waiting for an answer
    #[default]
    Idle,
    /// Correct answer accepted, feedback playing, input locked
    Animating,
}

/// What the mascot next to the clock is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MascotPose {
    /// Face down, sleeping through the alarm
    #[default]
    Asleep,
    Excited,
    Hello,
    Hey,
    Stars,
    ThumbsUp,
}

impl MascotPose {
    /// Poses picked at random after a correct answer
    pub const AWAKE: [MascotPose; 5] = [
        MascotPose::Excited,
        MascotPose::Hello,
        MascotPose::Hey,
        MascotPose::Stars,
        MascotPose::ThumbsUp,
    ];

    pub fn is_awake(&self) -> bool {
        *self != MascotPose::Asleep
    }
}

/// One practice round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Display hour (1-12 for generated rounds)
    pub hour: i32,
    /// One of 0, 15, 30, 45
    pub minute: i32,
    pub correct_phrase: String,
}

impl Round {
    /// Build a round; `minute` must be a quarter mark
    pub fn new(hour: i32, minute: i32) -> Self {
        debug_assert!(
            QuarterMark::from_minute(minute).is_some(),
            "round minute {minute} is not a quarter mark"
        );
        Self {
            hour,
            minute,
            correct_phrase: derive_phrase(hour, minute).unwrap_or_default(),
        }
    }

    /// Uniform hour in 1..=12, uniform minute from the quarter marks
    pub fn random(rng: &mut impl Rng) -> Self {
        let minute = QUARTER_MINUTES[rng.random_range(0..QUARTER_MINUTES.len())];
        let hour = rng.random_range(1..=12);
        Self::new(hour, minute)
    }

    /// Session opening round
    pub fn seed() -> Self {
        Self::new(SEED_HOUR, SEED_MINUTE)
    }
}

/// Transient cues layered on top of the phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// "Z z z" cue after a wrong answer
    pub show_snooze: bool,
    /// Set while a correct answer is being celebrated
    pub wake_message: Option<String>,
    pub mascot: MascotPose,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Snapshot of a quiz session (single writer: the controller)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub round: Round,
    pub phase: QuizPhase,
    pub feedback: Feedback,
}

impl GameState {
    /// Fresh session showing `round`
    pub fn new(seed: u64, round: Round) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            round,
            phase: QuizPhase::Idle,
            feedback: Feedback::default(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase == QuizPhase::Animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_round() {
        let round = Round::seed();
        assert_eq!((round.hour, round.minute), (10, 30));
        assert_eq!(round.correct_phrase, "Half past 10");
    }

    #[test]
    fn test_random_rounds_stay_in_domain() {
        let mut rng = RngState::new(42).to_rng();
        let mut seen_hours = [false; 13];
        let mut seen_minutes = [false; 4];
        for _ in 0..2000 {
            let round = Round::random(&mut rng);
            assert!((1..=12).contains(&round.hour));
            let mark = QuarterMark::from_minute(round.minute).unwrap();
            seen_hours[round.hour as usize] = true;
            seen_minutes[mark.minute() as usize / 15] = true;
            assert_eq!(Some(round.correct_phrase.clone()), derive_phrase(round.hour, round.minute));
        }
        // Full inclusive 1-12 range, never 0
        assert!(!seen_hours[0]);
        assert!(seen_hours[1..].iter().all(|&s| s));
        assert!(seen_minutes.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = RngState::new(7).to_rng();
        let mut b = RngState::new(7).to_rng();
        for _ in 0..20 {
            assert_eq!(Round::random(&mut a), Round::random(&mut b));
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, Round::seed());
        assert_eq!(state.phase, QuizPhase::Idle);
        assert!(!state.is_animating());
        assert_eq!(state.feedback, Feedback::default());
        assert!(!state.feedback.mascot.is_awake());
    }
}
