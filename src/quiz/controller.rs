//! Round/answer controller
//!
//! Owns the session state and the pending round-advance timer. Time only moves
//! when the host calls [`Quiz::tick`], so sessions are reproducible from a seed.

use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phrase::{answers_match, candidate_labels, derive_phrase};
use super::state::{GameState, MascotPose, QuizPhase, Round, WAKE_MESSAGES};
use super::timer::AdvanceTimer;
use crate::clock::{Color, FrameCache, RenderPlan, compute_render_plan};
use crate::consts::*;
use crate::settings::Settings;

/// Fire-and-forget effects the controller triggers on a correct answer.
///
/// Implementations swallow their own failures.
pub trait Effects {
    /// Confetti burst
    fn play_celebration(&mut self);
    /// Alarm ring
    fn play_sound(&mut self);
}

/// Effects sink that does nothing (headless hosts, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn play_celebration(&mut self) {}
    fn play_sound(&mut self) {}
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// Input locked while feedback plays
    Ignored,
    Correct,
    Incorrect,
}

/// One quiz button as the presentation layer should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonView {
    pub label: String,
    /// Faded out because it is a wrong choice and feedback is playing
    pub dimmed: bool,
}

/// The quiz session: single writer of [`GameState`]
#[derive(Debug)]
pub struct Quiz {
    state: GameState,
    rng: Pcg32,
    timer: AdvanceTimer,
    advance_delay: Duration,
}

impl Quiz {
    /// New session opening on half past 10
    pub fn new(seed: u64) -> Self {
        Self::with_round(seed, Round::seed())
    }

    /// New session opening on an explicit round
    pub fn with_round(seed: u64, round: Round) -> Self {
        let state = GameState::new(seed, round);
        let rng = state.rng_state.to_rng();
        log::info!(
            "Quiz started (seed {}), first round: {}",
            seed,
            state.round.correct_phrase
        );
        Self {
            state,
            rng,
            timer: AdvanceTimer::new(),
            advance_delay: ADVANCE_DELAY,
        }
    }

    /// Builder: delay before the next round, clamped to 2-3 s
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay.clamp(MIN_ADVANCE_DELAY, MAX_ADVANCE_DELAY);
        self
    }

    /// Builder: apply host settings
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_advance_delay(settings.advance_delay)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round(&self) -> &Round {
        &self.state.round
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    /// Time left before the next round, if one is scheduled
    pub fn pending_advance(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Submit a button label
    pub fn handle_answer(&mut self, label: &str, fx: &mut dyn Effects) -> AnswerOutcome {
        if self.state.phase == QuizPhase::Animating {
            log::debug!("Answer '{}' ignored while animating", label);
            return AnswerOutcome::Ignored;
        }

        let round = &self.state.round;
        let Some(correct) = derive_phrase(round.hour, round.minute) else {
            log::warn!("Round {}:{:02} has no phrase; answer ignored", round.hour, round.minute);
            return AnswerOutcome::Ignored;
        };

        if !answers_match(label, &correct) {
            log::debug!("Wrong answer '{}' (expected '{}')", label.trim(), correct);
            self.state.feedback.show_snooze = true;
            return AnswerOutcome::Incorrect;
        }

        let message = WAKE_MESSAGES[self.rng.random_range(0..WAKE_MESSAGES.len())];
        let pose = MascotPose::AWAKE[self.rng.random_range(0..MascotPose::AWAKE.len())];

        let feedback = &mut self.state.feedback;
        feedback.show_snooze = false;
        feedback.wake_message = Some(message.to_string());
        feedback.mascot = pose;
        self.state.phase = QuizPhase::Animating;

        fx.play_celebration();
        fx.play_sound();

        self.timer.arm(self.advance_delay);
        log::info!(
            "Correct: '{}' - next round in {} ms",
            correct,
            self.advance_delay.as_millis()
        );
        AnswerOutcome::Correct
    }

    /// Advance host time; returns true when a new round was started
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.timer.advance(dt) {
            return false;
        }
        self.next_round();
        true
    }

    /// Cancel any pending advance and start over on a fresh random round
    pub fn reset(&mut self) {
        if self.timer.is_pending() {
            log::debug!("Reset cancelled pending round advance");
        }
        self.timer.cancel();
        self.state.feedback = Default::default();
        self.state.phase = QuizPhase::Idle;
        self.state.round = Round::random(&mut self.rng);
        log::info!("Quiz reset, round: {}", self.state.round.correct_phrase);
    }

    fn next_round(&mut self) {
        self.state.phase = QuizPhase::Idle;
        self.state.feedback.wake_message = None;
        self.state.feedback.mascot = MascotPose::Asleep;
        self.state.round = Round::random(&mut self.rng);
        log::info!("Next round: {}", self.state.round.correct_phrase);
    }

    /// The four answer buttons for the current round
    pub fn buttons(&self) -> [ButtonView; 4] {
        let animating = self.state.is_animating();
        let correct = &self.state.round.correct_phrase;
        candidate_labels(self.state.round.hour).map(|label| ButtonView {
            dimmed: animating && !answers_match(&label, correct),
            label,
        })
    }

    /// Clock plan for the current round
    pub fn render_plan(&self, size: f32, border_color: Color) -> RenderPlan {
        let round = &self.state.round;
        compute_render_plan(round.hour as f32, round.minute as f32, size, border_color)
            .with_ringing(self.state.is_animating())
    }

    /// Same as [`Quiz::render_plan`], reusing a frame cache
    pub fn render_plan_cached(&self, cache: &mut FrameCache, size: f32, border_color: Color) -> RenderPlan {
        let round = &self.state.round;
        cache
            .render_plan(round.hour as f32, round.minute as f32, size, border_color)
            .with_ringing(self.state.is_animating())
    }
}

impl Drop for Quiz {
    fn drop(&mut self) {
        if self.timer.is_pending() {
            log::debug!("Quiz dropped with a pending round advance; cancelled");
            self.timer.cancel();
        }
    }
}
