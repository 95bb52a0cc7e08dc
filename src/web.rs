//! Browser bindings
//!
//! Exposes the quiz to the page script. The page owns the DOM: it reads the
//! JSON snapshots, draws the clock and buttons, and forwards clicks/frames.

use wasm_bindgen::prelude::*;

use crate::audio::{AudioManager, SoundEffect};
use crate::clock::FrameCache;
use crate::quiz::{AnswerOutcome, Effects, Quiz};
use crate::settings::Settings;
use crate::frame_delta;

/// Effects routed to the page: `window.confetti` and Web Audio
struct WebEffects<'a> {
    audio: &'a AudioManager,
    confetti: bool,
}

impl Effects for WebEffects<'_> {
    fn play_celebration(&mut self) {
        if self.confetti {
            fire_confetti();
        }
    }

    fn play_sound(&mut self) {
        self.audio.play(SoundEffect::AlarmRing);
    }
}

/// Call `window.confetti({particleCount: 100, spread: 70, origin: {y: 0.6}})`
/// if the page loaded a confetti library. Failures are logged and dropped.
fn fire_confetti() {
    let global = js_sys::global();
    let Ok(confetti) = js_sys::Reflect::get(&global, &JsValue::from_str("confetti")) else {
        return;
    };
    let Some(confetti) = confetti.dyn_ref::<js_sys::Function>() else {
        log::debug!("No confetti function on window");
        return;
    };

    let origin = js_sys::Object::new();
    let opts = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&origin, &"y".into(), &JsValue::from_f64(0.6));
    let _ = js_sys::Reflect::set(&opts, &"particleCount".into(), &JsValue::from_f64(100.0));
    let _ = js_sys::Reflect::set(&opts, &"spread".into(), &JsValue::from_f64(70.0));
    let _ = js_sys::Reflect::set(&opts, &"origin".into(), &origin);

    if let Err(e) = confetti.call1(&JsValue::NULL, &opts) {
        log::warn!("Confetti failed: {:?}", e);
    }
}

/// Quiz session handle for the page
#[wasm_bindgen]
pub struct WebQuiz {
    quiz: Quiz,
    settings: Settings,
    audio: AudioManager,
    cache: FrameCache,
    viewport_width: u32,
}

#[wasm_bindgen]
impl WebQuiz {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: u32) -> WebQuiz {
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let mut audio = AudioManager::new();
        audio.set_volume(settings.effective_volume());
        log::info!("Quiz initialized with seed: {}", seed);
        WebQuiz {
            quiz: Quiz::new(seed).with_settings(&settings),
            settings,
            audio,
            cache: FrameCache::new(),
            viewport_width,
        }
    }

    /// Viewport resize signal
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Submit a button label; returns "correct", "incorrect" or "ignored"
    pub fn answer(&mut self, label: &str) -> String {
        let mut fx = WebEffects {
            audio: &self.audio,
            confetti: self.settings.effective_confetti(),
        };
        let outcome = self.quiz.handle_answer(label, &mut fx);
        if outcome == AnswerOutcome::Incorrect {
            self.audio.play(SoundEffect::Snore);
        }
        match outcome {
            AnswerOutcome::Correct => "correct",
            AnswerOutcome::Incorrect => "incorrect",
            AnswerOutcome::Ignored => "ignored",
        }
        .to_string()
    }

    /// Advance by one animation frame; returns true when a new round began
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.quiz.tick(frame_delta(dt_ms))
    }

    pub fn reset(&mut self) {
        self.quiz.reset();
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.settings.sound_enabled = enabled;
        self.audio.set_volume(self.settings.effective_volume());
        self.settings.save();
    }

    /// Game state as JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.quiz.state()).unwrap_or_default()
    }

    /// Quiz buttons as JSON
    pub fn buttons_json(&self) -> String {
        serde_json::to_string(&self.quiz.buttons()).unwrap_or_default()
    }

    /// Clock render plan for the current viewport as JSON
    pub fn render_plan_json(&mut self) -> String {
        let size = self.settings.clock_size(self.viewport_width);
        let plan = self
            .quiz
            .render_plan_cached(&mut self.cache, size, self.settings.border_color);
        let plan = if self.settings.effective_ringing() {
            plan
        } else {
            plan.with_ringing(false)
        };
        serde_json::to_string(&plan).unwrap_or_default()
    }

    /// Mascot width for the current viewport
    pub fn mascot_width(&self) -> f32 {
        self.settings.mascot_width(self.viewport_width)
    }
}

/// Logging and panic hook; called once from the start hook
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Clock Quiz starting...");
}
