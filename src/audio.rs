//! Audio system using Web Audio API
//!
//! Procedurally generated alarm bell - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Correct answer - the alarm clock goes off
    AlarmRing,
    /// Wrong answer - a sleepy low hum
    Snore,
}

/// Alternating bell strikes in one ring
const RING_STRIKES: u32 = 12;
const STRIKE_SECS: f64 = 0.07;

/// Audio manager for the quiz
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: 0.8,
        }
    }

    /// Set volume (0.0 - 1.0, 0 mutes)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::AlarmRing => self.play_alarm_ring(ctx, vol),
            SoundEffect::Snore => self.play_snore(ctx, vol),
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Alarm ring - rapid hammer strikes alternating between two bells
    fn play_alarm_ring(&self, ctx: &AudioContext, vol: f32) {
        let t0 = ctx.current_time();
        for i in 0..RING_STRIKES {
            let freq = if i % 2 == 0 { 1760.0 } else { 1975.0 };
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
                return;
            };
            let t = t0 + i as f64 * STRIKE_SECS;

            gain.gain().set_value_at_time(0.0, t0).ok();
            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + STRIKE_SECS * 0.95)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + STRIKE_SECS).ok();
        }
    }

    /// Snore - slow falling hum
    fn play_snore(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 110.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(0.0, t).ok();
        gain.gain().linear_ramp_to_value_at_time(vol * 0.12, t + 0.25).ok();
        gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.6).ok();
        osc.frequency().set_value_at_time(110.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(70.0, t + 0.6)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.65).ok();
    }
}
