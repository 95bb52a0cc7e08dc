//! Quiz settings and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file natively.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Color;
use crate::consts::*;
use crate::{scaled_px, viewport_scale};

/// Quiz settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pacing ===
    /// Pause between a correct answer and the next round (2-3 s)
    #[serde(with = "millis")]
    pub advance_delay: Duration,

    // === Layout ===
    /// Clock size at full scale (pixels)
    pub base_clock_size: f32,
    /// Mascot width at full scale (pixels)
    pub base_mascot_width: f32,
    /// Viewport width below which everything shrinks
    pub responsive_breakpoint: f32,
    /// Rim colour of the clock
    pub border_color: Color,

    // === Feedback ===
    /// Alarm sound on correct answers
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Confetti on correct answers
    pub confetti: bool,

    // === Accessibility ===
    /// Reduced motion (no confetti, no ringing shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            advance_delay: ADVANCE_DELAY,

            base_clock_size: BASE_CLOCK_SIZE,
            base_mascot_width: BASE_MASCOT_WIDTH,
            responsive_breakpoint: RESPONSIVE_BREAKPOINT,
            border_color: Color::ALARM_RED,

            sound_enabled: true,
            master_volume: 0.8,
            confetti: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Pull out-of-range values back into range
    pub fn sanitized(mut self) -> Self {
        self.advance_delay = self.advance_delay.clamp(MIN_ADVANCE_DELAY, MAX_ADVANCE_DELAY);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        let defaults = Self::default();
        if !(self.base_clock_size > 0.0) {
            self.base_clock_size = defaults.base_clock_size;
        }
        if !(self.base_mascot_width > 0.0) {
            self.base_mascot_width = defaults.base_mascot_width;
        }
        if !(self.responsive_breakpoint > 0.0) {
            self.responsive_breakpoint = defaults.responsive_breakpoint;
        }
        self
    }

    /// Effective confetti (respects reduced_motion)
    pub fn effective_confetti(&self) -> bool {
        self.confetti && !self.reduced_motion
    }

    /// Effective ringing shake (respects reduced_motion)
    pub fn effective_ringing(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective volume (0 when sound is off)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume
        } else {
            0.0
        }
    }

    /// Scale factor for a viewport width (never above 1)
    pub fn scale_for(&self, viewport_width: u32) -> f32 {
        viewport_scale(viewport_width, self.responsive_breakpoint)
    }

    /// Clock size in whole pixels for a viewport width
    pub fn clock_size(&self, viewport_width: u32) -> f32 {
        scaled_px(self.base_clock_size, self.scale_for(viewport_width))
    }

    /// Mascot width in whole pixels for a viewport width
    pub fn mascot_width(&self, viewport_width: u32) -> f32 {
        scaled_px(self.base_mascot_width, self.scale_for(viewport_width))
    }

    /// Parse settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "clock_quiz_settings";

    /// Environment variable naming the native settings file
    #[allow(dead_code)]
    const PATH_ENV: &'static str = "CLOCK_QUIZ_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `CLOCK_QUIZ_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_default(),
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }
}

/// Serialize a `Duration` as whole milliseconds
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = value.as_millis().min(u64::MAX as u128) as u64;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.advance_delay, Duration::from_millis(2000));
        assert_eq!(s.border_color, Color::ALARM_RED);
        assert_eq!(s.clock_size(1024), 150.0);
        assert_eq!(s.mascot_width(1024), 100.0);
    }

    #[test]
    fn test_shrinks_below_breakpoint() {
        let s = Settings::default();
        assert_eq!(s.clock_size(276), 120.0);
        assert_eq!(s.mascot_width(276), 80.0);
        assert!(s.scale_for(100) < 1.0);
        assert_eq!(s.scale_for(5000), 1.0);
    }

    #[test]
    fn test_json_partial_and_sanitized() {
        let s = Settings::from_json(r##"{"advance_delay": 9000, "border_color": "#FF7B00"}"##).unwrap();
        assert_eq!(s.advance_delay, MAX_ADVANCE_DELAY);
        assert_eq!(s.border_color, Color::rgb(0xff, 0x7b, 0x00));
        assert!(s.sound_enabled);

        let s = Settings::from_json(r#"{"master_volume": 4.0, "base_clock_size": -3}"#).unwrap();
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.base_clock_size, BASE_CLOCK_SIZE);
    }

    #[test]
    fn test_json_roundtrip_keeps_millis() {
        let s = Settings {
            advance_delay: Duration::from_millis(2500),
            ..Default::default()
        };
        let json = s.to_json().unwrap();
        assert!(json.contains("\"advance_delay\": 2500"));
        assert_eq!(Settings::from_json(&json), Some(s));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert_eq!(Settings::from_json("not json"), None);
        assert_eq!(Settings::from_json(r#"{"border_color": "blue"}"#), None);
    }

    #[test]
    fn test_reduced_motion_and_mute() {
        let mut s = Settings::default();
        assert!(s.effective_confetti());
        s.reduced_motion = true;
        assert!(!s.effective_confetti());
        assert!(!s.effective_ringing());
        s.sound_enabled = false;
        assert_eq!(s.effective_volume(), 0.0);
    }
}
