//! Spoken-English phrases for quarter-hour times

use serde::{Deserialize, Serialize};

use crate::to_display_hour;

/// The four minutes a round can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuarterMark {
    OClock,
    QuarterPast,
    HalfPast,
    QuarterTo,
}

impl QuarterMark {
    pub const ALL: [QuarterMark; 4] = [
        QuarterMark::OClock,
        QuarterMark::QuarterPast,
        QuarterMark::HalfPast,
        QuarterMark::QuarterTo,
    ];

    pub fn from_minute(minute: i32) -> Option<Self> {
        match minute {
            0 => Some(QuarterMark::OClock),
            15 => Some(QuarterMark::QuarterPast),
            30 => Some(QuarterMark::HalfPast),
            45 => Some(QuarterMark::QuarterTo),
            _ => None,
        }
    }

    pub fn minute(&self) -> i32 {
        match self {
            QuarterMark::OClock => 0,
            QuarterMark::QuarterPast => 15,
            QuarterMark::HalfPast => 30,
            QuarterMark::QuarterTo => 45,
        }
    }

    /// Render the phrase for an hour. "Quarter to" names the next hour.
    pub fn phrase(&self, hour: i32) -> String {
        match self {
            QuarterMark::OClock => format!("{} o'clock", to_display_hour(hour)),
            QuarterMark::QuarterPast => format!("Quarter past {}", to_display_hour(hour)),
            QuarterMark::HalfPast => format!("Half past {}", to_display_hour(hour)),
            QuarterMark::QuarterTo => format!("Quarter to {}", to_display_hour(hour + 1)),
        }
    }
}

/// Phrase for a time, or `None` when the minute is not a quarter mark
pub fn derive_phrase(hour: i32, minute: i32) -> Option<String> {
    QuarterMark::from_minute(minute).map(|mark| mark.phrase(hour))
}

/// The four quiz labels for a round's hour, in dial order
pub fn candidate_labels(hour: i32) -> [String; 4] {
    QuarterMark::ALL.map(|mark| mark.phrase(hour))
}

/// Canonical comparison form: trimmed, lowercase
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case- and surrounding-whitespace-insensitive equality
pub fn answers_match(a: &str, b: &str) -> bool {
    normalize_answer(a) == normalize_answer(b)
}
