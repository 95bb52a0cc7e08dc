//! RGB colours used by the dial and frame

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default rim colour (alarm-clock red)
    pub const ALARM_RED: Color = Color::rgb(0xff, 0x42, 0x42);
    pub const FACE_WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const HOUR_HAND: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const MINUTE_HAND: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const INK: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const METAL_FILL: Color = Color::rgb(0xc0, 0xc0, 0xc0);
    pub const METAL_EDGE: Color = Color::rgb(0x8f, 0x8f, 0x8f);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::ALARM_RED
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid colour: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Color::from_hex("#ff4242"), Some(Color::ALARM_RED));
        assert_eq!(Color::from_hex("FF4242"), Some(Color::ALARM_RED));
        assert_eq!(Color::from_hex("#fff"), Some(Color::FACE_WHITE));
        assert_eq!(Color::from_hex("#FF7B00"), Some(Color::rgb(0xff, 0x7b, 0x00)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::METAL_EDGE).unwrap();
        assert_eq!(json, "\"#8f8f8f\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::METAL_EDGE);
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
