//! Style values
//!
//! The handful of CSS-like values the carousel writes to indicator segments.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::CarouselError;

/// Length value
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Length {
    Px(f32),
    Percent(f32),
    /// Percent of viewport width
    Vw(f32),
}

impl Length {
    /// Resolve to pixels given the containing block and viewport widths
    pub fn to_px(self, container_width: f32, viewport_width: f32) -> f32 {
        match self {
            Self::Px(v) => v,
            Self::Percent(v) => container_width * v / 100.0,
            Self::Vw(v) => viewport_width * v / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, ctor): (&str, fn(f32) -> Length) = if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix("vw") {
            (n, Length::Vw)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            return Err(CarouselError::InvalidStyle(s.to_string()));
        };
        number
            .trim()
            .parse::<f32>()
            .map(ctor)
            .map_err(|_| CarouselError::InvalidStyle(s.to_string()))
    }
}

impl TryFrom<String> for Length {
    type Error = CarouselError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Vw(v) => write!(f, "{v}vw"),
        }
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CarouselError::InvalidStyle(s.to_string());
        match s.trim() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::rgb(0, 0, 0)),
            _ => {}
        }

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        let channel = |i: usize| {
            u8::from_str_radix(hex.get(i..i + 2).ok_or_else(invalid)?, 16).map_err(|_| invalid())
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(hex.get(i..i + 1).ok_or_else(invalid)?, 16)
                        .map(|d| d * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CarouselError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!("12px".parse::<Length>().unwrap(), Length::Px(12.0));
        assert_eq!("10vw".parse::<Length>().unwrap(), Length::Vw(10.0));
        assert_eq!("37%".parse::<Length>().unwrap(), Length::Percent(37.0));
        assert!("12em".parse::<Length>().is_err());
        assert!("px".parse::<Length>().is_err());
    }

    #[test]
    fn test_length_to_px() {
        assert_eq!(Length::Vw(4.0).to_px(0.0, 1500.0), 60.0);
        assert_eq!(Length::Percent(50.0).to_px(200.0, 0.0), 100.0);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!("#afafaf".parse::<Color>().unwrap(), Color::rgb(0xaf, 0xaf, 0xaf));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert!("#ggg".parse::<Color>().is_err());
        assert!("afafaf".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::rgb(0xaf, 0xaf, 0xaf);
        assert_eq!(color.to_string(), "#afafaf");
        assert_eq!(Length::Percent(40.0).to_string(), "40%");
    }
}
