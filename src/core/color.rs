use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// sRGB color with 8-bit channels and a 0..=1 alpha.
///
/// Serializes as a CSS color string: `#rrggbb` when opaque, otherwise
/// `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from `0xRRGGBB`.
    #[must_use]
    pub const fn from_hex_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parses `#rrggbb`, `#rgb` or `rgba(r,g,b,a)`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let color = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_rgba(body)
        } else {
            None
        };

        let color =
            color.ok_or_else(|| ChartError::InvalidData(format!("unsupported color `{input}`")))?;
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Channels normalized to 0..=1, in `(r, g, b, a)` order.
    #[must_use]
    pub fn normalized(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            self.alpha,
        )
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_css(&raw).map_err(de::Error::custom)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(Color::from_hex_u32),
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let red = channels.next()??;
            let green = channels.next()??;
            let blue = channels.next()??;
            Some(Color::rgb(red, green, blue))
        }
        _ => None,
    }
}

fn parse_rgba(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [red, green, blue, alpha] = parts.as_slice() else {
        return None;
    };
    Some(Color::rgba(
        red.parse().ok()?,
        green.parse().ok()?,
        blue.parse().ok()?,
        alpha.parse().ok()?,
    ))
}
