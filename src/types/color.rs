//! Colors for parties, labels, dots and the needle.

use std::{fmt, str::FromStr};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Simple RGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Lead-change label when the new lead produces a tie.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Zero-swing label when both sides hold the same number of seats.
    pub const NEUTRAL: Color = Color::rgb(128, 128, 128);

    /// Dot for a district that has not declared yet.
    pub const NO_RESULT: Color = Color::rgb(187, 187, 187);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Color {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        ensure!(hex.len() == 6 && hex.is_ascii(), "[types::color] Invalid color '{s}', expected #rrggbb");

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
            .with_context(|| format!("[types::color] Invalid hex digits in color '{s}'"));

        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<Color> for String {
    fn from(color: Color) -> Self { color.to_string() }
}

/// HSL color: h in degrees, s and l in [0.0, 1.0].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Hsl {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) l: f64,
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        // normalize hue into [0,6) sextants
        let h = (hsl.h % 360.0 + 360.0) % 360.0 / 60.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(r), channel(g), channel(b))
    }
}

const GOLDEN_ANGLE: f64 = 137.50776405;

/// Distinct fallback color for the `index`-th party without a declared color.
pub(crate) fn golden_angle_color(index: usize) -> Color {
    Hsl { h: ((index as f64) * GOLDEN_ANGLE) % 360.0, s: 0.70, l: 0.55 }.into()
}
