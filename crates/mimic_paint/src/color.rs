//! Color types and utilities

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Packed 32-bit color, laid out as `0xAARRGGBB`
///
/// Channels are not premultiplied. This is the same packing native toolkits
/// use for their color words, so values coming from a platform API can be
/// passed through unchanged.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable,
)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct Color(pub u32);

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ColorParseError(pub String);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const TRANSPARENT: Color = Color(0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Create from hex value (0xRRGGBB is opaque, 0xAARRGGBB keeps its alpha)
    pub const fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self(hex)
        } else {
            Self(0xFF00_0000 | hex)
        }
    }

    /// Create a grayscale opaque color
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// The packed `0xAARRGGBB` word
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Set alpha and return new color
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Scale the existing alpha by `opacity` (0.0 to 1.0)
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (self.a() as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(alpha)
    }

    /// Linear interpolation of every channel, `t` = 0.0 gives `self`
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::from_argb(
            lerp(self.a(), other.a()),
            lerp(self.r(), other.r()),
            lerp(self.g(), other.g()),
            lerp(self.b(), other.b()),
        )
    }

    /// Move the color toward white by `amount` (0.0 to 1.0)
    pub fn lighten(self, amount: f32) -> Self {
        self.mix(Color::WHITE.with_alpha(self.a()), amount)
    }

    /// Move the color toward black by `amount` (0.0 to 1.0)
    pub fn darken(self, amount: f32) -> Self {
        self.mix(Color::BLACK.with_alpha(self.a()), amount)
    }

    /// Composite `self` over `dst` (source-over, straight alpha)
    pub fn blend_over(self, dst: Color) -> Color {
        let sa = self.a() as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let da = dst.a() as u32;
        // out_a * 255, kept unrounded so channel division stays exact
        let out_a_scaled = sa * 255 + da * (255 - sa);
        if out_a_scaled == 0 {
            return Color::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| -> u8 {
            let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
            ((num + out_a_scaled / 2) / out_a_scaled) as u8
        };
        Color::from_argb(
            ((out_a_scaled + 127) / 255) as u8,
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
        )
    }

    /// Convert to u8 array [r, g, b, a]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` (the `#` or a `0x` prefix is optional)
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);
        // from_str_radix alone would let a sign through
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError(input.to_string()))?;
        match digits.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(ColorParseError(input.to_string())),
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
