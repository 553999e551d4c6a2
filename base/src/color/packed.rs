//! Color specifications and their canonical packed form.
use std::fmt;
use std::str::FromStr;

use super::{ColorU8, ParseError};

/// A color as written by a user.
///
/// Either a string (CSS keyword, `#hex` literal, `rgb(..)` / `rgba(..)`),
/// or an integer that is already packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// Already packed `0xRRGGBBAA` value, used as is
    Packed(u32),
    /// CSS color string
    Css(String),
}

impl From<u32> for ColorSpec {
    fn from(value: u32) -> Self {
        ColorSpec::Packed(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Css(value.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        ColorSpec::Css(value)
    }
}

impl From<ColorU8> for ColorSpec {
    fn from(value: ColorU8) -> Self {
        ColorSpec::Packed(value.packed())
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Packed(v) => write!(f, "0x{v:08x}"),
            ColorSpec::Css(s) => write!(f, "{s:?}"),
        }
    }
}

/// Canonical 32-bit color, laid out as `0xRRGGBBAA`.
///
/// The RGB portion lives in the top 24 bits, the alpha in the low byte.
/// Strings without an explicit alpha are packed fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Normalize a color specification.
    ///
    /// Packed integers pass through unchanged. Strings that do not start with
    /// `#` are first resolved as keywords or `rgb(..)` forms.
    /// Malformed strings are rejected rather than packed to garbage.
    pub fn normalize(spec: &ColorSpec) -> Result<Self, ParseError> {
        match spec {
            ColorSpec::Packed(v) => Ok(PackedColor(*v)),
            ColorSpec::Css(s) => s.parse(),
        }
    }

    /// The raw `0xRRGGBBAA` value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The RGB portion, as `0x00RRGGBB`
    pub const fn rgb(&self) -> u32 {
        self.0 >> 8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn blue(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn alpha(&self) -> u8 {
        self.0 as u8
    }

    /// `#rrggbb` rendering of the RGB portion. Alpha is dropped.
    pub fn html(&self) -> String {
        format!("#{:06x}", self.rgb())
    }

    pub const fn to_color_u8(&self) -> ColorU8 {
        ColorU8::from_packed(self.0)
    }
}

impl From<ColorU8> for PackedColor {
    fn from(color: ColorU8) -> Self {
        PackedColor(color.packed())
    }
}

impl TryFrom<&ColorSpec> for PackedColor {
    type Error = ParseError;

    fn try_from(spec: &ColorSpec) -> Result<Self, Self::Error> {
        PackedColor::normalize(spec)
    }
}

impl FromStr for PackedColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ColorU8>().map(PackedColor::from)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
