use std::str::FromStr;
use std::{error, fmt};

mod named;
mod packed;

pub use named::*;
pub use packed::{ColorSpec, PackedColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` literal.
    ///
    /// Meant for constants: panics on malformed input.
    /// Use [`ColorU8::parse_html`] or [`str::parse`] for user input.
    pub const fn from_html(hex: &[u8]) -> Self {
        match Self::parse_html(hex) {
            Ok(color) => color,
            Err(_) => panic!("Invalid hex color"),
        }
    }

    /// Parse a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` literal.
    pub const fn parse_html(hex: &[u8]) -> Result<Self, ParseError> {
        if hex.is_empty() || hex[0] != b'#' {
            return Err(ParseError::InvalidHex);
        }
        let mut digits = [0u8; 8];
        let mut i = 1;
        while i < hex.len() && i <= 8 {
            digits[i - 1] = match hex_to_u8(hex[i]) {
                Some(d) => d,
                None => return Err(ParseError::InvalidHex),
            };
            i += 1;
        }
        let d = digits;
        match hex.len() {
            4 => Ok(ColorU8::from_rgb(
                d[0] << 4 | d[0],
                d[1] << 4 | d[1],
                d[2] << 4 | d[2],
            )),
            5 => Ok(ColorU8::from_rgba(
                d[0] << 4 | d[0],
                d[1] << 4 | d[1],
                d[2] << 4 | d[2],
                d[3] << 4 | d[3],
            )),
            7 => Ok(ColorU8::from_rgb(
                d[0] << 4 | d[1],
                d[2] << 4 | d[3],
                d[4] << 4 | d[5],
            )),
            9 => Ok(ColorU8::from_rgba(
                d[0] << 4 | d[1],
                d[2] << 4 | d[3],
                d[4] << 4 | d[5],
                d[6] << 4 | d[7],
            )),
            _ => Err(ParseError::InvalidHex),
        }
    }

    /// Build a color from its `0xRRGGBBAA` packed representation
    pub const fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        ColorU8 { r, g, b, a }
    }

    /// Pack the color as `0xRRGGBBAA`
    pub const fn packed(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8 { a, ..self }
    }

    pub const fn without_opacity(self) -> Self {
        ColorU8 { a: 255, ..self }
    }
}

impl From<PackedColor> for ColorU8 {
    fn from(packed: PackedColor) -> Self {
        ColorU8::from_packed(packed.value())
    }
}

const fn hex_to_u8(hex: u8) -> Option<u8> {
    match hex {
        b'0'..=b'9' => Some(hex - b'0'),
        b'a'..=b'f' => Some(hex - b'a' + 10),
        b'A'..=b'F' => Some(hex - b'A' + 10),
        _ => None,
    }
}

/// Error returned when a color string cannot be understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidFormat,
    InvalidComponent,
    InvalidAlphaComponent,
    InvalidHex,
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

#[cfg(feature = "diag")]
impl miette::Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            ParseError::InvalidFormat => "chromap::color::format",
            ParseError::InvalidComponent => "chromap::color::component",
            ParseError::InvalidAlphaComponent => "chromap::color::alpha",
            ParseError::InvalidHex => "chromap::color::hex",
            ParseError::UnknownName => "chromap::color::name",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            ParseError::InvalidFormat => {
                "expected a color name, a #hex literal, rgb(r, g, b) or rgba(r, g, b, a)"
            }
            ParseError::InvalidComponent => "rgb components are integers in 0..=255 or percentages",
            ParseError::InvalidAlphaComponent => {
                "alpha is a float in 0.0..=1.0, an integer in 0..=255 or a percentage"
            }
            ParseError::InvalidHex => "hex colors are #rgb, #rgba, #rrggbb or #rrggbbaa",
            ParseError::UnknownName => "color names are the CSS/SVG color keywords",
        };
        Some(Box::new(help))
    }
}

fn parse_component_0_255(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val = pct
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(((val / 100.0) * 255.0).round().clamp(0.0, 255.0) as u8)
    } else {
        let v: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
        if !(0..=255).contains(&v) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(v as u8)
    }
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val = pct
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        Ok(((val / 100.0) * 255.0).round().clamp(0.0, 255.0) as u8)
    } else {
        // float 0.0-1.0 first: "1" is full opacity, not 1/255
        if let Ok(f) = s.parse::<f32>() {
            if !(0.0..=1.0).contains(&f) {
                return Err(ParseError::InvalidAlphaComponent);
            }
            return Ok((f * 255.0).round().clamp(0.0, 255.0) as u8);
        }
        let v: i32 = s.parse().map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0..=255).contains(&v) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        Ok(v as u8)
    }
}

fn parse_components<const N: usize>(inner: &str) -> Result<[&str; N], ParseError> {
    let parts: Vec<&str> = inner.split(',').collect();
    parts.try_into().map_err(|_| ParseError::InvalidFormat)
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        let lower = raw.to_ascii_lowercase();
        if raw.starts_with('#') {
            ColorU8::parse_html(raw.as_bytes())
        } else if lower.starts_with("rgb(") && raw.ends_with(')') {
            let [r, g, b] = parse_components::<3>(&raw[4..raw.len() - 1])?;
            Ok(ColorU8::from_rgb(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
            ))
        } else if lower.starts_with("rgba(") && raw.ends_with(')') {
            let [r, g, b, a] = parse_components::<4>(&raw[5..raw.len() - 1])?;
            Ok(ColorU8::from_rgba(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
                parse_alpha(a)?,
            ))
        } else {
            named::lookup_name(raw).ok_or(ParseError::UnknownName)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#ff0000".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("#f00".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("#F00".parse::<ColorU8>().unwrap(), RED);

        let c = "#ff000080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);

        let c = "#f008".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 0x88]);
    }

    #[test]
    fn parse_css_rgb_rgba() {
        assert_eq!("rgb(255,0,0)".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("rgb(100%,0%,0%)".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("RGB(255, 0, 0)".parse::<ColorU8>().unwrap(), RED);

        let c = "rgba(255,0,0,0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);

        let c = "rgba(255,0,0,50%)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!("red".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("AliceBlue".parse::<ColorU8>().unwrap(), ALICEBLUE);
        assert_eq!("gray".parse::<ColorU8>().unwrap().rgb(), [128, 128, 128]);
        assert_eq!("grey".parse::<ColorU8>().unwrap(), GRAY);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("   ".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("#12345".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#1234567890".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#gg0000".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        );
        assert_eq!(
            "rgb(255,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "rgba(255,0,0,2.0)".parse::<ColorU8>(),
            Err(ParseError::InvalidAlphaComponent)
        );
        assert_eq!(
            "notacolor".parse::<ColorU8>(),
            Err(ParseError::UnknownName)
        );
    }

    #[test]
    fn packed_layout() {
        let c = ColorU8::from_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x12345678);
        assert_eq!(ColorU8::from_packed(0x12345678), c);
        assert_eq!(c.html(), "#123456");
    }
}
