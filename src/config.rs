//! Configuration of the color mapper
use crate::color::ColorSpec;
use crate::palette::Builtin;

/// Configuration of a [`ColorMapper`](crate::ColorMapper).
///
/// This is a plain description. Color specs are only checked when the
/// mapper builds its palette from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    palette: Vec<ColorSpec>,
    nan_color: ColorSpec,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            palette: Vec::new(),
            nan_color: ColorSpec::from("gray"),
        }
    }
}

impl Config {
    /// Empty palette, gray NaN color
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette colors, returning self for chaining
    pub fn with_palette<I, C>(self, palette: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorSpec>,
    {
        Config {
            palette: palette.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Set the palette to one of the built-in palettes, returning self for chaining
    pub fn with_builtin_palette(self, palette: Builtin) -> Self {
        Config {
            palette: palette.specs(),
            ..self
        }
    }

    /// Set the NaN color, returning self for chaining
    pub fn with_nan_color(self, nan_color: impl Into<ColorSpec>) -> Self {
        Config {
            nan_color: nan_color.into(),
            ..self
        }
    }

    /// The palette color specs
    pub fn palette(&self) -> &[ColorSpec] {
        &self.palette
    }

    /// Mutable access to the palette color specs
    pub fn palette_mut(&mut self) -> &mut Vec<ColorSpec> {
        &mut self.palette
    }

    /// The NaN color spec
    pub fn nan_color(&self) -> &ColorSpec {
        &self.nan_color
    }

    /// Replace the NaN color spec
    pub fn set_nan_color(&mut self, nan_color: impl Into<ColorSpec>) {
        self.nan_color = nan_color.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::new();
        assert!(cfg.palette().is_empty());
        assert_eq!(cfg.nan_color(), &ColorSpec::Css("gray".to_string()));
    }

    #[test]
    fn builder() {
        let cfg = Config::new()
            .with_palette(["#ff0000", "blue"])
            .with_nan_color(0x000000ffu32);
        assert_eq!(
            cfg.palette(),
            &[ColorSpec::from("#ff0000"), ColorSpec::from("blue")]
        );
        assert_eq!(cfg.nan_color(), &ColorSpec::Packed(0x000000ff));

        let cfg = cfg.with_builtin_palette(Builtin::OkabeIto);
        assert_eq!(cfg.palette().len(), 7);
    }
}
