/*!
 * Palettes: the ordered packed colors a resolver picks from.
 *
 * A [`Palette`] is an immutable snapshot. The mapper builds a new one
 * whenever its configuration changes and swaps it in as a whole.
 */
use crate::color::{ColorSpec, ColorU8, PackedColor, ParseError};

/// Immutable snapshot of the packed palette colors and the NaN color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Box<[PackedColor]>,
    nan_color: PackedColor,
}

impl Palette {
    /// Normalize every spec, preserving order.
    ///
    /// The first malformed spec aborts the build.
    /// The error carries the spec that failed.
    pub fn build(specs: &[ColorSpec], nan_color: &ColorSpec) -> Result<Self, BuildError> {
        let colors = specs
            .iter()
            .map(|spec| {
                PackedColor::normalize(spec).map_err(|err| BuildError {
                    spec: spec.clone(),
                    err,
                })
            })
            .collect::<Result<Box<[_]>, _>>()?;
        let nan_color = PackedColor::normalize(nan_color).map_err(|err| BuildError {
            spec: nan_color.clone(),
            err,
        })?;
        Ok(Palette { colors, nan_color })
    }

    /// Number of colors, not counting the NaN color
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get a color by index
    pub fn get(&self, index: usize) -> Option<PackedColor> {
        self.colors.get(index).copied()
    }

    /// First color, used below the binned range
    pub fn first(&self) -> Option<PackedColor> {
        self.colors.first().copied()
    }

    /// Last color, used above the binned range
    pub fn last(&self) -> Option<PackedColor> {
        self.colors.last().copied()
    }

    /// All colors, in order
    pub fn colors(&self) -> &[PackedColor] {
        &self.colors
    }

    /// The color used for values that cannot be resolved
    pub fn nan_color(&self) -> PackedColor {
        self.nan_color
    }
}

/// A color spec of the palette configuration could not be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    /// The offending spec
    pub spec: ColorSpec,
    /// Why it was rejected
    pub err: ParseError,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color {}: {}", self.spec, self.err)
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Builtin {
    /// Black monochrome palette
    Black,
    #[default]
    /// Standard palette
    Standard,
    /// Pastel palette
    Pastel,
    /// Paul Tol's bright colorblind-safe palette
    TolBright,
    /// Okabe & Ito colorblind-safe palette
    OkabeIto,
}

impl Builtin {
    /// The colors of the palette
    pub const fn colors(self) -> &'static [ColorU8] {
        match self {
            Builtin::Black => BLACK,
            Builtin::Standard => STANDARD,
            Builtin::Pastel => PASTEL,
            Builtin::TolBright => TOL_BRIGHT,
            Builtin::OkabeIto => OKABE_ITO,
        }
    }

    /// The palette as color specs, ready for configuration
    pub fn specs(self) -> Vec<ColorSpec> {
        self.colors().iter().copied().map(ColorSpec::from).collect()
    }
}

const BLACK: &[ColorU8] = &[ColorU8::from_html(b"#000000")];
const STANDARD: &[ColorU8] = &[
    ColorU8::from_html(b"#1f77b4"), // blue
    ColorU8::from_html(b"#ff7f0e"), // orange
    ColorU8::from_html(b"#2ca02c"), // green
    ColorU8::from_html(b"#d62728"), // red
    ColorU8::from_html(b"#9467bd"), // purple
    ColorU8::from_html(b"#8c564b"), // brown
    ColorU8::from_html(b"#e377c2"), // pink
    ColorU8::from_html(b"#7f7f7f"), // gray
    ColorU8::from_html(b"#bcbd22"), // olive
    ColorU8::from_html(b"#17becf"), // cyan
];
const PASTEL: &[ColorU8] = &[
    ColorU8::from_html(b"#aec7e8"), // light blue
    ColorU8::from_html(b"#ffbb78"), // light orange
    ColorU8::from_html(b"#98df8a"), // light green
    ColorU8::from_html(b"#ff9896"), // light red
    ColorU8::from_html(b"#c5b0d5"), // light purple
    ColorU8::from_html(b"#c49c94"), // light brown
    ColorU8::from_html(b"#f7b6d2"), // light pink
    ColorU8::from_html(b"#c7c7c7"), // light gray
    ColorU8::from_html(b"#dbdb8d"), // light olive
    ColorU8::from_html(b"#9edae5"), // light cyan
];
const TOL_BRIGHT: &[ColorU8] = &[
    ColorU8::from_html(b"#4477AA"), // blue
    ColorU8::from_html(b"#EE6677"), // red
    ColorU8::from_html(b"#228833"), // green
    ColorU8::from_html(b"#CCBB44"), // yellow
    ColorU8::from_html(b"#66CCEE"), // cyan
    ColorU8::from_html(b"#AA3377"), // purple
    ColorU8::from_html(b"#BBBBBB"), // gray
];
const OKABE_ITO: &[ColorU8] = &[
    ColorU8::from_html(b"#E69F00"), // orange
    ColorU8::from_html(b"#56B4E9"), // sky blue
    ColorU8::from_html(b"#009E73"), // bluish green
    ColorU8::from_html(b"#F0E442"), // yellow
    ColorU8::from_html(b"#0072B2"), // blue
    ColorU8::from_html(b"#D55E00"), // vermillion
    ColorU8::from_html(b"#CC79A7"), // reddish purple
];
