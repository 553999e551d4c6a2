//! Value resolution: how data values select palette colors.
//!
//! The mapper does not decide which palette entry a value gets.
//! It delegates to a [`ResolveValues`] strategy supplied at construction.
//! Three strategies are provided: [`Linear`] and [`Log`] binning of numeric
//! data, and [`Categorical`] lookup of string factors.
//! Any closure with the right signature becomes one through [`from_fn`].
use crate::color::PackedColor;
use crate::data::Column;
use crate::palette::Palette;

mod categorical;
mod linear;
mod log;

pub use categorical::Categorical;
pub use linear::Linear;
pub use log::Log;

/// Strategy mapping data values to palette colors.
///
/// Implementations must return exactly one color per input value.
/// A value that cannot be classified takes [`Palette::nan_color`].
pub trait ResolveValues {
    /// Resolve every value of `data` against `palette`
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor>;
}

/// Strategy wrapping a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}

/// Turn a closure into a resolution strategy
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&dyn Column, &Palette) -> Vec<PackedColor>,
{
    FromFn(f)
}

impl<F> ResolveValues for FromFn<F>
where
    F: Fn(&dyn Column, &Palette) -> Vec<PackedColor>,
{
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
        (self.0)(data, palette)
    }
}

impl<R> ResolveValues for Box<R>
where
    R: ResolveValues + ?Sized,
{
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
        self.as_ref().resolve(data, palette)
    }
}

/// Colors for values below or above the binned range.
/// `None` falls back to the first or last palette entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutOfRange {
    /// Color below the low bound
    pub low: Option<PackedColor>,
    /// Color above the high bound
    pub high: Option<PackedColor>,
}

impl OutOfRange {
    fn low(&self, palette: &Palette) -> PackedColor {
        self.low
            .or_else(|| palette.first())
            .unwrap_or(palette.nan_color())
    }

    fn high(&self, palette: &Palette) -> PackedColor {
        self.high
            .or_else(|| palette.last())
            .unwrap_or(palette.nan_color())
    }
}

/// Min and max of the values accepted by `filter`, `None` if there is none
fn data_bounds<P>(data: &dyn Column, filter: P) -> Option<(f64, f64)>
where
    P: Fn(f64) -> bool,
{
    let mut res: Option<(f64, f64)> = None;
    let values: Box<dyn Iterator<Item = Option<f64>> + '_> = match data.f64() {
        Some(col) => col.f64_iter(),
        None => Box::new(data.sample_iter().map(|s| s.as_num())),
    };
    for v in values.flatten().filter(|v| filter(*v)) {
        res = match res {
            Some((min, max)) => Some((min.min(v), max.max(v))),
            None => Some((v, v)),
        };
    }
    res
}

/// Bin continuous data into the palette.
///
/// `key` maps a finite value into the binning space (identity or logarithm)
/// and returns `None` for values that space cannot represent.
/// `low` and `high` are already in that space.
fn bin_values<K>(
    data: &dyn Column,
    palette: &Palette,
    low: f64,
    high: f64,
    out_of_range: &OutOfRange,
    key: K,
) -> Vec<PackedColor>
where
    K: Fn(f64) -> Option<f64>,
{
    let nan_color = palette.nan_color();
    let len = palette.len();
    if len == 0 {
        return vec![nan_color; data.len()];
    }

    let max_key = len - 1;
    let scale = len as f64 / (high - low);

    data.sample_iter()
        .map(|sample| {
            let Some(d) = sample.as_num().and_then(&key) else {
                return nan_color;
            };
            if d == high {
                return palette.last().unwrap_or(nan_color);
            }
            let k = ((d - low) * scale).floor();
            if k < 0.0 {
                out_of_range.low(palette)
            } else if k > max_key as f64 || !k.is_finite() {
                out_of_range.high(palette)
            } else {
                palette.get(k as usize).unwrap_or(nan_color)
            }
        })
        .collect()
}
