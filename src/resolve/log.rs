use super::{OutOfRange, ResolveValues, bin_values, data_bounds};
use crate::color::PackedColor;
use crate::data::Column;
use crate::palette::Palette;

/// Logarithmic binning of positive numeric data.
///
/// Like [`Linear`](super::Linear), but bins are equal in `ln(value)`.
/// Zero and negative values cannot be placed and take the NaN color.
/// Bounds left unset follow the min and max of the positive data.
///
/// Missing and non-finite values take the NaN color. So does every value if a
/// bound is not finite and positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Log {
    low: Option<f64>,
    high: Option<f64>,
    out_of_range: OutOfRange,
}

impl Log {
    /// Logarithmic binning over the positive data range
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the low bound, returning self for chaining
    pub fn with_low(self, low: f64) -> Self {
        Log {
            low: Some(low),
            ..self
        }
    }

    /// Set the high bound, returning self for chaining
    pub fn with_high(self, high: f64) -> Self {
        Log {
            high: Some(high),
            ..self
        }
    }

    /// Set both bounds, returning self for chaining
    pub fn with_range(self, low: f64, high: f64) -> Self {
        self.with_low(low).with_high(high)
    }

    /// Color for values below the low bound, instead of the first palette color
    pub fn with_low_color(mut self, color: PackedColor) -> Self {
        self.out_of_range.low = Some(color);
        self
    }

    /// Color for values above the high bound, instead of the last palette color
    pub fn with_high_color(mut self, color: PackedColor) -> Self {
        self.out_of_range.high = Some(color);
        self
    }

    /// The configured low bound, if any
    pub fn low(&self) -> Option<f64> {
        self.low
    }

    /// The configured high bound, if any
    pub fn high(&self) -> Option<f64> {
        self.high
    }

    fn bounds(&self, data: &dyn Column) -> Option<(f64, f64)> {
        let (low, high) = match (self.low, self.high) {
            (Some(low), Some(high)) => (low, high),
            (low, high) => {
                let (min, max) = data_bounds(data, |v| v > 0.0)?;
                (low.unwrap_or(min), high.unwrap_or(max))
            }
        };
        if low > 0.0 && high > 0.0 && low.is_finite() && high.is_finite() {
            Some((low, high))
        } else {
            log::warn!("log binning bounds must be finite and positive, got [{low}, {high}]");
            None
        }
    }
}

fn ln(v: f64) -> Option<f64> {
    if v > 0.0 { Some(v.ln()) } else { None }
}

impl ResolveValues for Log {
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
        let Some((low, high)) = self.bounds(data) else {
            return vec![palette.nan_color(); data.len()];
        };
        bin_values(data, palette, low.ln(), high.ln(), &self.out_of_range, ln)
    }
}
