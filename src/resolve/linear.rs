use super::{OutOfRange, ResolveValues, bin_values, data_bounds};
use crate::color::PackedColor;
use crate::data::Column;
use crate::palette::Palette;

/// Linear binning of numeric data.
///
/// The `[low, high]` range is split into as many equal bins as there are
/// palette colors. Bounds left unset follow the data min and max.
/// `high` itself maps to the last color.
///
/// Missing and non-finite values (NaN, infinities) take the NaN color, not an
/// out-of-range color. If a configured bound is not finite, every value takes
/// the NaN color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear {
    low: Option<f64>,
    high: Option<f64>,
    out_of_range: OutOfRange,
}

impl Linear {
    /// Linear binning over the data range
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the low bound, returning self for chaining
    pub fn with_low(self, low: f64) -> Self {
        Linear {
            low: Some(low),
            ..self
        }
    }

    /// Set the high bound, returning self for chaining
    pub fn with_high(self, high: f64) -> Self {
        Linear {
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
                let (min, max) = data_bounds(data, |_| true)?;
                (low.unwrap_or(min), high.unwrap_or(max))
            }
        };
        if low.is_finite() && high.is_finite() {
            Some((low, high))
        } else {
            log::warn!("linear binning bounds must be finite, got [{low}, {high}]");
            None
        }
    }
}

impl ResolveValues for Linear {
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
        let Some((low, high)) = self.bounds(data) else {
            return vec![palette.nan_color(); data.len()];
        };
        bin_values(data, palette, low, high, &self.out_of_range, Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OwnedSample;
    use crate::resolve::tests::{hex, palette};

    const RGB: &[&str] = &["#ff0000", "#00ff00", "#0000ff"];

    #[test]
    fn bins_data_range() {
        let pal = palette(RGB);
        let data = vec![0.0, 1.0, 2.9, 3.1, 7.0, 9.0];
        assert_eq!(
            hex(&Linear::new().resolve(&data, &pal)),
            vec!["#ff0000", "#ff0000", "#ff0000", "#00ff00", "#0000ff", "#0000ff"]
        );
    }

    #[test]
    fn fixed_range_and_out_of_range() {
        let pal = palette(RGB);
        let lin = Linear::new().with_range(0.0, 3.0);
        let data = vec![-1.0, 0.0, 1.5, 3.0, 4.0];
        assert_eq!(
            hex(&lin.resolve(&data, &pal)),
            vec!["#ff0000", "#ff0000", "#00ff00", "#0000ff", "#0000ff"]
        );

        let lin = lin
            .with_low_color("black".parse().unwrap())
            .with_high_color("white".parse().unwrap());
        assert_eq!(
            hex(&lin.resolve(&data, &pal)),
            vec!["#000000", "#ff0000", "#00ff00", "#0000ff", "#ffffff"]
        );
    }

    #[test]
    fn missing_values_take_nan_color() {
        let pal = palette(RGB);
        let data: Vec<OwnedSample> = vec![
            0.0.into(),
            OwnedSample::Null,
            "cat".into(),
            f64::NAN.into(),
            2.0.into(),
        ];
        assert_eq!(
            hex(&Linear::new().resolve(&data, &pal)),
            vec!["#ff0000", "#808080", "#808080", "#808080", "#0000ff"]
        );
    }

    #[test]
    fn degenerate_inputs() {
        let pal = palette(RGB);
        // constant data: everything sits on the high bound
        let data = vec![5.0, 5.0];
        assert_eq!(hex(&Linear::new().resolve(&data, &pal)), vec!["#0000ff"; 2]);

        let data: Vec<f64> = vec![f64::NAN];
        assert_eq!(hex(&Linear::new().resolve(&data, &pal)), vec!["#808080"]);

        let data: Vec<f64> = vec![];
        assert!(Linear::new().resolve(&data, &pal).is_empty());

        let empty = palette(&[]);
        let data = vec![1.0, 2.0];
        assert_eq!(hex(&Linear::new().resolve(&data, &empty)), vec!["#808080"; 2]);
    }

    #[test]
    fn infinite_values_are_missing() {
        let pal = palette(RGB);
        let lin = Linear::new().with_range(0.0, 3.0);
        let data = vec![f64::NEG_INFINITY, 1.5, f64::INFINITY];
        assert_eq!(
            hex(&lin.resolve(&data, &pal)),
            vec!["#808080", "#00ff00", "#808080"]
        );
    }

    #[test]
    fn non_finite_bounds() {
        let pal = palette(RGB);
        let data = vec![0.0, 1.0, 2.0];
        for lin in [
            Linear::new().with_low(f64::NAN),
            Linear::new().with_high(f64::NAN),
            Linear::new().with_range(0.0, f64::INFINITY),
        ] {
            assert_eq!(hex(&lin.resolve(&data, &pal)), vec!["#808080"; 3]);
        }
    }

    #[test]
    fn integer_columns() {
        let pal = palette(RGB);
        let data = vec![Some(0i64), None, Some(30)];
        assert_eq!(
            hex(&Linear::new().resolve(&data, &pal)),
            vec!["#ff0000", "#808080", "#0000ff"]
        );
    }
}
