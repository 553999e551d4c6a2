use super::ResolveValues;
use crate::color::PackedColor;
use crate::data::Column;
use crate::palette::Palette;

/// Lookup of categorical data in a list of factors.
///
/// The n-th factor takes the n-th palette color.
/// Unknown factors, factors beyond the palette length and
/// non categorical values take the NaN color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorical {
    factors: Vec<String>,
}

impl Categorical {
    /// Build from the ordered factors
    pub fn new<I, S>(factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Categorical {
            factors: factors.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered factors
    pub fn factors(&self) -> &[String] {
        &self.factors
    }

    /// Index of a factor, if known
    pub fn factor_index(&self, factor: &str) -> Option<usize> {
        self.factors.iter().position(|f| f == factor)
    }
}

impl ResolveValues for Categorical {
    fn resolve(&self, data: &dyn Column, palette: &Palette) -> Vec<PackedColor> {
        let nan_color = palette.nan_color();
        data.sample_iter()
            .map(|sample| {
                sample
                    .as_cat()
                    .and_then(|cat| self.factor_index(cat))
                    .and_then(|idx| palette.get(idx))
                    .unwrap_or(nan_color)
            })
            .collect()
    }
}
