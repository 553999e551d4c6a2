//! Input columns of the color mapper.
//!
//! Resolvers read values through the [`Column`] trait, either sample by sample
//! with [`Column::sample_iter`], or through a typed view when the column has one.
//!
//! Missing values are `None`, and non-finite floats (NaN and infinities) read
//! as missing too. Resolvers give them the NaN color.
use std::fmt;

#[cfg(feature = "data-polars")]
pub mod polars;

/// A single value, as seen by a resolver
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Sample<'a> {
    /// Missing value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Categorical value
    Cat(&'a str),
}

impl Sample<'_> {
    /// The value as a finite number, if it is one
    pub fn as_num(&self) -> Option<f64> {
        match *self {
            Sample::Num(v) => finite(v),
            _ => None,
        }
    }

    /// The value as a factor, if it is one
    pub fn as_cat(&self) -> Option<&str> {
        match *self {
            Sample::Cat(v) => Some(v),
            _ => None,
        }
    }
}

/// Owned value, to build columns of mixed types (`Vec<OwnedSample>`)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OwnedSample {
    /// Missing value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Categorical value
    Cat(String),
}

impl OwnedSample {
    /// Borrow as a [`Sample`]
    pub fn as_sample(&self) -> Sample<'_> {
        match self {
            OwnedSample::Null => Sample::Null,
            OwnedSample::Num(v) => Sample::Num(*v),
            OwnedSample::Cat(v) => Sample::Cat(v),
        }
    }
}

impl From<f64> for OwnedSample {
    fn from(val: f64) -> Self {
        OwnedSample::Num(val)
    }
}

impl From<i64> for OwnedSample {
    fn from(val: i64) -> Self {
        OwnedSample::Num(val as f64)
    }
}

impl From<&str> for OwnedSample {
    fn from(val: &str) -> Self {
        OwnedSample::Cat(val.to_string())
    }
}

impl From<String> for OwnedSample {
    fn from(val: String) -> Self {
        OwnedSample::Cat(val)
    }
}

impl<T> From<Option<T>> for OwnedSample
where
    T: Into<OwnedSample>,
{
    fn from(val: Option<T>) -> Self {
        val.map_or(OwnedSample::Null, Into::into)
    }
}

/// A column of values to map
pub trait Column: fmt::Debug {
    /// Number of values, missing ones included
    fn len(&self) -> usize;

    /// Iterate over every value.
    ///
    /// The default goes through the first typed view the column provides.
    fn sample_iter(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        if let Some(col) = self.i64() {
            Box::new(col.i64_iter().map(|v| v.map_or(Sample::Null, |v| Sample::Num(v as f64))))
        } else if let Some(col) = self.f64() {
            Box::new(col.f64_iter().map(|v| v.map_or(Sample::Null, Sample::Num)))
        } else if let Some(col) = self.str() {
            Box::new(col.str_iter().map(|v| v.map_or(Sample::Null, Sample::Cat)))
        } else {
            Box::new(std::iter::repeat_n(Sample::Null, self.len()))
        }
    }

    /// Float view of the column, if it has one
    fn f64(&self) -> Option<&dyn F64Column> {
        None
    }

    /// Integer view of the column, if it has one
    fn i64(&self) -> Option<&dyn I64Column> {
        None
    }

    /// String view of the column, if it has one
    fn str(&self) -> Option<&dyn StrColumn> {
        None
    }
}

/// Float view of a column. Non-finite values are yielded as `None`.
pub trait F64Column: fmt::Debug {
    /// Iterate over the values
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_>;
}

/// Integer view of a column
pub trait I64Column: fmt::Debug {
    /// Iterate over the values
    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_>;
}

/// String view of a column
pub trait StrColumn: fmt::Debug {
    /// Iterate over the values
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_>;
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

macro_rules! vec_column {
    ($ty:ty, $view:ident, $view_trait:ident, $iter:ident, $item:ty, |$v:ident| $conv:expr) => {
        impl $view_trait for $ty {
            fn $iter(&self) -> Box<dyn Iterator<Item = Option<$item>> + '_> {
                Box::new(self.iter().map(|$v| $conv))
            }
        }

        impl Column for $ty {
            fn len(&self) -> usize {
                self.as_slice().len()
            }

            fn $view(&self) -> Option<&dyn $view_trait> {
                Some(self)
            }
        }
    };
}

vec_column!(Vec<f64>, f64, F64Column, f64_iter, f64, |v| finite(*v));
vec_column!(Vec<Option<f64>>, f64, F64Column, f64_iter, f64, |v| v.and_then(finite));
vec_column!(Vec<i64>, i64, I64Column, i64_iter, i64, |v| Some(*v));
vec_column!(Vec<Option<i64>>, i64, I64Column, i64_iter, i64, |v| *v);
vec_column!(Vec<&str>, str, StrColumn, str_iter, &str, |v| Some(*v));
vec_column!(Vec<Option<&str>>, str, StrColumn, str_iter, &str, |v| *v);
vec_column!(Vec<String>, str, StrColumn, str_iter, &str, |v| Some(v.as_str()));
vec_column!(Vec<Option<String>>, str, StrColumn, str_iter, &str, |v| v.as_deref());

impl Column for Vec<OwnedSample> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn sample_iter(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        Box::new(self.iter().map(OwnedSample::as_sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(col: &dyn Column) -> Vec<Sample<'_>> {
        col.sample_iter().collect()
    }

    #[test]
    fn float_columns() {
        let col = vec![1.5, f64::NAN, f64::NEG_INFINITY];
        assert_eq!(
            samples(&col),
            vec![Sample::Num(1.5), Sample::Null, Sample::Null]
        );
        assert!(col.i64().is_none());

        let col = vec![None, Some(2.0), Some(f64::INFINITY)];
        assert_eq!(samples(&col), vec![Sample::Null, Sample::Num(2.0), Sample::Null]);
        assert_eq!(Column::len(&col), 3);
    }

    #[test]
    fn integer_columns() {
        let col = vec![3i64, -4];
        assert_eq!(samples(&col), vec![Sample::Num(3.0), Sample::Num(-4.0)]);
        assert!(col.f64().is_none());

        let col = vec![Some(7i64), None];
        assert_eq!(samples(&col), vec![Sample::Num(7.0), Sample::Null]);
    }

    #[test]
    fn string_columns() {
        let col = vec!["a", "b"];
        assert_eq!(samples(&col), vec![Sample::Cat("a"), Sample::Cat("b")]);

        let col = vec![None, Some("c")];
        assert_eq!(samples(&col), vec![Sample::Null, Sample::Cat("c")]);

        let col = vec!["d".to_string()];
        assert_eq!(samples(&col), vec![Sample::Cat("d")]);

        let col = vec![Some("e".to_string()), None];
        assert_eq!(samples(&col), vec![Sample::Cat("e"), Sample::Null]);
    }

    #[test]
    fn mixed_column() {
        let col: Vec<OwnedSample> = vec![2.5.into(), "x".into(), None::<f64>.into(), 4i64.into()];
        assert_eq!(
            samples(&col),
            vec![Sample::Num(2.5), Sample::Cat("x"), Sample::Null, Sample::Num(4.0)]
        );
        assert!(col.f64().is_none());
    }

    #[test]
    fn sample_accessors() {
        assert_eq!(Sample::Num(1.0).as_num(), Some(1.0));
        assert_eq!(Sample::Num(f64::INFINITY).as_num(), None);
        assert_eq!(Sample::Cat("a").as_num(), None);
        assert_eq!(Sample::Cat("a").as_cat(), Some("a"));
        assert_eq!(Sample::Null.as_cat(), None);
    }
}
