//! [Polars](https://pola.rs) series as mapper input.
use polars::prelude::*;

use crate::data::{Column, F64Column, I64Column, StrColumn};

impl F64Column for Float64Chunked {
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.iter().map(|v| v.filter(|v| v.is_finite())))
    }
}

impl I64Column for Int64Chunked {
    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_> {
        Box::new(self.iter())
    }
}

impl StrColumn for StringChunked {
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.iter())
    }
}

impl Column for Series {
    fn len(&self) -> usize {
        Series::len(self)
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        self.try_f64().map(|s| s as &dyn F64Column)
    }

    fn i64(&self) -> Option<&dyn I64Column> {
        self.try_i64().map(|s| s as &dyn I64Column)
    }

    fn str(&self) -> Option<&dyn StrColumn> {
        self.try_str().map(|s| s as &dyn StrColumn)
    }
}
