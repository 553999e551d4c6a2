//! The color mapping engine.
//!
//! [`ColorMapper`] owns a [`Config`], the [`Palette`] snapshot built from it
//! and a [`ResolveValues`] strategy. It turns data columns into hex strings
//! or into RGBA byte buffers.
use std::fmt;
use std::sync::Arc;

use crate::color::{ColorSpec, PackedColor};
use crate::config::Config;
use crate::data::Column;
use crate::pack::{self, ByteOrder};
use crate::palette::{BuildError, Palette};
use crate::resolve::ResolveValues;

/// Error returned by the mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A palette or NaN color spec could not be normalized
    Color(BuildError),
    /// Mapping a single scalar is not supported. Use the vectorized methods.
    ScalarCompute,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Color(err) => write!(f, "{err}"),
            Error::ScalarCompute => {
                f.write_str("scalar color computation is not supported, map a column instead")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Color(err) => Some(err),
            Error::ScalarCompute => None,
        }
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Error::Color(err)
    }
}

/// Maps data columns to colors.
///
/// The palette is rebuilt from the configuration on every change, and
/// swapped in only if every spec is valid. A mapping call works on a single
/// palette snapshot from start to end.
#[derive(Debug)]
pub struct ColorMapper<R> {
    config: Config,
    palette: Arc<Palette>,
    resolver: R,
    byte_order: ByteOrder,
}

impl<R> ColorMapper<R>
where
    R: ResolveValues,
{
    /// Build the mapper and its initial palette
    pub fn new(config: Config, resolver: R) -> Result<Self, Error> {
        let palette = build_palette(&config)?;
        Ok(ColorMapper {
            config,
            palette: Arc::new(palette),
            resolver,
            byte_order: ByteOrder::HOST,
        })
    }

    /// Pack buffers for the given byte order instead of the host's,
    /// returning self for chaining
    pub fn with_byte_order(self, byte_order: ByteOrder) -> Self {
        ColorMapper { byte_order, ..self }
    }

    /// The current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current palette snapshot
    pub fn palette(&self) -> Arc<Palette> {
        self.palette.clone()
    }

    /// The resolution strategy
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Mutable access to the resolution strategy.
    /// The palette does not depend on it, so no rebuild happens.
    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// The byte order used by [`Self::to_buffer`]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Replace the palette color specs
    pub fn set_palette<I, C>(&mut self, palette: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorSpec>,
    {
        let palette = palette.into_iter().map(Into::into).collect();
        self.update(|cfg| *cfg.palette_mut() = palette)
    }

    /// Replace the NaN color spec
    pub fn set_nan_color(&mut self, nan_color: impl Into<ColorSpec>) -> Result<(), Error> {
        let nan_color = nan_color.into();
        self.update(|cfg| cfg.set_nan_color(nan_color))
    }

    /// Edit the configuration and rebuild the palette.
    ///
    /// If the edited configuration is invalid, it is discarded and the
    /// previous configuration and palette stay in place.
    pub fn update<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Config),
    {
        let prev = self.config.clone();
        f(&mut self.config);
        if let Err(err) = self.config_changed() {
            self.config = prev;
            return Err(err);
        }
        Ok(())
    }

    /// Rebuild the palette from the current configuration.
    ///
    /// Called by every configuration setter. On failure the previous
    /// palette is kept.
    pub fn config_changed(&mut self) -> Result<(), Error> {
        match build_palette(&self.config) {
            Ok(palette) => {
                self.palette = Arc::new(palette);
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected color mapper configuration: {err}");
                Err(err)
            }
        }
    }

    /// Resolve `data` against the current palette snapshot.
    ///
    /// Always returns one color per value. If the resolver gets the count
    /// wrong, the output is truncated or padded with the NaN color.
    pub fn resolve(&self, data: &dyn Column) -> Vec<PackedColor> {
        let palette = self.palette();
        let mut colors = self.resolver.resolve(data, &palette);
        if colors.len() != data.len() {
            log::warn!(
                "resolver returned {} colors for {} values",
                colors.len(),
                data.len()
            );
            colors.resize(data.len(), palette.nan_color());
        }
        colors
    }

    /// Hex color strings (`#rrggbb`) of `data`, one per value
    pub fn hex_iter(&self, data: &dyn Column) -> impl ExactSizeIterator<Item = String> + use<R> {
        self.resolve(data).into_iter().map(|c| c.html())
    }

    /// Hex color strings (`#rrggbb`) of `data`, one per value
    pub fn to_hex(&self, data: &dyn Column) -> Vec<String> {
        self.hex_iter(data).collect()
    }

    /// RGBA buffer of `4 * data.len()` bytes, ready for upload to a pixel surface
    pub fn to_buffer(&self, data: &dyn Column) -> Vec<u8> {
        pack::pack_rgba(&self.resolve(data), self.byte_order)
    }

    /// Color of a single scalar.
    ///
    /// Scalar mapping is not supported and this always fails with
    /// [`Error::ScalarCompute`]. Map a column with [`Self::to_hex`] or
    /// [`Self::to_buffer`] instead.
    pub fn compute(&self, _x: f64) -> Result<PackedColor, Error> {
        Err(Error::ScalarCompute)
    }
}

fn build_palette(config: &Config) -> Result<Palette, Error> {
    let palette = Palette::build(config.palette(), config.nan_color())?;
    log::debug!(
        "built palette of {} colors, NaN color {}",
        palette.len(),
        palette.nan_color()
    );
    Ok(palette)
}
