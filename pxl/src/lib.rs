//! Pixel surface for chromap.
//!
//! The RGBA buffers produced by [`ColorMapper::to_buffer`] are uploaded to a
//! [tiny-skia](tiny_skia) pixmap, one pixel per data value in row-major order.
use std::{fmt, io};

use chromap::ColorMapper;
use chromap::data::Column;
use chromap::resolve::ResolveValues;
use tiny_skia::{self, Pixmap, PixmapMut};

/// Error returned by the pixel surface
#[derive(Debug)]
pub enum Error {
    /// The image size is zero or too large
    Size(u32, u32),
    /// The data does not cover the image exactly
    Length {
        /// Expected number of pixels
        expected: usize,
        /// Provided number of pixels
        actual: usize,
    },
    /// PNG output failed
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Size(w, h) => write!(f, "invalid image size {w}x{h}"),
            Error::Length { expected, actual } => {
                write!(f, "expected {expected} pixels, got {actual}")
            }
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// An image with one pixel per mapped value
#[derive(Debug, Clone)]
pub struct PxlImage {
    pixmap: Pixmap,
}

impl PxlImage {
    /// Create a transparent image
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::Size(width, height))?;
        Ok(Self { pixmap })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Map `data` and draw it, one value per pixel, row by row.
    ///
    /// `data` must have exactly `width * height` values.
    pub fn draw<R>(&mut self, mapper: &ColorMapper<R>, data: &dyn Column) -> Result<(), Error>
    where
        R: ResolveValues,
    {
        let expected = self.pixmap.pixels().len();
        if data.len() != expected {
            return Err(Error::Length {
                expected,
                actual: data.len(),
            });
        }
        let buf = mapper.to_buffer(data);
        upload_rgba(&mut self.pixmap.as_mut(), &buf)
    }

    /// Save the image to a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        self.pixmap
            .save_png(path)
            .map_err(|err| Error::Io(err.into()))
    }

    /// The underlying pixmap
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Unwrap the underlying pixmap
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

/// Upload a straight RGBA buffer to a pixmap.
///
/// The pixmap stores premultiplied colors, so non-opaque pixels are
/// premultiplied on the way.
pub fn upload_rgba(pixmap: &mut PixmapMut<'_>, rgba: &[u8]) -> Result<(), Error> {
    let pixels = pixmap.pixels_mut();
    if rgba.len() != pixels.len() * 4 {
        return Err(Error::Length {
            expected: pixels.len(),
            actual: rgba.len() / 4,
        });
    }
    for (px, c) in pixels.iter_mut().zip(rgba.chunks_exact(4)) {
        *px = tiny_skia::ColorU8::from_rgba(c[0], c[1], c[2], c[3]).premultiply();
    }
    Ok(())
}
