//! Base color types shared by the chromap crates.
//!
//! [`color::ColorU8`] is the plain RGBA color, [`color::ColorSpec`] what users
//! write in a configuration, and [`color::PackedColor`] the canonical
//! `0xRRGGBBAA` integer that the mapping engine works with.

// chromap is released under the MIT License

pub mod color;

pub use color::{ColorSpec, ColorU8, PackedColor, ParseError};
